//! Test helper functions for building combatants, records and rosters.

use std::collections::BTreeMap;

use async_trait::async_trait;
use critter::{Action, Affinity, Attributes, CatalogRecord, Combatant, MoveRecord, StatKey};

use crate::config::RosterConfig;
use crate::roster::{InMemoryRoster, RosterError, RosterLookup};

// =============================================================================
// Combatants
// =============================================================================

/// A plain combatant with the given health and one weak normal action.
pub fn combatant(name: &str, affinity: Affinity, health: u32) -> Combatant {
    Combatant::new(
        name,
        vec![affinity],
        Attributes {
            health,
            attack: 50,
            defense: 50,
            special_attack: 50,
            special_defense: 50,
            speed: 50,
        },
        vec![Action::new("tackle", 40, 100, Affinity::Normal)],
    )
    .unwrap()
}

/// The canonical scenario fighter: 150 health, attack 100, defense 50, and a
/// single `surf` (water, power 90, accuracy 100).
///
/// Against defense 50 surf deals 162 to fire, 40 to water and 81 to normal.
pub fn surf_user(name: &str, affinity: Affinity) -> Combatant {
    Combatant::new(
        name,
        vec![affinity],
        Attributes {
            health: 150,
            attack: 100,
            defense: 50,
            ..Attributes::default()
        },
        vec![Action::new("surf", 90, 100, Affinity::Water)],
    )
    .unwrap()
}

/// Same combatant with its defense replaced.
pub fn with_defense(combatant: Combatant, defense: u32) -> Combatant {
    let attributes = Attributes {
        defense,
        ..*combatant.attributes()
    };
    Combatant::new(
        combatant.name(),
        combatant.affinities().to_vec(),
        attributes,
        combatant.actions().to_vec(),
    )
    .unwrap()
}

// =============================================================================
// Catalog records and rosters
// =============================================================================

/// A well-formed catalog record: all stats 60, one power-40 move of its own
/// type.
pub fn catalog_record(id: u32, name: &str, ty: &str) -> CatalogRecord {
    let stats: BTreeMap<String, i64> = StatKey::ALL
        .iter()
        .map(|key| (key.catalog_name().to_owned(), 60))
        .collect();
    CatalogRecord {
        id,
        name: name.to_owned(),
        types: vec![ty.to_owned()],
        stats,
        moves: vec![MoveRecord {
            name: format!("{ty}-strike"),
            power: Some(40),
            accuracy: Some(100),
            type_name: ty.to_owned(),
        }],
    }
}

/// Small roster of five starters, all within the default roster size.
pub fn sample_roster(seed: Option<u64>) -> InMemoryRoster {
    let records = [
        catalog_record(1, "bulbasaur", "grass"),
        catalog_record(4, "charmander", "fire"),
        catalog_record(7, "squirtle", "water"),
        catalog_record(25, "pikachu", "electric"),
        catalog_record(133, "eevee", "normal"),
    ];
    InMemoryRoster::new(
        records,
        &RosterConfig {
            seed,
            ..RosterConfig::default()
        },
    )
}

/// Roster whose backing catalog is always unreachable.
pub struct FailingRoster;

#[async_trait]
impl RosterLookup for FailingRoster {
    async fn fetch_combatant_by_id(&self, _id: u32) -> Result<Combatant, RosterError> {
        Err(RosterError::Unavailable("connection refused".into()))
    }

    async fn fetch_random_combatant(&self) -> Result<Combatant, RosterError> {
        Err(RosterError::Unavailable("connection refused".into()))
    }
}
