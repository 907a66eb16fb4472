//! Roster lookup: where combatants come from.
//!
//! The engine never talks to the creature catalog itself. A match is started
//! from any [`RosterLookup`] implementation: the network-backed catalog
//! client in production, or [`InMemoryRoster`] for tests and offline play.
//! Lookups are asynchronous and fallible; callers must not assume any
//! ordering between two lookups in flight.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use critter::{CatalogRecord, Combatant, RecordError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::config::RosterConfig;

/// A roster lookup failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// No record with this id.
    #[error("no combatant with id {id}")]
    NotFound {
        /// Requested id.
        id: u32,
    },

    /// The record exists but could not be turned into a combatant.
    #[error("malformed record {id}: {source}")]
    MalformedRecord {
        /// Record id.
        id: u32,
        /// Validation failure.
        #[source]
        source: RecordError,
    },

    /// A random pick was requested from a roster with no eligible records.
    #[error("roster has no combatants to pick from")]
    EmptyRoster,

    /// The backing catalog could not be reached or answered garbage.
    #[error("roster unavailable: {0}")]
    Unavailable(String),
}

/// Source of combatants for a match.
#[async_trait]
pub trait RosterLookup: Send + Sync {
    /// Fetches the combatant with catalog id `id`.
    async fn fetch_combatant_by_id(&self, id: u32) -> Result<Combatant, RosterError>;

    /// Fetches a randomly chosen combatant.
    async fn fetch_random_combatant(&self) -> Result<Combatant, RosterError>;
}

/// Roster backed by catalog records held in memory.
///
/// Records are validated on every lookup, so a malformed record is reported
/// as [`RosterError::MalformedRecord`] when requested rather than when
/// inserted. Random picks draw uniformly from the stored ids within
/// `1..=roster_size`, using a seeded [`ChaCha8Rng`].
#[derive(Debug)]
pub struct InMemoryRoster {
    records: BTreeMap<u32, CatalogRecord>,
    roster_size: u32,
    seed: u64,
    rng: Mutex<ChaCha8Rng>,
}

impl InMemoryRoster {
    /// Creates a roster from records, keyed by their `id`.
    ///
    /// Later records replace earlier ones with the same id.
    pub fn new(records: impl IntoIterator<Item = CatalogRecord>, config: &RosterConfig) -> Self {
        let records: BTreeMap<u32, CatalogRecord> =
            records.into_iter().map(|r| (r.id, r)).collect();
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::debug!(
            records = records.len(),
            roster_size = config.roster_size,
            seed,
            "in-memory roster created"
        );
        Self {
            records,
            roster_size: config.roster_size,
            seed,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Seed used for random picks.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn lookup(&self, id: u32) -> Result<Combatant, RosterError> {
        let record = self.records.get(&id).ok_or(RosterError::NotFound { id })?;
        Combatant::try_from(record).map_err(|source| {
            tracing::warn!(id, error = %source, "rejected malformed catalog record");
            RosterError::MalformedRecord { id, source }
        })
    }

    fn pick_random_id(&self) -> Result<u32, RosterError> {
        let eligible: Vec<u32> = self
            .records
            .range(1..=self.roster_size)
            .map(|(id, _)| *id)
            .collect();
        if eligible.is_empty() {
            return Err(RosterError::EmptyRoster);
        }
        // Poisoning cannot leave the RNG half-updated; keep using it.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(eligible[rng.gen_range(0..eligible.len())])
    }
}

#[async_trait]
impl RosterLookup for InMemoryRoster {
    async fn fetch_combatant_by_id(&self, id: u32) -> Result<Combatant, RosterError> {
        tracing::debug!(id, "roster lookup by id");
        self.lookup(id)
    }

    async fn fetch_random_combatant(&self) -> Result<Combatant, RosterError> {
        let id = self.pick_random_id()?;
        tracing::debug!(id, "roster random pick");
        self.lookup(id)
    }
}
