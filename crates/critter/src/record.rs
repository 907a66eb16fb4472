//! Catalog records and their conversion into combatants.
//!
//! The catalog integration (HTTP client and response shaping) lives outside
//! this workspace. It hands over a [`CatalogRecord`]: a loosely typed record
//! whose stats are keyed by string and whose numbers may be missing or
//! negative. Converting it into a [`Combatant`] is the one place where that
//! shape is validated; malformed records never reach the battle engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::action::MAX_ACCURACY;
use crate::attributes::StatKey;
use crate::combatant::MAX_ACTIONS;
use crate::{Action, Affinity, Attributes, Combatant, RecordError};

/// A creature as shaped by the catalog integration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Catalog identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Type tags in catalog order.
    pub types: Vec<String>,
    /// Base stats keyed by catalog stat name (`hp`, `special-attack`, ...).
    pub stats: BTreeMap<String, i64>,
    /// Moves in catalog order. Only the first [`MAX_ACTIONS`] are kept.
    pub moves: Vec<MoveRecord>,
}

/// A move as shaped by the catalog integration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Display name.
    pub name: String,
    /// Base power; the catalog reports none for status moves.
    pub power: Option<i64>,
    /// Accuracy percentage; the catalog reports none for never-miss moves.
    pub accuracy: Option<i64>,
    /// Type tag.
    pub type_name: String,
}

impl MoveRecord {
    fn to_action(&self) -> Result<Action, RecordError> {
        let power = self.power.unwrap_or(0);
        let power = u32::try_from(power).map_err(|_| RecordError::PowerOutOfRange {
            action: self.name.clone(),
            power,
        })?;

        let accuracy = self.accuracy.unwrap_or(0);
        let accuracy = u8::try_from(accuracy)
            .ok()
            .filter(|a| *a <= MAX_ACCURACY)
            .ok_or_else(|| RecordError::AccuracyOutOfRange {
                action: self.name.clone(),
                accuracy,
            })?;

        let affinity: Affinity = self.type_name.parse()?;
        Ok(Action::new(self.name.clone(), power, accuracy, affinity))
    }
}

impl CatalogRecord {
    fn attributes(&self) -> Result<Attributes, RecordError> {
        let mut attributes = Attributes::default();
        for key in StatKey::ALL {
            let stat = key.catalog_name();
            let value = *self
                .stats
                .get(stat)
                .ok_or(RecordError::MissingStat { stat })?;
            let value =
                u32::try_from(value).map_err(|_| RecordError::StatOutOfRange { stat, value })?;
            attributes.set(key, value);
        }
        Ok(attributes)
    }
}

impl TryFrom<&CatalogRecord> for Combatant {
    type Error = RecordError;

    fn try_from(record: &CatalogRecord) -> Result<Self, Self::Error> {
        let affinities = record
            .types
            .iter()
            .map(|tag| tag.parse::<Affinity>())
            .collect::<Result<Vec<_>, _>>()?;
        let attributes = record.attributes()?;
        let actions = record
            .moves
            .iter()
            .take(MAX_ACTIONS)
            .map(MoveRecord::to_action)
            .collect::<Result<Vec<_>, _>>()?;

        let combatant = Combatant::new(record.name.clone(), affinities, attributes, actions)?;
        tracing::debug!(
            id = record.id,
            name = %combatant.name(),
            actions = combatant.actions().len(),
            "built combatant from catalog record"
        );
        Ok(combatant)
    }
}

impl TryFrom<CatalogRecord> for Combatant {
    type Error = RecordError;

    fn try_from(record: CatalogRecord) -> Result<Self, Self::Error> {
        Combatant::try_from(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(values: [i64; 6]) -> BTreeMap<String, i64> {
        StatKey::ALL
            .into_iter()
            .zip(values)
            .map(|(k, v)| (k.catalog_name().to_owned(), v))
            .collect()
    }

    fn mv(name: &str, power: Option<i64>, accuracy: Option<i64>, ty: &str) -> MoveRecord {
        MoveRecord {
            name: name.into(),
            power,
            accuracy,
            type_name: ty.into(),
        }
    }

    fn charmander() -> CatalogRecord {
        CatalogRecord {
            id: 4,
            name: "charmander".into(),
            types: vec!["fire".into()],
            stats: stats([39, 52, 43, 60, 50, 65]),
            moves: vec![
                mv("scratch", Some(40), Some(100), "normal"),
                mv("ember", Some(40), Some(100), "fire"),
            ],
        }
    }

    #[test]
    fn converts_well_formed_record() {
        let c = Combatant::try_from(charmander()).unwrap();
        assert_eq!(c.name(), "charmander");
        assert_eq!(c.affinities(), &[Affinity::Fire]);
        assert_eq!(c.attributes().health, 39);
        assert_eq!(c.attributes().special_attack, 60);
        assert_eq!(c.actions()[1], Action::new("ember", 40, 100, Affinity::Fire));
    }

    #[test]
    fn truncates_to_four_moves() {
        let mut record = charmander();
        record.moves = (0..7)
            .map(|i| mv(&format!("move-{i}"), Some(10), Some(100), "normal"))
            .collect();
        let c = Combatant::try_from(&record).unwrap();
        assert_eq!(c.actions().len(), MAX_ACTIONS);
        assert_eq!(c.actions()[3].name, "move-3");
    }

    #[test]
    fn moves_past_the_fourth_are_not_validated() {
        let mut record = charmander();
        record.moves = vec![
            mv("a", Some(10), Some(100), "normal"),
            mv("b", Some(10), Some(100), "normal"),
            mv("c", Some(10), Some(100), "normal"),
            mv("d", Some(10), Some(100), "normal"),
            mv("e", Some(10), Some(100), "shadow"),
        ];
        assert!(Combatant::try_from(&record).is_ok());
    }

    #[test]
    fn missing_power_and_accuracy_default_to_zero() {
        let mut record = charmander();
        record.moves = vec![mv("growl", None, None, "normal")];
        let c = Combatant::try_from(record).unwrap();
        assert_eq!(c.actions()[0].power, 0);
        assert_eq!(c.actions()[0].accuracy, 0);
    }

    #[test]
    fn rejects_missing_stat() {
        let mut record = charmander();
        record.stats.remove("special-defense");
        assert_eq!(
            Combatant::try_from(record).unwrap_err(),
            RecordError::MissingStat {
                stat: "special-defense"
            }
        );
    }

    #[test]
    fn rejects_negative_stat() {
        let mut record = charmander();
        record.stats.insert("defense".into(), -5);
        assert_eq!(
            Combatant::try_from(record).unwrap_err(),
            RecordError::StatOutOfRange {
                stat: "defense",
                value: -5
            }
        );
    }

    #[test]
    fn rejects_unknown_type_tag() {
        let mut record = charmander();
        record.types = vec!["shadow".into()];
        assert!(matches!(
            Combatant::try_from(record).unwrap_err(),
            RecordError::UnknownAffinity(_)
        ));
    }

    #[test]
    fn rejects_bad_move_numbers() {
        let mut record = charmander();
        record.moves = vec![mv("overcharge", Some(40), Some(150), "electric")];
        assert!(matches!(
            Combatant::try_from(&record).unwrap_err(),
            RecordError::AccuracyOutOfRange { accuracy: 150, .. }
        ));

        record.moves = vec![mv("backfire", Some(-1), Some(100), "fire")];
        assert!(matches!(
            Combatant::try_from(&record).unwrap_err(),
            RecordError::PowerOutOfRange { power: -1, .. }
        ));
    }

    #[test]
    fn rejects_record_without_moves_or_types() {
        let mut record = charmander();
        record.moves.clear();
        assert!(matches!(
            Combatant::try_from(&record).unwrap_err(),
            RecordError::NoActions { .. }
        ));

        let mut record = charmander();
        record.types.clear();
        assert!(matches!(
            Combatant::try_from(&record).unwrap_err(),
            RecordError::NoAffinities { .. }
        ));
    }

    #[test]
    fn record_deserializes_from_catalog_json() {
        let json = r#"{
            "id": 7,
            "name": "squirtle",
            "types": ["water"],
            "stats": {"hp": 44, "attack": 48, "defense": 65,
                      "special-attack": 50, "special-defense": 64, "speed": 43},
            "moves": [{"name": "tackle", "power": 40, "accuracy": 100, "type_name": "normal"},
                      {"name": "tail-whip", "power": null, "accuracy": 100, "type_name": "normal"}]
        }"#;
        let record: CatalogRecord = serde_json::from_str(json).unwrap();
        let c = Combatant::try_from(&record).unwrap();
        assert_eq!(c.attributes().defense, 65);
        assert!(c.actions()[1].is_status());
    }
}
