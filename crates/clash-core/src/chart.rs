//! Type-effectiveness chart.
//!
//! The chart is a sparse, asymmetric table keyed by (attacking affinity,
//! defending affinity). Only a curated subset of pairs carries a non-neutral
//! multiplier; every other pair is [`Effectiveness::Neutral`]. The table is
//! deliberately partial and must not be completed from outside knowledge:
//! adding pairs would change damage for existing matchups.
//!
//! # Example
//!
//! ```
//! use clash_core::chart::{type_effectiveness, Effectiveness};
//! use critter::Affinity;
//!
//! assert_eq!(type_effectiveness(Affinity::Water, Affinity::Fire), Effectiveness::SuperEffective);
//! assert_eq!(type_effectiveness(Affinity::Fire, Affinity::Fairy), Effectiveness::Neutral);
//! ```

use critter::Affinity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Damage multiplier class for one attacking/defending pair.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effectiveness {
    /// ×0
    Immune,
    /// ×0.5
    Resisted,
    /// ×1
    #[default]
    Neutral,
    /// ×2
    SuperEffective,
}

impl Effectiveness {
    /// Numeric multiplier applied to base damage.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Immune => 0.0,
            Self::Resisted => 0.5,
            Self::Neutral => 1.0,
            Self::SuperEffective => 2.0,
        }
    }
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immune => write!(f, "x0"),
            Self::Resisted => write!(f, "x0.5"),
            Self::Neutral => write!(f, "x1"),
            Self::SuperEffective => write!(f, "x2"),
        }
    }
}

use Affinity::{
    Bug, Dark, Dragon, Electric, Fighting, Fire, Flying, Ghost, Grass, Ground, Ice, Normal,
    Poison, Psychic, Rock, Steel, Water,
};
use Effectiveness::{Immune, Neutral, Resisted, SuperEffective};

/// Curated chart rows: attacking affinity followed by its listed defenders.
///
/// The explicit `Neutral` entries (fighting/poison against dragon) are part of
/// the curated list and are kept even though they match the default.
pub const TYPE_CHART: &[(Affinity, &[(Affinity, Effectiveness)])] = &[
    (Normal, &[(Rock, Resisted), (Ghost, Immune), (Steel, Resisted)]),
    (
        Fire,
        &[
            (Fire, Resisted),
            (Water, Resisted),
            (Grass, SuperEffective),
            (Ice, SuperEffective),
            (Bug, SuperEffective),
            (Rock, Resisted),
            (Dragon, Resisted),
            (Steel, SuperEffective),
        ],
    ),
    (
        Water,
        &[
            (Fire, SuperEffective),
            (Water, Resisted),
            (Grass, Resisted),
            (Ground, SuperEffective),
            (Rock, SuperEffective),
            (Dragon, Resisted),
        ],
    ),
    (
        Electric,
        &[
            (Water, SuperEffective),
            (Grass, Resisted),
            (Ground, Immune),
            (Flying, SuperEffective),
            (Dragon, Resisted),
        ],
    ),
    (
        Grass,
        &[
            (Fire, Resisted),
            (Water, SuperEffective),
            (Grass, Resisted),
            (Poison, Resisted),
            (Ground, SuperEffective),
            (Flying, Resisted),
            (Bug, Resisted),
            (Dragon, Resisted),
            (Steel, Resisted),
        ],
    ),
    (
        Ice,
        &[
            (Water, Resisted),
            (Grass, SuperEffective),
            (Ground, SuperEffective),
            (Flying, SuperEffective),
            (Dragon, SuperEffective),
            (Steel, Resisted),
        ],
    ),
    (
        Fighting,
        &[
            (Normal, SuperEffective),
            (Ice, SuperEffective),
            (Poison, Resisted),
            (Flying, Resisted),
            (Psychic, Resisted),
            (Bug, Resisted),
            (Rock, SuperEffective),
            (Ghost, Immune),
            (Dragon, Neutral),
            (Steel, SuperEffective),
        ],
    ),
    (
        Poison,
        &[
            (Grass, SuperEffective),
            (Poison, Resisted),
            (Ground, Resisted),
            (Bug, SuperEffective),
            (Rock, Resisted),
            (Ghost, Resisted),
            (Dragon, Neutral),
            (Steel, Immune),
        ],
    ),
    (
        Ground,
        &[
            (Fire, SuperEffective),
            (Electric, SuperEffective),
            (Grass, Resisted),
            (Poison, SuperEffective),
            (Flying, Immune),
            (Bug, Resisted),
            (Rock, SuperEffective),
            (Steel, SuperEffective),
        ],
    ),
    (
        Flying,
        &[
            (Electric, Resisted),
            (Grass, SuperEffective),
            (Fighting, SuperEffective),
            (Bug, SuperEffective),
            (Rock, Resisted),
            (Steel, Resisted),
        ],
    ),
    (
        Psychic,
        &[
            (Fighting, SuperEffective),
            (Poison, SuperEffective),
            (Psychic, Resisted),
            (Dark, Immune),
            (Steel, Resisted),
        ],
    ),
    (
        Bug,
        &[
            (Fire, Resisted),
            (Grass, SuperEffective),
            (Fighting, Resisted),
            (Poison, Resisted),
            (Flying, Resisted),
            (Psychic, SuperEffective),
            (Ghost, Resisted),
            (Dark, SuperEffective),
            (Steel, Resisted),
        ],
    ),
    (
        Rock,
        &[
            (Fire, SuperEffective),
            (Ice, SuperEffective),
            (Fighting, Resisted),
            (Ground, Resisted),
            (Flying, SuperEffective),
            (Bug, SuperEffective),
            (Steel, Resisted),
        ],
    ),
    (
        Ghost,
        &[
            (Normal, Immune),
            (Psychic, SuperEffective),
            (Ghost, SuperEffective),
            (Dark, Resisted),
        ],
    ),
    (Dragon, &[(Dragon, SuperEffective), (Steel, Resisted)]),
    (
        Dark,
        &[
            (Fighting, Resisted),
            (Psychic, SuperEffective),
            (Ghost, SuperEffective),
            (Dark, Resisted),
            (Steel, Resisted),
        ],
    ),
    (
        Steel,
        &[
            (Fire, Resisted),
            (Water, Resisted),
            (Electric, Resisted),
            (Ice, SuperEffective),
            (Rock, SuperEffective),
            (Steel, Resisted),
        ],
    ),
];

/// Looks up the effectiveness of `attack` against `defense`.
///
/// Pairs absent from [`TYPE_CHART`] are [`Effectiveness::Neutral`].
#[must_use]
pub fn type_effectiveness(attack: Affinity, defense: Affinity) -> Effectiveness {
    TYPE_CHART
        .iter()
        .find(|(attacker, _)| *attacker == attack)
        .and_then(|(_, row)| row.iter().find(|(defender, _)| *defender == defense))
        .map_or(Effectiveness::Neutral, |(_, effectiveness)| *effectiveness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_pairs_return_their_multiplier() {
        assert_eq!(type_effectiveness(Water, Fire), SuperEffective);
        assert_eq!(type_effectiveness(Water, Water), Resisted);
        assert_eq!(type_effectiveness(Normal, Ghost), Immune);
        assert_eq!(type_effectiveness(Electric, Ground), Immune);
        assert_eq!(type_effectiveness(Ghost, Normal), Immune);
        assert_eq!(type_effectiveness(Ice, Dragon), SuperEffective);
    }

    #[test]
    fn chart_is_asymmetric() {
        assert_eq!(type_effectiveness(Fire, Grass), SuperEffective);
        assert_eq!(type_effectiveness(Grass, Fire), Resisted);
        // Listed one way only.
        assert_eq!(type_effectiveness(Dragon, Fire), Neutral);
        assert_eq!(type_effectiveness(Fire, Dragon), Resisted);
    }

    #[test]
    fn unlisted_pairs_are_neutral() {
        // Real-world charts would disagree on these; the curated table does not list them.
        assert_eq!(type_effectiveness(Normal, Fire), Neutral);
        assert_eq!(type_effectiveness(Fire, Ground), Neutral);
        assert_eq!(type_effectiveness(Dragon, Affinity::Fairy), Neutral);
        assert_eq!(type_effectiveness(Affinity::Fairy, Dragon), Neutral);
        assert_eq!(type_effectiveness(Ice, Fire), Neutral);
    }

    #[test]
    fn fairy_has_no_entries() {
        for other in Affinity::all() {
            assert_eq!(type_effectiveness(Affinity::Fairy, other), Neutral);
            assert_eq!(type_effectiveness(other, Affinity::Fairy), Neutral);
        }
    }

    #[test]
    fn chart_has_one_row_per_attacker_and_no_duplicate_defenders() {
        let mut attackers: Vec<_> = TYPE_CHART.iter().map(|(a, _)| *a).collect();
        attackers.sort();
        attackers.dedup();
        assert_eq!(attackers.len(), TYPE_CHART.len());

        for (_, row) in TYPE_CHART {
            let mut defenders: Vec<_> = row.iter().map(|(d, _)| *d).collect();
            defenders.sort();
            defenders.dedup();
            assert_eq!(defenders.len(), row.len());
        }
    }

    #[test]
    fn curated_pair_count() {
        let pairs: usize = TYPE_CHART.iter().map(|(_, row)| row.len()).sum();
        assert_eq!(pairs, 107);
    }

    #[test]
    fn multipliers() {
        assert!((Immune.multiplier() - 0.0).abs() < f64::EPSILON);
        assert!((Resisted.multiplier() - 0.5).abs() < f64::EPSILON);
        assert!((Neutral.multiplier() - 1.0).abs() < f64::EPSILON);
        assert!((SuperEffective.multiplier() - 2.0).abs() < f64::EPSILON);
    }
}
