//! Elemental affinities carried by combatants and their actions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Elemental type tag attached to a combatant or an action.
///
/// The catalog reports types as lowercase strings (`"fire"`, `"water"`, ...).
/// Parsing is case-insensitive; display is always lowercase so log lines and
/// serialized snapshots match the catalog's spelling.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Affinity {
    /// Normal type.
    Normal,
    /// Fire type.
    Fire,
    /// Water type.
    Water,
    /// Electric type.
    Electric,
    /// Grass type.
    Grass,
    /// Ice type.
    Ice,
    /// Fighting type.
    Fighting,
    /// Poison type.
    Poison,
    /// Ground type.
    Ground,
    /// Flying type.
    Flying,
    /// Psychic type.
    Psychic,
    /// Bug type.
    Bug,
    /// Rock type.
    Rock,
    /// Ghost type.
    Ghost,
    /// Dragon type.
    Dragon,
    /// Dark type.
    Dark,
    /// Steel type.
    Steel,
    /// Fairy type.
    Fairy,
}

impl Affinity {
    /// Number of affinities.
    pub const COUNT: usize = 18;

    /// All affinities in declaration order.
    #[must_use]
    pub const fn all() -> [Affinity; Self::COUNT] {
        [
            Self::Normal,
            Self::Fire,
            Self::Water,
            Self::Electric,
            Self::Grass,
            Self::Ice,
            Self::Fighting,
            Self::Poison,
            Self::Ground,
            Self::Flying,
            Self::Psychic,
            Self::Bug,
            Self::Rock,
            Self::Ghost,
            Self::Dragon,
            Self::Dark,
            Self::Steel,
            Self::Fairy,
        ]
    }

    /// Lowercase catalog name of this affinity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Electric => "electric",
            Self::Grass => "grass",
            Self::Ice => "ice",
            Self::Fighting => "fighting",
            Self::Poison => "poison",
            Self::Ground => "ground",
            Self::Flying => "flying",
            Self::Psychic => "psychic",
            Self::Bug => "bug",
            Self::Rock => "rock",
            Self::Ghost => "ghost",
            Self::Dragon => "dragon",
            Self::Dark => "dark",
            Self::Steel => "steel",
            Self::Fairy => "fairy",
        }
    }
}

impl fmt::Display for Affinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a type tag names no known affinity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown affinity tag `{0}`")]
pub struct UnknownAffinity(pub String);

impl FromStr for Affinity {
    type Err = UnknownAffinity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::all()
            .into_iter()
            .find(|affinity| affinity.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| UnknownAffinity(s.to_owned()))
    }
}
