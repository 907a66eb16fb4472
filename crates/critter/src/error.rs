//! Validation errors for combatant construction.

use thiserror::Error;

use crate::affinity::UnknownAffinity;

/// A combatant or catalog record failed validation.
///
/// Raised at the roster boundary; the battle engine only ever sees combatants
/// that passed these checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The display name is empty or whitespace.
    #[error("combatant name is empty")]
    EmptyName,

    /// No elemental affinity was supplied.
    #[error("combatant `{name}` has no affinities")]
    NoAffinities {
        /// Combatant name.
        name: String,
    },

    /// A type tag did not name a known affinity.
    #[error(transparent)]
    UnknownAffinity(#[from] UnknownAffinity),

    /// A required stat is absent from the record.
    #[error("stat `{stat}` is missing")]
    MissingStat {
        /// Catalog stat name.
        stat: &'static str,
    },

    /// A stat is negative or does not fit the attribute range.
    #[error("stat `{stat}` has out-of-range value {value}")]
    StatOutOfRange {
        /// Catalog stat name.
        stat: &'static str,
        /// Reported value.
        value: i64,
    },

    /// The combatant has no usable actions.
    #[error("combatant `{name}` has no actions")]
    NoActions {
        /// Combatant name.
        name: String,
    },

    /// More actions than a combatant may carry.
    #[error("combatant `{name}` has {count} actions, at most {max} allowed")]
    TooManyActions {
        /// Combatant name.
        name: String,
        /// Number supplied.
        count: usize,
        /// Allowed maximum.
        max: usize,
    },

    /// An action's accuracy is outside `0..=100`.
    #[error("action `{action}` has accuracy {accuracy}, expected 0..=100")]
    AccuracyOutOfRange {
        /// Action name.
        action: String,
        /// Reported accuracy.
        accuracy: i64,
    },

    /// An action's power is negative or too large.
    #[error("action `{action}` has out-of-range power {power}")]
    PowerOutOfRange {
        /// Action name.
        action: String,
        /// Reported power.
        power: i64,
    },
}
