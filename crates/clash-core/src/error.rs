//! Errors surfaced by the battle engine.
//!
//! Every variant is a local, recoverable rejection: the engine validates a
//! call completely before touching the session, so a returned error always
//! means the session is exactly as it was.

use std::fmt;

use thiserror::Error;

use crate::session::Side;

/// Why a side was not allowed to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTurnReason {
    /// The other side owns the turn.
    NotTurnOwner {
        /// Side that currently owns the turn.
        turn_owner: Side,
    },
    /// The battle has already been decided.
    BattleOver,
}

impl fmt::Display for InvalidTurnReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotTurnOwner { turn_owner } => write!(f, "it is {turn_owner}'s turn"),
            Self::BattleOver => write!(f, "the battle is already over"),
        }
    }
}

/// A rejected `resolve_action` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    /// The caller does not own the turn, or the battle is over.
    #[error("{side} cannot act: {reason}")]
    InvalidTurn {
        /// Side that attempted to act.
        side: Side,
        /// Why it was rejected.
        reason: InvalidTurnReason,
    },

    /// The action index is outside the actor's action list.
    #[error("{side} has no action at index {index} ({available} available)")]
    InvalidActionIndex {
        /// Side that attempted to act.
        side: Side,
        /// Requested index.
        index: usize,
        /// Length of the actor's action list.
        available: usize,
    },

    /// The defender's defense is zero, so the damage ratio is undefined.
    #[error("`{combatant}` has degenerate defense {defense}")]
    DegenerateAttributes {
        /// Name of the defending combatant.
        combatant: String,
        /// Offending defense value.
        defense: u32,
    },
}

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, BattleError>;
