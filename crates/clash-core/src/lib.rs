//! # Clash Core
//!
//! Turn-based battle engine for Clash.
//!
//! This crate resolves one-on-one battles between two [`critter::Combatant`]s.
//! It is deterministic given its inputs: damage is a pure function of the two
//! combatants and the chosen action, and every random choice (the computer's
//! action, random roster picks) is drawn from a seeded `ChaCha8Rng` whose seed
//! is recorded for replay.
//!
//! ## Architecture
//!
//! - **Chart**: static attacker/defender effectiveness table
//! - **Damage**: the damage formula
//! - **Session**: the battle aggregate and its single transition,
//!   [`BattleSession::resolve_action`]
//! - **Controller**: a [`Match`] wraps a session, fetches combatants from a
//!   [`RosterLookup`] and plays the computer side
//!
//! ## Usage
//!
//! ```rust,ignore
//! use clash_core::{GameMode, InMemoryRoster, Match, MatchConfig, Opponent, RosterConfig, Side};
//!
//! let roster = InMemoryRoster::new(records, &RosterConfig::default());
//! let mut game = Match::start(&roster, 7, Opponent::Random, MatchConfig::default()).await?;
//! let outcomes = game.submit(Side::First, 0).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub use critter;

pub mod chart;
pub mod config;
pub mod controller;
pub mod damage;
pub mod error;
pub mod hash;
pub mod policy;
pub mod roster;
pub mod session;

pub use chart::{type_effectiveness, Effectiveness};
pub use config::{GameMode, MatchConfig, RosterConfig};
pub use controller::{Match, MatchError, Opponent};
pub use damage::{compute_damage, Damage};
pub use error::{BattleError, InvalidTurnReason};
pub use roster::{InMemoryRoster, RosterError, RosterLookup};
pub use session::{BattleSession, Fighter, InconsistentSession, Side, TurnOutcome};

#[cfg(test)]
mod tests;
