//! Cross-module tests for the battle engine.
//!
//! - `scenarios.rs`: full battles and the canonical damage scenarios
//! - `determinism.rs`: same seed and inputs produce identical matches
//! - `properties.rs`: proptest invariants over arbitrary combatants and
//!   action sequences
//! - `helpers.rs`: combatant, record and roster factories shared by every
//!   test module in the crate

pub mod helpers;

mod scenarios;
