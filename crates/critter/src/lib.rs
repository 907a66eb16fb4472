//! # Critter
//!
//! Combatant model for Clash battles.
//!
//! A [`Combatant`] is the value snapshot a battle works on: a display name,
//! one or more elemental [`Affinity`] tags, a fixed set of numeric
//! [`Attributes`], and up to four [`Action`]s. This crate has no knowledge of
//! battles; it only guarantees that every combatant handed to the engine is
//! well formed.
//!
//! ## Building combatants
//!
//! - Directly, with [`Combatant::new`].
//! - From the catalog integration's [`CatalogRecord`] via `TryFrom`, which
//!   validates stats, type tags and moves, and keeps the first four moves.
//!
//! ```
//! use std::collections::BTreeMap;
//! use critter::{CatalogRecord, Combatant, MoveRecord};
//!
//! let stats: BTreeMap<String, i64> = [
//!     ("hp", 45), ("attack", 49), ("defense", 49),
//!     ("special-attack", 65), ("special-defense", 65), ("speed", 45),
//! ]
//! .into_iter()
//! .map(|(k, v)| (k.to_owned(), v))
//! .collect();
//!
//! let record = CatalogRecord {
//!     id: 1,
//!     name: "bulbasaur".into(),
//!     types: vec!["grass".into(), "poison".into()],
//!     stats,
//!     moves: vec![MoveRecord {
//!         name: "vine-whip".into(),
//!         power: Some(45),
//!         accuracy: Some(100),
//!         type_name: "grass".into(),
//!     }],
//! };
//!
//! let bulbasaur = Combatant::try_from(&record)?;
//! assert_eq!(bulbasaur.max_health(), 45);
//! # Ok::<(), critter::RecordError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod affinity;
pub mod attributes;
pub mod combatant;
pub mod error;
pub mod record;

pub use action::Action;
pub use affinity::{Affinity, UnknownAffinity};
pub use attributes::{Attributes, StatKey};
pub use combatant::{Combatant, MAX_ACTIONS};
pub use error::RecordError;
pub use record::{CatalogRecord, MoveRecord};
