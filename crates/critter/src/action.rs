//! Actions a combatant can use in battle.

use serde::{Deserialize, Serialize};

use crate::Affinity;

/// Highest accuracy percentage an action may carry.
pub const MAX_ACCURACY: u8 = 100;

/// A named move with power, accuracy and an elemental affinity.
///
/// A power of 0 marks a status action. The damage formula still assigns such
/// actions a nominal amount of damage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Display name.
    pub name: String,
    /// Base power (0 = status action).
    pub power: u32,
    /// Accuracy percentage in `0..=100`.
    pub accuracy: u8,
    /// Elemental affinity of the action.
    pub affinity: Affinity,
}

impl Action {
    /// Creates a new action.
    ///
    /// Accuracy is not range-checked here; [`crate::Combatant::new`] rejects
    /// actions above [`MAX_ACCURACY`].
    #[must_use]
    pub fn new(name: impl Into<String>, power: u32, accuracy: u8, affinity: Affinity) -> Self {
        Self {
            name: name.into(),
            power,
            accuracy,
            affinity,
        }
    }

    /// Returns true for status actions (power 0).
    #[must_use]
    pub const fn is_status(&self) -> bool {
        self.power == 0
    }
}
