//! The combatant snapshot used during a battle.

use serde::{Deserialize, Serialize};

use crate::action::MAX_ACCURACY;
use crate::{Action, Affinity, Attributes, RecordError};

/// Fixed number of actions a combatant keeps. Not configurable.
pub const MAX_ACTIONS: usize = 4;

/// A battling entity: identity, affinities, attributes and up to four actions.
///
/// A `Combatant` is an owned value snapshot, independent of whatever catalog
/// record it was built from. Every constructor (including deserialization)
/// enforces:
///
/// - the name is non-empty
/// - at least one affinity is present
/// - between 1 and [`MAX_ACTIONS`] actions, each with accuracy `0..=100`
///
/// # Example
///
/// ```
/// use critter::{Action, Affinity, Attributes, Combatant};
///
/// let squirtle = Combatant::new(
///     "squirtle",
///     vec![Affinity::Water],
///     Attributes { health: 44, attack: 48, defense: 65, ..Attributes::default() },
///     vec![Action::new("water-gun", 40, 100, Affinity::Water)],
/// )
/// .unwrap();
///
/// assert_eq!(squirtle.primary_affinity(), Affinity::Water);
/// assert_eq!(squirtle.max_health(), 44);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CombatantParts")]
pub struct Combatant {
    name: String,
    affinities: Vec<Affinity>,
    attributes: Attributes,
    actions: Vec<Action>,
}

/// Unvalidated shape used by `Deserialize`.
#[derive(Deserialize)]
struct CombatantParts {
    name: String,
    affinities: Vec<Affinity>,
    attributes: Attributes,
    actions: Vec<Action>,
}

impl TryFrom<CombatantParts> for Combatant {
    type Error = RecordError;

    fn try_from(parts: CombatantParts) -> Result<Self, Self::Error> {
        Self::new(parts.name, parts.affinities, parts.attributes, parts.actions)
    }
}

impl Combatant {
    /// Builds a validated combatant.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] if the name is empty, no affinity is given,
    /// the action list is empty or longer than [`MAX_ACTIONS`], or an action's
    /// accuracy exceeds 100.
    pub fn new(
        name: impl Into<String>,
        affinities: Vec<Affinity>,
        attributes: Attributes,
        actions: Vec<Action>,
    ) -> Result<Self, RecordError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RecordError::EmptyName);
        }
        if affinities.is_empty() {
            return Err(RecordError::NoAffinities { name });
        }
        if actions.is_empty() {
            return Err(RecordError::NoActions { name });
        }
        if actions.len() > MAX_ACTIONS {
            return Err(RecordError::TooManyActions {
                name,
                count: actions.len(),
                max: MAX_ACTIONS,
            });
        }
        if let Some(action) = actions.iter().find(|a| a.accuracy > MAX_ACCURACY) {
            return Err(RecordError::AccuracyOutOfRange {
                action: action.name.clone(),
                accuracy: i64::from(action.accuracy),
            });
        }

        Ok(Self {
            name,
            affinities,
            attributes,
            actions,
        })
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All affinities, in catalog order.
    #[must_use]
    pub fn affinities(&self) -> &[Affinity] {
        &self.affinities
    }

    /// The first affinity. Only this one is consulted when defending.
    #[must_use]
    pub fn primary_affinity(&self) -> Affinity {
        // Non-empty by construction.
        self.affinities[0]
    }

    /// Attribute snapshot.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Maximum health (the health attribute).
    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.attributes.health
    }

    /// Available actions, 1 to [`MAX_ACTIONS`] of them.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Looks up an action by index.
    #[must_use]
    pub fn action(&self, index: usize) -> Option<&Action> {
        self.actions.get(index)
    }
}
