//! Damage resolution.
//!
//! ```text
//! base          = floor(((2*50 + 10) / 250) * (attack / defense) * power + 2)
//! effectiveness = chart(action affinity, defender's FIRST affinity)
//! damage        = floor(base * effectiveness * (accuracy / 100))
//! ```
//!
//! All division is real-valued until each `floor`, evaluated left to right.
//! Two behaviours are kept as-is:
//!
//! - accuracy scales damage; it never causes a miss
//! - a power-0 action still has `base = 2`, so status actions deal a nominal
//!   amount unless accuracy or effectiveness zeroes it
//!
//! Secondary defender affinities are ignored.

use critter::{Action, Combatant};
use serde::{Deserialize, Serialize};

use crate::chart::{type_effectiveness, Effectiveness};
use crate::error::{BattleError, Result};

/// Fixed combatant level used by the formula.
pub const LEVEL: f64 = 50.0;

/// Level-derived scale factor: `(2 * LEVEL + 10) / 250`.
pub const LEVEL_FACTOR: f64 = (2.0 * LEVEL + 10.0) / 250.0;

/// Result of one damage computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Damage {
    /// Damage before effectiveness and accuracy scaling.
    pub base: u32,
    /// Chart entry used for the scaling.
    pub effectiveness: Effectiveness,
    /// Final damage dealt.
    pub amount: u32,
}

/// Computes the damage `action` deals when `attacker` uses it on `defender`.
///
/// # Errors
///
/// Returns [`BattleError::DegenerateAttributes`] if the defender's defense is
/// zero.
///
/// # Example
///
/// ```
/// use clash_core::damage::compute_damage;
/// use critter::{Action, Affinity, Attributes, Combatant};
///
/// let stats = |attack, defense| Attributes { health: 150, attack, defense, ..Attributes::default() };
/// let surf = Action::new("surf", 90, 100, Affinity::Water);
/// let attacker = Combatant::new("a", vec![Affinity::Water], stats(100, 50), vec![surf.clone()]).unwrap();
/// let defender = Combatant::new("d", vec![Affinity::Fire], stats(50, 50), vec![surf.clone()]).unwrap();
///
/// let damage = compute_damage(&attacker, &defender, &surf).unwrap();
/// assert_eq!(damage.base, 81);
/// assert_eq!(damage.amount, 162);
/// ```
pub fn compute_damage(attacker: &Combatant, defender: &Combatant, action: &Action) -> Result<Damage> {
    let defense = defender.attributes().defense;
    if defense == 0 {
        return Err(BattleError::DegenerateAttributes {
            combatant: defender.name().to_owned(),
            defense,
        });
    }

    let attack = f64::from(attacker.attributes().attack);
    let ratio = attack / f64::from(defense);
    let base = (LEVEL_FACTOR * ratio * f64::from(action.power) + 2.0).floor();

    let effectiveness = type_effectiveness(action.affinity, defender.primary_affinity());
    let accuracy = f64::from(action.accuracy) / 100.0;
    let amount = (base * effectiveness.multiplier() * accuracy).floor();

    // Both values are non-negative; `as` saturates on the (unreachable) high end.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (base, amount) = (base as u32, amount as u32);

    Ok(Damage {
        base,
        effectiveness,
        amount,
    })
}
