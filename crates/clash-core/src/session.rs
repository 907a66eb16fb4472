//! Battle session: the mutable aggregate and its single transition.
//!
//! A [`BattleSession`] owns two [`Fighter`]s, the turn owner, an append-only
//! log and the outcome. Its state machine is:
//!
//! ```text
//! Active(First) --resolve_action--> Active(Second) --> Active(First) --> ...
//!        \                                 \
//!         `--(knockout)--> GameOver(First)  `--(knockout)--> GameOver(Second)
//! ```
//!
//! [`BattleSession::resolve_action`] is the only way to mutate a session. It
//! validates the whole call before writing anything, so a rejected call is a
//! no-op.
//!
//! # Example
//!
//! ```
//! use clash_core::session::{BattleSession, Side};
//! use critter::{Action, Affinity, Attributes, Combatant};
//!
//! let stats = Attributes { health: 150, attack: 100, defense: 50, ..Attributes::default() };
//! let surf = Action::new("surf", 90, 100, Affinity::Water);
//! let a = Combatant::new("blastoise", vec![Affinity::Water], stats, vec![surf.clone()]).unwrap();
//! let b = Combatant::new("arcanine", vec![Affinity::Fire], stats, vec![surf]).unwrap();
//!
//! let mut session = BattleSession::new(a, b);
//! let outcome = session.resolve_action(Side::First, 0).unwrap();
//!
//! assert_eq!(outcome.damage, 162);
//! assert_eq!(outcome.winner, Some(Side::First));
//! assert!(session.is_over());
//! assert_eq!(session.log(), ["blastoise used surf!", "It dealt 162 damage to arcanine!"]);
//! ```

use std::fmt;

use critter::Combatant;
use serde::{Deserialize, Serialize};

use crate::chart::Effectiveness;
use crate::damage::compute_damage;
use crate::error::{BattleError, InvalidTurnReason, Result};

// =============================================================================
// Side
// =============================================================================

/// One of the two sides of a battle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The side that moves first.
    First,
    /// The side that moves second.
    Second,
}

impl Side {
    /// Both sides, in turn order.
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first side"),
            Self::Second => write!(f, "second side"),
        }
    }
}

// =============================================================================
// Fighter
// =============================================================================

/// A combatant inside a session, with its current health.
///
/// Maximum health is the combatant's health attribute and never changes.
/// Current health stays in `0..=max_health`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FighterParts")]
pub struct Fighter {
    combatant: Combatant,
    health: u32,
}

#[derive(Deserialize)]
struct FighterParts {
    combatant: Combatant,
    health: u32,
}

/// Deserialized health exceeded the combatant's maximum.
#[derive(Debug, thiserror::Error)]
#[error("health {health} exceeds maximum {max_health}")]
pub struct HealthOutOfRange {
    health: u32,
    max_health: u32,
}

impl TryFrom<FighterParts> for Fighter {
    type Error = HealthOutOfRange;

    fn try_from(parts: FighterParts) -> std::result::Result<Self, Self::Error> {
        let max_health = parts.combatant.max_health();
        if parts.health > max_health {
            return Err(HealthOutOfRange {
                health: parts.health,
                max_health,
            });
        }
        Ok(Self {
            combatant: parts.combatant,
            health: parts.health,
        })
    }
}

impl Fighter {
    /// Puts a combatant into battle at full health.
    #[must_use]
    pub fn new(combatant: Combatant) -> Self {
        let health = combatant.max_health();
        Self { combatant, health }
    }

    /// The combatant snapshot.
    #[must_use]
    pub fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.combatant.name()
    }

    /// Current health.
    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    /// Maximum health, captured when the battle started.
    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.combatant.max_health()
    }

    /// True once health has reached zero.
    #[must_use]
    pub fn is_knocked_out(&self) -> bool {
        self.health == 0
    }

    /// Subtracts damage, flooring at zero.
    fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}

// =============================================================================
// Turn outcome
// =============================================================================

/// What one successful `resolve_action` call did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Side that acted.
    pub actor: Side,
    /// Index of the action used.
    pub action_index: usize,
    /// Name of the action used.
    pub action_name: String,
    /// Damage dealt to the other side.
    pub damage: u32,
    /// Chart entry applied to the damage.
    pub effectiveness: Effectiveness,
    /// Target's health after the hit.
    pub target_health: u32,
    /// `Some(actor)` when this call ended the battle.
    pub winner: Option<Side>,
}

impl TurnOutcome {
    /// True when this call ended the battle.
    #[must_use]
    pub fn ended_battle(&self) -> bool {
        self.winner.is_some()
    }
}

// =============================================================================
// Battle session
// =============================================================================

/// One battle between exactly two combatants.
///
/// Owns independent copies of both combatants; nothing done here leaks back to
/// the records they were built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionParts")]
pub struct BattleSession {
    fighters: [Fighter; 2],
    turn_owner: Side,
    log: Vec<String>,
    winner: Option<Side>,
}

#[derive(Deserialize)]
struct SessionParts {
    fighters: [Fighter; 2],
    turn_owner: Side,
    log: Vec<String>,
    winner: Option<Side>,
}

/// Deserialized outcome disagrees with the fighters' health.
#[derive(Debug, thiserror::Error)]
pub enum InconsistentSession {
    /// `winner` is set, but the other side still has health.
    #[error("{winner} is recorded as winner but its opponent is still standing")]
    OpponentStanding {
        /// Recorded winner.
        winner: Side,
    },

    /// The battle is over but the turn owner is not the winner.
    #[error("battle won by {winner} but turn owner is {turn_owner}")]
    TurnOwnerNotWinner {
        /// Recorded winner.
        winner: Side,
        /// Recorded turn owner.
        turn_owner: Side,
    },

    /// A fighter is knocked out but no winner is recorded, or both are.
    #[error("knocked-out fighters do not match the recorded outcome")]
    KnockoutWithoutWinner,
}

impl TryFrom<SessionParts> for BattleSession {
    type Error = InconsistentSession;

    fn try_from(parts: SessionParts) -> std::result::Result<Self, Self::Error> {
        let knocked_out = parts.fighters.iter().filter(|f| f.is_knocked_out()).count();
        match parts.winner {
            Some(winner) => {
                if !parts.fighters[winner.opponent().index()].is_knocked_out() {
                    return Err(InconsistentSession::OpponentStanding { winner });
                }
                if knocked_out != 1 {
                    return Err(InconsistentSession::KnockoutWithoutWinner);
                }
                if parts.turn_owner != winner {
                    return Err(InconsistentSession::TurnOwnerNotWinner {
                        winner,
                        turn_owner: parts.turn_owner,
                    });
                }
            }
            None if knocked_out > 0 => return Err(InconsistentSession::KnockoutWithoutWinner),
            None => {}
        }
        Ok(Self {
            fighters: parts.fighters,
            turn_owner: parts.turn_owner,
            log: parts.log,
            winner: parts.winner,
        })
    }
}

impl BattleSession {
    /// Starts a battle: both fighters at full health, [`Side::First`] to move,
    /// empty log.
    #[must_use]
    pub fn new(first: Combatant, second: Combatant) -> Self {
        tracing::debug!(
            first = %first.name(),
            second = %second.name(),
            "battle session created"
        );
        Self {
            fighters: [Fighter::new(first), Fighter::new(second)],
            turn_owner: Side::First,
            log: Vec::new(),
            winner: None,
        }
    }

    /// Fighter on the given side.
    #[must_use]
    pub fn fighter(&self, side: Side) -> &Fighter {
        &self.fighters[side.index()]
    }

    /// Side currently permitted to act. Frozen once the battle is over.
    #[must_use]
    pub fn turn_owner(&self) -> Side {
        self.turn_owner
    }

    /// Chronological event log.
    #[must_use]
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// True once a side has been knocked out.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Winning side, if the battle is over.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Resolves one action for `actor`.
    ///
    /// On success the target loses health, two log lines are appended, and
    /// either the battle ends with `actor` as winner (turn owner unchanged) or
    /// the turn passes to the other side.
    ///
    /// # Errors
    ///
    /// - [`BattleError::InvalidTurn`] if the battle is over or `actor` does not
    ///   own the turn
    /// - [`BattleError::InvalidActionIndex`] if `action_index` is out of range
    /// - [`BattleError::DegenerateAttributes`] if the target's defense is zero
    ///
    /// The session is unchanged whenever an error is returned.
    pub fn resolve_action(&mut self, actor: Side, action_index: usize) -> Result<TurnOutcome> {
        if let Err(err) = self.check_turn(actor) {
            tracing::warn!(%actor, error = %err, "rejected action");
            return Err(err);
        }

        let target = actor.opponent();
        let attacker = self.fighter(actor).combatant();
        let defender = self.fighter(target).combatant();

        let Some(action) = attacker.action(action_index) else {
            let err = BattleError::InvalidActionIndex {
                side: actor,
                index: action_index,
                available: attacker.actions().len(),
            };
            tracing::warn!(%actor, error = %err, "rejected action");
            return Err(err);
        };

        let damage = compute_damage(attacker, defender, action).inspect_err(|err| {
            tracing::warn!(%actor, error = %err, "rejected action");
        })?;

        // Validation done; everything below mutates.
        let action_name = action.name.clone();
        let used = format!("{} used {}!", attacker.name(), action_name);
        let dealt = format!("It dealt {} damage to {}!", damage.amount, defender.name());

        let defender = &mut self.fighters[target.index()];
        defender.take_damage(damage.amount);
        let target_health = defender.health();
        let knocked_out = defender.is_knocked_out();

        self.log.push(used);
        self.log.push(dealt);

        tracing::debug!(
            %actor,
            action = %action_name,
            damage = damage.amount,
            effectiveness = %damage.effectiveness,
            target_health,
            "action resolved"
        );

        if knocked_out {
            self.winner = Some(actor);
            tracing::info!(winner = %actor, "battle over");
        } else {
            self.turn_owner = target;
        }

        Ok(TurnOutcome {
            actor,
            action_index,
            action_name,
            damage: damage.amount,
            effectiveness: damage.effectiveness,
            target_health,
            winner: self.winner,
        })
    }

    fn check_turn(&self, actor: Side) -> Result<()> {
        if self.is_over() {
            return Err(BattleError::InvalidTurn {
                side: actor,
                reason: InvalidTurnReason::BattleOver,
            });
        }
        if actor != self.turn_owner {
            return Err(BattleError::InvalidTurn {
                side: actor,
                reason: InvalidTurnReason::NotTurnOwner {
                    turn_owner: self.turn_owner,
                },
            });
        }
        Ok(())
    }

    /// Deterministic hash of the session state.
    ///
    /// Identical battles (same combatants, same action sequence) produce
    /// identical hashes.
    #[must_use]
    pub fn state_hash(&self) -> u64 {
        crate::hash::hash_session(self)
    }
}
