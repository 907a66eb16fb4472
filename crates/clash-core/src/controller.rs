//! Match controller: one battle, its mode, and the computer opponent.
//!
//! A [`Match`] owns exactly one [`BattleSession`]. Human input arrives through
//! [`Match::submit`]; in [`GameMode::HumanVsComputer`] the controller answers
//! each human action with the computer's own, chosen by
//! [`crate::policy::choose_action`] from the match RNG. The computer's move is
//! an explicit call made after the human transition, never a reaction to
//! state changes, so it always sees the session as the human left it.
//!
//! # Example
//!
//! ```
//! use clash_core::config::{GameMode, MatchConfig};
//! use clash_core::controller::Match;
//! use clash_core::session::Side;
//! use critter::{Action, Affinity, Attributes, Combatant};
//!
//! let stats = Attributes { health: 150, attack: 100, defense: 50, ..Attributes::default() };
//! let surf = Action::new("surf", 90, 100, Affinity::Water);
//! let a = Combatant::new("blastoise", vec![Affinity::Water], stats, vec![surf.clone()]).unwrap();
//! let b = Combatant::new("lapras", vec![Affinity::Water], stats, vec![surf]).unwrap();
//!
//! let config = MatchConfig::headless(GameMode::HumanVsComputer).with_seed(1);
//! let mut game = Match::new(a, b, config).unwrap();
//!
//! let runtime = tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap();
//! let outcomes = runtime.block_on(game.submit(Side::First, 0)).unwrap();
//!
//! // Human move, then the computer's reply.
//! assert_eq!(outcomes.len(), 2);
//! assert_eq!(game.session().turn_owner(), Side::First);
//! ```

use critter::Combatant;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::config::{GameMode, MatchConfig};
use crate::error::BattleError;
use crate::policy::choose_action;
use crate::roster::{RosterError, RosterLookup};
use crate::session::{BattleSession, Side, TurnOutcome};

/// How the second combatant is chosen when starting from a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    /// A random roster entry.
    Random,
    /// A specific catalog id.
    ById(u32),
}

/// A match operation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The engine rejected the action.
    #[error(transparent)]
    Battle(#[from] BattleError),

    /// A combatant could not be fetched.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// A human tried to act for the computer-controlled side.
    #[error("{side} is computer-controlled")]
    ComputerControlled {
        /// Side the human tried to act for.
        side: Side,
    },
}

/// One battle under a controller.
#[derive(Debug)]
pub struct Match {
    session: BattleSession,
    config: MatchConfig,
    seed: u64,
    rng: ChaCha8Rng,
}

impl Match {
    /// Starts a match between two already-fetched combatants.
    ///
    /// # Errors
    ///
    /// Returns [`BattleError::DegenerateAttributes`] (as [`MatchError::Battle`])
    /// if either combatant has zero defense. Every action against such a
    /// fighter would be rejected mid-round.
    pub fn new(first: Combatant, second: Combatant, config: MatchConfig) -> Result<Self, MatchError> {
        for combatant in [&first, &second] {
            check_attributes(combatant).inspect_err(|err| {
                tracing::warn!(error = %err, "rejected combatant");
            })?;
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::info!(
            first = %first.name(),
            second = %second.name(),
            mode = ?config.mode,
            seed,
            "match started"
        );
        Ok(Self {
            session: BattleSession::new(first, second),
            config,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Fetches both combatants from `roster` and starts a match.
    ///
    /// The two lookups run concurrently; neither depends on the other
    /// finishing first.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Roster`] if either lookup fails. When both fail,
    /// the first side's error is reported. Fetched combatants are checked as
    /// in [`Match::new`].
    pub async fn start<R>(
        roster: &R,
        first_id: u32,
        opponent: Opponent,
        config: MatchConfig,
    ) -> Result<Self, MatchError>
    where
        R: RosterLookup + ?Sized,
    {
        let second = async {
            match opponent {
                Opponent::Random => roster.fetch_random_combatant().await,
                Opponent::ById(id) => roster.fetch_combatant_by_id(id).await,
            }
        };
        let (first, second) = tokio::join!(roster.fetch_combatant_by_id(first_id), second);
        Self::new(first?, second?, config)
    }

    /// Submits a human action for `side`.
    ///
    /// Returns the outcomes in order: the human's, then (against the computer,
    /// if the battle is still running) the computer's reply.
    ///
    /// # Errors
    ///
    /// - [`MatchError::ComputerControlled`] if `side` belongs to the computer
    /// - [`MatchError::Battle`] if the engine rejects the action; the session
    ///   is unchanged
    pub async fn submit(&mut self, side: Side, action_index: usize) -> Result<Vec<TurnOutcome>, MatchError> {
        if self.computer_side() == Some(side) {
            tracing::warn!(%side, "human input for computer-controlled side");
            return Err(MatchError::ComputerControlled { side });
        }

        let mut outcomes = vec![self.session.resolve_action(side, action_index)?];

        if let Some(computer) = self.computer_side() {
            if !self.session.is_over() && self.session.turn_owner() == computer {
                outcomes.push(self.play_computer_turn(computer).await?);
            }
        }

        Ok(outcomes)
    }

    async fn play_computer_turn(&mut self, side: Side) -> Result<TurnOutcome, MatchError> {
        let delay = self.config.computer_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        // Combatants always carry at least one action; an empty list would be
        // rejected by the engine as an invalid index.
        let index = choose_action(&self.session, side, &mut self.rng).unwrap_or(0);
        tracing::debug!(%side, index, "computer chose action");
        Ok(self.session.resolve_action(side, index)?)
    }

    /// Side played by the computer, if any.
    #[must_use]
    pub fn computer_side(&self) -> Option<Side> {
        match self.config.mode {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer => Some(Side::Second),
        }
    }

    /// The battle session.
    #[must_use]
    pub fn session(&self) -> &BattleSession {
        &self.session
    }

    /// Game mode.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    /// Seed driving the computer's choices.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Winning side, once decided.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.session.winner()
    }

    /// Ends the match and hands back the session.
    #[must_use]
    pub fn into_session(self) -> BattleSession {
        self.session
    }
}

/// Defense is the only attribute the damage formula divides by.
fn check_attributes(combatant: &Combatant) -> Result<(), BattleError> {
    let defense = combatant.attributes().defense;
    if defense == 0 {
        return Err(BattleError::DegenerateAttributes {
            combatant: combatant.name().to_owned(),
            defense,
        });
    }
    Ok(())
}
