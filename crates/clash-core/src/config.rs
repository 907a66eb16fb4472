//! Match and roster configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay before the computer side acts.
pub const DEFAULT_COMPUTER_DELAY_MS: u64 = 1000;

/// Number of catalog entries the random pick draws from.
pub const DEFAULT_ROSTER_SIZE: u32 = 151;

/// Who controls the second side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Two humans take turns.
    HumanVsHuman,
    /// The second side is computer-controlled.
    #[default]
    HumanVsComputer,
}

/// Configuration for a [`crate::controller::Match`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Who controls the second side.
    pub mode: GameMode,
    /// Pause before the computer's move, in milliseconds. Zero disables it.
    pub computer_delay_ms: u64,
    /// Seed for the computer's choices. A random seed is drawn (and recorded)
    /// when absent.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            computer_delay_ms: DEFAULT_COMPUTER_DELAY_MS,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Config without pacing delay, for tests and headless runs.
    #[must_use]
    pub fn headless(mode: GameMode) -> Self {
        Self {
            mode,
            computer_delay_ms: 0,
            ..Default::default()
        }
    }

    /// Sets the seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The computer delay as a [`Duration`].
    #[must_use]
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

/// Configuration for an [`crate::roster::InMemoryRoster`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Random picks draw ids from `1..=roster_size`.
    pub roster_size: u32,
    /// Seed for random picks. A random seed is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            roster_size: DEFAULT_ROSTER_SIZE,
            seed: None,
        }
    }
}
