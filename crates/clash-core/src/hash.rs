//! State hashing for determinism verification.
//!
//! Two sessions that started from the same combatants and received the same
//! sequence of actions must hash identically. Replays and the determinism
//! tests compare these hashes instead of whole sessions.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::session::{BattleSession, Side};

/// Compute a deterministic hash of session state.
///
/// This hash includes:
/// - Both fighters (combatant snapshot and current health)
/// - Turn owner and winner
/// - The full event log, in order
#[must_use]
pub fn hash_session(session: &BattleSession) -> u64 {
    let mut hasher = DefaultHasher::new();

    for side in Side::BOTH {
        side.hash(&mut hasher);
        session.fighter(side).hash(&mut hasher);
    }

    session.turn_owner().hash(&mut hasher);
    session.winner().hash(&mut hasher);

    // Length prefix keeps ["ab", "c"] and ["a", "bc"] apart.
    session.log().len().hash(&mut hasher);
    for entry in session.log() {
        entry.hash(&mut hasher);
    }

    hasher.finish()
}
