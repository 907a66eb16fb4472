//! Action selection for the computer-controlled side.
//!
//! The computer picks uniformly at random from its action list. Selection is a
//! pure function of the list length and the random source; it keeps no state
//! between turns, so the controller can call it whenever the computer side
//! owns the turn.

use rand::Rng;

use crate::session::{BattleSession, Side};

/// Picks an action index uniformly from `[0, len)`.
///
/// Returns `None` when `len` is zero.
///
/// # Example
///
/// ```
/// use clash_core::policy::random_action_index;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let index = random_action_index(4, &mut rng).unwrap();
/// assert!(index < 4);
/// assert_eq!(random_action_index(0, &mut rng), None);
/// ```
#[must_use]
pub fn random_action_index<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rng.gen_range(0..len))
}

/// Picks an action for `side` from its fighter's action list.
#[must_use]
pub fn choose_action<R: Rng + ?Sized>(session: &BattleSession, side: Side, rng: &mut R) -> Option<usize> {
    let actions = session.fighter(side).combatant().actions().len();
    random_action_index(actions, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn single_action_always_chosen() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..32 {
            assert_eq!(random_action_index(1, &mut rng), Some(0));
        }
    }

    #[test]
    fn every_index_is_reachable() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut seen = [false; 4];
        for _ in 0..256 {
            seen[random_action_index(4, &mut rng).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s), "all four indices should appear: {seen:?}");
    }

    #[test]
    fn same_seed_same_choices() {
        let mut a = ChaCha8Rng::seed_from_u64(5);
        let mut b = ChaCha8Rng::seed_from_u64(5);
        let xs: Vec<_> = (0..16).map(|_| random_action_index(4, &mut a)).collect();
        let ys: Vec<_> = (0..16).map(|_| random_action_index(4, &mut b)).collect();
        assert_eq!(xs, ys);
    }
}
