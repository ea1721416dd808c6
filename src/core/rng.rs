//! Seeded RNG owned by agents.
//!
//! Transitions never draw random numbers; only action pickers do. An agent
//! keeps one `GameRng` and can checkpoint it mid-rollout with
//! [`GameRng::state`] to replay the same choices later.
//!
//! ```
//! use rust_fights::core::GameRng;
//!
//! let options = ["up", "left", "right"];
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.choose(&options), b.choose(&options));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// ChaCha8 stream keyed by a `u64` seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Uniform pick from `options`; `None` when it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        options.choose(&mut self.inner)
    }

    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume the stream exactly where `state` was taken.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Checkpoint of a [`GameRng`]: seed plus stream position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picks(rng: &mut GameRng, n: usize) -> Vec<u32> {
        let options: Vec<u32> = (0..64).collect();
        (0..n).map(|_| *rng.choose(&options).unwrap()).collect()
    }

    #[test]
    fn test_same_seed_same_picks() {
        assert_eq!(picks(&mut GameRng::new(9), 20), picks(&mut GameRng::new(9), 20));
        assert_ne!(picks(&mut GameRng::new(1), 20), picks(&mut GameRng::new(2), 20));
    }

    #[test]
    fn test_choose_empty() {
        let mut rng = GameRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[7]), Some(&7));
    }

    #[test]
    fn test_checkpoint_resumes_stream() {
        let mut rng = GameRng::new(5);
        let _ = picks(&mut rng, 30);

        let saved = rng.state();
        let expected = picks(&mut rng, 10);
        let mut resumed = GameRng::from_state(&saved);
        assert_eq!(picks(&mut resumed, 10), expected);
    }

    #[test]
    fn test_checkpoint_json() {
        let mut rng = GameRng::new(3);
        let _ = picks(&mut rng, 4);
        let state = rng.state();

        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<GameRngState>(&json).unwrap(), state);
    }
}
