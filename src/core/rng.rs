//! Seedable randomness for decision strategies.
//!
//! The rules engine never draws random numbers. Randomness only enters
//! through strategies such as random play, which own a `GameRng` so a whole
//! match can be replayed from one seed.
//!
//! ```
//! use duel_engine::core::GameRng;
//!
//! let options = ["punch", "pass", "bandage"];
//! let mut match_rng = GameRng::new(7);
//! let mut first = match_rng.fork();
//! let mut second = match_rng.fork();
//!
//! // Sibling forks draw from different streams, but a replay of the same
//! // seed hands out the same forks in the same order.
//! let mut replay = GameRng::new(7);
//! assert_eq!(replay.fork().seed(), first.seed());
//! assert_ne!(first.seed(), second.seed());
//! assert!(first.choose(&options).is_some());
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Golden-ratio increment spreading fork seeds apart.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream that can hand out independent child streams.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Hand out the next child stream, one per competitor for example.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick a uniformly random element.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Capture the stream position, e.g. to resume a strategy mid-match.
    #[must_use]
    pub fn checkpoint(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            forks: self.forks,
        }
    }

    #[must_use]
    pub fn restore(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            forks: state.forks,
        }
    }
}

/// Serializable position of a `GameRng`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position.
    pub word_pos: u128,
    pub forks: u64,
}
