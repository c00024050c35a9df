//! Uniformly random play.

use async_trait::async_trait;

use super::Strategy;
use crate::board::Board;
use crate::core::{ActionKind, GameAction, GameRng, GameRngState, PlayerId};

/// Picks uniformly among legal actions, never surrendering.
///
/// Seeded, so a match between random strategies is reproducible.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Play from a stream forked off a match-wide RNG.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Where the stream stands, so a saved match can continue identically.
    #[must_use]
    pub fn checkpoint(&self) -> GameRngState {
        self.rng.checkpoint()
    }

    #[must_use]
    pub fn resume(state: &GameRngState) -> Self {
        Self::from_rng(GameRng::restore(state))
    }
}

#[async_trait]
impl Strategy for RandomStrategy {
    async fn decide(&mut self, board: &Board, me: &PlayerId) -> GameAction {
        let actions: Vec<GameAction> = board
            .legal_actions(me)
            .into_iter()
            .filter(|a| a.kind != ActionKind::Surrender)
            .collect();

        self.rng
            .choose(&actions)
            .cloned()
            .unwrap_or_else(|| GameAction::pass(me.clone()))
    }
}
