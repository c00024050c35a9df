//! One-ply lookahead over board clones.

use async_trait::async_trait;

use super::Strategy;
use crate::board::Board;
use crate::core::{ActionKind, GameAction, PlayerId};

/// Tries every legal action on a clone and keeps the one that leaves the
/// best health difference. A winning action beats everything; ties go to
/// the earlier action.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyLookahead;

impl GreedyLookahead {
    /// Score of `board` for `me` after an action.
    fn score(board: &Board, me: &PlayerId) -> i64 {
        if board.is_game_over() {
            return match board.winner() {
                Some(winner) if winner == me => i64::MAX,
                Some(_) => i64::MIN,
                None => 0,
            };
        }
        match board.game_state_for(me) {
            Ok(state) => state.player.loadout.health.saturating_sub(state.opponent.loadout.health),
            Err(_) => i64::MIN,
        }
    }
}

#[async_trait]
impl Strategy for GreedyLookahead {
    async fn decide(&mut self, board: &Board, me: &PlayerId) -> GameAction {
        let mut best: Option<(i64, GameAction)> = None;

        for action in board.legal_actions(me) {
            if action.kind == ActionKind::Surrender {
                continue;
            }

            let mut trial = board.clone();
            if trial.apply(&action).is_err() {
                continue;
            }

            let score = Self::score(&trial, me);
            tracing::trace!(?action, score, "lookahead");
            if best.as_ref().map_or(true, |(s, _)| score > *s) {
                best = Some((score, action));
            }
        }

        best.map(|(_, action)| action)
            .unwrap_or_else(|| GameAction::pass(me.clone()))
    }
}
