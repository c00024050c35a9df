//! Match driver.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::Strategy;
use crate::board::{Board, BoardError};
use crate::core::PlayerId;

/// Strategies keyed by the competitor they play for.
pub type Strategies = FxHashMap<PlayerId, Box<dyn Strategy>>;

/// How a match ended, as a rating system would consume it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Winner(PlayerId),
    Draw,
}

impl MatchOutcome {
    /// Outcome of a board, treating an unfinished board as a draw.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        match board.winner() {
            Some(winner) if board.is_game_over() => MatchOutcome::Winner(winner.clone()),
            _ => MatchOutcome::Draw,
        }
    }

    #[must_use]
    pub fn is_winner(&self, player: &PlayerId) -> bool {
        matches!(self, MatchOutcome::Winner(p) if p == player)
    }

    /// 1 for a win, 0.5 for a draw, 0 for a loss.
    #[must_use]
    pub fn score_for(&self, player: &PlayerId) -> f64 {
        match self {
            MatchOutcome::Winner(p) if p == player => 1.0,
            MatchOutcome::Winner(_) => 0.0,
            MatchOutcome::Draw => 0.5,
        }
    }
}

/// Play until the game ends or `max_actions` actions were applied.
///
/// Decisions are awaited one at a time. A competitor without a strategy is
/// an error; so is a strategy choosing an illegal action.
pub async fn run_match(
    board: &mut Board,
    strategies: &mut Strategies,
    max_actions: usize,
) -> Result<MatchOutcome, BoardError> {
    for _ in 0..max_actions {
        if board.is_game_over() {
            break;
        }

        let current = board.current_player().clone();
        let strategy = strategies
            .get_mut(&current)
            .ok_or_else(|| BoardError::MissingStrategy {
                player: current.clone(),
            })?;

        let action = strategy.decide(board, &current).await;
        tracing::debug!(player = %current, ?action, "decided");
        board.apply(&action)?;
    }

    let outcome = MatchOutcome::of(board);
    tracing::info!(?outcome, actions = board.history().len(), "match finished");
    Ok(outcome)
}
