//! Decision-making strategies.
//!
//! The board never asks how an action was chosen. A [`Strategy`] looks at a
//! board and returns one action; [`run_match`] awaits one decision at a time
//! and applies it.
//!
//! Implementations can be:
//! - Simple heuristics ([`LeftmostItem`], [`RandomStrategy`])
//! - Search over board clones ([`GreedyLookahead`])
//! - External input arriving over a channel ([`ChannelStrategy`])
//! - Fixed scripts for tests and replays ([`Scripted`])

use async_trait::async_trait;

use crate::board::Board;
use crate::core::{GameAction, PlayerId};

mod channel;
mod driver;
mod lookahead;
mod random;
mod simple;

pub use channel::ChannelStrategy;
pub use driver::{run_match, MatchOutcome, Strategies};
pub use lookahead::GreedyLookahead;
pub use random::RandomStrategy;
pub use simple::{LeftmostItem, Scripted};

/// Chooses actions for one competitor.
#[async_trait]
pub trait Strategy: Send {
    /// Pick the next action for `me` on `board`.
    ///
    /// May suspend for as long as it needs; the match waits.
    async fn decide(&mut self, board: &Board, me: &PlayerId) -> GameAction;
}
