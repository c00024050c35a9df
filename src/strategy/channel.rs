//! Actions supplied from outside, e.g. a human at a terminal.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::Strategy;
use crate::board::Board;
use crate::core::{GameAction, PlayerId};

/// Waits for the next action on a channel.
///
/// The sender side belongs to whatever collects input. If it hangs up, the
/// competitor surrenders.
#[derive(Debug)]
pub struct ChannelStrategy {
    actions: mpsc::Receiver<GameAction>,
}

impl ChannelStrategy {
    #[must_use]
    pub fn new(actions: mpsc::Receiver<GameAction>) -> Self {
        Self { actions }
    }

    /// A strategy plus the sender that feeds it.
    #[must_use]
    pub fn channel(buffer: usize) -> (mpsc::Sender<GameAction>, Self) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (tx, Self::new(rx))
    }
}

#[async_trait]
impl Strategy for ChannelStrategy {
    async fn decide(&mut self, _board: &Board, me: &PlayerId) -> GameAction {
        match self.actions.recv().await {
            Some(action) => action,
            None => {
                tracing::warn!(%me, "action channel closed, surrendering");
                GameAction::surrender(me.clone())
            }
        }
    }
}
