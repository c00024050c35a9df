//! Trivial strategies.

use std::collections::VecDeque;

use async_trait::async_trait;

use super::Strategy;
use crate::board::Board;
use crate::core::{GameAction, PlayerId};

/// Plays the first held item, passes when the hand is empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeftmostItem;

#[async_trait]
impl Strategy for LeftmostItem {
    async fn decide(&mut self, board: &Board, me: &PlayerId) -> GameAction {
        board
            .competitor(me)
            .and_then(|c| c.loadout.items.front())
            .map(|item| GameAction::play_item(me.clone(), item.instance_id))
            .unwrap_or_else(|| GameAction::pass(me.clone()))
    }
}

/// Replays a fixed list of actions, then passes.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    actions: VecDeque<GameAction>,
}

impl Scripted {
    #[must_use]
    pub fn new(actions: impl IntoIterator<Item = GameAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

#[async_trait]
impl Strategy for Scripted {
    async fn decide(&mut self, _board: &Board, me: &PlayerId) -> GameAction {
        self.actions
            .pop_front()
            .unwrap_or_else(|| GameAction::pass(me.clone()))
    }
}
