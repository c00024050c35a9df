//! Board actions.
//!
//! A `GameAction` is the only input a caller (or a strategy) hands to the
//! board: play a held item, pass, or surrender.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use super::player::PlayerId;

/// What kind of action a competitor takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    PlayItem,
    Pass,
    Surrender,
}

/// A complete board action.
///
/// ## Example
///
/// ```
/// use duel_engine::core::{ActionKind, GameAction, InstanceId, PlayerId};
///
/// let play = GameAction::play_item(PlayerId::new("alice"), InstanceId(3));
/// assert_eq!(play.kind, ActionKind::PlayItem);
/// assert_eq!(play.item, Some(InstanceId(3)));
///
/// let pass = GameAction::pass(PlayerId::new("bob"));
/// assert!(pass.item.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameAction {
    pub kind: ActionKind,
    pub player_id: PlayerId,
    /// Held instance for `PlayItem`; `None` otherwise.
    pub item: Option<InstanceId>,
}

impl GameAction {
    #[must_use]
    pub fn play_item(player_id: PlayerId, item: InstanceId) -> Self {
        Self {
            kind: ActionKind::PlayItem,
            player_id,
            item: Some(item),
        }
    }

    #[must_use]
    pub fn pass(player_id: PlayerId) -> Self {
        Self {
            kind: ActionKind::Pass,
            player_id,
            item: None,
        }
    }

    #[must_use]
    pub fn surrender(player_id: PlayerId) -> Self {
        Self {
            kind: ActionKind::Surrender,
            player_id,
            item: None,
        }
    }
}
