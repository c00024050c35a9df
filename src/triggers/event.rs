//! Game events.
//!
//! Everything the engine processes is a `GameEvent`. Listeners observe
//! events in precedence order and may pass them on, transform them, cancel
//! them, or add follow-up events.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::effects::{Effect, EffectKind};
use crate::items::Item;

/// Turn and match lifecycle markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecyclePhase {
    GameStart,
    OnTurnStart,
    OnTurnEnd,
    GameOver,
}

/// An event flowing through the listener chain.
///
/// ## Variants
///
/// - `OnPlay`: a competitor played a held item
/// - `Effect`: an effect owned by a competitor, on its way to a processor
/// - `Lifecycle`: a turn or match boundary for a competitor
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    OnPlay {
        player_id: PlayerId,
        item: Item,
    },
    Effect {
        effect: Effect,
        player_id: PlayerId,
    },
    Lifecycle {
        player_id: PlayerId,
        phase: LifecyclePhase,
    },
}

impl GameEvent {
    pub fn on_play(player_id: PlayerId, item: Item) -> Self {
        Self::OnPlay { player_id, item }
    }

    pub fn effect(effect: Effect, player_id: PlayerId) -> Self {
        Self::Effect { effect, player_id }
    }

    pub fn lifecycle(player_id: PlayerId, phase: LifecyclePhase) -> Self {
        Self::Lifecycle { player_id, phase }
    }

    /// The competitor that owns this event.
    #[must_use]
    pub fn player_id(&self) -> &PlayerId {
        match self {
            GameEvent::OnPlay { player_id, .. }
            | GameEvent::Effect { player_id, .. }
            | GameEvent::Lifecycle { player_id, .. } => player_id,
        }
    }

    /// The carried effect, for effect events.
    #[must_use]
    pub fn as_effect(&self) -> Option<&Effect> {
        match self {
            GameEvent::Effect { effect, .. } => Some(effect),
            _ => None,
        }
    }

    /// Kind of the carried effect, for effect events.
    #[must_use]
    pub fn effect_kind(&self) -> Option<EffectKind> {
        self.as_effect().map(|e| e.kind)
    }

    /// Is this the given lifecycle phase for the given competitor?
    #[must_use]
    pub fn is_phase_for(&self, phase: LifecyclePhase, player: &PlayerId) -> bool {
        matches!(
            self,
            GameEvent::Lifecycle { player_id, phase: p } if *p == phase && player_id == player
        )
    }
}
