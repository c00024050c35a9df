//! Listener lifetimes.
//!
//! `Duration` is the declarative form carried by a `StatusEffect`.
//! `DurationTracker` is the mutable counter a live listener owns.
//!
//! Charges and turns are orthogonal: charges only move when the listener
//! reacts, turns only move on the owner's turn end.

use serde::{Deserialize, Serialize};

use crate::core::{InstanceId, PlayerId};

use super::event::{GameEvent, LifecyclePhase};

/// Declared lifetime of a status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Duration {
    #[default]
    Permanent,
    /// Expires after reacting this many times.
    Charges(u32),
    /// Expires after this many of the owner's turn ends.
    Turns(u32),
}

/// Runtime lifetime of a listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurationTracker {
    Permanent,
    Charges { remaining: u32 },
    Turns { remaining: u32 },
    /// Lives as long as the item instance it came from.
    ItemBound { item: InstanceId, removed: bool },
}

impl DurationTracker {
    #[must_use]
    pub fn item_bound(item: InstanceId) -> Self {
        Self::ItemBound {
            item,
            removed: false,
        }
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        match *self {
            Self::Permanent => false,
            Self::Charges { remaining } | Self::Turns { remaining } => remaining == 0,
            Self::ItemBound { removed, .. } => removed,
        }
    }

    #[must_use]
    pub fn is_item_bound(&self) -> bool {
        matches!(self, Self::ItemBound { .. })
    }

    /// Observe an event, whether or not the listener reacted to it.
    pub fn update(&mut self, event: &GameEvent, owner: &PlayerId) {
        match self {
            Self::Turns { remaining } => {
                if event.is_phase_for(LifecyclePhase::OnTurnEnd, owner) {
                    *remaining = remaining.saturating_sub(1);
                }
            }
            Self::ItemBound { item, removed } => {
                if event.as_effect().is_some_and(|e| e.removes_item(*item)) {
                    *removed = true;
                }
            }
            Self::Permanent | Self::Charges { .. } => {}
        }
    }

    /// The listener reacted.
    pub fn on_handle(&mut self) {
        if let Self::Charges { remaining } = self {
            *remaining = remaining.saturating_sub(1);
        }
    }
}

impl From<Duration> for DurationTracker {
    fn from(duration: Duration) -> Self {
        match duration {
            Duration::Permanent => Self::Permanent,
            Duration::Charges(n) => Self::Charges { remaining: n },
            Duration::Turns(n) => Self::Turns { remaining: n },
        }
    }
}
