//! Status and passive effect declarations.

use serde::{Deserialize, Serialize};

use crate::effects::Effect;

use super::condition::Condition;
use super::duration::Duration;

/// How a listener built from this declaration reacts when its condition
/// holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Replace intercepted effects with the action, or append the action.
    #[default]
    Default,
    /// Cancel the triggering event.
    Negate,
    /// Flip the sign of the triggering effect's amount.
    Invert,
    /// Let the event through, then break the source item.
    ReactiveRemoval,
}

/// Template a listener is built from.
///
/// Used both for an item's passive effects and for the payload of an
/// `add_status_effect` effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    #[serde(rename = "type", default)]
    pub kind: StatusKind,
    pub condition: Condition,
    #[serde(default)]
    pub action: Vec<Effect>,
    /// Ignored for passives, which live as long as their item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
}

impl StatusEffect {
    #[must_use]
    pub fn new(condition: Condition, action: Vec<Effect>) -> Self {
        Self {
            kind: StatusKind::Default,
            condition,
            action,
            duration: None,
        }
    }

    /// A status that cancels whatever matches `condition`.
    #[must_use]
    pub fn negate(condition: Condition) -> Self {
        Self::new(condition, Vec::new()).with_kind(StatusKind::Negate)
    }

    /// A status that inverts whatever matches `condition`.
    #[must_use]
    pub fn invert(condition: Condition) -> Self {
        Self::new(condition, Vec::new()).with_kind(StatusKind::Invert)
    }

    #[must_use]
    pub fn with_kind(mut self, kind: StatusKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}
