//! Item definitions - static item behaviour.
//!
//! `ItemDefinition` holds what an item *does*: the effects it produces when
//! played and the passive listeners it grants while held. A held copy of an
//! item is an [`Item`](super::Item).

use serde::{Deserialize, Serialize};

use crate::effects::Effect;
use crate::triggers::StatusEffect;

/// Identifier of an item definition ("punch", "shield").
///
/// Two held copies of the same item share an `ItemId` and differ by
/// instance id.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Broad item category. Informational only; the engine never branches on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Weapon,
    Armor,
    Consumable,
    Trinket,
    #[default]
    Utility,
}

/// Static item behaviour.
///
/// ## Example
///
/// ```
/// use duel_engine::effects::Effect;
/// use duel_engine::items::{Genre, ItemDefinition};
///
/// let punch = ItemDefinition::new("punch", "Punch", Genre::Weapon)
///     .with_effect(Effect::damage(5).to_enemy());
///
/// assert_eq!(punch.when_played.len(), 1);
/// assert!(punch.passive_effects.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: ItemId,

    /// Display name.
    pub name: String,

    #[serde(default)]
    pub genre: Genre,

    /// Effects emitted, in order, when the item is played.
    #[serde(default)]
    pub when_played: Vec<Effect>,

    /// Listeners granted to the holder while the item is in hand.
    #[serde(default)]
    pub passive_effects: Vec<StatusEffect>,
}

impl ItemDefinition {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, genre: Genre) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.into(),
            genre,
            when_played: Vec::new(),
            passive_effects: Vec::new(),
        }
    }

    /// Add a when-played effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.when_played.push(effect);
        self
    }

    /// Add a passive effect (builder pattern).
    #[must_use]
    pub fn with_passive(mut self, passive: StatusEffect) -> Self {
        self.passive_effects.push(passive);
        self
    }
}
