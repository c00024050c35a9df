//! Competitor identification and per-competitor records.
//!
//! ## PlayerId
//!
//! Opaque, caller-chosen competitor identifier.
//!
//! ## Loadout / Competitor
//!
//! A `Loadout` is what a competitor brings to the match: health, speed and a
//! hand of items. The engine wraps it with the competitor's id.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use crate::items::Item;

/// Competitor identifier.
///
/// ```
/// use duel_engine::core::PlayerId;
///
/// let alice = PlayerId::new("alice");
/// assert_eq!(alice.as_str(), "alice");
/// assert_eq!(format!("{}", alice), "alice");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Health, speed and held items.
///
/// `health` may drop to or below zero (that ends the game). `speed` feeds the
/// turn scheduler and may change at any time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    pub health: i64,
    pub speed: i64,
    pub items: Vector<Item>,
}

impl Loadout {
    /// Create an empty-handed loadout.
    #[must_use]
    pub fn new(health: i64, speed: i64) -> Self {
        Self {
            health,
            speed,
            items: Vector::new(),
        }
    }

    /// Add an item to the hand (builder pattern).
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push_back(item);
        self
    }

    /// Add several items to the hand (builder pattern).
    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items.extend(items);
        self
    }

    /// Find a held item by instance.
    #[must_use]
    pub fn item(&self, instance: InstanceId) -> Option<&Item> {
        self.items.iter().find(|item| item.instance_id == instance)
    }

    /// Check whether an instance is held.
    #[must_use]
    pub fn holds(&self, instance: InstanceId) -> bool {
        self.item(instance).is_some()
    }

    /// Remove a held item.
    ///
    /// Returns the removed item, or None if it was not held.
    pub fn remove_item(&mut self, instance: InstanceId) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.instance_id == instance)?;
        Some(self.items.remove(pos))
    }
}

/// A loadout bound to its competitor id (engine-internal record).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: PlayerId,
    pub loadout: Loadout,
}

impl Competitor {
    #[must_use]
    pub fn new(id: PlayerId, loadout: Loadout) -> Self {
        Self { id, loadout }
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.loadout.health <= 0
    }
}
