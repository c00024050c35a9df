//! Held item copies.

use serde::{Deserialize, Serialize};

use super::definition::{Genre, ItemId};
use crate::core::InstanceId;

/// One copy of an item in a competitor's hand.
///
/// Immutable once created. `instance_id` is the handle listeners attach to,
/// so two copies of the same item never share one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub instance_id: InstanceId,
    pub genre: Genre,
}

impl Item {
    #[must_use]
    pub fn new(id: ItemId, instance_id: InstanceId, genre: Genre) -> Self {
        Self {
            id,
            instance_id,
            genre,
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.id, self.instance_id)
    }
}
