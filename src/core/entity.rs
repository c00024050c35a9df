//! Instance identification.
//!
//! Every held item copy and every runtime listener carries an `InstanceId`.
//!
//! ## Allocation
//!
//! Ids come from a single `InstanceAllocator` per board, so they are unique
//! across both competitors for the life of the board. Listeners derived from
//! an item reuse that item's id; status effects get a fresh one.
//!
//! ```
//! use duel_engine::core::{InstanceAllocator, InstanceId};
//!
//! let mut alloc = InstanceAllocator::new();
//! assert_eq!(alloc.alloc(), InstanceId(0));
//! assert_eq!(alloc.alloc(), InstanceId(1));
//! ```

use serde::{Deserialize, Serialize};

/// Identifier for a held item copy or a listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic allocator for `InstanceId`s.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceAllocator {
    next: u32,
}

impl InstanceAllocator {
    /// Create an allocator starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator whose first id is `first`.
    #[must_use]
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Create an allocator that never hands out any of `taken`.
    pub fn after<I>(taken: I) -> Self
    where
        I: IntoIterator<Item = InstanceId>,
    {
        let next = taken.into_iter().map(|id| id.0 + 1).max().unwrap_or(0);
        Self { next }
    }

    /// Allocate the next id.
    pub fn alloc(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }

    /// Peek at the id `alloc` would return next.
    #[must_use]
    pub fn peek(&self) -> InstanceId {
        InstanceId(self.next)
    }
}
