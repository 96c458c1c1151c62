//! Card instance identification.
//!
//! Every card created during a game gets a unique `EntityId`. Two cards
//! with the same name (e.g. two Pikachu) are still distinct instances,
//! which lets callers verify that a card lives in exactly one place:
//! the deck, a hand, an active slot, or the discard pile.
//!
//! ```
//! use pokemon_tcg::core::{EntityAllocator, EntityId};
//!
//! let mut ids = EntityAllocator::new();
//! assert_eq!(ids.alloc(), EntityId(0));
//! assert_eq!(ids.alloc(), EntityId(1));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

/// Hands out sequential entity IDs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityAllocator {
    next: u32,
}

impl EntityAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start allocating after an already-used range.
    #[must_use]
    pub fn starting_at(next: u32) -> Self {
        Self { next }
    }

    /// Allocate a new entity ID.
    pub fn alloc(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// The ID the next `alloc` call will return.
    #[must_use]
    pub fn peek(&self) -> EntityId {
        EntityId(self.next)
    }
}
