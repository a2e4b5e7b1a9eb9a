//! Arena identity and saved cursor positions.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`ArenaId`] allocation.
static ARENA_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier for an [`Arena`](crate::Arena).
///
/// Allocated from a monotonic atomic counter, so a checkpoint taken from
/// a dropped arena never matches a new arena created at the same address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArenaId(u64);

impl ArenaId {
    /// Allocate a fresh, unique arena ID.
    pub fn next() -> Self {
        Self(ARENA_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ArenaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "arena#{}", self.0)
    }
}

/// A saved cursor position, produced by [`Arena::save`](crate::Arena::save).
///
/// Only meaningful for the arena and generation it was taken from.
/// Checkpoints are plain values: saving one reserves nothing, and dropping
/// one without rewinding is harmless.
#[must_use = "a checkpoint does nothing unless passed to Arena::rewind"]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    pub(crate) arena: ArenaId,
    pub(crate) generation: u64,
    pub(crate) offset: usize,
}

impl Checkpoint {
    /// The cursor value at the time of the save.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The arena this checkpoint was taken from.
    pub fn arena(&self) -> ArenaId {
        self.arena
    }

    /// The arena's reset generation at the time of the save.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = ArenaId::next();
        let b = ArenaId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn display_prefixes_arena() {
        let id = ArenaId::next();
        assert_eq!(id.to_string(), format!("arena#{}", id.as_u64()));
    }
}
