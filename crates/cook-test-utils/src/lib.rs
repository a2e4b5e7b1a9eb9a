//! Test utilities for cook development.
//!
//! Provides [`DropCounter`], which hands out [`Tracked`] values that
//! record their own destruction. Container tests use it to check that
//! reset, free, pop, and drop release every element exactly once.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Shared tally of dropped [`Tracked`] values.
///
/// Clones share the same tally.
#[derive(Clone, Default)]
pub struct DropCounter {
    dropped: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so that dropping it bumps this counter.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        Tracked {
            value,
            dropped: Rc::clone(&self.dropped),
        }
    }

    /// How many tracked values have been dropped so far.
    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }
}

/// A value whose drop is counted by the [`DropCounter`] that created it.
pub struct Tracked<T> {
    value: T,
    dropped: Rc<Cell<usize>>,
}

impl<T> Tracked<T> {
    pub fn get(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.dropped.set(self.dropped.get() + 1);
    }
}
