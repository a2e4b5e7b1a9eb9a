//! Backing storage for the arena: a fixed, aligned byte buffer handed out
//! in disjoint forward runs.
//!
//! This is the only module in the crate that uses `unsafe`. The invariant
//! that makes it sound: every slice returned by [`BumpBuffer::bump`] lies
//! entirely at or past the cursor value observed at the call, and the call
//! moves the cursor past its end. The cursor only moves backwards through
//! [`BumpBuffer::set_cursor`], which needs `&mut self` and therefore waits
//! until every returned slice is dead.
//!
//! The buffer base is aligned to the arena alignment, so an aligned offset
//! is also an aligned address.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::cell::Cell;
use std::ptr::NonNull;

use cook_core::CollectionError;

pub(crate) struct BumpBuffer {
    base: NonNull<u8>,
    /// Layout of the live allocation; its size is at least one byte.
    layout: Layout,
    capacity: usize,
    cursor: Cell<usize>,
}

// SAFETY: the buffer exclusively owns its allocation and holds no
// thread-bound state. It stays `!Sync` through `Cell`, so shared
// allocation remains confined to one thread.
unsafe impl Send for BumpBuffer {}

impl BumpBuffer {
    /// Allocate a zero-filled buffer of `capacity` bytes whose base address
    /// is a multiple of `alignment` (a power of two).
    pub(crate) fn new(capacity: usize, alignment: usize) -> Result<Self, CollectionError> {
        let layout = Layout::from_size_align(capacity.max(1), alignment)
            .map_err(|_| CollectionError::CapacityOverflow)?;
        // SAFETY: `layout` has a non-zero size.
        let ptr = unsafe { alloc::alloc_zeroed(layout) };
        let base = NonNull::new(ptr).ok_or(CollectionError::OutOfMemory {
            requested: layout.size(),
        })?;
        Ok(Self {
            base,
            layout,
            capacity,
            cursor: Cell::new(0),
        })
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor.get()
    }

    /// Hand out `[start, start + len)` and move the cursor to its end.
    ///
    /// Returns `None`, leaving the cursor alone, if `start` is behind the
    /// cursor or the run does not fit.
    #[allow(clippy::mut_from_ref)]
    pub(crate) fn bump(&self, start: usize, len: usize) -> Option<&mut [u8]> {
        let end = start.checked_add(len)?;
        if start < self.cursor.get() || end > self.capacity {
            return None;
        }
        self.cursor.set(end);
        // SAFETY: `start..end` lies inside the allocation (checked above).
        // It begins at or after the previous cursor, and every earlier slice
        // ends at or before that cursor, so this run aliases no live slice.
        // The cursor now sits at `end`, so no later call can hand out these
        // bytes again until `set_cursor` runs, which requires `&mut self`
        // and so outlives every slice borrowed from `&self`. The bytes were
        // zeroed at allocation and are only ever written as `u8`, so they
        // are always initialized.
        unsafe {
            Some(std::slice::from_raw_parts_mut(
                self.base.as_ptr().add(start),
                len,
            ))
        }
    }

    /// Move the cursor to `offset` (`<= capacity`).
    pub(crate) fn set_cursor(&mut self, offset: usize) {
        debug_assert!(offset <= self.capacity);
        self.cursor.set(offset);
    }
}

impl Drop for BumpBuffer {
    fn drop(&mut self) {
        // SAFETY: `base` was returned by `alloc_zeroed` with `layout` and
        // is freed exactly once, here.
        unsafe { alloc::dealloc(self.base.as_ptr(), self.layout) }
    }
}
