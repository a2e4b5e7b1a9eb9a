//! Fixed-capacity owned slot storage.
//!
//! A [`SlotBuffer`] is a contiguous run of `capacity` slots, each either
//! vacant or holding one `T`. It never grows in place: containers that
//! need more room allocate a fresh buffer and move runs of slots across
//! with [`SlotBuffer::move_run`]. Two bounded run moves are enough to
//! linearize a wrapped ring into a contiguous prefix.

use crate::error::CollectionError;
use crate::growth;

/// Contiguous, fixed-capacity storage of optionally-occupied slots.
///
/// Vacant slots hold no value, so there is no uninitialized memory to
/// track. Dropping the buffer drops every occupied slot.
#[derive(Clone, Debug)]
pub struct SlotBuffer<T> {
    /// Always exactly `capacity` long.
    slots: Vec<Option<T>>,
}

impl<T> SlotBuffer<T> {
    /// An empty buffer with zero capacity. Does not allocate.
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Allocate a buffer of `capacity` vacant slots.
    ///
    /// Returns [`CollectionError::OutOfMemory`] if the allocation fails.
    pub fn with_capacity(capacity: usize) -> Result<Self, CollectionError> {
        let mut slots = Vec::new();
        growth::reserve_exact(&mut slots, capacity)?;
        slots.resize_with(capacity, || None);
        Ok(Self { slots })
    }

    /// Number of slots, occupied or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Shared access to the value in slot `index`, if occupied.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    /// Mutable access to the value in slot `index`, if occupied.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Store `value` in slot `index`, returning whatever it displaced.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn put(&mut self, index: usize, value: T) -> Option<T> {
        self.slots[index].replace(value)
    }

    /// Remove and return the value in slot `index`, leaving it vacant.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots[index].take()
    }

    /// Vacate every slot, dropping the values. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Move `len` slots starting at `src` in `source` into this buffer
    /// starting at `dst`.
    ///
    /// The source run is left vacant. Values already in the destination
    /// run are dropped.
    ///
    /// # Panics
    ///
    /// Panics if either run extends past its buffer's capacity.
    pub fn move_run(&mut self, dst: usize, source: &mut SlotBuffer<T>, src: usize, len: usize) {
        let from = &mut source.slots[src..src + len];
        let to = &mut self.slots[dst..dst + len];
        for (target, slot) in to.iter_mut().zip(from.iter_mut()) {
            *target = slot.take();
        }
    }
}

impl<T> Default for SlotBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}
