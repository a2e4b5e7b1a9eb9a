//! The growable sequence and its iterators.

use std::ops::{Index, IndexMut};
use std::slice;

use cook_core::growth;
use cook_core::CollectionError;

/// A contiguous buffer of homogeneous elements with doubling growth.
///
/// The sequence tracks its own logical `capacity` alongside the element
/// buffer. When a push would exceed it, capacity grows to
/// `max(16, 2 * capacity)` and the buffer is reallocated; existing
/// elements keep their values and order.
///
/// Any slice or reference obtained from the sequence is tied to a borrow
/// of it, so holding one across a push (which may reallocate) does not
/// compile.
///
/// ```
/// use cook_seq::GrowableSequence;
///
/// let mut seq = GrowableSequence::new();
/// assert_eq!(seq.capacity(), 0);
/// seq.push(7u32).unwrap();
/// assert_eq!(seq.capacity(), 16);
/// assert_eq!(seq.pop().unwrap(), 7);
/// ```
#[derive(Debug)]
pub struct GrowableSequence<T> {
    items: Vec<T>,
    /// Logical capacity under the growth policy.
    capacity: usize,
}

impl<T> GrowableSequence<T> {
    /// An empty sequence. Does not allocate.
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
        }
    }

    /// Append `item` at index `len()`, growing first if the sequence is full.
    ///
    /// On error the sequence is unchanged and `item` is dropped.
    pub fn push(&mut self, item: T) -> Result<(), CollectionError> {
        if self.items.len() + 1 > self.capacity {
            let new_capacity = growth::next_capacity(self.capacity)?;
            self.grow_to(new_capacity)?;
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the last element.
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the sequence is empty.
    pub fn pop(&mut self) -> Result<T, CollectionError> {
        self.items
            .pop()
            .ok_or(CollectionError::EmptyContainer { operation: "pop" })
    }

    /// Remove the element at `index` by moving the last element into its slot.
    ///
    /// O(1); does not preserve order. Returns `None` without touching the
    /// sequence if `index` is out of range.
    pub fn swap_delete(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.swap_remove(index))
        } else {
            None
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of elements the sequence can hold before its next growth.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Set the length to zero, keeping the allocation.
    ///
    /// Live elements are dropped; for `Copy` element types this is O(1).
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Drop every element and release the allocation.
    ///
    /// The sequence returns to its freshly constructed state and may be
    /// reused; the next push allocates again.
    pub fn free(&mut self) {
        self.items = Vec::new();
        self.capacity = 0;
    }

    /// Shared reference to the element at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// The first element.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// The last element.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// The elements in `[0, len)` as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// The elements in `[0, len)` as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Iterate over the elements front to back.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate mutably over the elements front to back.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Push every item of `iter` in order.
    ///
    /// Stops at the first failed push; items pushed before the failure
    /// remain in the sequence.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), CollectionError>
    where
        I: IntoIterator<Item = T>,
    {
        for item in iter {
            self.push(item)?;
        }
        Ok(())
    }

    /// Reallocate to exactly `new_capacity` under the growth policy.
    fn grow_to(&mut self, new_capacity: usize) -> Result<(), CollectionError> {
        growth::reserve_exact(&mut self.items, new_capacity)?;
        tracing::debug!(
            from = self.capacity,
            to = new_capacity,
            len = self.items.len(),
            "sequence grew"
        );
        self.capacity = new_capacity;
        Ok(())
    }
}

impl<T: Clone> GrowableSequence<T> {
    /// Append clones of every element of `other`.
    ///
    /// Grows as many doubling steps as needed up front, so the copy itself
    /// never reallocates. On error the sequence is unchanged.
    pub fn extend_from_slice(&mut self, other: &[T]) -> Result<(), CollectionError> {
        let required = self
            .items
            .len()
            .checked_add(other.len())
            .ok_or(CollectionError::CapacityOverflow)?;
        if required > self.capacity {
            let new_capacity = growth::capacity_for(self.capacity, required)?;
            self.grow_to(new_capacity)?;
        }
        self.items.extend_from_slice(other);
        Ok(())
    }
}

impl<T: Clone> GrowableSequence<T> {
    /// Clone into a sequence with the same logical capacity, reporting
    /// allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self, CollectionError> {
        let mut items = Vec::new();
        growth::reserve_exact(&mut items, self.capacity)?;
        items.extend_from_slice(&self.items);
        Ok(Self {
            items,
            capacity: self.capacity,
        })
    }
}

/// The clone reserves the full logical capacity, so it grows at the same
/// points as the original. Aborts on allocation failure like `Vec::clone`;
/// use [`GrowableSequence::try_clone`] to handle it.
impl<T: Clone> Clone for GrowableSequence<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
        }
    }
}

impl<T> Default for GrowableSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for GrowableSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for GrowableSequence<T> {}

impl<T> Index<usize> for GrowableSequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for GrowableSequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a GrowableSequence<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableSequence<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for GrowableSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
