//! The circular deque.

use std::fmt;

use cook_core::growth;
use cook_core::{CollectionError, SlotBuffer};

use crate::iter::{IntoIter, Iter};

/// A ring buffer supporting push and pop at both ends.
///
/// The occupied region is the circular span `front..=rear` (wrapping at
/// `capacity`). When the deque is empty both indices sit at 0.
///
/// ```
/// use cook_deque::CircularDeque;
///
/// let mut deq = CircularDeque::new();
/// deq.push_back(2).unwrap();
/// deq.push_front(1).unwrap();
/// deq.push_back(3).unwrap();
/// assert_eq!(deq.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
/// assert_eq!(deq.pop_back().unwrap(), 3);
/// ```
#[derive(Clone)]
pub struct CircularDeque<T> {
    slots: SlotBuffer<T>,
    len: usize,
    /// Physical index of the logical first element.
    front: usize,
    /// Physical index of the logical last element.
    rear: usize,
}

impl<T> CircularDeque<T> {
    /// An empty deque. Does not allocate.
    pub const fn new() -> Self {
        Self {
            slots: SlotBuffer::new(),
            len: 0,
            front: 0,
            rear: 0,
        }
    }

    /// Append `item` after the current rear, growing first if full.
    pub fn push_back(&mut self, item: T) -> Result<(), CollectionError> {
        if self.len + 1 > self.capacity() {
            self.grow()?;
        }
        if self.len > 0 {
            self.rear = (self.rear + 1) % self.capacity();
        }
        self.slots.put(self.rear, item);
        self.len += 1;
        Ok(())
    }

    /// Prepend `item` before the current front, growing first if full.
    pub fn push_front(&mut self, item: T) -> Result<(), CollectionError> {
        if self.len + 1 > self.capacity() {
            self.grow()?;
        }
        if self.len > 0 {
            self.front = (self.front + self.capacity() - 1) % self.capacity();
        }
        self.slots.put(self.front, item);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front element.
    ///
    /// On an empty deque returns [`CollectionError::EmptyContainer`] and
    /// leaves the indices untouched.
    pub fn pop_front(&mut self) -> Result<T, CollectionError> {
        const OP: &str = "pop_front";
        if self.len == 0 {
            return Err(CollectionError::EmptyContainer { operation: OP });
        }
        let item = self.slots.take(self.front);
        self.len -= 1;
        if self.len == 0 {
            self.front = 0;
            self.rear = 0;
        } else {
            self.front = (self.front + 1) % self.capacity();
        }
        item.ok_or(CollectionError::EmptyContainer { operation: OP })
    }

    /// Remove and return the rear element.
    ///
    /// On an empty deque returns [`CollectionError::EmptyContainer`] and
    /// leaves the indices untouched.
    pub fn pop_back(&mut self) -> Result<T, CollectionError> {
        const OP: &str = "pop_back";
        if self.len == 0 {
            return Err(CollectionError::EmptyContainer { operation: OP });
        }
        let item = self.slots.take(self.rear);
        self.len -= 1;
        if self.len == 0 {
            self.front = 0;
            self.rear = 0;
        } else {
            self.rear = (self.rear + self.capacity() - 1) % self.capacity();
        }
        item.ok_or(CollectionError::EmptyContainer { operation: OP })
    }

    /// The front element.
    pub fn peek_front(&self) -> Result<&T, CollectionError> {
        self.occupied(self.front, "peek_front")
    }

    /// The rear element.
    pub fn peek_back(&self) -> Result<&T, CollectionError> {
        self.occupied(self.rear, "peek_back")
    }

    /// Mutable access to the front element.
    pub fn peek_front_mut(&mut self) -> Result<&mut T, CollectionError> {
        let index = self.front;
        self.occupied_mut(index, "peek_front_mut")
    }

    /// Mutable access to the rear element.
    pub fn peek_back_mut(&mut self) -> Result<&mut T, CollectionError> {
        let index = self.rear;
        self.occupied_mut(index, "peek_back_mut")
    }

    /// The element at logical position `index` (0 is the front).
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots.get(self.physical(index))
    }

    /// Mutable access to the element at logical position `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let physical = self.physical(index);
        self.slots.get_mut(physical)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of slots in the ring.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Whether the deque holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Physical index of the front element (0 when empty).
    pub fn front_index(&self) -> usize {
        self.front
    }

    /// Physical index of the rear element (0 when empty).
    pub fn rear_index(&self) -> usize {
        self.rear
    }

    /// Drop every element and reset both indices to 0, keeping capacity.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.len = 0;
        self.front = 0;
        self.rear = 0;
    }

    /// Drop every element and release the ring allocation.
    ///
    /// The deque returns to its freshly constructed state and may be reused.
    pub fn free(&mut self) {
        self.slots = SlotBuffer::new();
        self.len = 0;
        self.front = 0;
        self.rear = 0;
    }

    /// Iterate front to back, wrapping around the end of the ring.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Push every item of `iter` at the back, in order.
    ///
    /// Stops at the first failed push.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), CollectionError>
    where
        I: IntoIterator<Item = T>,
    {
        for item in iter {
            self.push_back(item)?;
        }
        Ok(())
    }

    /// Map a logical position to its physical slot.
    fn physical(&self, index: usize) -> usize {
        (self.front + index) % self.capacity()
    }

    fn occupied(&self, index: usize, operation: &'static str) -> Result<&T, CollectionError> {
        if self.len == 0 {
            return Err(CollectionError::EmptyContainer { operation });
        }
        self.slots
            .get(index)
            .ok_or(CollectionError::EmptyContainer { operation })
    }

    fn occupied_mut(
        &mut self,
        index: usize,
        operation: &'static str,
    ) -> Result<&mut T, CollectionError> {
        if self.len == 0 {
            return Err(CollectionError::EmptyContainer { operation });
        }
        self.slots
            .get_mut(index)
            .ok_or(CollectionError::EmptyContainer { operation })
    }

    /// Reallocate into a buffer of `max(16, 2 * capacity)` slots and
    /// linearize the occupied span to start at index 0.
    ///
    /// A contiguous span (`front <= rear`) moves as one run. A wrapped span
    /// moves as two: `[front, capacity)` first, then `[0, rear]` directly
    /// after it. On error the deque is unchanged.
    fn grow(&mut self) -> Result<(), CollectionError> {
        let old_capacity = self.capacity();
        let new_capacity = growth::next_capacity(old_capacity)?;
        let mut fresh = SlotBuffer::with_capacity(new_capacity)?;

        if self.len > 0 {
            if self.front <= self.rear {
                fresh.move_run(0, &mut self.slots, self.front, self.len);
            } else {
                let head_run = old_capacity - self.front;
                fresh.move_run(0, &mut self.slots, self.front, head_run);
                fresh.move_run(head_run, &mut self.slots, 0, self.rear + 1);
            }
            self.front = 0;
            self.rear = self.len - 1;
        } else {
            self.front = 0;
            self.rear = 0;
        }
        self.slots = fresh;

        tracing::debug!(
            from = old_capacity,
            to = new_capacity,
            len = self.len,
            "deque grew"
        );
        Ok(())
    }
}

impl<T> Default for CircularDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for CircularDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularDeque<T> {}

impl<'a, T> IntoIterator for &'a CircularDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for CircularDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cook_test_utils::DropCounter;

    fn contents<T: Clone>(deq: &CircularDeque<T>) -> Vec<T> {
        deq.iter().cloned().collect()
    }

    #[test]
    fn new_deque_is_empty_without_allocation() {
        let deq: CircularDeque<u8> = CircularDeque::new();
        assert!(deq.is_empty());
        assert_eq!(deq.capacity(), 0);
        assert_eq!((deq.front_index(), deq.rear_index()), (0, 0));
    }

    #[test]
    fn first_push_back_writes_at_zero() {
        let mut deq = CircularDeque::new();
        deq.push_back(5).unwrap();
        assert_eq!(deq.capacity(), 16);
        assert_eq!((deq.front_index(), deq.rear_index()), (0, 0));
        assert_eq!(deq.peek_front(), Ok(&5));
        assert_eq!(deq.peek_back(), Ok(&5));
    }

    #[test]
    fn push_front_on_nonempty_wraps_to_last_slot() {
        let mut deq = CircularDeque::new();
        deq.push_back(1).unwrap();
        deq.push_front(0).unwrap();
        assert_eq!(deq.front_index(), 15);
        assert_eq!(deq.rear_index(), 0);
        assert_eq!(contents(&deq), [0, 1]);
    }

    #[test]
    fn back_then_front_is_fifo() {
        let mut deq = CircularDeque::new();
        deq.try_extend(['a', 'b', 'c']).unwrap();
        assert_eq!(deq.pop_front(), Ok('a'));
        assert_eq!(deq.pop_front(), Ok('b'));
        assert_eq!(deq.pop_front(), Ok('c'));
    }

    #[test]
    fn front_then_back_reverses() {
        let mut deq = CircularDeque::new();
        for c in ['a', 'b', 'c'] {
            deq.push_front(c).unwrap();
        }
        assert_eq!(deq.pop_back(), Ok('a'));
        assert_eq!(deq.pop_back(), Ok('b'));
        assert_eq!(deq.pop_back(), Ok('c'));
    }

    #[test]
    fn popping_last_element_resets_indices() {
        let mut deq = CircularDeque::new();
        deq.push_back(1).unwrap();
        deq.push_front(0).unwrap();
        deq.pop_back().unwrap();
        assert_eq!(deq.front_index(), 15);
        deq.pop_front().unwrap();
        assert_eq!((deq.front_index(), deq.rear_index()), (0, 0));
    }

    #[test]
    fn pop_on_empty_leaves_indices_alone() {
        let mut deq: CircularDeque<u32> = CircularDeque::new();
        assert_eq!(
            deq.pop_front(),
            Err(CollectionError::EmptyContainer {
                operation: "pop_front"
            })
        );
        assert_eq!(
            deq.pop_back(),
            Err(CollectionError::EmptyContainer {
                operation: "pop_back"
            })
        );
        assert_eq!(deq.len(), 0);
        assert_eq!((deq.front_index(), deq.rear_index()), (0, 0));
    }

    #[test]
    fn peek_on_empty_is_an_error() {
        let mut deq: CircularDeque<u32> = CircularDeque::new();
        assert!(deq.peek_front().is_err());
        assert!(deq.peek_back().is_err());
        assert!(deq.peek_front_mut().is_err());
        deq.push_back(1).unwrap();
        deq.pop_back().unwrap();
        assert!(deq.peek_back().is_err());
    }

    #[test]
    fn peek_mut_writes_through() {
        let mut deq = CircularDeque::new();
        deq.try_extend([1, 2, 3]).unwrap();
        *deq.peek_front_mut().unwrap() = 10;
        *deq.peek_back_mut().unwrap() = 30;
        assert_eq!(contents(&deq), [10, 2, 30]);
    }

    #[test]
    fn contiguous_growth_keeps_order() {
        let mut deq = CircularDeque::new();
        deq.try_extend(0..16).unwrap();
        assert_eq!(deq.capacity(), 16);
        deq.push_back(16).unwrap();
        assert_eq!(deq.capacity(), 32);
        assert_eq!((deq.front_index(), deq.rear_index()), (0, 16));
        assert_eq!(contents(&deq), (0..17).collect::<Vec<_>>());
    }

    #[test]
    fn wrapped_growth_linearizes_in_two_runs() {
        let mut deq = CircularDeque::new();
        // Fill so that the span wraps: front ends up at 10.
        deq.try_extend(0..16).unwrap();
        for _ in 0..10 {
            deq.pop_front().unwrap();
        }
        deq.try_extend(16..26).unwrap();
        assert_eq!(deq.len(), 16);
        assert_eq!((deq.front_index(), deq.rear_index()), (10, 9));

        deq.push_back(26).unwrap();
        assert_eq!(deq.capacity(), 32);
        assert_eq!((deq.front_index(), deq.rear_index()), (0, 16));
        assert_eq!(contents(&deq), (10..27).collect::<Vec<_>>());
    }

    #[test]
    fn growth_from_push_front_keeps_order() {
        let mut deq = CircularDeque::new();
        for i in 0..16 {
            deq.push_front(i).unwrap();
        }
        deq.push_front(16).unwrap();
        assert_eq!(deq.capacity(), 32);
        assert_eq!(deq.front_index(), 31);
        assert_eq!(contents(&deq), (0..17).rev().collect::<Vec<_>>());
    }

    #[test]
    fn get_follows_logical_positions() {
        let mut deq = CircularDeque::new();
        deq.push_back(2).unwrap();
        deq.push_front(1).unwrap();
        deq.push_front(0).unwrap();
        assert_eq!(deq.get(0), Some(&0));
        assert_eq!(deq.get(2), Some(&2));
        assert_eq!(deq.get(3), None);
        *deq.get_mut(1).unwrap() = 7;
        assert_eq!(contents(&deq), [0, 7, 2]);
    }

    #[test]
    fn reset_drops_and_keeps_capacity() {
        let counter = DropCounter::new();
        let mut deq = CircularDeque::new();
        for _ in 0..20 {
            deq.push_front(counter.track(())).unwrap();
        }
        deq.reset();
        assert_eq!(counter.dropped(), 20);
        assert!(deq.is_empty());
        assert_eq!(deq.capacity(), 32);
        assert_eq!((deq.front_index(), deq.rear_index()), (0, 0));
    }

    #[test]
    fn free_releases_and_allows_reuse() {
        let mut deq = CircularDeque::new();
        deq.try_extend(0..40).unwrap();
        deq.free();
        assert_eq!(deq.capacity(), 0);
        deq.push_front(1).unwrap();
        assert_eq!(deq.capacity(), 16);
    }

    #[test]
    fn growth_does_not_drop_moved_elements() {
        let counter = DropCounter::new();
        let mut deq = CircularDeque::new();
        for i in 0..40 {
            if i % 2 == 0 {
                deq.push_back(counter.track(i)).unwrap();
            } else {
                deq.push_front(counter.track(i)).unwrap();
            }
        }
        assert_eq!(counter.dropped(), 0);
        drop(deq);
        assert_eq!(counter.dropped(), 40);
    }

    #[test]
    fn debug_lists_logical_order() {
        let mut deq = CircularDeque::new();
        deq.push_back(2).unwrap();
        deq.push_front(1).unwrap();
        assert_eq!(format!("{deq:?}"), "[1, 2]");
    }

    #[test]
    fn equality_ignores_physical_layout() {
        let mut a = CircularDeque::new();
        a.try_extend([1, 2, 3]).unwrap();
        let mut b = CircularDeque::new();
        b.push_back(2).unwrap();
        b.push_back(3).unwrap();
        b.push_front(1).unwrap();
        assert_ne!(a.front_index(), b.front_index());
        assert_eq!(a, b);
    }
}
