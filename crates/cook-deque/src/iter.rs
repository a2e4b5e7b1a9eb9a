//! Iterators over a [`CircularDeque`].

use std::iter::FusedIterator;

use crate::deque::CircularDeque;

/// Borrowing iterator, front to back with wraparound.
///
/// Created by [`CircularDeque::iter`].
pub struct Iter<'a, T> {
    deque: &'a CircularDeque<T>,
    /// Next logical position from the front.
    head: usize,
    /// One past the last logical position still to yield.
    tail: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(deque: &'a CircularDeque<T>) -> Self {
        Self {
            deque,
            head: 0,
            tail: deque.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.head == self.tail {
            return None;
        }
        let item = self.deque.get(self.head);
        self.head += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tail - self.head;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        self.tail -= 1;
        self.deque.get(self.tail)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            deque: self.deque,
            head: self.head,
            tail: self.tail,
        }
    }
}

/// Owning iterator that drains the deque from the front.
///
/// Created by [`CircularDeque::into_iter`](IntoIterator::into_iter).
pub struct IntoIter<T> {
    deque: CircularDeque<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(deque: CircularDeque<T>) -> Self {
        Self { deque }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
