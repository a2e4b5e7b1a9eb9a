//! Amortized doubling growth policy.
//!
//! Every growable container in the workspace follows the same rule: the
//! first allocation holds [`MIN_CAPACITY`] elements and each subsequent
//! growth multiplies the capacity by [`GROWTH_FACTOR`]. Total copying cost
//! across N insertions from empty is therefore O(N).

use std::mem::size_of;

use crate::error::CollectionError;

/// Capacity of the first allocation, and the floor for every growth step.
pub const MIN_CAPACITY: usize = 16;

/// Multiplier applied to the capacity on each growth step.
pub const GROWTH_FACTOR: usize = 2;

/// The capacity a container of `current` capacity grows to.
///
/// Returns `max(MIN_CAPACITY, GROWTH_FACTOR * current)`, or
/// [`CollectionError::CapacityOverflow`] if the product overflows.
pub fn next_capacity(current: usize) -> Result<usize, CollectionError> {
    let doubled = current
        .checked_mul(GROWTH_FACTOR)
        .ok_or(CollectionError::CapacityOverflow)?;
    Ok(doubled.max(MIN_CAPACITY))
}

/// Smallest capacity reachable from `current` by repeated growth that
/// holds at least `required` elements.
///
/// Returns `current` unchanged if it already suffices.
pub fn capacity_for(current: usize, required: usize) -> Result<usize, CollectionError> {
    let mut capacity = current;
    while capacity < required {
        capacity = next_capacity(capacity)?;
    }
    Ok(capacity)
}

/// Size in bytes of `capacity` elements of `T`.
pub fn byte_size<T>(capacity: usize) -> Result<usize, CollectionError> {
    capacity
        .checked_mul(size_of::<T>())
        .ok_or(CollectionError::CapacityOverflow)
}

/// Reserve room for `capacity` elements in `vec` without aborting on failure.
///
/// Existing elements keep their values and order. Allocation failure is
/// reported as [`CollectionError::OutOfMemory`] carrying the byte size of
/// the whole requested buffer.
pub fn reserve_exact<T>(vec: &mut Vec<T>, capacity: usize) -> Result<(), CollectionError> {
    let additional = capacity.saturating_sub(vec.len());
    vec.try_reserve_exact(additional)
        .map_err(|_| match byte_size::<T>(capacity) {
            Ok(requested) => CollectionError::OutOfMemory { requested },
            Err(overflow) => overflow,
        })
}
