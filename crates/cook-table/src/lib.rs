//! Open-addressing integer hash table for the cook toolkit.
//!
//! [`ProbeTable`] maps non-zero `u32` keys to `u32` values in a single
//! bucket array, resolving collisions by linear probing from
//! `key % capacity`. The key `0` marks an empty bucket and can never be
//! stored. The table rehashes into `max(16, 2 * capacity)` buckets
//! whenever an insert would push the load factor past 0.75.
//!
//! The table does no hashing of its own: keys are used directly as the
//! probe start. Callers mapping strings or byte blobs into the key space
//! can use [`fnv1a`].
//!
//! There is no removal. Without tombstones, clearing a bucket in the
//! middle of a probe chain would make later keys on that chain
//! unreachable.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hash;
mod probe;
pub mod table;

pub use error::TableError;
pub use hash::{fnv1a, fnv1a_str};
pub use table::{ProbeTable, EMPTY_KEY, MAX_LOAD_DENOMINATOR, MAX_LOAD_NUMERATOR};
