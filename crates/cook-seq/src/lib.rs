//! Growable contiguous sequence for the cook toolkit.
//!
//! [`GrowableSequence`] keeps its `{length, capacity}` metadata in an
//! ordinary struct next to the owned element buffer. Capacity starts at
//! zero (no allocation), jumps to 16 on the first push, and doubles from
//! there. Allocation failure surfaces as
//! [`CollectionError::OutOfMemory`](cook_core::CollectionError::OutOfMemory)
//! rather than aborting.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod sequence;

pub use sequence::GrowableSequence;
