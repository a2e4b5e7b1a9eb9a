//! Shared building blocks for the cook containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! pieces every growable container needs:
//!
//! - [`CollectionError`]: the failure taxonomy for sequence and deque operations.
//! - [`growth`]: the amortized doubling policy (floor 16, factor 2) and
//!   fallible reservation helpers that surface allocation failure instead
//!   of aborting.
//! - [`SlotBuffer`]: fixed-capacity owned slot storage with bounded run
//!   moves, used to linearize ring buffers on growth.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod growth;
pub mod slots;

pub use error::CollectionError;
pub use growth::{next_capacity, MIN_CAPACITY};
pub use slots::SlotBuffer;
