//! Fixed-capacity bump arena for temporary allocations.
//!
//! An [`Arena`] owns one byte buffer and a cursor (`used`). Each
//! allocation rounds the cursor up to the configured alignment and bumps
//! it past the requested size; nothing is freed individually. Memory is
//! reclaimed in bulk by rewinding to a [`Checkpoint`] or by resetting.
//!
//! # Stack discipline
//!
//! Allocations borrow the arena immutably, and [`Arena::rewind`] and
//! [`Arena::reset`] take `&mut self`, so no allocation can still be alive
//! when the cursor moves back. Checkpoints carry the arena's identity and
//! reset generation, so rewinding with a checkpoint from another arena,
//! from before a reset, or from a scope that was already unwound is
//! reported as [`ArenaError::CheckpointMisuse`] instead of corrupting state.
//!
//! ```text
//! Arena
//! ├── BumpBuffer (aligned bytes, cursor)    raw.rs, the only unsafe code
//! ├── generation (bumped by reset)
//! └── ArenaId (process-unique)
//! Checkpoint { arena, generation, offset }
//! ```
//!
//! There is no growth path: exhausting the buffer fails the allocation
//! with [`ArenaError::CapacityExceeded`] until the caller rewinds or resets.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
pub mod checkpoint;
pub mod config;
pub mod error;
mod raw;
pub mod text;

pub use arena::Arena;
pub use checkpoint::{ArenaId, Checkpoint};
pub use config::ArenaConfig;
pub use error::{ArenaError, MisuseKind};
