//! Cook: small in-memory building blocks for programs that manage their
//! own buffers.
//!
//! This is the facade crate that re-exports the four components. Adding
//! `cook` as a single dependency is enough for most users.
//!
//! # Quick start
//!
//! ```rust
//! use cook::prelude::*;
//!
//! // Build a line of text in a reusable sequence.
//! let mut line: GrowableSequence<u8> = GrowableSequence::new();
//! line.extend_from_slice(b"deque.c").unwrap();
//!
//! // Index it by a hash of its contents.
//! let mut index = ProbeTable::new();
//! index.set(fnv1a(line.as_slice()), 1).unwrap();
//! assert_eq!(index.get(fnv1a(b"deque.c")).unwrap(), Some(1));
//!
//! // Queue work at both ends.
//! let mut work = CircularDeque::new();
//! work.push_back("compile").unwrap();
//! work.push_front("configure").unwrap();
//! assert_eq!(work.pop_front().unwrap(), "configure");
//!
//! // Format a temporary label without touching the heap.
//! let mut arena = Arena::new(ArenaConfig::default()).unwrap();
//! let len = arena.scope(|arena| {
//!     let label = arena.alloc_fmt(format_args!("{}:{}", "deque.c", 42)).unwrap();
//!     line.extend_from_slice(label.as_bytes()).unwrap();
//!     label.len()
//! });
//! assert_eq!(len, 10);
//! assert_eq!(arena.used(), 0);
//! assert_eq!(line.as_slice(), b"deque.cdeque.c:42");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`common`] | `cook-core` | `CollectionError`, growth policy, slot storage |
//! | [`seq`] | `cook-seq` | `GrowableSequence` |
//! | [`deque`] | `cook-deque` | `CircularDeque` |
//! | [`table`] | `cook-table` | `ProbeTable`, FNV-1a hashing |
//! | [`arena`] | `cook-arena` | `Arena`, checkpoints, text helpers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Shared error type and growth policy (`cook-core`).
pub use cook_core as common;

/// Growable contiguous sequence (`cook-seq`).
pub use cook_seq as seq;

/// Circular double-ended queue (`cook-deque`).
pub use cook_deque as deque;

/// Open-addressing `u32 -> u32` table (`cook-table`).
///
/// Keys must be non-zero; [`table::fnv1a`] maps byte strings to keys.
pub use cook_table as table;

/// Fixed-capacity bump arena (`cook-arena`).
pub use cook_arena as arena;

/// Common imports.
///
/// ```rust
/// use cook::prelude::*;
/// ```
pub mod prelude {
    // Containers
    pub use cook_deque::CircularDeque;
    pub use cook_seq::GrowableSequence;
    pub use cook_table::{fnv1a, fnv1a_str, ProbeTable};

    // Arena
    pub use cook_arena::{arena_format, Arena, ArenaConfig, Checkpoint};

    // Errors
    pub use cook_arena::ArenaError;
    pub use cook_core::CollectionError;
    pub use cook_table::TableError;
}
