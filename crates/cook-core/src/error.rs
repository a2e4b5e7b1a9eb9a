//! Error types shared by the growable containers.

use std::error::Error;
use std::fmt;

/// Errors from sequence and deque operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollectionError {
    /// The backing allocation could not be grown.
    OutOfMemory {
        /// Number of bytes the failed allocation asked for.
        requested: usize,
    },
    /// The next capacity, or its size in bytes, does not fit in `usize`.
    CapacityOverflow,
    /// A pop or peek was attempted on an empty container.
    EmptyContainer {
        /// Name of the rejected operation, e.g. `"pop_front"`.
        operation: &'static str,
    },
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory { requested } => {
                write!(f, "out of memory: failed to allocate {requested} bytes")
            }
            Self::CapacityOverflow => write!(f, "capacity overflow"),
            Self::EmptyContainer { operation } => {
                write!(f, "{operation} called on an empty container")
            }
        }
    }
}

impl Error for CollectionError {}
