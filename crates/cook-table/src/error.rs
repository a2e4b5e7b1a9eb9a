//! Hash-table error types.

use std::error::Error;
use std::fmt;

use cook_core::CollectionError;

/// Errors from [`ProbeTable`](crate::ProbeTable) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// The reserved empty-bucket key `0` was passed as a key.
    InvalidKey,
    /// A full cycle of the probe sequence found neither the key nor an
    /// empty bucket. Unreachable while the load bound holds.
    ProbeExhausted {
        /// The key being placed.
        key: u32,
        /// Bucket count of the table that was probed.
        capacity: usize,
    },
    /// [`expand`](crate::ProbeTable::expand) was asked for a capacity
    /// that is not strictly larger than the current one.
    InvalidCapacity {
        /// The requested bucket count.
        requested: usize,
        /// The current bucket count.
        current: usize,
    },
    /// The bucket array could not be allocated.
    Allocation(CollectionError),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey => write!(f, "key 0 is reserved for empty buckets"),
            Self::ProbeExhausted { key, capacity } => {
                write!(
                    f,
                    "probe for key {key} visited all {capacity} buckets without a match or vacancy"
                )
            }
            Self::InvalidCapacity { requested, current } => {
                write!(
                    f,
                    "cannot expand to {requested} buckets: table already has {current}"
                )
            }
            Self::Allocation(reason) => write!(f, "bucket allocation failed: {reason}"),
        }
    }
}

impl Error for TableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Allocation(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<CollectionError> for TableError {
    fn from(err: CollectionError) -> Self {
        Self::Allocation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_error_exposes_source() {
        let err = TableError::from(CollectionError::OutOfMemory { requested: 128 });
        let source = err.source().unwrap();
        assert_eq!(
            source.to_string(),
            "out of memory: failed to allocate 128 bytes"
        );
    }

    #[test]
    fn invalid_key_has_no_source() {
        assert!(TableError::InvalidKey.source().is_none());
    }
}
