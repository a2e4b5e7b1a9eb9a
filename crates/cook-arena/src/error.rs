//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use cook_core::CollectionError;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The aligned request does not fit in the remaining buffer.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Bytes between the cursor and the end of the buffer.
        remaining: usize,
        /// Total buffer size in bytes.
        capacity: usize,
    },
    /// A checkpoint was rejected by [`Arena::rewind`](crate::Arena::rewind).
    CheckpointMisuse {
        /// Why the checkpoint does not apply.
        reason: MisuseKind,
    },
    /// The [`ArenaConfig`](crate::ArenaConfig) failed validation.
    InvalidConfig {
        /// The violated constraint.
        reason: &'static str,
    },
    /// A text helper's byte range is out of bounds or splits a UTF-8 character.
    InvalidRange {
        /// Start byte offset of the range.
        start: usize,
        /// Length of the range in bytes.
        len: usize,
        /// Length of the source string in bytes.
        source_len: usize,
    },
    /// A `Display` or `Debug` implementation returned an error while
    /// formatting into the arena.
    Format,
    /// The backing buffer could not be allocated.
    Allocation(CollectionError),
}

/// Why a checkpoint cannot be rewound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MisuseKind {
    /// The checkpoint was taken from a different arena.
    ForeignArena,
    /// The arena was reset after the checkpoint was taken.
    StaleGeneration {
        /// Generation recorded in the checkpoint.
        checkpoint: u64,
        /// Current generation of the arena.
        current: u64,
    },
    /// The checkpoint lies past the cursor: an enclosing scope was
    /// already rewound, so this checkpoint's scope is gone.
    AheadOfCursor {
        /// Offset recorded in the checkpoint.
        checkpoint: usize,
        /// Current cursor.
        used: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                remaining,
                capacity,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, {remaining} of {capacity} bytes remaining"
                )
            }
            Self::CheckpointMisuse { reason } => write!(f, "checkpoint rejected: {reason}"),
            Self::InvalidConfig { reason } => write!(f, "invalid arena config: {reason}"),
            Self::InvalidRange {
                start,
                len,
                source_len,
            } => {
                write!(
                    f,
                    "invalid range: {len} bytes at {start} in a {source_len}-byte string"
                )
            }
            Self::Format => write!(f, "formatting into the arena failed"),
            Self::Allocation(reason) => write!(f, "arena buffer allocation failed: {reason}"),
        }
    }
}

impl fmt::Display for MisuseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForeignArena => write!(f, "taken from a different arena"),
            Self::StaleGeneration {
                checkpoint,
                current,
            } => {
                write!(
                    f,
                    "taken in generation {checkpoint}, arena is at generation {current}"
                )
            }
            Self::AheadOfCursor { checkpoint, used } => {
                write!(f, "offset {checkpoint} is past the cursor at {used}")
            }
        }
    }
}

impl Error for ArenaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Allocation(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<CollectionError> for ArenaError {
    fn from(err: CollectionError) -> Self {
        Self::Allocation(err)
    }
}

impl From<MisuseKind> for ArenaError {
    fn from(reason: MisuseKind) -> Self {
        Self::CheckpointMisuse { reason }
    }
}
