//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for an [`Arena`](crate::Arena).
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Size of the backing buffer in bytes. Fixed for the arena's lifetime.
    ///
    /// Default: 4096. Must be non-zero.
    pub capacity: usize,

    /// Alignment, in bytes, of every allocation's address. The buffer base
    /// is aligned to it and the cursor is rounded up to it.
    ///
    /// Default: pointer width. Must be a power of two.
    pub alignment: usize,
}

impl ArenaConfig {
    /// Default buffer size in bytes.
    pub const DEFAULT_CAPACITY: usize = 4096;

    /// Default cursor alignment: the platform pointer width.
    pub const DEFAULT_ALIGNMENT: usize = std::mem::align_of::<usize>();

    /// Config for a buffer of `capacity` bytes with pointer-width alignment.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            alignment: Self::DEFAULT_ALIGNMENT,
        }
    }

    /// Check structural constraints.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.capacity == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "capacity must be non-zero",
            });
        }
        if !self.alignment.is_power_of_two() {
            return Err(ArenaError::InvalidConfig {
                reason: "alignment must be a power of two",
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
