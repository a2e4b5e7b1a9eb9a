//! The bump arena and its checkpoint/rewind discipline.

use std::fmt;

use tracing::{debug, warn};

use crate::checkpoint::{ArenaId, Checkpoint};
use crate::config::ArenaConfig;
use crate::error::{ArenaError, MisuseKind};
use crate::raw::BumpBuffer;

/// A fixed-capacity bump allocator.
///
/// `used` is the offset of the next free byte. Every allocation first
/// rounds `used` up to the configured alignment, then advances it by the
/// requested size. Memory is reclaimed only in bulk, by [`rewind`] to a
/// saved [`Checkpoint`] or by [`reset`].
///
/// ```
/// use cook_arena::{Arena, ArenaConfig};
///
/// let mut arena = Arena::new(ArenaConfig { capacity: 64, alignment: 8 }).unwrap();
/// let checkpoint = arena.save();
/// {
///     let scratch = arena.alloc(20).unwrap();
///     scratch[0] = 0xAB;
///     assert_eq!(arena.used(), 20);
/// }
/// arena.rewind(checkpoint).unwrap();
/// assert_eq!(arena.used(), 0);
/// ```
///
/// Allocations borrow the arena, so a rewind cannot happen while one is
/// still in use:
///
/// ```compile_fail
/// use cook_arena::Arena;
///
/// let mut arena = Arena::with_capacity(64).unwrap();
/// let checkpoint = arena.save();
/// let bytes = arena.alloc(8).unwrap();
/// arena.rewind(checkpoint).unwrap();
/// bytes[0] = 1;
/// ```
///
/// The arena is `Send` but not `Sync`: it can move to another thread, but
/// allocation through a shared reference is confined to one thread.
///
/// [`rewind`]: Arena::rewind
/// [`reset`]: Arena::reset
pub struct Arena {
    buffer: BumpBuffer,
    alignment: usize,
    /// Incremented by every `reset`; stamps checkpoints.
    generation: u64,
    id: ArenaId,
}

impl Arena {
    /// Create an arena from a validated config.
    ///
    /// The whole buffer is allocated up front and never resized. Its base
    /// address is a multiple of the configured alignment, so every
    /// allocation's address is aligned, not just its offset.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let buffer = BumpBuffer::new(config.capacity, config.alignment)?;
        Ok(Self {
            buffer,
            alignment: config.alignment,
            generation: 0,
            id: ArenaId::next(),
        })
    }

    /// Create an arena of `capacity` bytes with the default alignment.
    pub fn with_capacity(capacity: usize) -> Result<Self, ArenaError> {
        Self::new(ArenaConfig::new(capacity))
    }

    /// Allocate `size` bytes.
    ///
    /// The returned bytes hold whatever the last allocation over that range
    /// wrote; use [`alloc_zeroed`](Self::alloc_zeroed) for cleared memory.
    ///
    /// Fails with [`ArenaError::CapacityExceeded`] if the aligned request
    /// does not fit; `used` is unchanged on failure. A zero-size request
    /// always succeeds and aligns the cursor only if the aligned cursor
    /// still fits.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc(&self, size: usize) -> Result<&mut [u8], ArenaError> {
        let used = self.buffer.cursor();
        let start = match self.aligned(used) {
            Some(start) if start <= self.buffer.capacity() => start,
            _ if size == 0 => used,
            _ => return Err(self.exhausted(size)),
        };
        self.buffer
            .bump(start, size)
            .ok_or_else(|| self.exhausted(size))
    }

    /// Allocate `size` bytes, all set to zero.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_zeroed(&self, size: usize) -> Result<&mut [u8], ArenaError> {
        let bytes = self.alloc(size)?;
        bytes.fill(0);
        Ok(bytes)
    }

    /// Record the current cursor.
    pub fn save(&self) -> Checkpoint {
        Checkpoint {
            arena: self.id,
            generation: self.generation,
            offset: self.buffer.cursor(),
        }
    }

    /// Move the cursor back to `checkpoint`, releasing everything
    /// allocated since it was saved.
    ///
    /// Checkpoints must be rewound in LIFO order. A checkpoint from another
    /// arena, from before the last [`reset`](Self::reset), or past the
    /// current cursor is rejected with [`ArenaError::CheckpointMisuse`] and
    /// `used` is left unchanged.
    pub fn rewind(&mut self, checkpoint: Checkpoint) -> Result<(), ArenaError> {
        if let Err(reason) = self.validate_checkpoint(&checkpoint) {
            warn!(arena = %self.id, %reason, "checkpoint rejected");
            return Err(reason.into());
        }
        self.buffer.set_cursor(checkpoint.offset);
        debug!(
            arena = %self.id,
            used = checkpoint.offset,
            generation = self.generation,
            "arena rewound"
        );
        Ok(())
    }

    /// Release every allocation and invalidate all outstanding checkpoints.
    ///
    /// Leaves `used == 0`, the same cursor a rewind to a checkpoint saved
    /// on a fresh arena would produce. If the generation counter would
    /// overflow, the arena takes a fresh [`ArenaId`] and restarts at
    /// generation 0, so no earlier checkpoint can match again.
    pub fn reset(&mut self) {
        self.buffer.set_cursor(0);
        match self.generation.checked_add(1) {
            Some(next) => self.generation = next,
            None => {
                self.id = ArenaId::next();
                self.generation = 0;
            }
        }
        debug!(arena = %self.id, generation = self.generation, "arena reset");
    }

    /// Run `f` inside a save/rewind pair.
    ///
    /// Everything `f` allocates is released when it returns. Scopes nest.
    /// If `f` resets the arena, the cursor is left where the reset put it.
    pub fn scope<R>(&mut self, f: impl FnOnce(&mut Arena) -> R) -> R {
        let checkpoint = self.save();
        let result = f(self);
        if self.validate_checkpoint(&checkpoint).is_ok() {
            self.buffer.set_cursor(checkpoint.offset);
        }
        result
    }

    /// Bytes consumed so far, including alignment padding.
    pub fn used(&self) -> usize {
        self.buffer.cursor()
    }

    /// Bytes between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buffer.capacity() - self.buffer.cursor()
    }

    /// Total buffer size in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Alignment applied to the cursor before each allocation.
    pub fn alignment(&self) -> usize {
        self.alignment
    }

    /// Number of resets performed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// This arena's process-unique identity.
    pub fn id(&self) -> ArenaId {
        self.id
    }

    fn aligned(&self, offset: usize) -> Option<usize> {
        let mask = self.alignment - 1;
        offset.checked_add(mask).map(|bumped| bumped & !mask)
    }

    fn validate_checkpoint(&self, checkpoint: &Checkpoint) -> Result<(), MisuseKind> {
        if checkpoint.arena != self.id {
            return Err(MisuseKind::ForeignArena);
        }
        if checkpoint.generation != self.generation {
            return Err(MisuseKind::StaleGeneration {
                checkpoint: checkpoint.generation,
                current: self.generation,
            });
        }
        let used = self.buffer.cursor();
        if checkpoint.offset > used {
            return Err(MisuseKind::AheadOfCursor {
                checkpoint: checkpoint.offset,
                used,
            });
        }
        Ok(())
    }

    fn exhausted(&self, requested: usize) -> ArenaError {
        let capacity = self.buffer.capacity();
        let used = self.buffer.cursor();
        warn!(arena = %self.id, requested, used, capacity, "arena exhausted");
        ArenaError::CapacityExceeded {
            requested,
            remaining: capacity - used,
            capacity,
        }
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("id", &self.id)
            .field("used", &self.used())
            .field("capacity", &self.capacity())
            .field("alignment", &self.alignment)
            .field("generation", &self.generation)
            .finish()
    }
}
