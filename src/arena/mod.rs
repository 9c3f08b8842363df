//! Region-based arena allocation
//!
//! An [`Arena`] serves aligned bump allocations from an ordered chain of
//! backing blocks and releases all of them at once on [`Arena::reset`] or
//! drop. Individual allocations are never freed.
//!
//! Basic usage:
//!
//! ```
//! use region_arena::arena::Arena;
//!
//! let arena = Arena::new();
//! let value = arena.alloc(42u32)?;
//! assert_eq!(*value, 42);
//! # Ok::<(), region_arena::ArenaError>(())
//! ```
//!
//! The arena is single-threaded by design: interior mutability (`Cell`,
//! `RefCell`) makes it `!Sync`, and there is no internal locking. For
//! multithreaded workloads use one arena per thread.

mod arena;
mod stats;

pub use self::arena::{Arena, DEFAULT_BLOCK_SIZE};
pub use self::stats::{ArenaStats, ArenaStatsSnapshot};

use crate::error::{ArenaError, Result};

/// Arena configuration builder
#[derive(Debug, Clone)]
pub struct ArenaConfig {
    /// Minimum capacity of each reserved block. A request larger than this
    /// gets a block of exactly its own size.
    pub block_size: usize,
    /// Whether to track allocation statistics
    pub track_stats: bool,
    /// Whether to zero block buffers on reservation
    pub zero_memory: bool,
}

impl ArenaConfig {
    /// Creates new config with default values
    pub fn new() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            track_stats: cfg!(debug_assertions),
            zero_memory: false,
        }
    }

    /// Sets the minimum block capacity
    #[must_use = "builder methods must be chained or built"]
    pub fn with_block_size(mut self, size: usize) -> Self {
        self.block_size = size;
        self
    }

    /// Enables/disables statistics tracking
    #[must_use = "builder methods must be chained or built"]
    pub fn with_stats(mut self, enabled: bool) -> Self {
        self.track_stats = enabled;
        self
    }

    /// Enables/disables zeroing block buffers on reservation
    #[must_use = "builder methods must be chained or built"]
    pub fn with_zero_memory(mut self, enabled: bool) -> Self {
        self.zero_memory = enabled;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            return Err(ArenaError::invalid_config(
                "block size must be greater than 0",
            ));
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}
