//! Region-based arena allocation
//!
//! This crate provides a bump allocator that serves many small allocations
//! from a chain of large backing blocks and releases all of them in one O(1)
//! operation:
//!
//! - Aligned allocation of raw bytes, typed values, slices and strings
//! - Automatic growth: a request that does not fit the current block reserves
//!   a new one sized `max(request, block_size)`
//! - Bulk teardown: `reset()` (or drop) releases every block at once
//! - Fallible by design: exhaustion is reported, never aborted on
//!
//! # Example
//!
//! ```
//! use region_arena::Arena;
//!
//! struct Node {
//!     value: i32,
//! }
//!
//! let arena = Arena::new();
//!
//! let node = arena.alloc(Node { value: 1 })?;
//! node.value = 2;
//!
//! let scores = arena.alloc_slice(&[90u32, 85, 92])?;
//! assert_eq!(scores[1], 85);
//! # Ok::<(), region_arena::ArenaError>(())
//! ```
//!
//! # Features
//!
//! - `logging` (default): emits `tracing` events on block reservation and
//!   reset

#![warn(missing_docs)]

pub mod arena;
pub mod error;
pub mod utils;

// Re-export common types for convenience
pub use arena::{Arena, ArenaConfig, ArenaStats, ArenaStatsSnapshot, DEFAULT_BLOCK_SIZE};
pub use error::{ArenaError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
