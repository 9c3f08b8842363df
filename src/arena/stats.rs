//! Statistics tracking for the arena allocator

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Statistics for an arena allocator
///
/// Counters use relaxed atomics so a `&Arena` can record without any
/// synchronization cost; the arena itself is still single-threaded.
#[derive(Debug, Default)]
pub struct ArenaStats {
    // Memory statistics
    bytes_reserved: AtomicUsize,
    bytes_used: AtomicUsize,
    bytes_wasted: AtomicUsize,

    // Operation statistics
    allocations: AtomicU64,
    resets: AtomicU64,

    // Block statistics
    blocks_reserved: AtomicUsize,
    current_blocks: AtomicUsize,
    max_blocks: AtomicUsize,
}

impl ArenaStats {
    /// Creates a new ArenaStats instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Total capacity of all currently reserved blocks, in bytes
    pub fn bytes_reserved(&self) -> usize {
        self.bytes_reserved.load(Ordering::Relaxed)
    }

    /// Bytes handed out to callers
    pub fn bytes_used(&self) -> usize {
        self.bytes_used.load(Ordering::Relaxed)
    }

    /// Bytes lost to alignment padding
    pub fn bytes_wasted(&self) -> usize {
        self.bytes_wasted.load(Ordering::Relaxed)
    }

    /// Reserved bytes not yet handed out
    pub fn bytes_available(&self) -> usize {
        self.bytes_reserved().saturating_sub(self.bytes_used())
    }

    /// Number of allocations served
    pub fn allocations(&self) -> u64 {
        self.allocations.load(Ordering::Relaxed)
    }

    /// Number of resets performed
    pub fn resets(&self) -> u64 {
        self.resets.load(Ordering::Relaxed)
    }

    /// Total number of blocks ever reserved
    pub fn blocks_reserved(&self) -> usize {
        self.blocks_reserved.load(Ordering::Relaxed)
    }

    /// Number of blocks currently in the chain
    pub fn current_blocks(&self) -> usize {
        self.current_blocks.load(Ordering::Relaxed)
    }

    /// Highest number of blocks the chain ever held at once
    pub fn max_blocks(&self) -> usize {
        self.max_blocks.load(Ordering::Relaxed)
    }

    /// Calculates memory utilization ratio (0..1)
    pub fn utilization_ratio(&self) -> f64 {
        let reserved = self.bytes_reserved() as f64;
        if reserved == 0.0 {
            0.0
        } else {
            (self.bytes_used() as f64) / reserved
        }
    }

    /// Calculates average allocation size in bytes
    pub fn average_allocation_size(&self) -> f64 {
        let allocations = self.allocations() as f64;
        if allocations == 0.0 {
            0.0
        } else {
            self.bytes_used() as f64 / allocations
        }
    }

    // Internal update methods
    pub(crate) fn record_allocation(&self, bytes: usize) {
        self.bytes_used.fetch_add(bytes, Ordering::Relaxed);
        self.allocations.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_waste(&self, bytes: usize) {
        self.bytes_wasted.fetch_add(bytes, Ordering::Relaxed);
    }

    pub(crate) fn record_block_reserved(&self, bytes: usize) {
        self.bytes_reserved.fetch_add(bytes, Ordering::Relaxed);
        self.blocks_reserved.fetch_add(1, Ordering::Relaxed);

        let prev_blocks = self.current_blocks.fetch_add(1, Ordering::Relaxed);
        self.max_blocks.fetch_max(prev_blocks + 1, Ordering::Relaxed);
    }

    pub(crate) fn record_reset(&self) {
        self.bytes_reserved.store(0, Ordering::Relaxed);
        self.bytes_used.store(0, Ordering::Relaxed);
        self.bytes_wasted.store(0, Ordering::Relaxed);
        self.current_blocks.store(0, Ordering::Relaxed);
        self.resets.fetch_add(1, Ordering::Relaxed);
    }

    /// Creates a snapshot of current statistics
    pub fn snapshot(&self) -> ArenaStatsSnapshot {
        ArenaStatsSnapshot {
            bytes_reserved: self.bytes_reserved(),
            bytes_used: self.bytes_used(),
            bytes_wasted: self.bytes_wasted(),
            bytes_available: self.bytes_available(),
            allocations: self.allocations(),
            resets: self.resets(),
            blocks_reserved: self.blocks_reserved(),
            current_blocks: self.current_blocks(),
            max_blocks: self.max_blocks(),
            utilization_ratio: self.utilization_ratio(),
            average_allocation_size: self.average_allocation_size(),
        }
    }
}

/// Immutable snapshot of arena statistics
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub struct ArenaStatsSnapshot {
    pub bytes_reserved: usize,
    pub bytes_used: usize,
    pub bytes_wasted: usize,
    pub bytes_available: usize,
    pub allocations: u64,
    pub resets: u64,
    pub blocks_reserved: usize,
    pub current_blocks: usize,
    pub max_blocks: usize,
    pub utilization_ratio: f64,
    pub average_allocation_size: f64,
}

impl std::fmt::Display for ArenaStatsSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Arena Statistics:")?;
        writeln!(f, "  Memory:")?;
        writeln!(f, "    Reserved: {} bytes", self.bytes_reserved)?;
        writeln!(f, "    Used: {} bytes", self.bytes_used)?;
        writeln!(f, "    Available: {} bytes", self.bytes_available)?;
        writeln!(f, "    Wasted (padding): {} bytes", self.bytes_wasted)?;
        writeln!(f, "  Efficiency:")?;
        writeln!(f, "    Utilization: {:.1}%", self.utilization_ratio * 100.0)?;
        writeln!(
            f,
            "    Avg allocation size: {:.1} bytes",
            self.average_allocation_size
        )?;
        writeln!(f, "  Operations:")?;
        writeln!(f, "    Allocations: {}", self.allocations)?;
        writeln!(f, "    Resets: {}", self.resets)?;
        writeln!(f, "  Blocks:")?;
        writeln!(f, "    Total reserved: {}", self.blocks_reserved)?;
        writeln!(f, "    Currently chained: {}", self.current_blocks)?;
        writeln!(f, "    Maximum chained: {}", self.max_blocks)?;
        Ok(())
    }
}
