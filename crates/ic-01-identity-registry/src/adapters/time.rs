//! Time sources for record timestamps.

use crate::ports::outbound::TimeSource;
use shared_types::Timestamp;
use std::sync::atomic::{AtomicU64, Ordering};

/// Default time source using system time.
#[derive(Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// Block-time source advanced by the host at the start of each block.
///
/// Keeps `created_at` identical across replicas executing the same block.
#[derive(Default)]
pub struct BlockTimeSource {
    block_time: AtomicU64,
}

impl BlockTimeSource {
    pub fn new(block_time: Timestamp) -> Self {
        Self {
            block_time: AtomicU64::new(block_time),
        }
    }

    /// Set the time of the block now being executed.
    pub fn set_block_time(&self, block_time: Timestamp) {
        self.block_time.store(block_time, Ordering::Release);
    }
}

impl TimeSource for BlockTimeSource {
    fn now(&self) -> Timestamp {
        self.block_time.load(Ordering::Acquire)
    }
}

/// Constant time source for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource(pub Timestamp);

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Timestamp {
        self.0
    }
}
