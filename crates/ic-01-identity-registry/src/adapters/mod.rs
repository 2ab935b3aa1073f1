//! # Adapters Module
//!
//! Infrastructure adapters implementing the outbound ports.

pub mod storage;
pub mod time;

pub use storage::*;
pub use time::{BlockTimeSource, FixedTimeSource, SystemTimeSource};
