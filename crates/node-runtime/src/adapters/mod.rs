//! # Runtime Adapters
//!
//! - `metrics`: `GateObserver` feeding Prometheus counters
//! - `storage`: backend selection for the identity store

pub mod metrics;
pub mod storage;

pub use metrics::MetricsObserver;
pub use storage::{open_store, DynStore};
