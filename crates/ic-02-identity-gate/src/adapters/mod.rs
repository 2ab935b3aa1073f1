//! # Adapters Layer
//!
//! Registry lookup implementations and decision observers.

pub mod observer;
pub mod registry;

pub use observer::{GateEvent, NoopObserver, RecordingObserver, TracingObserver};
