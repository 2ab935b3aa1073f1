//! # Subsystem Container
//!
//! Configuration and the container holding the identity subsystems.

pub mod config;
pub mod subsystems;

pub use config::{ConfigError, NodeConfig, StorageBackend, StorageConfig};
pub use subsystems::{RuntimeGate, RuntimeRegistry, SharedRegistry, SubsystemContainer};
