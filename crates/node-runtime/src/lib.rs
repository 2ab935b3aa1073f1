//! # Node Runtime Library
//!
//! Composition root for the identity-gated ledger: reads `NodeConfig`,
//! opens the identity store, imports genesis and installs the identity gate
//! in the ante chain.
//!
//! ## Architectural Patterns
//!
//! - **Hexagonal Architecture**: subsystems expose ports, this crate supplies
//!   the adapters (store backend, metrics observer)
//! - **Single Writer**: the registry sits behind one `RwLock`; block execution
//!   writes, the gate reads
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = NodeConfig::from_env()?;
//! ic_telemetry::init_telemetry(&config.telemetry)?;
//! let node = SubsystemContainer::new(config)?;
//!
//! let ctx = node.begin_block(height, block_time);
//! node.admit(ctx, &tx, false)?;
//! ```

pub mod adapters;
pub mod container;
pub mod genesis;

pub use container::{ConfigError, NodeConfig, SubsystemContainer};
pub use genesis::{load_genesis, write_genesis, GenesisError};
