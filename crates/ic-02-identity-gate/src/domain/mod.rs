//! # Domain Layer
//!
//! Messages, address extraction, exemption rules and errors. No I/O.

pub mod classifier;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod messages;

pub use classifier::*;
pub use config::*;
pub use errors::*;
pub use extraction::*;
pub use messages::*;
