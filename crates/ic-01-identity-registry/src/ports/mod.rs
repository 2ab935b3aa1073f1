//! # Ports Layer
//!
//! - **Inbound (Driving)**: `IdentityRegistryApi`
//! - **Outbound (Driven)**: `KeyValueStore`, `TimeSource`

pub mod inbound;
pub mod outbound;
