//! # Ports Layer
//!
//! - `inbound`: the ante pipeline contract the gate plugs into
//! - `outbound`: registry lookup and decision observer

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
