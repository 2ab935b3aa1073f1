//! # Domain Layer - Identity Registry
//!
//! Record layout, paging, genesis and message validation. No I/O beyond the
//! `KeyValueStore` port.

pub mod entities;
pub mod errors;
pub mod genesis;
pub mod messages;
pub mod pagination;

pub use entities::*;
pub use errors::*;
pub use genesis::*;
pub use messages::*;
pub use pagination::*;
