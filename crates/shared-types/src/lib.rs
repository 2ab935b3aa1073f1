//! # Shared Types Crate
//!
//! Types that cross subsystem boundaries in the identity-gated ledger.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the address codec lives here and nowhere else.
//!   Every registry key and every gate lookup goes through
//!   [`Address::from_str`](std::str::FromStr) so the two sides always agree on
//!   the normalized form.
//! - **Store-Agnostic Paging**: [`PageRequest`]/[`PageResponse`] describe a page
//!   without knowing what backs it.

pub mod address;
pub mod entities;
pub mod errors;
pub mod pagination;

pub use address::{Address, ADDRESS_LEN, ADDRESS_PREFIX};
pub use entities::*;
pub use errors::*;
pub use pagination::{PageRequest, PageResponse, DEFAULT_PAGE_LIMIT};
