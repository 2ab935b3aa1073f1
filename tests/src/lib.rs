//! # Identity Ledger Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Gate throughput (criterion)
//! └── src/integration/  # Registry + gate + runtime scenarios
//!     ├── fixtures.rs   # Shared builders
//!     ├── registry_flows.rs
//!     ├── gate_flows.rs
//!     ├── runtime_flows.rs
//!     └── concurrency.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ic-tests
//!
//! # By category
//! cargo test -p ic-tests integration::gate_flows
//!
//! # Benchmarks
//! cargo bench -p ic-tests
//! ```

#![allow(dead_code)]

pub mod integration;
