//! # Integration Scenarios
//!
//! Cross-crate tests: the registry as the gate sees it, the gate inside an
//! ante chain, and the runtime container end to end.

pub mod fixtures;

mod gate_flows;
mod runtime_flows;
