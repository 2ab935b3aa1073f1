//! # Outbound Ports (Driven Ports / SPI)
//!
//! What the gate needs from its host: read access to the identity registry
//! and somewhere to report decisions.

use crate::domain::errors::GateError;
use ic_01_identity_registry::RegistryError;
use shared_types::{Address, BlockHeight};

/// Registry membership as of one point in time.
pub trait IdentityView {
    /// Whether `address` holds an identity record.
    fn has_identity(&self, address: &Address) -> Result<bool, RegistryError>;
}

/// Read-only access to the identity registry.
///
/// The gate takes one snapshot per transaction and answers every lookup for
/// that transaction from it. A snapshot must not observe writes committed
/// after it was taken.
///
/// Adapters: `adapters/registry.rs`.
pub trait IdentityLookup: Send + Sync {
    fn snapshot(&self) -> Box<dyn IdentityView + '_>;
}

/// Why the gate skipped all checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BypassReason {
    /// Transaction executes at the genesis height.
    Genesis,
    /// Simulation (fee estimation) run.
    Simulate,
}

impl BypassReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            BypassReason::Genesis => "genesis",
            BypassReason::Simulate => "simulate",
        }
    }
}

/// Which side of a message an address was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressRole {
    Signer,
    Recipient,
}

impl AddressRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressRole::Signer => "signer",
            AddressRole::Recipient => "recipient",
        }
    }
}

/// Receives gate decision events.
///
/// Every method defaults to doing nothing.
pub trait GateObserver: Send + Sync {
    fn on_bypass(&self, _block_height: BlockHeight, _reason: BypassReason) {}

    fn on_exempt(&self, _block_height: BlockHeight, _type_url: &str) {}

    fn on_address_checked(&self, _role: AddressRole, _address: &Address, _registered: bool) {}

    fn on_rejected(&self, _block_height: BlockHeight, _error: &GateError) {}

    fn on_admitted(&self, _block_height: BlockHeight, _msg_count: usize) {}
}
