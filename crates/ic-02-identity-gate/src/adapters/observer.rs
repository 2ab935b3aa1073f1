//! # Observer Adapters
//!
//! - `TracingObserver`: structured logs
//! - `NoopObserver`: discards everything
//! - `RecordingObserver`: keeps events in memory for assertions
//! - `(A, B)`: fans out to two observers

use crate::domain::errors::GateError;
use crate::ports::outbound::{AddressRole, BypassReason, GateObserver};
use parking_lot::Mutex;
use shared_types::{Address, BlockHeight};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GateObserver for NoopObserver {}

/// Logs gate decisions with `subsystem = "ic-02"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl GateObserver for TracingObserver {
    fn on_bypass(&self, block_height: BlockHeight, reason: BypassReason) {
        info!(
            subsystem = "ic-02",
            block_height,
            reason = reason.as_str(),
            "Identity checks bypassed"
        );
    }

    fn on_exempt(&self, block_height: BlockHeight, type_url: &str) {
        debug!(subsystem = "ic-02", block_height, type_url, "Exempt message");
    }

    fn on_address_checked(&self, role: AddressRole, address: &Address, registered: bool) {
        debug!(
            subsystem = "ic-02",
            role = role.as_str(),
            address = %address,
            registered,
            "Address checked"
        );
    }

    fn on_rejected(&self, block_height: BlockHeight, error: &GateError) {
        warn!(
            subsystem = "ic-02",
            block_height,
            error = %error,
            "Transaction rejected"
        );
    }

    fn on_admitted(&self, block_height: BlockHeight, msg_count: usize) {
        info!(subsystem = "ic-02", block_height, msg_count, "Transaction admitted");
    }
}

impl<A: GateObserver, B: GateObserver> GateObserver for (A, B) {
    fn on_bypass(&self, block_height: BlockHeight, reason: BypassReason) {
        self.0.on_bypass(block_height, reason);
        self.1.on_bypass(block_height, reason);
    }

    fn on_exempt(&self, block_height: BlockHeight, type_url: &str) {
        self.0.on_exempt(block_height, type_url);
        self.1.on_exempt(block_height, type_url);
    }

    fn on_address_checked(&self, role: AddressRole, address: &Address, registered: bool) {
        self.0.on_address_checked(role, address, registered);
        self.1.on_address_checked(role, address, registered);
    }

    fn on_rejected(&self, block_height: BlockHeight, error: &GateError) {
        self.0.on_rejected(block_height, error);
        self.1.on_rejected(block_height, error);
    }

    fn on_admitted(&self, block_height: BlockHeight, msg_count: usize) {
        self.0.on_admitted(block_height, msg_count);
        self.1.on_admitted(block_height, msg_count);
    }
}

/// Owned copy of one observer callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateEvent {
    Bypassed {
        block_height: BlockHeight,
        reason: BypassReason,
    },
    Exempt {
        block_height: BlockHeight,
        type_url: String,
    },
    AddressChecked {
        role: AddressRole,
        address: Address,
        registered: bool,
    },
    Rejected {
        block_height: BlockHeight,
        error: GateError,
    },
    Admitted {
        block_height: BlockHeight,
        msg_count: usize,
    },
}

#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<GateEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GateEvent> {
        self.events.lock().clone()
    }

    /// Addresses checked so far, in order.
    pub fn checked(&self) -> Vec<(AddressRole, Address)> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                GateEvent::AddressChecked { role, address, .. } => Some((*role, *address)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    fn push(&self, event: GateEvent) {
        self.events.lock().push(event);
    }
}

impl GateObserver for RecordingObserver {
    fn on_bypass(&self, block_height: BlockHeight, reason: BypassReason) {
        self.push(GateEvent::Bypassed {
            block_height,
            reason,
        });
    }

    fn on_exempt(&self, block_height: BlockHeight, type_url: &str) {
        self.push(GateEvent::Exempt {
            block_height,
            type_url: type_url.to_string(),
        });
    }

    fn on_address_checked(&self, role: AddressRole, address: &Address, registered: bool) {
        self.push(GateEvent::AddressChecked {
            role,
            address: *address,
            registered,
        });
    }

    fn on_rejected(&self, block_height: BlockHeight, error: &GateError) {
        self.push(GateEvent::Rejected {
            block_height,
            error: error.clone(),
        });
    }

    fn on_admitted(&self, block_height: BlockHeight, msg_count: usize) {
        self.push(GateEvent::Admitted {
            block_height,
            msg_count,
        });
    }
}

impl<O: GateObserver + ?Sized> GateObserver for std::sync::Arc<O> {
    fn on_bypass(&self, block_height: BlockHeight, reason: BypassReason) {
        (**self).on_bypass(block_height, reason);
    }

    fn on_exempt(&self, block_height: BlockHeight, type_url: &str) {
        (**self).on_exempt(block_height, type_url);
    }

    fn on_address_checked(&self, role: AddressRole, address: &Address, registered: bool) {
        (**self).on_address_checked(role, address, registered);
    }

    fn on_rejected(&self, block_height: BlockHeight, error: &GateError) {
        (**self).on_rejected(block_height, error);
    }

    fn on_admitted(&self, block_height: BlockHeight, msg_count: usize) {
        (**self).on_admitted(block_height, msg_count);
    }
}
