//! Prometheus counters fed from identity gate decisions.

use ic_02_identity_gate::{AddressRole, BypassReason, GateError, GateObserver};
use ic_telemetry::{metric_inc, GATE_ADDRESSES_CHECKED, GATE_DECISIONS, GATE_EXEMPT_MESSAGES};
use shared_types::{Address, BlockHeight};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObserver;

impl GateObserver for MetricsObserver {
    fn on_bypass(&self, _block_height: BlockHeight, reason: BypassReason) {
        let outcome = match reason {
            BypassReason::Genesis => "bypass_genesis",
            BypassReason::Simulate => "bypass_simulate",
        };
        metric_inc!(GATE_DECISIONS, &[outcome]);
    }

    fn on_exempt(&self, _block_height: BlockHeight, type_url: &str) {
        metric_inc!(GATE_EXEMPT_MESSAGES, &[type_url]);
    }

    fn on_address_checked(&self, role: AddressRole, _address: &Address, registered: bool) {
        let registered = if registered { "true" } else { "false" };
        metric_inc!(GATE_ADDRESSES_CHECKED, &[role.as_str(), registered]);
    }

    fn on_rejected(&self, _block_height: BlockHeight, _error: &GateError) {
        metric_inc!(GATE_DECISIONS, &["rejected"]);
    }

    fn on_admitted(&self, _block_height: BlockHeight, _msg_count: usize) {
        metric_inc!(GATE_DECISIONS, &["admitted"]);
    }
}
