//! Prometheus metrics for the identity gate.
//!
//! All metrics follow the naming convention: `ic_<subsystem>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{CounterVec, Encoder, Opts, Registry, TextEncoder};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Gate decisions by outcome.
    pub static ref GATE_DECISIONS: CounterVec = CounterVec::new(
        Opts::new("ic_gate_decisions_total", "Identity gate decisions"),
        &["outcome"]  // outcome: admitted/rejected/bypass_genesis/bypass_simulate
    ).expect("metric creation failed");

    /// Registry lookups performed by the gate.
    pub static ref GATE_ADDRESSES_CHECKED: CounterVec = CounterVec::new(
        Opts::new("ic_gate_addresses_checked_total", "Addresses looked up by the identity gate"),
        &["role", "registered"]  // role: signer/recipient, registered: true/false
    ).expect("metric creation failed");

    /// Exempt messages skipped, by type URL.
    pub static ref GATE_EXEMPT_MESSAGES: CounterVec = CounterVec::new(
        Opts::new("ic_gate_exempt_messages_total", "Messages skipped as exempt"),
        &["type_url"]
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(GATE_DECISIONS.clone()),
        Box::new(GATE_ADDRESSES_CHECKED.clone()),
        Box::new(GATE_EXEMPT_MESSAGES.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Render all registered metrics in the Prometheus text format.
pub fn gather_text() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
