//! # IC Telemetry
//!
//! Logging and metrics for the identity-gated ledger.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ic_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::from_env())?;
//!     // ...
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `IC_SERVICE_NAME` | `identity-ledger` | Service name in logs |
//! | `IC_LOG_LEVEL` | `info` | Log level filter (`RUST_LOG` also honoured) |
//! | `IC_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `IC_JSON_LOGS` | `false` | JSON log lines (default `true` in containers) |

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::{env_filter, init_logging};
pub use metrics::{
    gather_text, register_metrics, GATE_ADDRESSES_CHECKED, GATE_DECISIONS, GATE_EXEMPT_MESSAGES,
    REGISTRY,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Register metrics, then install the global log subscriber.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    register_metrics()?;
    init_logging(config)
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}
