//! # Node Configuration
//!
//! Unified configuration for the identity subsystems, read from the
//! environment.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `IC_CHAIN_ID` | `identity-devnet` | Chain identifier put in every `AnteContext` |
//! | `IC_GENESIS_HEIGHT` | `0` | Height at which identity checks are skipped |
//! | `IC_EXEMPT_MSGS` | identity module messages | Comma-separated exempt type URLs |
//! | `IC_STORAGE_BACKEND` | `memory` | `memory` or `rocksdb` |
//! | `IC_DATA_DIR` | `./data/identity` | RocksDB directory |
//! | `IC_DEFAULT_PAGE_LIMIT` | `100` | Page size used when a request asks for 0 |
//! | `IC_GENESIS_FILE` | unset | JSON genesis file loaded at startup |

use std::path::PathBuf;
use std::str::FromStr;

use ic_02_identity_gate::{ExemptMessageTable, GateConfig};
use ic_telemetry::TelemetryConfig;
use shared_types::DEFAULT_PAGE_LIMIT;
use thiserror::Error;

/// Complete node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub chain_id: String,
    /// Identity gate configuration.
    pub gate: GateConfig,
    /// Storage configuration.
    pub storage: StorageConfig,
    pub telemetry: TelemetryConfig,
    /// Genesis file to import into an empty store.
    pub genesis_file: Option<PathBuf>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            chain_id: "identity-devnet".to_string(),
            gate: GateConfig::default(),
            storage: StorageConfig::default(),
            telemetry: TelemetryConfig::default(),
            genesis_file: None,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("Exempt message table contains an empty type URL")]
    EmptyExemptEntry,

    #[error("Default page limit must be greater than zero")]
    ZeroPageLimit,

    #[error("Chain id must not be empty")]
    EmptyChainId,

    /// RocksDB requested but the binary was built without it.
    #[error("Storage backend 'rocksdb' requires the `rocksdb` feature")]
    RocksDbUnavailable,
}

impl NodeConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::from_lookup(|var| std::env::var(var).ok())?;
        config.telemetry = TelemetryConfig::from_env();
        Ok(config)
    }

    /// Read configuration through `lookup` (variable name to value).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(chain_id) = lookup("IC_CHAIN_ID") {
            config.chain_id = chain_id;
        }
        if let Some(raw) = lookup("IC_GENESIS_HEIGHT") {
            config.gate.genesis_height = parse_var("IC_GENESIS_HEIGHT", &raw)?;
        }
        if let Some(raw) = lookup("IC_EXEMPT_MSGS") {
            config.gate.exempt_messages = parse_exempt_list(&raw)?;
        }
        if let Some(raw) = lookup("IC_STORAGE_BACKEND") {
            config.storage.backend = parse_var("IC_STORAGE_BACKEND", &raw)?;
        }
        if let Some(dir) = lookup("IC_DATA_DIR") {
            config.storage.data_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup("IC_DEFAULT_PAGE_LIMIT") {
            config.storage.default_page_limit = parse_var("IC_DEFAULT_PAGE_LIMIT", &raw)?;
        }
        config.genesis_file = lookup("IC_GENESIS_FILE").map(PathBuf::from);

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the runtime cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chain_id.trim().is_empty() {
            return Err(ConfigError::EmptyChainId);
        }
        if self.gate.exempt_messages.iter().any(|url| url.trim().is_empty()) {
            return Err(ConfigError::EmptyExemptEntry);
        }
        if self.storage.default_page_limit == 0 {
            return Err(ConfigError::ZeroPageLimit);
        }
        if self.storage.backend == StorageBackend::RocksDb && !cfg!(feature = "rocksdb") {
            return Err(ConfigError::RocksDbUnavailable);
        }
        Ok(())
    }
}

/// Which key-value store backs the identity registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageBackend {
    #[default]
    Memory,
    RocksDb,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" => Ok(StorageBackend::Memory),
            "rocksdb" => Ok(StorageBackend::RocksDb),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Data directory for the RocksDB backend.
    pub data_dir: PathBuf,
    /// Page size applied to list requests with `limit == 0`.
    pub default_page_limit: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            data_dir: PathBuf::from("./data/identity"),
            default_page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        var,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Comma-separated type URLs. Blank entries are an error, not skipped.
fn parse_exempt_list(raw: &str) -> Result<ExemptMessageTable, ConfigError> {
    let entries: Vec<&str> = raw.split(',').map(str::trim).collect();
    if entries.iter().any(|e| e.is_empty()) {
        return Err(ConfigError::EmptyExemptEntry);
    }
    Ok(ExemptMessageTable::new(entries))
}
