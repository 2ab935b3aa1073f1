//! # Identity Genesis File
//!
//! Reads and writes the identity module's genesis state as JSON.

use std::fs;
use std::path::Path;

use ic_01_identity_registry::GenesisState;
use thiserror::Error;

/// Genesis file errors.
#[derive(Debug, Error)]
pub enum GenesisError {
    #[error("Failed to read genesis file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write genesis file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed genesis JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a genesis file. Validation happens on import.
pub fn load_genesis(path: impl AsRef<Path>) -> Result<GenesisState, GenesisError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| GenesisError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Write `state` as pretty-printed JSON.
pub fn write_genesis(path: impl AsRef<Path>, state: &GenesisState) -> Result<(), GenesisError> {
    let path = path.as_ref();
    let json = serde_json::to_vec_pretty(state)?;
    fs::write(path, json).map_err(|source| GenesisError::Write {
        path: path.display().to_string(),
        source,
    })
}
