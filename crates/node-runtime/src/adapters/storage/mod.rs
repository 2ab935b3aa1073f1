//! # Identity Store Selection
//!
//! Opens the key-value store named by `StorageConfig`.
//!
//! ## Usage
//!
//! Enable the `rocksdb` feature to use the persistent backend:
//!
//! ```toml
//! node-runtime = { path = "...", features = ["rocksdb"] }
//! ```

use ic_01_identity_registry::{InMemoryKVStore, KVStoreError, KeyValueStore};

use crate::container::config::{StorageBackend, StorageConfig};

/// Store type the runtime hands to the registry.
pub type DynStore = Box<dyn KeyValueStore>;

/// Open the configured backend.
pub fn open_store(config: &StorageConfig) -> Result<DynStore, KVStoreError> {
    match config.backend {
        StorageBackend::Memory => Ok(Box::new(InMemoryKVStore::new())),
        StorageBackend::RocksDb => open_rocksdb(config),
    }
}

#[cfg(feature = "rocksdb")]
fn open_rocksdb(config: &StorageConfig) -> Result<DynStore, KVStoreError> {
    use ic_01_identity_registry::{RocksDbConfig, RocksDbStore};

    let store = RocksDbStore::open(RocksDbConfig {
        path: config.data_dir.to_string_lossy().to_string(),
        ..Default::default()
    })?;
    Ok(Box::new(store))
}

#[cfg(not(feature = "rocksdb"))]
fn open_rocksdb(_config: &StorageConfig) -> Result<DynStore, KVStoreError> {
    Err(KVStoreError::IOError {
        message: "RocksDB backend not compiled in (enable the `rocksdb` feature)".to_string(),
    })
}
