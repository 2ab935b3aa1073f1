//! # Storage Adapters
//!
//! - `InMemoryKVStore` - ordered in-memory store (tests, default runtime)
//! - `RocksDbStore` - production store (feature `rocksdb`)

pub mod memory;

#[cfg(feature = "rocksdb")]
pub mod rocksdb_adapter;

pub use memory::InMemoryKVStore;

#[cfg(feature = "rocksdb")]
pub use rocksdb_adapter::{RocksDbConfig, RocksDbStore, CF_IDENTITY};
