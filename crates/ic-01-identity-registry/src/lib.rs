//! # Identity Registry Subsystem (IC-01)
//!
//! Persistent mapping from account address to identity record. Each record
//! binds an address to the SHA-256 digest of an external identity-document
//! reference; the document reference itself is never stored.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | At most one record per address | `service.rs` - `create()` existence check |
//! | INVARIANT-2 | Address is canonical | `shared_types::Address` - keys built from canonical form |
//! | INVARIANT-3 | `id_hash` set once at creation | no update path exists |
//! | INVARIANT-4 | Enumeration in key-byte order | `ports/outbound.rs` - ordered scans |
//!
//! ## Concurrency
//!
//! Writes take `&mut self`. The host shares the registry as
//! `Arc<RwLock<IdentityRegistry<_, _>>>` so `create()`'s check-then-set runs
//! under the write lock and readers (the identity gate) only ever take read
//! locks.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  adapters/ - InMemoryKVStore, RocksDbStore, time sources        │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ports/inbound.rs  - IdentityRegistryApi                        │
//! │  ports/outbound.rs - KeyValueStore, TimeSource                  │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/entities.rs   - IdentityRecord, key layout, id hashing  │
//! │  domain/pagination.rs - offset / cursor paging over a store     │
//! │  domain/genesis.rs    - GenesisState                            │
//! │  domain/messages.rs   - MsgCreateIdentity                       │
//! │  domain/errors.rs     - RegistryError, KVStoreError             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use domain::*;
pub use ports::inbound::IdentityRegistryApi;
pub use ports::outbound::{BatchOperation, KeyValueStore, ScanResult, TimeSource};
pub use service::IdentityRegistry;
