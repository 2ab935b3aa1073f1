//! # Inbound Ports (Driving Ports / API)
//!
//! Public API of the Identity Registry.

use crate::domain::entities::IdentityRecord;
use crate::domain::errors::RegistryError;
use shared_types::{Address, PageRequest, PageResponse};

/// Primary Identity Registry API.
///
/// Reads take `&self` and may run concurrently; writes take `&mut self`, so a
/// shared registry serializes them behind the host's write lock.
pub trait IdentityRegistryApi {
    /// Register `address`, storing `hex(sha256(id_secret))`.
    ///
    /// # Errors
    /// * `RegistryError::AlreadyRegistered` - a record exists; nothing is written
    /// * `RegistryError::StoreIo` - persistence failure
    fn create(&mut self, address: &Address, id_secret: &str)
        -> Result<IdentityRecord, RegistryError>;

    /// Look up the record for `address`.
    fn get(&self, address: &Address) -> Result<Option<IdentityRecord>, RegistryError>;

    /// Delete the record for `address`. No-op if absent.
    fn remove(&mut self, address: &Address) -> Result<(), RegistryError>;

    /// Enumerate records in key order.
    fn list(&self, page: &PageRequest) -> Result<PageResponse<IdentityRecord>, RegistryError>;

    /// Records in the page window whose `id_hash` equals `id_hash`.
    fn list_by_id_hash(
        &self,
        id_hash: &str,
        page: &PageRequest,
    ) -> Result<PageResponse<IdentityRecord>, RegistryError>;
}
