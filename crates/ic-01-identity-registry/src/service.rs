//! # Identity Registry Service
//!
//! Application service implementing `IdentityRegistryApi` on top of the
//! `KeyValueStore` and `TimeSource` ports.
//!
//! Records are bincode-encoded under `identity/value/<canonical address>`.

use crate::domain::entities::{identity_key, IdentityRecord, IDENTITY_KEY_PREFIX};
use crate::domain::errors::RegistryError;
use crate::domain::genesis::GenesisState;
use crate::domain::messages::MsgCreateIdentity;
use crate::domain::pagination::paginate;
use crate::ports::inbound::IdentityRegistryApi;
use crate::ports::outbound::{BatchOperation, KeyValueStore, TimeSource};
use shared_types::{Address, PageRequest, PageResponse};
use tracing::{debug, info};

/// Identity Registry.
///
/// Exclusively owned by the hosting state machine. Other subsystems get read
/// access through a shared lock.
pub struct IdentityRegistry<S: KeyValueStore, T: TimeSource> {
    store: S,
    clock: T,
}

impl<S: KeyValueStore, T: TimeSource> IdentityRegistry<S, T> {
    pub fn new(store: S, clock: T) -> Self {
        Self { store, clock }
    }

    pub fn clock(&self) -> &T {
        &self.clock
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Write `record` unconditionally (genesis import).
    pub fn set_identity(&mut self, record: &IdentityRecord) -> Result<(), RegistryError> {
        let bytes = bincode::serialize(record)?;
        self.store.put(&record.key(), &bytes)?;
        Ok(())
    }

    /// Whether `address` holds a record.
    pub fn has_identity(&self, address: &Address) -> Result<bool, RegistryError> {
        Ok(self.store.exists(&identity_key(address))?)
    }

    /// Every record, in key order.
    pub fn all_identities(&self) -> Result<Vec<IdentityRecord>, RegistryError> {
        self.store
            .prefix_scan(IDENTITY_KEY_PREFIX)?
            .into_iter()
            .map(|(_, value)| decode(&value))
            .collect()
    }

    /// Handle a create-identity transaction message.
    pub fn handle_create_identity(
        &mut self,
        msg: &MsgCreateIdentity,
    ) -> Result<IdentityRecord, RegistryError> {
        let creator = msg.validate_basic()?;
        self.create(&creator, &msg.id_secret)
    }

    /// Load genesis records in one atomic batch.
    pub fn init_genesis(&mut self, genesis: &GenesisState) -> Result<(), RegistryError> {
        genesis.validate()?;

        let mut batch = Vec::with_capacity(genesis.identities.len());
        for record in &genesis.identities {
            batch.push(BatchOperation::put(record.key(), bincode::serialize(record)?));
        }
        self.store.atomic_batch_write(batch)?;

        info!(
            subsystem = "ic-01",
            identities = genesis.identities.len(),
            "Identity genesis loaded"
        );
        Ok(())
    }

    /// Export the registry as genesis state.
    pub fn export_genesis(&self) -> Result<GenesisState, RegistryError> {
        Ok(GenesisState::new(self.all_identities()?))
    }

    fn page_of_records(
        &self,
        page: &PageRequest,
    ) -> Result<PageResponse<IdentityRecord>, RegistryError> {
        let raw = paginate(&self.store, IDENTITY_KEY_PREFIX, page)?;
        let items = raw
            .items
            .iter()
            .map(|(_, value)| decode(value))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResponse {
            items,
            next_key: raw.next_key,
            total: raw.total,
        })
    }
}

impl<S: KeyValueStore, T: TimeSource> IdentityRegistryApi for IdentityRegistry<S, T> {
    fn create(
        &mut self,
        address: &Address,
        id_secret: &str,
    ) -> Result<IdentityRecord, RegistryError> {
        // INVARIANT-1: one record per address
        if self.has_identity(address)? {
            return Err(RegistryError::AlreadyRegistered { address: *address });
        }

        let record = IdentityRecord::new(*address, id_secret, self.clock.now());
        self.set_identity(&record)?;

        info!(
            subsystem = "ic-01",
            address = %record.address,
            created_at = record.created_at,
            "Identity registered"
        );
        Ok(record)
    }

    fn get(&self, address: &Address) -> Result<Option<IdentityRecord>, RegistryError> {
        match self.store.get(&identity_key(address))? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    fn remove(&mut self, address: &Address) -> Result<(), RegistryError> {
        self.store.delete(&identity_key(address))?;
        debug!(subsystem = "ic-01", address = %address, "Identity removed");
        Ok(())
    }

    fn list(&self, page: &PageRequest) -> Result<PageResponse<IdentityRecord>, RegistryError> {
        self.page_of_records(page)
    }

    fn list_by_id_hash(
        &self,
        id_hash: &str,
        page: &PageRequest,
    ) -> Result<PageResponse<IdentityRecord>, RegistryError> {
        let mut result = self.page_of_records(page)?;
        result.items.retain(|record| record.id_hash == id_hash);
        Ok(result)
    }
}

fn decode(bytes: &[u8]) -> Result<IdentityRecord, RegistryError> {
    Ok(bincode::deserialize(bytes)?)
}
