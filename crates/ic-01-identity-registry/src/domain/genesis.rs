//! # Genesis State
//!
//! Registry contents carried in (and exported to) a genesis file.

use crate::domain::entities::{is_well_formed_id_hash, IdentityRecord};
use crate::domain::errors::RegistryError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identity module genesis state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    /// Records to load at chain start, exported in key order.
    pub identities: Vec<IdentityRecord>,
}

impl GenesisState {
    pub fn new(identities: Vec<IdentityRecord>) -> Self {
        Self { identities }
    }

    /// Reject duplicate addresses and malformed digests.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut seen = HashSet::with_capacity(self.identities.len());
        for record in &self.identities {
            if !seen.insert(record.address) {
                return Err(RegistryError::InvalidGenesis(format!(
                    "duplicated identity for address {}",
                    record.address
                )));
            }
            if !is_well_formed_id_hash(&record.id_hash) {
                return Err(RegistryError::InvalidGenesis(format!(
                    "malformed id hash for address {}",
                    record.address
                )));
            }
        }
        Ok(())
    }
}
