//! # Identity Module Messages
//!
//! Transaction messages owned by the identity module. Both are bootstrap
//! messages: the identity gate must let them through for addresses that have
//! no identity yet, otherwise nobody could ever register.

use crate::domain::errors::RegistryError;
use serde::{Deserialize, Serialize};
use shared_types::Address;

/// Type URL of [`MsgCreateIdentity`].
pub const MSG_CREATE_IDENTITY_TYPE_URL: &str = "/identity.v1.MsgCreateIdentity";

/// Type URL of the identity module's parameter-update message.
pub const MSG_UPDATE_PARAMS_TYPE_URL: &str = "/identity.v1.MsgUpdateParams";

/// Register an identity for `creator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateIdentity {
    /// Address registering itself (human-readable form).
    pub creator: String,
    /// External identity-document reference. Only its hash is stored.
    pub id_secret: String,
}

impl MsgCreateIdentity {
    pub fn new(creator: impl Into<String>, id_secret: impl Into<String>) -> Self {
        Self {
            creator: creator.into(),
            id_secret: id_secret.into(),
        }
    }

    pub fn type_url(&self) -> &'static str {
        MSG_CREATE_IDENTITY_TYPE_URL
    }

    /// Stateless checks: creator decodes, secret is non-empty.
    pub fn validate_basic(&self) -> Result<Address, RegistryError> {
        let creator = self
            .creator
            .parse::<Address>()
            .map_err(|e| RegistryError::InvalidMessage(format!("invalid creator address ({})", e)))?;

        if self.id_secret.is_empty() {
            return Err(RegistryError::InvalidMessage(
                "identity document reference cannot be empty".to_string(),
            ));
        }

        Ok(creator)
    }
}
