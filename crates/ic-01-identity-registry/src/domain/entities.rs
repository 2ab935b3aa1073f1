//! # Domain Entities
//!
//! The identity record and the store key layout.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use shared_types::{Address, HexDigest, Timestamp, HEX_DIGEST_LEN};

/// Key prefix for identity records.
///
/// Full key: `identity/value/` || canonical address bytes.
pub const IDENTITY_KEY_PREFIX: &[u8] = b"identity/value/";

/// Registry entry binding an address to a hashed external identity reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// Account address (primary key).
    pub address: Address,
    /// Lowercase hex SHA-256 of the identity-document reference.
    pub id_hash: HexDigest,
    /// Creation time, seconds since epoch.
    pub created_at: Timestamp,
}

impl IdentityRecord {
    /// Build a record, hashing `id_secret`.
    pub fn new(address: Address, id_secret: &str, created_at: Timestamp) -> Self {
        Self {
            address,
            id_hash: hash_id_secret(id_secret),
            created_at,
        }
    }

    /// Store key of this record.
    pub fn key(&self) -> Vec<u8> {
        identity_key(&self.address)
    }
}

/// `hex(SHA-256(secret))`, lowercase.
pub fn hash_id_secret(secret: &str) -> HexDigest {
    hex::encode(Sha256::digest(secret.as_bytes()))
}

/// Whether `digest` looks like output of [`hash_id_secret`].
pub fn is_well_formed_id_hash(digest: &str) -> bool {
    digest.len() == HEX_DIGEST_LEN
        && digest
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

/// Key suffix (relative to [`IDENTITY_KEY_PREFIX`]) for `address`.
///
/// Page cursors are expressed in this relative form.
pub fn address_key(address: &Address) -> Vec<u8> {
    address.to_canonical().into_bytes()
}

/// Absolute store key for `address`.
pub fn identity_key(address: &Address) -> Vec<u8> {
    let suffix = address_key(address);
    let mut key = Vec::with_capacity(IDENTITY_KEY_PREFIX.len() + suffix.len());
    key.extend_from_slice(IDENTITY_KEY_PREFIX);
    key.extend_from_slice(&suffix);
    key
}
