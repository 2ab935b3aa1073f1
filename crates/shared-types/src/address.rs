//! # Account Address
//!
//! 20-byte account address with a human-readable hex form.
//!
//! ## Normalization
//!
//! Decoding accepts an optional `0x`/`0X` prefix and any hex case. Encoding
//! always yields the canonical form: `0x` followed by 40 lowercase hex digits.
//! Registry keys are built from the canonical form, so two spellings of the
//! same address can never produce two records.

use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::errors::AddressError;

/// Raw address length in bytes.
pub const ADDRESS_LEN: usize = 20;

/// Prefix of the canonical human-readable form.
pub const ADDRESS_PREFIX: &str = "0x";

/// Ethereum-style account address.
///
/// Serializes as its canonical string so genesis files and stored records stay
/// human-readable.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, SerializeDisplay, DeserializeFromStr,
)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    /// Wrap raw bytes.
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Canonical human-readable form (`0x` + lowercase hex).
    pub fn to_canonical(&self) -> String {
        format!("{}{}", ADDRESS_PREFIX, hex::encode(self.0))
    }

    /// Decode `raw` and return its canonical form.
    pub fn normalize(raw: &str) -> Result<String, AddressError> {
        raw.parse::<Address>().map(|a| a.to_canonical())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let body = trimmed
            .strip_prefix(ADDRESS_PREFIX)
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if body.is_empty() {
            return Err(AddressError::Empty);
        }

        let bytes = hex::decode(body).map_err(|e| AddressError::InvalidEncoding(e.to_string()))?;
        let array: [u8; ADDRESS_LEN] =
            bytes
                .as_slice()
                .try_into()
                .map_err(|_| AddressError::InvalidLength {
                    expected: ADDRESS_LEN,
                    actual: bytes.len(),
                })?;

        Ok(Self(array))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_canonical())
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}
