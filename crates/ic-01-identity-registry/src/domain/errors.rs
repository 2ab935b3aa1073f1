//! # Domain Errors
//!
//! Error types for the Identity Registry subsystem.

use shared_types::{Address, AddressError, PaginationError};
use thiserror::Error;

/// Errors from the key-value store port.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KVStoreError {
    /// Underlying I/O failure.
    #[error("I/O error: {message}")]
    IOError { message: String },
}

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Create on an address that already holds a record.
    #[error("Address already has an identity: {address}")]
    AlreadyRegistered { address: Address },

    /// Address failed to decode.
    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    /// Page request mixes cursor and offset.
    #[error(transparent)]
    InvalidPagination(#[from] PaginationError),

    /// Message failed stateless validation.
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    /// Genesis state failed validation.
    #[error("Invalid genesis: {0}")]
    InvalidGenesis(String),

    /// Persistence failure.
    #[error("Store error: {0}")]
    StoreIo(#[from] KVStoreError),

    /// Stored bytes could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<bincode::Error> for RegistryError {
    fn from(e: bincode::Error) -> Self {
        RegistryError::Serialization(e.to_string())
    }
}
