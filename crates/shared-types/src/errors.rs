//! # Error Types
//!
//! Defines error types used across subsystems.

use thiserror::Error;

/// Errors produced while decoding a human-readable address.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Input was empty (or only the prefix).
    #[error("Empty address")]
    Empty,

    /// Decoded payload has the wrong length.
    #[error("Invalid address length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Payload is not valid hex.
    #[error("Invalid address encoding: {0}")]
    InvalidEncoding(String),
}

/// Errors produced while interpreting a page request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaginationError {
    /// Cursor and offset paging are mutually exclusive.
    #[error("Invalid pagination: key and offset cannot both be set")]
    KeyAndOffset,
}
