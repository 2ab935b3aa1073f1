//! # Gate Errors
//!
//! Every variant rejects the whole transaction. None are retried.

use shared_types::Address;
use thiserror::Error;

/// Why the identity gate rejected a transaction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateError {
    /// No signer could be derived from a non-exempt message.
    #[error("Cannot determine signer for message type {type_url}")]
    SignerUnresolved { type_url: String },

    #[error("Signer {address} has no registered identity")]
    UnregisteredSigner { address: Address },

    #[error("Recipient {address} has no registered identity")]
    UnregisteredRecipient { address: Address },

    /// An address string in the message does not decode.
    #[error("Invalid address in message: {raw:?}")]
    InvalidAddress { raw: String },

    /// A generic message claims a transfer type URL but its fields do not
    /// match the transfer shape.
    #[error("Malformed {type_url} message: {reason}")]
    MalformedTransfer { type_url: String, reason: String },

    /// Registry read failed.
    #[error("Identity store error: {0}")]
    StoreIo(String),
}

/// Failure of any ante pipeline step.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnteError {
    #[error("Identity gate: {0}")]
    Gate(#[from] GateError),

    /// Rejection from a decorator other than the identity gate.
    #[error("{decorator}: {reason}")]
    Rejected { decorator: String, reason: String },
}

impl AnteError {
    pub fn rejected(decorator: impl Into<String>, reason: impl Into<String>) -> Self {
        AnteError::Rejected {
            decorator: decorator.into(),
            reason: reason.into(),
        }
    }

    /// The gate error, if the identity gate produced this failure.
    pub fn as_gate_error(&self) -> Option<&GateError> {
        match self {
            AnteError::Gate(e) => Some(e),
            AnteError::Rejected { .. } => None,
        }
    }
}
