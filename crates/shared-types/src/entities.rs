//! # Core Ledger Entities
//!
//! Scalar aliases used across subsystems.

/// Seconds since the Unix epoch.
pub type Timestamp = u64;

/// Height of a block in the chain. Genesis is height 0 unless configured otherwise.
pub type BlockHeight = u64;

/// Lowercase hex rendering of a 32-byte SHA-256 digest.
pub type HexDigest = String;

/// Length of a hex-encoded SHA-256 digest.
pub const HEX_DIGEST_LEN: usize = 64;
