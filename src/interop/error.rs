use thiserror::Error;
use rand::rand_core;

use crate::interop::mode::LegacyMode;

/// Interop Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Interop Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Modern engine output (with trailing NULs stripped) did not match the hex plaintext
    /// that was encrypted by the legacy engine.
    #[error("{mode}: {actual}")]
    Mismatch { mode: LegacyMode, actual: String },

    /// Attempted to build a key from a slice that is not 128, 192, or 256 bits.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },

    /// Attempted to build an IV from a slice that is not exactly one block.
    #[error("invalid IV length: {len} bytes (expected 16)")]
    InvalidIvLength { len: usize },

    /// Mode requires an IV but none was supplied.
    #[error("mode {mode} requires a 16-byte IV")]
    MissingIv { mode: &'static str },

    /// Provided ciphertext that did not match the expected format of the mode of operation.
    #[error("invalid ciphertext length: {len} bytes ({context})")]
    InvalidCiphertext { len: usize, context: &'static str },

    /// Legacy mode has no counterpart in the modern engine.
    #[error("unsupported mode {mode}: {reason}")]
    UnsupportedMode { mode: LegacyMode, reason: &'static str },

    /// OS RNG failed while seeding or drawing key material.
    #[error("OS RNG failed")]
    Rng(#[from] rand_core::OsError),
}
