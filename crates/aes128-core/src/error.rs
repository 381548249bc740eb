//! Error type shared by key parsing and the block driver.

use thiserror::Error;

/// Failures surfaced by the engine.
#[derive(Debug, Error)]
pub enum Error {
    /// The master key did not decompose into exactly 16 bytes.
    #[error("invalid key length: expected 16 bytes, got {len}")]
    InvalidKeyLength {
        /// Number of bytes (or comma-separated fields) supplied.
        len: usize,
    },

    /// A comma-separated key field was not a decimal byte.
    #[error("invalid key byte at position {index}: {value:?}")]
    InvalidKeyByte {
        /// Zero-based field position.
        index: usize,
        /// The offending field, trimmed.
        value: String,
    },

    /// Reading the source or writing the destination failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
