//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Result alias for cipher operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Input-validation failures. All are deterministic; retrying cannot help.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Key is not 16 bytes and no normalization policy was applied.
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Required key length.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Trailing length byte or padding bytes are inconsistent.
    #[error("invalid padding")]
    InvalidPadding,

    /// Ciphertext length is not a positive multiple of the block size.
    #[error("invalid block length: {len} is not a positive multiple of 16")]
    InvalidBlockLength {
        /// Length that was supplied.
        len: usize,
    },
}
