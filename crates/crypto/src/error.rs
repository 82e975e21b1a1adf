//! Cryptographic error types

use thiserror::Error;

/// Result type for key derivation operations
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur during key generation and derivation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The secure random source could not supply entropy
    #[error("secure random source failed: {0}")]
    RandomSource(String),

    /// Invalid mnemonic phrase (bad checksum, unknown word, or wrong word count)
    #[error("invalid mnemonic phrase: {0}")]
    InvalidMnemonic(String),

    /// The HKDF expand step was asked for more output than it can produce
    #[error("key expansion failed: requested output length exceeds HKDF limit")]
    KeyExpansion,

    /// Raw private key bytes have the wrong length
    #[error("invalid private key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },
}

impl From<bip39::Error> for CryptoError {
    fn from(err: bip39::Error) -> Self {
        CryptoError::InvalidMnemonic(err.to_string())
    }
}
