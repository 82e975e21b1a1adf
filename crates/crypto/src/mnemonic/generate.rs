//! Mnemonic phrase generation and parsing

use crate::error::{CryptoError, CryptoResult};
use bip39::Mnemonic as Bip39Mnemonic;
use rand::rngs::OsRng;
use rand::RngCore;
use secrecy::{ExposeSecret, SecretString};
use zeroize::Zeroizing;

/// Number of words in a Conduit mnemonic (256 bits of entropy)
pub const MNEMONIC_WORD_COUNT: usize = 24;

/// Entropy drawn for a fresh mnemonic, in bytes
const ENTROPY_SIZE: usize = 32;

/// BIP-39 mnemonic phrase wrapper
///
/// Always a 24-word English phrase encoding 256 bits of entropy plus the
/// embedded checksum; shorter word counts are rejected. The phrase is held
/// as a `SecretString` so it zeroizes on drop and never shows up in `Debug`
/// output.
pub struct Mnemonic {
    inner: Bip39Mnemonic,
    phrase: SecretString,
}

impl Mnemonic {
    /// Generate a new random 24-word mnemonic
    ///
    /// Draws 256 bits from the OS secure random source and encodes them as
    /// 24 words with the checksum word appended.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::RandomSource` if the OS random source cannot
    /// supply entropy. There is no fallback to a weaker source.
    pub fn generate() -> CryptoResult<Self> {
        let mut entropy = Zeroizing::new([0u8; ENTROPY_SIZE]);
        OsRng
            .try_fill_bytes(&mut entropy[..])
            .map_err(|e| CryptoError::RandomSource(e.to_string()))?;

        let inner = Bip39Mnemonic::from_entropy(&entropy[..])?;
        let phrase = inner.to_string();
        Ok(Self {
            inner,
            phrase: phrase.into(),
        })
    }

    /// Import a mnemonic from an existing phrase
    ///
    /// Normalizes whitespace and case, then checks every word against the
    /// English wordlist and verifies the checksum. Only 24-word phrases are
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidMnemonic` if a word is outside the
    /// wordlist, the checksum does not match, or the phrase is not 24 words.
    pub fn from_phrase(phrase: &str) -> CryptoResult<Self> {
        let normalized = phrase.trim().to_lowercase();
        let inner = Bip39Mnemonic::parse_normalized(&normalized)?;

        if inner.word_count() != MNEMONIC_WORD_COUNT {
            return Err(CryptoError::InvalidMnemonic(format!(
                "expected {} words, got {}",
                MNEMONIC_WORD_COUNT,
                inner.word_count()
            )));
        }

        Ok(Self {
            inner,
            phrase: normalized.into(),
        })
    }

    /// Check that a phrase is a valid 24-word mnemonic
    pub fn validate(phrase: &str) -> CryptoResult<()> {
        Self::from_phrase(phrase).map(|_| ())
    }

    /// The mnemonic phrase
    ///
    /// For backup display only; do not store the returned reference.
    pub fn phrase(&self) -> &str {
        self.phrase.expose_secret()
    }

    /// Number of words in the phrase
    pub fn word_count(&self) -> usize {
        self.inner.word_count()
    }

    /// Derive the 64-byte binary seed for this mnemonic
    ///
    /// BIP-39 key stretching: PBKDF2-HMAC-SHA512 over the phrase, 2048
    /// iterations, salted with `"mnemonic"`. The passphrase is fixed to
    /// empty — Conduit identities are recoverable from the phrase alone.
    pub fn to_seed(&self) -> [u8; 64] {
        self.inner.to_seed("")
    }
}

impl std::fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.word_count())
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}
