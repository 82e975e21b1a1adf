//! Identity key derivation from mnemonic phrases
//!
//! Expands the BIP-39 seed of a mnemonic into an Ed25519 key pair with
//! HKDF-SHA-256, using a fixed context string plus a caller-supplied path
//! for domain separation. The path carries no structure — its raw bytes are
//! appended to the context verbatim — so one mnemonic can safely back any
//! number of unrelated identities, one per path.

use crate::error::{CryptoError, CryptoResult};
use crate::keypair::{KeyPair, ED25519_SEED_SIZE};
use crate::mnemonic::Mnemonic;
use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroizing;

/// Domain-separation context for Conduit identity keys
///
/// Interoperability constant: every implementation deriving or verifying a
/// Conduit identity must use these exact bytes as the HKDF info prefix.
pub const KEY_DERIVATION_CONTEXT: &[u8] = b"conduit-inproxy-key";

/// Derive an Ed25519 identity key pair from a mnemonic and path
///
/// Deterministic: the same `(mnemonic, path)` always yields a byte-identical
/// key pair, and distinct paths yield uncorrelated key pairs.
///
/// # Errors
///
/// Returns `CryptoError::KeyExpansion` if HKDF cannot produce the requested
/// output length (unreachable at 32 bytes, but checked rather than assumed).
pub fn derive_key_pair(mnemonic: &Mnemonic, path: &str) -> CryptoResult<KeyPair> {
    let seed = Zeroizing::new(mnemonic.to_seed());
    let info = derivation_info(path);

    // Extract-and-expand with an explicit zero-length salt
    let hkdf = Hkdf::<Sha256>::new(Some(&[]), &seed[..]);
    let mut ed25519_seed = Zeroizing::new([0u8; ED25519_SEED_SIZE]);
    hkdf.expand(&info, &mut ed25519_seed[..])
        .map_err(|_| CryptoError::KeyExpansion)?;

    Ok(KeyPair::from_ed25519_seed(&ed25519_seed))
}

/// Validate a phrase and derive an identity key pair from it
///
/// String-level entry point for callers holding a user-supplied phrase.
///
/// # Errors
///
/// Returns `CryptoError::InvalidMnemonic` if the phrase fails wordlist,
/// checksum, or word-count validation; otherwise as [`derive_key_pair`].
pub fn derive_key_pair_from_phrase(phrase: &str, path: &str) -> CryptoResult<KeyPair> {
    let mnemonic = Mnemonic::from_phrase(phrase)?;
    derive_key_pair(&mnemonic, path)
}

/// HKDF info bytes for a path: the fixed context with the raw path bytes
/// appended directly, no separator. An empty path yields exactly the context.
fn derivation_info(path: &str) -> Vec<u8> {
    let mut info = Vec::with_capacity(KEY_DERIVATION_CONTEXT.len() + path.len());
    info.extend_from_slice(KEY_DERIVATION_CONTEXT);
    if !path.is_empty() {
        info.extend_from_slice(path.as_bytes());
    }
    info
}
