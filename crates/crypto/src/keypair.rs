//! Ed25519 identity key pairs
//!
//! A Conduit identity is an Ed25519 key pair. The private key uses the
//! standard 64-byte expanded encoding: the 32-byte seed followed by the
//! 32-byte public key derived from it. This matches the on-disk format the
//! client persists, so a stored key re-hydrates with
//! [`KeyPair::from_private_key_bytes`].

use crate::error::{CryptoError, CryptoResult};
use ed25519_consensus::{
    Signature as Ed25519Sig, SigningKey as Ed25519Secret, VerificationKey as Ed25519Pubkey,
};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, Zeroizing};

/// Length of an Ed25519 seed in bytes
pub const ED25519_SEED_SIZE: usize = 32;

/// Length of a serialized public key in bytes
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Length of the expanded private key encoding in bytes (seed || public key)
pub const PRIVATE_KEY_SIZE: usize = 64;

/// Ed25519 identity key pair
///
/// Holds the 64-byte expanded private key. The public key is always the
/// trailing 32 bytes of that encoding; key pairs produced by generation or
/// derivation satisfy this by construction, while
/// [`from_private_key_bytes`](Self::from_private_key_bytes) trusts the
/// caller's serialization.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct KeyPair {
    private: [u8; PRIVATE_KEY_SIZE],
}

impl KeyPair {
    /// Generate a new random key pair from the OS secure random source
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::RandomSource` if the OS random source cannot
    /// supply entropy. No weaker source is ever used as a fallback.
    pub fn generate() -> CryptoResult<Self> {
        let mut seed = Zeroizing::new([0u8; ED25519_SEED_SIZE]);
        OsRng
            .try_fill_bytes(&mut seed[..])
            .map_err(|e| CryptoError::RandomSource(e.to_string()))?;
        Ok(Self::from_ed25519_seed(&seed))
    }

    /// Expand a 32-byte Ed25519 seed into a key pair
    ///
    /// Deterministically computes the public key from the seed and builds
    /// the 64-byte private encoding (seed || public key).
    pub fn from_ed25519_seed(seed: &[u8; ED25519_SEED_SIZE]) -> Self {
        let secret = Ed25519Secret::from(*seed);
        let public = secret.verification_key().to_bytes();

        let mut private = [0u8; PRIVATE_KEY_SIZE];
        private[..ED25519_SEED_SIZE].copy_from_slice(seed);
        private[ED25519_SEED_SIZE..].copy_from_slice(&public);
        Self { private }
    }

    /// Re-hydrate a key pair from a previously serialized 64-byte private key
    ///
    /// The trailing 32 bytes are taken as the public key without
    /// re-deriving it from the leading seed; a mismatched pair is accepted
    /// as-is, matching the stored-key format this client has always used.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidKeyLength` if `bytes` is not exactly
    /// 64 bytes.
    pub fn from_private_key_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != PRIVATE_KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: PRIVATE_KEY_SIZE,
                actual: bytes.len(),
            });
        }

        let mut private = [0u8; PRIVATE_KEY_SIZE];
        private.copy_from_slice(bytes);
        Ok(Self { private })
    }

    /// The 64-byte expanded private key (seed || public key)
    pub fn private_key_bytes(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.private
    }

    /// The 32-byte public key (trailing half of the private encoding)
    pub fn public_key(&self) -> PublicKey {
        let mut bytes = [0u8; PUBLIC_KEY_SIZE];
        bytes.copy_from_slice(&self.private[ED25519_SEED_SIZE..]);
        PublicKey(bytes)
    }

    /// Sign a message with this identity
    pub fn sign(&self, msg: &[u8]) -> Signature {
        let mut seed = [0u8; ED25519_SEED_SIZE];
        seed.copy_from_slice(&self.private[..ED25519_SEED_SIZE]);
        let secret = Ed25519Secret::from(seed);
        seed.zeroize();
        Signature(secret.sign(msg).to_bytes())
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("private", &"[REDACTED]")
            .field("public", &self.public_key())
            .finish()
    }
}

/// Ed25519 public key (32 bytes)
///
/// Carries raw bytes only; point validity is checked when verifying.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey([u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    /// Load from bytes (32 bytes)
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Serialize to bytes (32 bytes)
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Verify a signature over `msg`
    ///
    /// Returns `false` if the bytes do not decode to a valid curve point
    /// or the signature does not verify.
    pub fn verify(&self, msg: &[u8], sig: &Signature) -> bool {
        match Ed25519Pubkey::try_from(self.0) {
            Ok(pubkey) => pubkey.verify(&Ed25519Sig::from(sig.0), msg).is_ok(),
            Err(_) => false,
        }
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({})", hex::encode(&self.0[..8]))
    }
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&hex::encode(self.0))
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes = if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            hex::decode(&s).map_err(serde::de::Error::custom)?
        } else {
            Vec::<u8>::deserialize(deserializer)?
        };

        let arr: [u8; PUBLIC_KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("invalid public key length"))?;
        Ok(Self(arr))
    }
}

/// Ed25519 signature (64 bytes)
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature([u8; 64]);

impl Signature {
    /// Load from bytes (64 bytes)
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Serialize to bytes (64 bytes)
    pub fn to_bytes(&self) -> [u8; 64] {
        self.0
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signature({})", hex::encode(&self.0[..8]))
    }
}
