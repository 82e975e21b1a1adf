//! Cryptographic identity for the Conduit in-proxy client
//!
//! This crate provides:
//! - BIP-39 mnemonic generation and validation (24 words, 256-bit entropy)
//! - Deterministic Ed25519 key derivation from a mnemonic and path
//! - Raw private key parsing for stored identities
//!
//! All operations are pure functions of their inputs (generation also reads
//! the OS secure random source) and are safe to call concurrently. The
//! derivation pipeline is an interoperability contract: its output must be
//! bit-identical across implementations, so the constants in
//! [`mnemonic::KEY_DERIVATION_CONTEXT`] and the key encodings in
//! [`keypair`] must not change.

pub mod error;
pub mod keypair;
pub mod mnemonic;

pub use error::{CryptoError, CryptoResult};
pub use keypair::{
    KeyPair, PublicKey, Signature, ED25519_SEED_SIZE, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE,
};
pub use mnemonic::{
    derive_key_pair, derive_key_pair_from_phrase, Mnemonic, KEY_DERIVATION_CONTEXT,
    MNEMONIC_WORD_COUNT,
};
