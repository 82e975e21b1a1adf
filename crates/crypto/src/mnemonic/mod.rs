//! Mnemonic-based identity keys for Conduit
//!
//! A Conduit client identity is an Ed25519 key pair derived from a 24-word
//! BIP-39 mnemonic plus a domain-separation path:
//!
//! ```text
//! phrase ──BIP-39──▶ 64-byte seed ──HKDF-SHA-256──▶ Ed25519 seed ──▶ KeyPair
//!                                   (info = context || path)
//! ```
//!
//! # Example
//!
//! ```rust
//! use conduit_crypto::mnemonic::{derive_key_pair, Mnemonic};
//!
//! // Generate a new backup phrase
//! let mnemonic = Mnemonic::generate().unwrap();
//!
//! // Derive the client identity for a path
//! let keypair = derive_key_pair(&mnemonic, "m/0").unwrap();
//! println!("identity: {:?}", keypair.public_key());
//! ```
//!
//! # Security
//!
//! - The same mnemonic and path always produce the same key pair
//! - Distinct paths produce uncorrelated key pairs from one mnemonic
//! - Mnemonic phrases should be stored securely offline

mod derive;
mod generate;

pub use derive::{derive_key_pair, derive_key_pair_from_phrase, KEY_DERIVATION_CONTEXT};
pub use generate::{Mnemonic, MNEMONIC_WORD_COUNT};
