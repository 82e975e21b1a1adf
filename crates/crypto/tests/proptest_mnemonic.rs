//! Property-based tests for mnemonic and key derivation
//!
//! Uses proptest to verify derivation invariants across many randomly
//! generated inputs.

use conduit_crypto::{derive_key_pair, derive_key_pair_from_phrase, KeyPair, Mnemonic};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))] // PBKDF2 stretching dominates runtime

    /// Property: derivation is deterministic
    ///
    /// The same phrase and path, parsed independently, always produce
    /// byte-identical key pairs.
    #[test]
    fn prop_derivation_determinism(path in "[ -~]{0,64}") {
        let mnemonic = Mnemonic::generate().expect("generate mnemonic");
        let phrase = mnemonic.phrase().to_string();

        let kp1 = derive_key_pair_from_phrase(&phrase, &path).expect("derive 1");
        let kp2 = derive_key_pair_from_phrase(&phrase, &path).expect("derive 2");

        prop_assert_eq!(kp1.private_key_bytes(), kp2.private_key_bytes());
        prop_assert_eq!(kp1.public_key(), kp2.public_key());
    }

    /// Property: paths are domain separated
    ///
    /// Distinct paths under the same mnemonic yield key pairs differing in
    /// both halves.
    #[test]
    fn prop_domain_separation(
        path1 in "[a-z/0-9]{1,32}",
        path2 in "[A-Z/0-9]{1,32}",
    ) {
        prop_assume!(path1 != path2);

        let mnemonic = Mnemonic::generate().expect("generate mnemonic");

        let kp1 = derive_key_pair(&mnemonic, &path1).expect("derive 1");
        let kp2 = derive_key_pair(&mnemonic, &path2).expect("derive 2");

        prop_assert_ne!(kp1.private_key_bytes(), kp2.private_key_bytes());
        prop_assert_ne!(kp1.public_key(), kp2.public_key());
    }

    /// Property: parsed keys preserve their bytes exactly
    #[test]
    fn prop_parse_preserves_bytes(bytes in prop::array::uniform32(any::<u8>())) {
        // Build an arbitrary but well-formed 64-byte private key from a
        // random seed, then re-parse it.
        let keypair = KeyPair::from_ed25519_seed(&bytes);
        let restored = KeyPair::from_private_key_bytes(keypair.private_key_bytes())
            .expect("parse");

        prop_assert_eq!(restored.private_key_bytes(), keypair.private_key_bytes());
        prop_assert_eq!(restored.public_key(), keypair.public_key());
    }

    /// Property: wrong-length inputs never parse
    #[test]
    fn prop_parse_rejects_non_64(len in 0usize..256) {
        prop_assume!(len != 64);
        let result = KeyPair::from_private_key_bytes(&vec![0u8; len]);
        prop_assert!(result.is_err());
    }

    /// Property: every derived key pair signs verifiably
    #[test]
    fn prop_derived_keys_sign(msg in prop::collection::vec(any::<u8>(), 0..256)) {
        let mnemonic = Mnemonic::generate().expect("generate mnemonic");
        let keypair = derive_key_pair(&mnemonic, "m/0").expect("derive");

        let sig = keypair.sign(&msg);
        prop_assert!(keypair.public_key().verify(&msg, &sig));
    }
}
