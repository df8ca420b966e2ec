//! Property-based tests across the codec, mnemonic and key-tree layers

use hdcrypt_algorithms::ec::k256::{PrivateKey, PublicKey};
use hdcrypt_algorithms::SoftwareProvider;
use hdcrypt_sign::{ecdsa, schnorr, XOnlyPublicKey};
use hdcrypt_wallet::base58::{self, Base58Alphabet};
use hdcrypt_wallet::bip32::{ChildNumber, DerivationPath, ExtendedPrivateKey};
use hdcrypt_wallet::bip39;
use proptest::prelude::*;

fn alphabet() -> impl Strategy<Value = Base58Alphabet> {
    prop_oneof![Just(Base58Alphabet::Bitcoin), Just(Base58Alphabet::Ripple)]
}

/// 16, 20, 24, 28 or 32 random bytes
fn entropy() -> impl Strategy<Value = Vec<u8>> {
    (4usize..=8).prop_flat_map(|words| prop::collection::vec(any::<u8>(), words * 4))
}

fn private_key() -> impl Strategy<Value = PrivateKey> {
    any::<[u8; 32]>().prop_filter_map("not a valid scalar", |b| PrivateKey::from_bytes(&b).ok())
}

fn child_number() -> impl Strategy<Value = ChildNumber> {
    (any::<bool>(), 0u32..0x8000_0000).prop_map(|(hardened, i)| {
        if hardened {
            ChildNumber::Hardened(i)
        } else {
            ChildNumber::Normal(i)
        }
    })
}

proptest! {
    #[test]
    fn base58_roundtrip(data in prop::collection::vec(any::<u8>(), 0..80), alphabet in alphabet()) {
        let encoded = base58::encode_with_alphabet(&data, alphabet);
        prop_assert_eq!(base58::decode_with_alphabet(&encoded, alphabet).unwrap(), data);
    }

    #[test]
    fn base58_leading_zeros_map_one_to_one(zeros in 0usize..10, rest in prop::collection::vec(1u8.., 0..20)) {
        let mut data = vec![0u8; zeros];
        data.extend_from_slice(&rest);
        let encoded = base58::encode(&data);
        prop_assert_eq!(encoded.bytes().take_while(|&b| b == b'1').count(), zeros);
    }

    #[test]
    fn base58check_roundtrip(payload in prop::collection::vec(any::<u8>(), 0..80)) {
        let provider = SoftwareProvider::new();
        let encoded = base58::encode_check(&payload, &provider);
        prop_assert_eq!(base58::decode_check(&encoded, &provider).unwrap(), payload);
    }

    #[test]
    fn bip39_entropy_roundtrip(entropy in entropy()) {
        let provider = SoftwareProvider::new();
        let phrase = bip39::entropy_to_mnemonic(&entropy, &provider).unwrap();
        prop_assert!(bip39::validate(&phrase, &provider));
        prop_assert_eq!(phrase.split(' ').count(), entropy.len() * 3 / 4);
        let decoded = bip39::mnemonic_to_entropy(&phrase, &provider).unwrap();
        prop_assert_eq!(decoded.as_slice(), &entropy[..]);
    }

    #[test]
    fn child_number_text_roundtrip(child in child_number()) {
        let parsed: ChildNumber = child.to_string().parse().unwrap();
        prop_assert_eq!(parsed, child);
        prop_assert_eq!(ChildNumber::from_index(child.to_index()), child);
    }

    #[test]
    fn path_text_roundtrip(steps in prop::collection::vec(child_number(), 0..8)) {
        let path = DerivationPath::from(steps);
        let parsed: DerivationPath = path.to_string().parse().unwrap();
        prop_assert_eq!(parsed, path);
    }

    #[test]
    fn sec1_roundtrip(key in private_key()) {
        let public_key = key.public_key();
        prop_assert_eq!(PublicKey::from_slice(&public_key.to_compressed()).unwrap(), public_key);
        prop_assert_eq!(PublicKey::from_slice(&public_key.to_uncompressed()).unwrap(), public_key);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn ecdsa_sign_verify(key in private_key(), digest in any::<[u8; 32]>()) {
        let provider = SoftwareProvider::new();
        let sig = ecdsa::sign(&digest, &key, &provider).unwrap();
        prop_assert!(sig.is_low_s());
        prop_assert!(ecdsa::verify(&digest, &sig, &key.public_key()));

        let mut other = digest;
        other[0] ^= 1;
        prop_assert!(!ecdsa::verify(&other, &sig, &key.public_key()));
    }

    #[test]
    fn schnorr_sign_verify(key in private_key(), message in any::<[u8; 32]>(), aux in any::<[u8; 32]>()) {
        let provider = SoftwareProvider::new();
        let sig = schnorr::sign_with_aux(&message, &key, &aux, &provider).unwrap();
        let x_only = XOnlyPublicKey::from_private(&key);
        prop_assert!(schnorr::verify(&message, &sig, &x_only, &provider));

        let mut other = message;
        other[31] ^= 0x80;
        prop_assert!(!schnorr::verify(&other, &sig, &x_only, &provider));
    }

    #[test]
    fn bip32_public_derivation_matches_private(
        seed in prop::collection::vec(any::<u8>(), 16..=64),
        a in 0u32..0x8000_0000,
        b in 0u32..0x8000_0000,
    ) {
        let provider = SoftwareProvider::new();
        let master = ExtendedPrivateKey::new_master(&seed, &provider).unwrap();
        let path = DerivationPath::from(vec![ChildNumber::Normal(a), ChildNumber::Normal(b)]);

        let private = master.derive_path(&path, &provider).unwrap();
        let public = master.public_key().derive_path(&path, &provider).unwrap();
        prop_assert_eq!(private.public_key(), public);
    }

    #[test]
    fn bip32_derivation_composes(
        seed in prop::collection::vec(any::<u8>(), 16..=64),
        first in prop::collection::vec(child_number(), 0..3),
        second in prop::collection::vec(child_number(), 0..3),
    ) {
        let provider = SoftwareProvider::new();
        let master = ExtendedPrivateKey::new_master(&seed, &provider).unwrap();

        let mut joined = first.clone();
        joined.extend_from_slice(&second);
        let direct = master.derive_path(&DerivationPath::from(joined), &provider).unwrap();
        let stepped = master
            .derive_path(&DerivationPath::from(first), &provider)
            .unwrap()
            .derive_path(&DerivationPath::from(second), &provider)
            .unwrap();
        prop_assert_eq!(direct, stepped);
    }
}
