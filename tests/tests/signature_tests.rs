//! Integration tests for the secp256k1 signature schemes

use hdcrypt_algorithms::ec::k256::{self, PrivateKey};
use hdcrypt_algorithms::SoftwareProvider;
use hdcrypt_api::{CryptoProvider, Signature};
use hdcrypt_sign::{ecdsa, schnorr, EcdsaSecp256k1, EcdsaSignature, SchnorrBip340, SchnorrSignature};
use hdcrypt_tests::init_tracing;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Sign, verify, then check a tampered message fails, for any scheme
fn roundtrip<S: Signature<SecretKey = PrivateKey>>(provider: &SoftwareProvider) {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5167);
    let (secret_key, _) = k256::generate_keypair(&mut rng);
    let public_key = S::public_key(&secret_key).unwrap();

    let message = provider.sha256(b"Test message for signature");
    let signature = S::sign(&message, &secret_key, provider).unwrap();
    assert!(S::verify(&message, &signature, &public_key, provider), "{}", S::name());

    let modified = provider.sha256(b"Modified message that should not verify");
    assert!(!S::verify(&modified, &signature, &public_key, provider), "{}", S::name());
}

#[test]
fn test_signature_trait_roundtrips() {
    init_tracing();
    let provider = SoftwareProvider::new();
    roundtrip::<EcdsaSecp256k1>(&provider);
    roundtrip::<SchnorrBip340>(&provider);
    assert_eq!(EcdsaSecp256k1::name(), "ECDSA-secp256k1");
    assert_eq!(SchnorrBip340::name(), "BIP340-Schnorr");
}

#[test]
fn test_ecdsa_encodings() {
    let provider = SoftwareProvider::new();
    let key = PrivateKey::generate(&provider).unwrap();
    let digest = provider.sha256(b"encodings");
    let sig = ecdsa::sign(&digest, &key, &provider).unwrap();

    let der = sig.to_der();
    assert_eq!(der[0], 0x30);
    assert_eq!(EcdsaSignature::from_der(&der).unwrap(), sig);

    let compact = sig.to_compact();
    assert_eq!(EcdsaSignature::from_compact(&compact).unwrap(), sig);
    assert!(ecdsa::verify_compact(
        &digest,
        &compact,
        &key.public_key().to_uncompressed()
    ));
    assert!(!ecdsa::verify_compact(&digest, &compact[..63], &key.public_key().to_compressed()));
}

#[test]
fn test_ecdsa_is_deterministic() {
    let provider = SoftwareProvider::new();
    let key = PrivateKey::generate(&provider).unwrap();
    let digest = provider.sha256(b"same input, same output");
    assert_eq!(
        ecdsa::sign(&digest, &key, &provider).unwrap(),
        ecdsa::sign(&digest, &key, &provider).unwrap()
    );
}

#[test]
fn test_ecdsa_rejects_high_s() {
    let provider = SoftwareProvider::new();
    let key = PrivateKey::generate(&provider).unwrap();
    let digest = provider.sha256(b"malleability");
    let sig = ecdsa::sign(&digest, &key, &provider).unwrap();

    let high = EcdsaSignature::from_scalars(sig.r().clone(), sig.s().negate()).unwrap();
    assert!(!high.is_low_s());
    assert!(!ecdsa::verify(&digest, &high, &key.public_key()));
    assert_eq!(high.normalize_s(), sig);
}

#[test]
fn test_schnorr_bytes_api() {
    let provider = SoftwareProvider::new();
    let key = PrivateKey::generate(&provider).unwrap();
    let message = provider.sha256(b"x-only keys");
    let sig = schnorr::sign_deterministic(&message, &key, &provider).unwrap();
    let bytes = sig.to_bytes();
    let x_only = key.public_key().x_only_bytes();

    assert!(schnorr::verify_bytes(&message, &bytes, &x_only, &provider));
    assert_eq!(SchnorrSignature::from_bytes(&bytes).unwrap(), sig);
    assert!(!schnorr::verify_bytes(&message, &bytes[..63], &x_only, &provider));
    assert!(!schnorr::verify_bytes(&message, &bytes, &[0u8; 32], &provider));

    // fresh aux randomness changes the signature, not its validity
    let randomized = schnorr::sign(&message, &key, &provider).unwrap();
    assert_ne!(randomized, sig);
    assert!(schnorr::verify_bytes(&message, &randomized.to_bytes(), &x_only, &provider));
}
