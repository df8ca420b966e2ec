//! Official BIP32 and BIP39 vectors, loaded from `tests/vectors/*.json`

use hdcrypt_algorithms::SoftwareProvider;
use hdcrypt_tests::vectors::{bip32_vectors, bip39_vectors, run_bip32, run_bip39};
use hdcrypt_tests::init_tracing;

#[test]
fn bip39_english_vectors() {
    init_tracing();
    let provider = SoftwareProvider::new();
    let vectors = bip39_vectors().expect("bip39.json loads");
    assert_eq!(vectors.len(), 20);

    let mut failures = Vec::new();
    for (i, vector) in vectors.iter().enumerate() {
        if let Err(e) = run_bip39(vector, &provider) {
            failures.push(format!("vector {}: {}", i, e));
        }
    }
    assert!(failures.is_empty(), "{:#?}", failures);
}

#[test]
fn bip32_vectors_1_to_4() {
    init_tracing();
    let provider = SoftwareProvider::new();
    let vectors = bip32_vectors().expect("bip32.json loads");
    assert_eq!(vectors.len(), 4);

    for (i, vector) in vectors.iter().enumerate() {
        if let Err(e) = run_bip32(vector, &provider) {
            panic!("test vector {}: {}", i + 1, e);
        }
    }
}

#[test]
fn runner_reports_mismatches() {
    let provider = SoftwareProvider::new();
    let mut vector = bip39_vectors().expect("bip39.json loads")[0].clone();
    vector.passphrase = "not TREZOR".into();
    let err = run_bip39(&vector, &provider).unwrap_err();
    assert!(err.to_string().starts_with("seed mismatch"), "{}", err);
}
