//! Benchmarks for the secp256k1 signature schemes (ECDSA and BIP340 Schnorr).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hdcrypt_algorithms::ec::k256::PrivateKey;
use hdcrypt_algorithms::SoftwareProvider;
use hdcrypt_api::Signature;
use hdcrypt_sign::{EcdsaSecp256k1, SchnorrBip340};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Benchmark signing for both schemes
fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("secp256k1_sign");

    // Fixed RNG for reproducibility
    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
    let sk = PrivateKey::generate_with_rng(&mut rng);
    let provider = SoftwareProvider::new();
    let message = [0xa5u8; 32];

    group.bench_function("ecdsa", |b| {
        b.iter(|| {
            let _ = black_box(EcdsaSecp256k1::sign(black_box(&message), &sk, &provider));
        });
    });

    group.bench_function("schnorr", |b| {
        b.iter(|| {
            let _ = black_box(SchnorrBip340::sign(black_box(&message), &sk, &provider));
        });
    });

    group.bench_function("schnorr_deterministic", |b| {
        b.iter(|| {
            let _ = black_box(hdcrypt_sign::schnorr::sign_deterministic(
                black_box(&message),
                &sk,
                &provider,
            ));
        });
    });

    group.finish();
}

/// Benchmark verification for both schemes
fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("secp256k1_verify");

    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
    let sk = PrivateKey::generate_with_rng(&mut rng);
    let provider = SoftwareProvider::new();
    let message = [0xa5u8; 32];

    let ecdsa_pk = EcdsaSecp256k1::public_key(&sk).unwrap();
    let ecdsa_sig = EcdsaSecp256k1::sign(&message, &sk, &provider).unwrap();
    group.bench_function("ecdsa", |b| {
        b.iter(|| {
            black_box(EcdsaSecp256k1::verify(
                black_box(&message),
                &ecdsa_sig,
                &ecdsa_pk,
                &provider,
            ))
        });
    });

    let schnorr_pk = SchnorrBip340::public_key(&sk).unwrap();
    let schnorr_sig = SchnorrBip340::sign(&message, &sk, &provider).unwrap();
    group.bench_function("schnorr", |b| {
        b.iter(|| {
            black_box(SchnorrBip340::verify(
                black_box(&message),
                &schnorr_sig,
                &schnorr_pk,
                &provider,
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_sign, bench_verify);
criterion_main!(benches);
