//! Benchmarks for the wallet layer: seed stretching, key-tree derivation
//! and Base58Check.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hdcrypt_algorithms::SoftwareProvider;
use hdcrypt_wallet::base58;
use hdcrypt_wallet::bip32::{ChildNumber, DerivationPath, ExtendedPrivateKey, Network};
use hdcrypt_wallet::bip39::Mnemonic;

const PHRASE: &str = "abandon abandon abandon abandon abandon abandon \
                      abandon abandon abandon abandon abandon about";

fn bench_bip39(c: &mut Criterion) {
    let mut group = c.benchmark_group("bip39");
    let provider = SoftwareProvider::new();
    let mnemonic = Mnemonic::parse(PHRASE, &provider).unwrap();

    group.bench_function("parse", |b| {
        b.iter(|| black_box(Mnemonic::parse(black_box(PHRASE), &provider)))
    });

    // 2048 rounds of PBKDF2-HMAC-SHA512 dominate here
    group.sample_size(20);
    group.bench_function("to_seed", |b| {
        b.iter(|| black_box(mnemonic.to_seed(black_box("TREZOR"), &provider)))
    });

    group.finish();
}

fn bench_bip32(c: &mut Criterion) {
    let mut group = c.benchmark_group("bip32");
    let provider = SoftwareProvider::new();
    let master = ExtendedPrivateKey::new_master(&[7u8; 64], &provider).unwrap();
    let xpub = master.public_key();

    group.bench_function("ckd_priv_hardened", |b| {
        b.iter(|| black_box(master.derive_child(ChildNumber::Hardened(0), &provider)))
    });
    group.bench_function("ckd_priv_normal", |b| {
        b.iter(|| black_box(master.derive_child(ChildNumber::Normal(0), &provider)))
    });
    group.bench_function("ckd_pub", |b| {
        b.iter(|| black_box(xpub.derive_child(ChildNumber::Normal(0), &provider)))
    });

    for path in ["m/0'", "m/44'/0'/0'/0/0"] {
        let parsed: DerivationPath = path.parse().unwrap();
        group.bench_with_input(BenchmarkId::new("derive_path", path), &parsed, |b, p| {
            b.iter(|| black_box(master.derive_path(p, &provider)))
        });
    }

    let encoded = master.to_base58(Network::Mainnet, &provider);
    group.bench_function("xprv_roundtrip", |b| {
        b.iter(|| {
            let (node, network) = ExtendedPrivateKey::from_base58(black_box(&encoded), &provider).unwrap();
            black_box(node.to_base58(network, &provider))
        })
    });

    group.finish();
}

fn bench_base58(c: &mut Criterion) {
    let mut group = c.benchmark_group("base58");
    let provider = SoftwareProvider::new();

    for size in [21usize, 82] {
        let data: Vec<u8> = (0..size as u8).collect();
        let encoded = base58::encode_check(&data, &provider);
        group.bench_with_input(BenchmarkId::new("encode_check", size), &data, |b, d| {
            b.iter(|| black_box(base58::encode_check(d, &provider)))
        });
        group.bench_with_input(BenchmarkId::new("decode_check", size), &encoded, |b, e| {
            b.iter(|| black_box(base58::decode_check(e, &provider)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bip39, bench_bip32, bench_base58);
criterion_main!(benches);
