//! Mnemonic to address, end to end

use hdcrypt_algorithms::ec::k256::{self, PublicKey};
use hdcrypt_algorithms::SoftwareProvider;
use hdcrypt_api::Error;
use hdcrypt_sign::{ecdsa, schnorr, XOnlyPublicKey};
use hdcrypt_tests::init_tracing;
use hdcrypt_wallet::address::{p2pkh_address, parse_p2pkh, ripple_address};
use hdcrypt_wallet::bip32::{ChildNumber, DerivationPath, ExtendedPrivateKey, ExtendedPublicKey, Network};
use hdcrypt_wallet::bip39::{Mnemonic, WordCount};

const PHRASE: &str = "abandon abandon abandon abandon abandon abandon \
                      abandon abandon abandon abandon abandon about";

fn account(provider: &SoftwareProvider, coin: u32) -> ExtendedPrivateKey {
    let seed = Mnemonic::parse(PHRASE, provider).unwrap().to_seed("", provider);
    let master = ExtendedPrivateKey::new_master(seed.as_bytes(), provider).unwrap();
    let path: DerivationPath = format!("m/44'/{}'/0'", coin).parse().unwrap();
    master.derive_path(&path, provider).unwrap()
}

#[test]
fn mnemonic_to_bitcoin_and_ripple_addresses() {
    init_tracing();
    let provider = SoftwareProvider::new();

    let btc = account(&provider, 0)
        .derive_path(&"m/0/0".parse().unwrap(), &provider)
        .unwrap();
    assert_eq!(
        p2pkh_address(btc.public_key().public_key(), Network::Mainnet, &provider),
        "1LqBGSKuX5yYUonjxT5qGfpUsXKYYWeabA"
    );

    let xrp = account(&provider, 144)
        .derive_path(&"m/0/0".parse().unwrap(), &provider)
        .unwrap();
    assert_eq!(
        ripple_address(xrp.public_key().public_key(), &provider),
        "rHsMGQEkVNJmpGWs8XUBoTBiAAbwxZN5v3"
    );
}

#[test]
fn watch_only_wallet_tracks_spending_wallet() {
    init_tracing();
    let provider = SoftwareProvider::new();
    let account = account(&provider, 0);

    // the account xpub is all a watch-only wallet holds
    let xpub = account.public_key().to_base58(Network::Mainnet, &provider);
    let (watch, network) = ExtendedPublicKey::from_base58(&xpub, &provider).unwrap();
    assert_eq!(network, Network::Mainnet);

    for index in 0..5 {
        let path = DerivationPath::from(vec![ChildNumber::Normal(0), ChildNumber::Normal(index)]);
        let spend = account.derive_path(&path, &provider).unwrap();
        let watched = watch.derive_path(&path, &provider).unwrap();
        assert_eq!(spend.public_key(), watched);

        let address = p2pkh_address(watched.public_key(), Network::Mainnet, &provider);
        let (_, hash) = parse_p2pkh(&address, &provider).unwrap();
        assert_eq!(hash, spend.identifier(&provider));
    }

    // hardened steps stay out of reach
    assert!(matches!(
        watch.derive_child(ChildNumber::Hardened(0), &provider),
        Err(Error::InvalidParameter { .. })
    ));
}

#[test]
fn derived_keys_sign_and_verify() {
    init_tracing();
    let provider = SoftwareProvider::new();
    let node = account(&provider, 0)
        .derive_path(&"m/0/3".parse().unwrap(), &provider)
        .unwrap();
    let digest = provider_digest(&provider, b"pay 1 BTC to bob");

    let sig = ecdsa::sign(&digest, node.private_key(), &provider).unwrap();
    assert!(sig.is_low_s());
    assert!(ecdsa::verify(&digest, &sig, node.public_key().public_key()));

    // a sibling key must not verify
    let sibling = account(&provider, 0)
        .derive_path(&"m/0/4".parse().unwrap(), &provider)
        .unwrap();
    assert!(!ecdsa::verify(&digest, &sig, sibling.public_key().public_key()));

    let sig = schnorr::sign(&digest, node.private_key(), &provider).unwrap();
    let x_only = XOnlyPublicKey::from_private(node.private_key());
    assert!(schnorr::verify(&digest, &sig, &x_only, &provider));
    assert_eq!(x_only.to_bytes(), node.public_key().public_key().x_only_bytes());
}

#[test]
fn ecdh_between_derived_keys() {
    let provider = SoftwareProvider::new();
    let alice = account(&provider, 0)
        .derive_child(ChildNumber::Normal(0), &provider)
        .unwrap();
    let bob = account(&provider, 144)
        .derive_child(ChildNumber::Normal(0), &provider)
        .unwrap();

    let ab = k256::ecdh(alice.private_key(), bob.public_key().public_key(), &provider).unwrap();
    let ba = k256::ecdh(bob.private_key(), alice.public_key().public_key(), &provider).unwrap();
    assert_eq!(ab, ba);
}

#[test]
fn fresh_wallets_are_independent() {
    let provider = SoftwareProvider::new();
    let a = Mnemonic::generate(WordCount::TwentyFour, &provider).unwrap();
    let b = Mnemonic::generate(WordCount::TwentyFour, &provider).unwrap();
    assert_ne!(a, b);

    let roundtrip = Mnemonic::parse(&a.to_string(), &provider).unwrap();
    assert_eq!(roundtrip, a);
    assert_eq!(roundtrip.to_seed("pw", &provider), a.to_seed("pw", &provider));
    assert_ne!(a.to_seed("pw", &provider), a.to_seed("", &provider));
}

#[test]
fn extended_keys_keep_their_network() {
    let provider = SoftwareProvider::new();
    let node = account(&provider, 1);

    let tprv = node.to_base58(Network::Testnet, &provider);
    assert!(tprv.starts_with("tprv"));
    let (parsed, network) = ExtendedPrivateKey::from_base58(&tprv, &provider).unwrap();
    assert_eq!(network, Network::Testnet);
    assert_eq!(parsed, node);

    let tpub = node.public_key().to_base58(Network::Testnet, &provider);
    assert!(tpub.starts_with("tpub"));

    let testnet = p2pkh_address(node.public_key().public_key(), Network::Testnet, &provider);
    assert!(testnet.starts_with('m') || testnet.starts_with('n'));
}

#[test]
fn paths_roundtrip_through_json() {
    let path: DerivationPath = "m/84h/0h/0h/1/9".parse().unwrap();
    let json = serde_json::to_string(&path).unwrap();
    assert_eq!(json, "\"m/84'/0'/0'/1/9\"");
    assert_eq!(serde_json::from_str::<DerivationPath>(&json).unwrap(), path);
}

#[test]
fn sec1_encodings_roundtrip() {
    let provider = SoftwareProvider::new();
    let node = account(&provider, 0);
    let public_key = *node.public_key().public_key();

    let compressed = public_key.to_compressed();
    let uncompressed = k256::decompress_public_key(&compressed).unwrap();
    assert_eq!(uncompressed, public_key.to_uncompressed());
    assert_eq!(k256::compress_public_key(&uncompressed).unwrap(), compressed);
    assert_eq!(PublicKey::from_slice(&uncompressed).unwrap(), public_key);
}

fn provider_digest(provider: &SoftwareProvider, message: &[u8]) -> [u8; 32] {
    use hdcrypt_api::CryptoProvider;
    provider.sha256(message)
}
