//! Checks one vector at a time against the library

use super::error::{expect_eq, Result};
use super::model::{Bip32Vector, Bip39Vector};
use hdcrypt_api::CryptoProvider;
use hdcrypt_wallet::bip32::{DerivationPath, ExtendedPrivateKey, ExtendedPublicKey, Network};
use hdcrypt_wallet::bip39::{self, Mnemonic};

/// Entropy → phrase → entropy, phrase → seed → master xprv
pub fn run_bip39<P: CryptoProvider + ?Sized>(vector: &Bip39Vector, provider: &P) -> Result<()> {
    let entropy = hex::decode(&vector.entropy)?;

    let phrase = bip39::entropy_to_mnemonic(&entropy, provider)?;
    expect_eq("mnemonic", &vector.mnemonic, &phrase)?;

    let mnemonic = Mnemonic::parse(&vector.mnemonic, provider)?;
    expect_eq(
        "entropy",
        &vector.entropy,
        &hex::encode(mnemonic.to_entropy().as_slice()),
    )?;

    let seed = mnemonic.to_seed(&vector.passphrase, provider);
    expect_eq("seed", &vector.seed, &hex::encode(seed.as_bytes()))?;

    let master = ExtendedPrivateKey::new_master(seed.as_bytes(), provider)?;
    expect_eq("xprv", &vector.xprv, &master.to_base58(Network::Mainnet, provider))
}

/// Derive and serialize every chain, then parse each string back
pub fn run_bip32<P: CryptoProvider + ?Sized>(vector: &Bip32Vector, provider: &P) -> Result<()> {
    let seed = hex::decode(&vector.seed)?;
    let master = ExtendedPrivateKey::new_master(&seed, provider)?;

    for chain in &vector.chains {
        let path: DerivationPath = chain.path.parse()?;
        let node = master.derive_path(&path, provider)?;
        expect_eq("xprv", &chain.xprv, &node.to_base58(Network::Mainnet, provider))?;
        expect_eq(
            "xpub",
            &chain.xpub,
            &node.public_key().to_base58(Network::Mainnet, provider),
        )?;

        let (parsed, _) = ExtendedPrivateKey::from_base58(&chain.xprv, provider)?;
        expect_eq(
            "reserialized xprv",
            &chain.xprv,
            &parsed.to_base58(Network::Mainnet, provider),
        )?;
        let (parsed, _) = ExtendedPublicKey::from_base58(&chain.xpub, provider)?;
        expect_eq(
            "reserialized xpub",
            &chain.xpub,
            &parsed.to_base58(Network::Mainnet, provider),
        )?;
    }
    Ok(())
}
