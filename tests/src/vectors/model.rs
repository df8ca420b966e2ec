//! Data model of the JSON vector files

use serde::Deserialize;

/// `vectors/bip39.json`
#[derive(Debug, Deserialize)]
pub struct Bip39File {
    pub english: Vec<Bip39Vector>,
}

/// Entropy, its phrase, the seed under `passphrase` and that seed's master key
#[derive(Debug, Clone, Deserialize)]
pub struct Bip39Vector {
    pub entropy: String,
    pub mnemonic: String,
    pub passphrase: String,
    pub seed: String,
    pub xprv: String,
}

/// `vectors/bip32.json`
#[derive(Debug, Deserialize)]
pub struct Bip32File {
    pub tests: Vec<Bip32Vector>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Bip32Vector {
    pub seed: String,
    pub chains: Vec<Bip32Chain>,
}

/// One node of a vector, addressed from the master
#[derive(Debug, Clone, Deserialize)]
pub struct Bip32Chain {
    pub path: String,
    pub xprv: String,
    pub xpub: String,
}
