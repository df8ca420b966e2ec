//! Loads the JSON vector files under `tests/vectors`

use super::error::{Result, VectorError};
use super::model::{Bip32File, Bip32Vector, Bip39File, Bip39Vector};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("vectors")
}

fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
    let path = vectors_dir().join(name);
    let text = fs::read_to_string(&path).map_err(|source| VectorError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

static BIP39: Lazy<Result<Vec<Bip39Vector>>> =
    Lazy::new(|| load::<Bip39File>("bip39.json").map(|f| f.english));

static BIP32: Lazy<Result<Vec<Bip32Vector>>> =
    Lazy::new(|| load::<Bip32File>("bip32.json").map(|f| f.tests));

/// English BIP39 vectors with the "TREZOR" passphrase
pub fn bip39_vectors() -> std::result::Result<&'static [Bip39Vector], String> {
    BIP39.as_deref().map_err(|e| e.to_string())
}

/// BIP32 test vectors 1 to 4
pub fn bip32_vectors() -> std::result::Result<&'static [Bip32Vector], String> {
    BIP32.as_deref().map_err(|e| e.to_string())
}
