//! Hierarchical-deterministic wallet layer
//!
//! BIP39 turns entropy into a phrase and a phrase into a 64-byte seed,
//! BIP32 turns the seed and a path into an extended key, and the Base58
//! codec renders keys and hashes as strings. All hashing goes through the
//! caller's [`CryptoProvider`](hdcrypt_api::CryptoProvider).
//!
//! ```ignore
//! use hdcrypt_algorithms::SoftwareProvider;
//! use hdcrypt_wallet::{address, bip32, bip39};
//!
//! let provider = SoftwareProvider::new();
//! let mnemonic = bip39::Mnemonic::parse("abandon abandon ... about", &provider)?;
//! let seed = mnemonic.to_seed("", &provider);
//! let node = bip32::derive_path(seed.as_bytes(), "m/44'/0'/0'/0/0", &provider)?;
//! let addr = address::p2pkh_address(node.public_key().public_key(), bip32::Network::Mainnet, &provider);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod address;
pub mod base58;
pub mod bip32;
pub mod bip39;

pub use base58::Base58Alphabet;
pub use bip32::{ChildNumber, DerivationPath, ExtendedPrivateKey, ExtendedPublicKey, Network};
pub use bip39::{Mnemonic, Seed, WordCount};
