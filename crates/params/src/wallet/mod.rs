//! Constants for the wallet layer

pub mod address;
pub mod base58;
pub mod bip32;
pub mod bip39;
