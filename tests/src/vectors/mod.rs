//! JSON-driven BIP32/BIP39 vector suites

pub mod error;
pub mod loader;
pub mod model;
pub mod runner;

pub use error::{Result, VectorError};
pub use loader::{bip32_vectors, bip39_vectors};
pub use runner::{run_bip32, run_bip39};
