//! Trait definitions shared across the hdcrypt crates

pub mod provider;
pub mod signature;

pub use provider::CryptoProvider;
pub use signature::Signature;
