//! Signature schemes over secp256k1
//!
//! ECDSA with RFC 6979 nonces and BIP340 Schnorr. Both sign fixed 32-byte
//! messages and take their hashing from an injected `CryptoProvider`.

pub mod ecdsa;
pub mod schnorr;

// Re-export ECDSA types
pub use ecdsa::{EcdsaSecp256k1, EcdsaSignature};

// Re-export Schnorr types
pub use schnorr::{SchnorrBip340, SchnorrSignature, XOnlyPublicKey};
