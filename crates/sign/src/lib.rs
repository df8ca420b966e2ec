//! Digital Signature Schemes
//!
//! ECDSA and BIP340 Schnorr over secp256k1, built on the curve arithmetic in
//! `hdcrypt-algorithms`.

pub mod traditional;

pub use traditional::ecdsa::secp256k1 as ecdsa;
pub use traditional::schnorr::bip340 as schnorr;
pub use traditional::{
    EcdsaSecp256k1, EcdsaSignature, SchnorrBip340, SchnorrSignature, XOnlyPublicKey,
};
