//! ECDSA signature implementation for secp256k1

pub mod common;
pub mod secp256k1;

pub use secp256k1::{EcdsaSecp256k1, EcdsaSignature};
