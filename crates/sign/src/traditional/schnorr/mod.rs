//! Schnorr signatures

pub mod bip340;

pub use bip340::{SchnorrBip340, SchnorrSignature, XOnlyPublicKey};
