//! Koblitz secp256k1 Elliptic Curve Primitives
//!
//! This module implements the secp256k1 elliptic curve operations.
//! The curve equation is y² = x³ + 7 over the prime field F_p where:
//! - p = 2^256 - 2^32 - 977
//! - The curve order n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
//!
//! Field and scalar arithmetic use fixed-length limb loops and constant-time
//! selection; scalar multiplication never branches on scalar bits.

mod constants;
mod field;
mod keys;
mod limbs;
mod point;
mod scalar;

pub use constants::{
    K256_ECDH_SHARED_SECRET_SIZE, K256_FIELD_ELEMENT_SIZE, K256_POINT_COMPRESSED_SIZE,
    K256_POINT_UNCOMPRESSED_SIZE, K256_SCALAR_SIZE, K256_SIGNATURE_SIZE, K256_XONLY_SIZE,
};
pub use field::FieldElement;
pub use keys::{
    compress_public_key, decompress_public_key, ecdh, is_valid_private_key, PrivateKey, PublicKey,
};
pub use point::{Point, PointFormat};
pub use scalar::Scalar;

use rand::{CryptoRng, RngCore};

/// Get the standard base point G of the secp256k1 curve
pub fn base_point_g() -> Point {
    Point::generator()
}

/// Scalar multiplication with the base point: scalar * G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Point {
    base_point_g().mul(scalar)
}

/// General scalar multiplication: compute scalar * point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Point {
    point.mul(scalar)
}

/// Generate a keypair from a caller-supplied RNG
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> (PrivateKey, PublicKey) {
    let private_key = PrivateKey::generate_with_rng(rng);
    let public_key = private_key.public_key();
    (private_key, public_key)
}
