//! Elliptic Curve Primitives
//!
//! secp256k1 field, scalar and group arithmetic, key types and ECDH.

pub mod k256;

pub use k256::{Point as K256Point, Scalar as K256Scalar};
