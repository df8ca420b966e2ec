//! secp256k1 arithmetic for the hdcrypt library
//!
//! This crate holds the curve layer everything else is built on: field and
//! scalar arithmetic over 32-bit limbs, affine and Jacobian point operations,
//! SEC1 encodings, key types and ECDH. Hashing, HMAC, PBKDF2, Unicode
//! normalization and randomness come from an injected
//! [`CryptoProvider`](hdcrypt_api::CryptoProvider); the `software-provider`
//! feature supplies a RustCrypto-backed one.
//!
//! Arithmetic loops run a fixed number of iterations and use constant-time
//! selection, so scalar multiplication never branches on secret bits.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub use error::{validate, Error, Result};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{k256, K256Point, K256Scalar};

// Default CryptoProvider
#[cfg(feature = "software-provider")]
pub mod provider;
#[cfg(feature = "software-provider")]
pub use provider::SoftwareProvider;
