//! Digital signature traits for hdcrypt
//!
//! Both secp256k1 schemes sign a fixed 32-byte message (a digest for ECDSA,
//! the raw BIP340 message for Schnorr) and pull any hashing they need from
//! the injected [`CryptoProvider`].

use crate::{CryptoProvider, Result};
use zeroize::Zeroize;

/// Core trait for the signature schemes
///
/// Secret keys are opaque types. They are zeroizable but expose no mutable
/// byte access, so key material cannot be corrupted in place.
pub trait Signature {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Secret key type
    type SecretKey: Zeroize + Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Derive the verification key for `secret_key`
    fn public_key(secret_key: &Self::SecretKey) -> Result<Self::PublicKey>;

    /// Sign a 32-byte message with the given secret key
    fn sign<P: CryptoProvider + ?Sized>(
        message: &[u8; 32],
        secret_key: &Self::SecretKey,
        provider: &P,
    ) -> Result<Self::SignatureData>;

    /// Verify a signature against a message and public key
    ///
    /// Returns `false` for every malformed or non-matching input; never errors.
    fn verify<P: CryptoProvider + ?Sized>(
        message: &[u8; 32],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
        provider: &P,
    ) -> bool;
}
