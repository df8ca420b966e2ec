//! ECDSA over secp256k1
//!
//! Deterministic signing per RFC 6979 with HMAC-SHA256 taken from the
//! injected [`CryptoProvider`], low-S normalization on every signature, and
//! verification that rejects high-S encodings as non-canonical.
//!
//! Algorithm (SEC 1 v2, §4.1):
//! 1. z = H(m) mod n, where H(m) is the 32-byte message digest supplied by the caller
//! 2. k from the RFC 6979 generator seeded with (d, z)
//! 3. (x₁, y₁) = k·G, r = x₁ mod n; on r = 0 take the next k
//! 4. s = k⁻¹(z + rd) mod n; on s = 0 take the next k
//! 5. if s > n/2, s = n − s

mod rfc6979;

use crate::traditional::ecdsa::common::SignatureComponents;
use core::fmt;
use hdcrypt_algorithms::ec::k256::{
    self as ec, PrivateKey, PublicKey, Scalar, K256_SCALAR_SIZE, K256_SIGNATURE_SIZE,
};
use hdcrypt_api::{
    validate, CryptoProvider, Error as ApiError, Result as ApiResult, Signature as SignatureTrait,
};
use hdcrypt_internal::constant_time::ct_eq;
use rfc6979::NonceGenerator;
use subtle::Choice;

/// ECDSA signature scheme over secp256k1
pub struct EcdsaSecp256k1;

/// An ECDSA signature (r, s) with both components in [1, n−1]
///
/// Signatures produced by [`sign`] are always low-S. Parsed signatures keep
/// whatever s they were given, so that [`verify`] can refuse high-S inputs.
#[derive(Clone, PartialEq, Eq)]
pub struct EcdsaSignature {
    r: Scalar,
    s: Scalar,
}

impl EcdsaSignature {
    /// Build a signature from its components, rejecting zero
    pub fn from_scalars(r: Scalar, s: Scalar) -> ApiResult<Self> {
        validate::range(!r.is_zero(), "ECDSA signature r")?;
        validate::range(!s.is_zero(), "ECDSA signature s")?;
        Ok(EcdsaSignature { r, s })
    }

    /// Parse the 64-byte compact form r ‖ s
    pub fn from_compact(bytes: &[u8]) -> ApiResult<Self> {
        validate::length("ECDSA compact signature", bytes.len(), K256_SIGNATURE_SIZE)?;
        let r = Scalar::from_slice(&bytes[..K256_SCALAR_SIZE])
            .map_err(|_| ApiError::OutOfRange { context: "ECDSA signature r" })?;
        let s = Scalar::from_slice(&bytes[K256_SCALAR_SIZE..])
            .map_err(|_| ApiError::OutOfRange { context: "ECDSA signature s" })?;
        Self::from_scalars(r, s)
    }

    /// 64-byte compact form r ‖ s
    pub fn to_compact(&self) -> [u8; K256_SIGNATURE_SIZE] {
        let mut out = [0u8; K256_SIGNATURE_SIZE];
        out[..K256_SCALAR_SIZE].copy_from_slice(&self.r.to_bytes());
        out[K256_SCALAR_SIZE..].copy_from_slice(&self.s.to_bytes());
        out
    }

    /// Parse an ASN.1 DER `SEQUENCE { r INTEGER, s INTEGER }`
    pub fn from_der(der: &[u8]) -> ApiResult<Self> {
        let sig = SignatureComponents::from_der(der)?;
        let r = SignatureComponents::to_fixed::<K256_SCALAR_SIZE>(&sig.r)?;
        let s = SignatureComponents::to_fixed::<K256_SCALAR_SIZE>(&sig.s)?;
        let r = Scalar::from_bytes(&r)
            .map_err(|_| ApiError::OutOfRange { context: "ECDSA signature r" })?;
        let s = Scalar::from_bytes(&s)
            .map_err(|_| ApiError::OutOfRange { context: "ECDSA signature s" })?;
        Self::from_scalars(r, s)
    }

    /// ASN.1 DER encoding
    pub fn to_der(&self) -> Vec<u8> {
        SignatureComponents {
            r: self.r.to_bytes().to_vec(),
            s: self.s.to_bytes().to_vec(),
        }
        .to_der()
    }

    /// The r component
    pub fn r(&self) -> &Scalar {
        &self.r
    }

    /// The s component
    pub fn s(&self) -> &Scalar {
        &self.s
    }

    /// True when s ≤ n/2
    pub fn is_low_s(&self) -> bool {
        !self.s.is_high()
    }

    /// The equivalent signature with s replaced by n − s when s > n/2
    pub fn normalize_s(&self) -> Self {
        let mut s = self.s.clone();
        s.conditional_negate(Choice::from(s.is_high() as u8));
        EcdsaSignature {
            r: self.r.clone(),
            s,
        }
    }
}

impl fmt::Debug for EcdsaSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EcdsaSignature(")?;
        for b in self.to_compact() {
            write!(f, "{:02x}", b)?;
        }
        f.write_str(")")
    }
}

/// Sign a 32-byte message digest
///
/// Fully deterministic: the same (digest, key) pair always yields the same
/// signature. The output is low-S.
pub fn sign<P: CryptoProvider + ?Sized>(
    message_hash: &[u8; 32],
    private_key: &PrivateKey,
    provider: &P,
) -> ApiResult<EcdsaSignature> {
    let z = Scalar::from_bytes_reduced(message_hash);
    let d = private_key.scalar();
    let mut nonces = NonceGenerator::new(provider, private_key.to_bytes().as_array(), &z.to_bytes());

    loop {
        let k = nonces.next_nonce();

        let kg = ec::scalar_mult_base_g(&k);
        let r = Scalar::from_bytes_reduced(&kg.x_coordinate_bytes());
        if r.is_zero() {
            tracing::trace!("ECDSA nonce produced r = 0, retrying");
            continue;
        }

        let k_inv = k.invert()?;
        let mut s = k_inv.mul(&z.add(&r.mul(d)));
        if s.is_zero() {
            tracing::trace!("ECDSA nonce produced s = 0, retrying");
            continue;
        }

        s.conditional_negate(Choice::from(s.is_high() as u8));
        return Ok(EcdsaSignature { r, s });
    }
}

/// Verify a signature over a 32-byte message digest
///
/// Returns `false` for high-S signatures and for any mismatch.
pub fn verify(message_hash: &[u8; 32], signature: &EcdsaSignature, public_key: &PublicKey) -> bool {
    let (r, s) = (&signature.r, &signature.s);
    if r.is_zero() || s.is_zero() || s.is_high() {
        return false;
    }

    let z = Scalar::from_bytes_reduced(message_hash);
    let w = match s.invert() {
        Ok(w) => w,
        Err(_) => return false,
    };

    // u₁ = zw, u₂ = rw
    let u1 = z.mul(&w);
    let u2 = r.mul(&w);

    // (x₁, y₁) = u₁·G + u₂·Q
    let point = ec::scalar_mult_base_g(&u1).add(&ec::scalar_mult(&u2, public_key.point()));
    if point.is_identity() {
        return false;
    }

    // v = x₁ mod n
    let v = Scalar::from_bytes_reduced(&point.x_coordinate_bytes());
    ct_eq(v.to_bytes(), r.to_bytes())
}

/// Verify raw bytes: a 64-byte compact signature and a 33- or 65-byte public key
///
/// Malformed input of any kind yields `false`.
pub fn verify_compact(message_hash: &[u8; 32], signature: &[u8], public_key: &[u8]) -> bool {
    let sig = match EcdsaSignature::from_compact(signature) {
        Ok(sig) => sig,
        Err(_) => return false,
    };
    let pk = match PublicKey::from_slice(public_key) {
        Ok(pk) => pk,
        Err(_) => return false,
    };
    verify(message_hash, &sig, &pk)
}

impl SignatureTrait for EcdsaSecp256k1 {
    type PublicKey = PublicKey;
    type SecretKey = PrivateKey;
    type SignatureData = EcdsaSignature;

    fn name() -> &'static str {
        "ECDSA-secp256k1"
    }

    fn public_key(secret_key: &Self::SecretKey) -> ApiResult<Self::PublicKey> {
        Ok(secret_key.public_key())
    }

    fn sign<P: CryptoProvider + ?Sized>(
        message: &[u8; 32],
        secret_key: &Self::SecretKey,
        provider: &P,
    ) -> ApiResult<Self::SignatureData> {
        sign(message, secret_key, provider)
    }

    fn verify<P: CryptoProvider + ?Sized>(
        message: &[u8; 32],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
        _provider: &P,
    ) -> bool {
        verify(message, signature, public_key)
    }
}
