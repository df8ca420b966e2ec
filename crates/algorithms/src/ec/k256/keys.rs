//! secp256k1 key types
//!
//! `PrivateKey` is a scalar in [1, n−1]; `PublicKey` is a non-identity curve
//! point. Both reject out-of-range input at construction, so code holding
//! one of these never has to re-check it.

use crate::ec::k256::{
    constants::{K256_POINT_COMPRESSED_SIZE, K256_POINT_UNCOMPRESSED_SIZE, K256_SCALAR_SIZE, K256_XONLY_SIZE},
    point::{Point, PointFormat},
    scalar::Scalar,
};
use crate::error::{validate, Error, Result};
use core::fmt;
use hdcrypt_api::{CryptoProvider, Error as CoreError, Result as CoreResult};
use hdcrypt_common::SecretBuffer;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Attempts before key generation gives up on a provider whose output is
/// never a valid scalar (the expected number is 1)
const MAX_KEYGEN_ATTEMPTS: usize = 64;

/// A secp256k1 private key: a scalar in [1, n−1]
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(Scalar);

impl PrivateKey {
    /// Parse a 32-byte big-endian private key.
    ///
    /// Rejects lengths other than 32, zero, and values ≥ n.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("K256 PrivateKey", bytes.len(), K256_SCALAR_SIZE)?;
        let scalar = Scalar::from_slice(bytes).map_err(|_| Error::OutOfRange {
            context: "K256 PrivateKey",
        })?;
        Self::from_scalar(scalar)
    }

    /// Wrap a scalar, rejecting zero
    pub fn from_scalar(scalar: Scalar) -> Result<Self> {
        validate::in_range(!scalar.is_zero(), "K256 PrivateKey")?;
        Ok(PrivateKey(scalar))
    }

    /// Draw a fresh key from the provider's secure random source
    pub fn generate<P: CryptoProvider + ?Sized>(provider: &P) -> CoreResult<Self> {
        let mut buf = SecretBuffer::<K256_SCALAR_SIZE>::zeroed();
        for _ in 0..MAX_KEYGEN_ATTEMPTS {
            provider.fill_random(buf.as_mut_slice())?;
            if let Ok(key) = Self::from_bytes(buf.as_slice()) {
                return Ok(key);
            }
        }
        Err(CoreError::Provider {
            context: "K256 PrivateKey::generate",
            message: "random source never produced a valid scalar".into(),
        })
    }

    /// Draw a fresh key from a caller-supplied RNG
    pub fn generate_with_rng<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let mut buf = SecretBuffer::<K256_SCALAR_SIZE>::zeroed();
        loop {
            rng.fill_bytes(buf.as_mut_slice());
            if let Ok(key) = Self::from_bytes(buf.as_slice()) {
                return key;
            }
        }
    }

    /// The underlying scalar
    pub fn scalar(&self) -> &Scalar {
        &self.0
    }

    /// Big-endian encoding in a zeroizing buffer
    pub fn to_bytes(&self) -> SecretBuffer<K256_SCALAR_SIZE> {
        self.0.to_secret_buffer()
    }

    /// d·G
    pub fn public_key(&self) -> PublicKey {
        PublicKey(Point::generator().mul(&self.0))
    }
}

impl ConstantTimeEq for PrivateKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// A secp256k1 public key: any curve point except the identity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey(Point);

impl PublicKey {
    /// Derive the public key of `private_key`
    pub fn from_private(private_key: &PrivateKey) -> Self {
        private_key.public_key()
    }

    /// Wrap a point, rejecting the identity and off-curve points
    pub fn from_point(point: Point) -> Result<Self> {
        if point.is_identity() {
            return Err(Error::param("K256 PublicKey", "identity point"));
        }
        validate::on_curve(point.is_valid(), "K256 PublicKey")?;
        Ok(PublicKey(point))
    }

    /// Parse a 33-byte compressed or 65-byte uncompressed SEC1 encoding
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        match PointFormat::detect(bytes)? {
            PointFormat::Identity => Err(Error::param("K256 PublicKey", "identity point")),
            _ => Self::from_point(Point::deserialize(bytes)?),
        }
    }

    /// The underlying curve point
    pub fn point(&self) -> &Point {
        &self.0
    }

    /// 33-byte SEC1 encoding, prefix 0x02 for even y and 0x03 for odd
    pub fn to_compressed(&self) -> [u8; K256_POINT_COMPRESSED_SIZE] {
        self.0.serialize_compressed()
    }

    /// 65-byte SEC1 encoding, 0x04 ‖ x ‖ y
    pub fn to_uncompressed(&self) -> [u8; K256_POINT_UNCOMPRESSED_SIZE] {
        self.0.serialize_uncompressed()
    }

    /// The 32-byte x-coordinate
    pub fn x_only_bytes(&self) -> [u8; K256_XONLY_SIZE] {
        self.0.x_coordinate_bytes()
    }

    /// True when the point's y-coordinate is even
    pub fn has_even_y(&self) -> bool {
        self.0.has_even_y()
    }
}

/// True iff `bytes` is a 32-byte big-endian integer in [1, n−1]
pub fn is_valid_private_key(bytes: &[u8]) -> bool {
    PrivateKey::from_bytes(bytes).is_ok()
}

/// Re-encode an uncompressed public key in compressed form
pub fn compress_public_key(
    uncompressed: &[u8; K256_POINT_UNCOMPRESSED_SIZE],
) -> Result<[u8; K256_POINT_COMPRESSED_SIZE]> {
    Ok(PublicKey::from_slice(uncompressed)?.to_compressed())
}

/// Re-encode a compressed public key in uncompressed form
pub fn decompress_public_key(
    compressed: &[u8; K256_POINT_COMPRESSED_SIZE],
) -> Result<[u8; K256_POINT_UNCOMPRESSED_SIZE]> {
    Ok(PublicKey::from_slice(compressed)?.to_uncompressed())
}

/// ECDH: SHA-256 of the compressed shared point d·Q
pub fn ecdh<P: CryptoProvider + ?Sized>(
    private_key: &PrivateKey,
    public_key: &PublicKey,
    provider: &P,
) -> CoreResult<SecretBuffer<32>> {
    let shared = public_key.point().mul(private_key.scalar());
    if shared.is_identity() {
        return Err(Error::Processing {
            operation: "K256 ECDH",
            details: "shared point is the identity",
        }
        .into());
    }
    let mut encoded = shared.serialize_compressed();
    let digest = provider.sha256(&encoded);
    encoded.zeroize();
    Ok(SecretBuffer::new(digest))
}
