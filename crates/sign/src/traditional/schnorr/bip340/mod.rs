//! BIP340 Schnorr signatures over secp256k1
//!
//! Public keys are x-only: a 32-byte x-coordinate standing for the curve
//! point with that x and an even y. A signer whose point d·G has odd y signs
//! with n − d instead, and likewise negates the nonce when R has odd y.

use core::fmt;
use hdcrypt_algorithms::ec::k256::{
    self as ec, FieldElement, Point, PrivateKey, PublicKey, Scalar, K256_SCALAR_SIZE,
    K256_SIGNATURE_SIZE, K256_XONLY_SIZE,
};
use hdcrypt_api::{
    validate, CryptoProvider, Error as ApiError, Result as ApiResult, Signature as SignatureTrait,
};
use hdcrypt_common::SecretBuffer;
use hdcrypt_params::utils::hash::{BIP340_TAG_AUX, BIP340_TAG_CHALLENGE, BIP340_TAG_NONCE};
use subtle::Choice;

/// Schnorr signature scheme over secp256k1 (BIP340)
pub struct SchnorrBip340;

/// A BIP340 x-only public key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XOnlyPublicKey(Point);

impl XOnlyPublicKey {
    /// `lift_x`: the even-y point with this x-coordinate
    ///
    /// Fails with `OutOfRange` for x ≥ p and `NotOnCurve` when x³ + 7 has no
    /// square root.
    pub fn from_bytes(bytes: &[u8; K256_XONLY_SIZE]) -> ApiResult<Self> {
        let x = FieldElement::from_bytes(bytes)?;
        Ok(XOnlyPublicKey(Point::lift_x(&x)?))
    }

    /// As [`from_bytes`](Self::from_bytes), for a slice that must be 32 bytes
    pub fn from_slice(bytes: &[u8]) -> ApiResult<Self> {
        validate::length("BIP340 public key", bytes.len(), K256_XONLY_SIZE)?;
        let mut buf = [0u8; K256_XONLY_SIZE];
        buf.copy_from_slice(bytes);
        Self::from_bytes(&buf)
    }

    /// Drop the parity of a full public key; also returns whether y was odd
    pub fn from_public_key(public_key: &PublicKey) -> (Self, bool) {
        let odd = !public_key.has_even_y();
        let point = public_key.point();
        let even = if odd { point.negate() } else { *point };
        (XOnlyPublicKey(even), odd)
    }

    /// The x-only key of a private key
    pub fn from_private(private_key: &PrivateKey) -> Self {
        Self::from_public_key(&private_key.public_key()).0
    }

    /// The 32-byte x-coordinate
    pub fn to_bytes(&self) -> [u8; K256_XONLY_SIZE] {
        self.0.x_coordinate_bytes()
    }

    /// The even-y curve point
    pub fn point(&self) -> &Point {
        &self.0
    }
}

/// A 64-byte BIP340 signature R.x ‖ s
///
/// Only the length is checked on construction; range checks on R.x and s
/// belong to verification, which reports them as `false`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SchnorrSignature([u8; K256_SIGNATURE_SIZE]);

impl SchnorrSignature {
    /// Wrap 64 raw bytes
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::length("BIP340 signature", bytes.len(), K256_SIGNATURE_SIZE)?;
        let mut sig = [0u8; K256_SIGNATURE_SIZE];
        sig.copy_from_slice(bytes);
        Ok(SchnorrSignature(sig))
    }

    /// The raw 64 bytes
    pub fn to_bytes(&self) -> [u8; K256_SIGNATURE_SIZE] {
        self.0
    }

    /// The R.x half
    pub fn r_bytes(&self) -> &[u8] {
        &self.0[..K256_SCALAR_SIZE]
    }

    /// The s half
    pub fn s_bytes(&self) -> &[u8] {
        &self.0[K256_SCALAR_SIZE..]
    }
}

impl AsRef<[u8]> for SchnorrSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SchnorrSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SchnorrSignature(")?;
        for b in self.0 {
            write!(f, "{:02x}", b)?;
        }
        f.write_str(")")
    }
}

/// e = int(hash_BIP0340/challenge(R.x ‖ P.x ‖ m)) mod n
fn challenge<P: CryptoProvider + ?Sized>(
    provider: &P,
    r_x: &[u8],
    p_x: &[u8; K256_XONLY_SIZE],
    message: &[u8; 32],
) -> Scalar {
    let digest = provider.tagged_hash(BIP340_TAG_CHALLENGE, &[r_x, p_x, message]);
    Scalar::from_bytes_reduced(&digest)
}

/// Sign with caller-supplied auxiliary randomness
///
/// The signature is checked against the public key before it is returned.
pub fn sign_with_aux<P: CryptoProvider + ?Sized>(
    message: &[u8; 32],
    private_key: &PrivateKey,
    aux_rand: &[u8; 32],
    provider: &P,
) -> ApiResult<SchnorrSignature> {
    // d = d' if P has even y, n − d' otherwise
    let public_key = private_key.public_key();
    let (x_only, odd) = XOnlyPublicKey::from_public_key(&public_key);
    let p_x = x_only.to_bytes();
    let mut d = private_key.scalar().clone();
    d.conditional_negate(Choice::from(odd as u8));

    // t = bytes(d) XOR hash_BIP0340/aux(a)
    let aux_hash = provider.tagged_hash(BIP340_TAG_AUX, &[aux_rand]);
    let mut t = d.to_secret_buffer();
    for (byte, mask) in t.as_mut_slice().iter_mut().zip(aux_hash.iter()) {
        *byte ^= mask;
    }

    // k' = int(hash_BIP0340/nonce(t ‖ P.x ‖ m)) mod n
    let nonce_hash = SecretBuffer::new(provider.tagged_hash(
        BIP340_TAG_NONCE,
        &[t.as_slice(), &p_x, message],
    ));
    let mut k = Scalar::from_bytes_reduced(nonce_hash.as_array());
    if k.is_zero() {
        return Err(ApiError::Provider {
            context: "BIP340 sign",
            message: "nonce hash reduced to zero".into(),
        });
    }

    // R = k'·G; k = k' if R has even y, n − k' otherwise
    let big_r = ec::scalar_mult_base_g(&k);
    k.conditional_negate(Choice::from(!big_r.has_even_y() as u8));
    let r_x = big_r.x_coordinate_bytes();

    // s = (k + e·d) mod n
    let e = challenge(provider, &r_x, &p_x, message);
    let s = k.add(&e.mul(&d));

    let mut sig = [0u8; K256_SIGNATURE_SIZE];
    sig[..K256_SCALAR_SIZE].copy_from_slice(&r_x);
    sig[K256_SCALAR_SIZE..].copy_from_slice(&s.to_bytes());
    let sig = SchnorrSignature(sig);

    if !verify(message, &sig, &x_only, provider) {
        return Err(ApiError::param(
            "BIP340 sign",
            "produced signature failed verification",
        ));
    }
    Ok(sig)
}

/// Sign with 32 bytes of fresh randomness from the provider
pub fn sign<P: CryptoProvider + ?Sized>(
    message: &[u8; 32],
    private_key: &PrivateKey,
    provider: &P,
) -> ApiResult<SchnorrSignature> {
    let mut aux = SecretBuffer::<32>::zeroed();
    provider.fill_random(aux.as_mut_slice())?;
    sign_with_aux(message, private_key, aux.as_array(), provider)
}

/// Sign with all-zero auxiliary data; reproducible, and weaker against
/// fault and side-channel attacks than [`sign`]
pub fn sign_deterministic<P: CryptoProvider + ?Sized>(
    message: &[u8; 32],
    private_key: &PrivateKey,
    provider: &P,
) -> ApiResult<SchnorrSignature> {
    sign_with_aux(message, private_key, &[0u8; 32], provider)
}

/// Verify a signature against an x-only public key
///
/// Returns `false` when R.x ≥ p, s ≥ n, or the equation does not hold.
pub fn verify<P: CryptoProvider + ?Sized>(
    message: &[u8; 32],
    signature: &SchnorrSignature,
    public_key: &XOnlyPublicKey,
    provider: &P,
) -> bool {
    let r = match FieldElement::from_slice(signature.r_bytes()) {
        Ok(r) => r,
        Err(_) => return false,
    };
    let s = match Scalar::from_slice(signature.s_bytes()) {
        Ok(s) => s,
        Err(_) => return false,
    };

    let p_x = public_key.to_bytes();
    let e = challenge(provider, signature.r_bytes(), &p_x, message);

    // R = s·G − e·P
    let big_r = ec::scalar_mult_base_g(&s).add(&public_key.point().mul(&e.negate()));
    !big_r.is_identity() && big_r.has_even_y() && *big_r.x() == r
}

/// Verify raw bytes: 32-byte x-only key and 64-byte signature
///
/// Malformed input of any kind yields `false`.
pub fn verify_bytes<P: CryptoProvider + ?Sized>(
    message: &[u8; 32],
    signature: &[u8],
    public_key: &[u8],
    provider: &P,
) -> bool {
    let sig = match SchnorrSignature::from_bytes(signature) {
        Ok(sig) => sig,
        Err(_) => return false,
    };
    let pk = match XOnlyPublicKey::from_slice(public_key) {
        Ok(pk) => pk,
        Err(_) => return false,
    };
    verify(message, &sig, &pk, provider)
}

impl SignatureTrait for SchnorrBip340 {
    type PublicKey = XOnlyPublicKey;
    type SecretKey = PrivateKey;
    type SignatureData = SchnorrSignature;

    fn name() -> &'static str {
        "BIP340-Schnorr"
    }

    fn public_key(secret_key: &Self::SecretKey) -> ApiResult<Self::PublicKey> {
        Ok(XOnlyPublicKey::from_private(secret_key))
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
        provider: &P,
    ) -> bool {
        verify(message, signature, public_key, provider)
    }
}
