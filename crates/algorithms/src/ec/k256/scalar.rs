//! secp256k1 scalar arithmetic operations

use crate::ec::k256::constants::K256_SCALAR_SIZE;
use crate::ec::k256::limbs::{self, NLIMBS};
use crate::error::{validate, Error, Result};
use core::fmt;
use hdcrypt_common::SecretBuffer;
use hdcrypt_internal::endian::{be_bytes_to_limbs, limbs_to_be_bytes};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// secp256k1 scalar: an integer in [0, n), stored as 8 little-endian limbs.
///
/// Every constructor and arithmetic result is fully reduced modulo n.
/// Scalars are wiped on drop since most of them are key material or nonces.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar(pub(crate) [u32; NLIMBS]);

impl Scalar {
    /// n in little-endian limbs
    pub(crate) const ORDER: [u32; NLIMBS] = [
        0xD036_4141, 0xBFD2_5E8C, 0xAF48_A03B, 0xBAAE_DCE6, 0xFFFF_FFFE, 0xFFFF_FFFF, 0xFFFF_FFFF,
        0xFFFF_FFFF,
    ];

    /// 2²⁵⁶ mod n (129 bits)
    const FOLD: [u32; 5] = [0x2FC9_BEBF, 0x402D_A173, 0x50B7_5FC4, 0x4551_2319, 0x0000_0001];

    /// n − 2, the Fermat inversion exponent
    const N_MINUS_2: [u32; NLIMBS] = [
        0xD036_413F, 0xBFD2_5E8C, 0xAF48_A03B, 0xBAAE_DCE6, 0xFFFF_FFFE, 0xFFFF_FFFF, 0xFFFF_FFFF,
        0xFFFF_FFFF,
    ];

    /// ⌊n / 2⌋
    pub(crate) const HALF_ORDER: [u32; NLIMBS] = [
        0x681B_20A0, 0xDFE9_2F46, 0x57A4_501D, 0x5D57_6E73, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF,
        0x7FFF_FFFF,
    ];

    /// The scalar 0
    pub fn zero() -> Self {
        Scalar([0u32; NLIMBS])
    }

    /// The scalar 1
    pub fn one() -> Self {
        Self::from_u32(1)
    }

    /// Build a scalar from a small literal
    pub fn from_u32(n: u32) -> Self {
        let mut l = [0u32; NLIMBS];
        l[0] = n;
        Scalar(l)
    }

    /// Create a scalar from canonical big-endian bytes.
    ///
    /// Values ≥ n are rejected. Zero is accepted; use
    /// [`PrivateKey`](super::PrivateKey) where zero must be excluded.
    pub fn from_bytes(bytes: &[u8; K256_SCALAR_SIZE]) -> Result<Self> {
        let l = be_bytes_to_limbs(bytes);
        validate::in_range(limbs::lt(&l, &Self::ORDER).into(), "K256 Scalar")?;
        Ok(Scalar(l))
    }

    /// Create a scalar from a 32-byte big-endian slice, rejecting values ≥ n
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("K256 Scalar", bytes.len(), K256_SCALAR_SIZE)?;
        let mut buf = SecretBuffer::<K256_SCALAR_SIZE>::zeroed();
        buf.as_mut_slice().copy_from_slice(bytes);
        Self::from_bytes(buf.as_array())
    }

    /// Interpret 32 big-endian bytes as an integer and reduce it modulo n.
    ///
    /// 2²⁵⁶ < 2n, so a single conditional subtraction suffices.
    pub fn from_bytes_reduced(bytes: &[u8; K256_SCALAR_SIZE]) -> Self {
        let l = be_bytes_to_limbs(bytes);
        let (reduced, borrow) = limbs::sbb(&l, &Self::ORDER);
        Scalar(limbs::select(&reduced, &l, Choice::from(borrow as u8)))
    }

    /// Serialize this scalar to big-endian bytes.
    pub fn to_bytes(&self) -> [u8; K256_SCALAR_SIZE] {
        limbs_to_be_bytes(&self.0)
    }

    /// Serialize into a zeroizing buffer
    pub fn to_secret_buffer(&self) -> SecretBuffer<K256_SCALAR_SIZE> {
        SecretBuffer::new(self.to_bytes())
    }

    /// Check if this scalar is zero.
    pub fn is_zero(&self) -> bool {
        limbs::is_zero(&self.0).into()
    }

    /// True when the scalar exceeds ⌊n/2⌋ (a "high-S" value)
    pub fn is_high(&self) -> bool {
        limbs::lt(&Self::HALF_ORDER, &self.0).into()
    }

    /// (self + other) mod n
    pub fn add(&self, other: &Self) -> Self {
        Scalar(limbs::add_mod(&self.0, &other.0, &Self::ORDER))
    }

    /// (self − other) mod n
    pub fn sub(&self, other: &Self) -> Self {
        Scalar(limbs::sub_mod(&self.0, &other.0, &Self::ORDER))
    }

    /// −self mod n
    pub fn negate(&self) -> Self {
        Self::zero().sub(self)
    }

    /// (self · other) mod n
    pub fn mul(&self, other: &Self) -> Self {
        let mut wide = limbs::mul_wide(&self.0, &other.0);
        let r = limbs::reduce_wide(&wide, &Self::FOLD, &Self::ORDER);
        wide.zeroize();
        Scalar(r)
    }

    /// self² mod n
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Multiplicative inverse self^(n−2) mod n
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::OutOfRange {
                context: "K256 Scalar inverse of zero",
            });
        }
        let mut acc = Self::one();
        for i in (0..NLIMBS * 32).rev() {
            acc = acc.square();
            let with_base = acc.mul(self);
            acc = Self::conditional_select(&acc, &with_base, limbs::bit(&Self::N_MINUS_2, i));
        }
        Ok(acc)
    }

    /// `a` when `choice` is 0, `b` when it is 1, without branching
    pub fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Scalar(limbs::select(&a.0, &b.0, choice))
    }

    /// Negate in place when `choice` is set
    pub fn conditional_negate(&mut self, choice: Choice) {
        let negated = self.negate();
        *self = Self::conditional_select(self, &negated, choice);
    }

    /// Bit `i` of the scalar, counting from the least significant bit
    pub(crate) fn bit(&self, i: usize) -> Choice {
        limbs::bit(&self.0, i)
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scalar([REDACTED])")
    }
}
