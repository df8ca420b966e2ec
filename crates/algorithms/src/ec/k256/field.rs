//! secp256k1 base field arithmetic

use crate::ec::k256::constants::K256_FIELD_ELEMENT_SIZE;
use crate::ec::k256::limbs::{self, NLIMBS};
use crate::error::{validate, Error, Result};
use hdcrypt_internal::endian::{be_bytes_to_limbs, limbs_to_be_bytes};
use hdcrypt_params::traditional::secp256k1::SECP256K1_B;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// secp256k1 field element representing values in 𝔽ₚ, where
/// p = 2²⁵⁶ − 2³² − 977.
/// Internally stored as 8 little-endian 32-bit limbs, always fully reduced.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldElement(pub(crate) [u32; NLIMBS]);

impl FieldElement {
    /// p in little-endian limbs
    pub(crate) const MOD_LIMBS: [u32; NLIMBS] = [
        0xFFFF_FC2F, 0xFFFF_FFFE, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF,
        0xFFFF_FFFF,
    ];

    /// 2²⁵⁶ mod p = 2³² + 977
    const FOLD: [u32; 2] = [0x0000_03D1, 0x0000_0001];

    /// p − 2, the Fermat inversion exponent
    const P_MINUS_2: [u32; NLIMBS] = [
        0xFFFF_FC2D, 0xFFFF_FFFE, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF,
        0xFFFF_FFFF,
    ];

    /// (p + 1) / 4, the square-root exponent (p ≡ 3 mod 4)
    const SQRT_EXP: [u32; NLIMBS] = [
        0xBFFF_FF0C, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF,
        0x3FFF_FFFF,
    ];

    /// Curve constant b = 7
    pub const B: Self = FieldElement([SECP256K1_B, 0, 0, 0, 0, 0, 0, 0]);

    /// Build a field element from a small literal
    #[inline]
    pub fn from_u32(n: u32) -> Self {
        let mut l = [0u32; NLIMBS];
        l[0] = n;
        FieldElement(l)
    }

    /// The additive identity: 0
    #[inline]
    pub fn zero() -> Self {
        FieldElement([0u32; NLIMBS])
    }

    /// The multiplicative identity: 1
    #[inline]
    pub fn one() -> Self {
        Self::from_u32(1)
    }

    /// Create a field element from big-endian bytes.
    ///
    /// Values ≥ p are rejected rather than reduced.
    pub fn from_bytes(bytes: &[u8; K256_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let l = be_bytes_to_limbs(bytes);
        validate::in_range(limbs::lt(&l, &Self::MOD_LIMBS).into(), "K256 FieldElement")?;
        Ok(FieldElement(l))
    }

    /// Create a field element from a big-endian slice of exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("K256 FieldElement", bytes.len(), K256_FIELD_ELEMENT_SIZE)?;
        let mut buf = [0u8; K256_FIELD_ELEMENT_SIZE];
        buf.copy_from_slice(bytes);
        Self::from_bytes(&buf)
    }

    /// Convert this field element into big-endian bytes
    pub fn to_bytes(&self) -> [u8; K256_FIELD_ELEMENT_SIZE] {
        limbs_to_be_bytes(&self.0)
    }

    /// Constant-time zero test
    pub fn is_zero(&self) -> bool {
        limbs::is_zero(&self.0).into()
    }

    /// Return true if the element is odd (least-significant bit = 1)
    pub fn is_odd(&self) -> bool {
        (self.0[0] & 1) == 1
    }

    /// (self + other) mod p
    pub fn add(&self, other: &Self) -> Self {
        FieldElement(limbs::add_mod(&self.0, &other.0, &Self::MOD_LIMBS))
    }

    /// (self − other) mod p
    pub fn sub(&self, other: &Self) -> Self {
        FieldElement(limbs::sub_mod(&self.0, &other.0, &Self::MOD_LIMBS))
    }

    /// 2·self mod p
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// −self mod p
    pub fn negate(&self) -> Self {
        Self::zero().sub(self)
    }

    /// (self · other) mod p
    pub fn mul(&self, other: &Self) -> Self {
        let wide = limbs::mul_wide(&self.0, &other.0);
        FieldElement(limbs::reduce_wide(&wide, &Self::FOLD, &Self::MOD_LIMBS))
    }

    /// self² mod p
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Multiplicative inverse self^(p−2) mod p.
    ///
    /// Zero has no inverse and is rejected.
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::OutOfRange {
                context: "K256 FieldElement inverse of zero",
            });
        }
        Ok(self.pow(&Self::P_MINUS_2))
    }

    /// Square root, if one exists.
    ///
    /// Computes self^((p+1)/4) and squares it back; returns `None` when self
    /// is a non-residue. Either root may be returned, callers pick parity.
    pub fn sqrt(&self) -> Option<Self> {
        let root = self.pow(&Self::SQRT_EXP);
        if root.square() == *self {
            Some(root)
        } else {
            None
        }
    }

    /// Left-to-right square-and-multiply over all 256 exponent bits
    fn pow(&self, exp: &[u32; NLIMBS]) -> Self {
        let mut acc = Self::one();
        for i in (0..NLIMBS * 32).rev() {
            acc = acc.square();
            let with_base = acc.mul(self);
            acc = Self::conditional_select(&acc, &with_base, limbs::bit(exp, i));
        }
        acc
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement(limbs::select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}
