//! secp256k1 elliptic curve point operations

use crate::ec::k256::{
    constants::{
        K256_FIELD_ELEMENT_SIZE, K256_POINT_COMPRESSED_SIZE, K256_POINT_UNCOMPRESSED_SIZE,
        TAG_EVEN, TAG_ODD, TAG_UNCOMPRESSED,
    },
    field::FieldElement,
    scalar::Scalar,
};
use crate::error::{validate, Error, Result};
use hdcrypt_internal::endian::be_bytes_to_limbs;
use hdcrypt_params::traditional::secp256k1::{SECP256K1_G_X, SECP256K1_G_Y};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Format of a serialized elliptic curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// The point at infinity (identity element)
    Identity,
    /// Uncompressed format: 0x04 || x || y
    Uncompressed,
    /// Compressed format: 0x02/0x03 || x
    Compressed,
}

impl PointFormat {
    /// Classify a SEC1 encoding by its length and prefix byte.
    ///
    /// All-zero buffers of either length are the identity encoding.
    pub fn detect(bytes: &[u8]) -> Result<Self> {
        match (bytes.len(), bytes.first()) {
            (K256_POINT_COMPRESSED_SIZE, _) | (K256_POINT_UNCOMPRESSED_SIZE, _)
                if bytes.iter().all(|&b| b == 0) =>
            {
                Ok(PointFormat::Identity)
            }
            (K256_POINT_COMPRESSED_SIZE, Some(&TAG_EVEN)) | (K256_POINT_COMPRESSED_SIZE, Some(&TAG_ODD)) => {
                Ok(PointFormat::Compressed)
            }
            (K256_POINT_UNCOMPRESSED_SIZE, Some(&TAG_UNCOMPRESSED)) => Ok(PointFormat::Uncompressed),
            (K256_POINT_COMPRESSED_SIZE, _) | (K256_POINT_UNCOMPRESSED_SIZE, _) => {
                Err(Error::param("K256 Point", "Invalid point prefix"))
            }
            (len, _) => Err(Error::Length {
                context: "K256 Point",
                expected: K256_POINT_COMPRESSED_SIZE,
                actual: len,
            }),
        }
    }
}

/// A point on the secp256k1 elliptic curve in affine coordinates
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

/// Jacobian coordinates: (X, Y, Z) represents (X/Z², Y/Z³); Z = 0 is the identity
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        let self_is_identity: bool = self.is_identity.into();
        let other_is_identity: bool = other.is_identity.into();
        if self_is_identity || other_is_identity {
            return self_is_identity == other_is_identity;
        }
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Point {
    /// Create a new point from uncompressed coordinates.
    ///
    /// Returns an error if either coordinate is ≥ p or the pair doesn't
    /// satisfy the curve equation.
    pub fn new_uncompressed(
        x: &[u8; K256_FIELD_ELEMENT_SIZE],
        y: &[u8; K256_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let x_fe = FieldElement::from_bytes(x)?;
        let y_fe = FieldElement::from_bytes(y)?;
        Self::from_affine(x_fe, y_fe)
    }

    /// Create a point from field coordinates, checking the curve equation
    pub fn from_affine(x: FieldElement, y: FieldElement) -> Result<Self> {
        validate::on_curve(Self::is_on_curve(&x, &y), "K256 Point")?;
        Ok(Point {
            is_identity: Choice::from(0),
            x,
            y,
        })
    }

    /// The standard base point G
    pub fn generator() -> Self {
        Point {
            is_identity: Choice::from(0),
            x: FieldElement(be_bytes_to_limbs(&SECP256K1_G_X)),
            y: FieldElement(be_bytes_to_limbs(&SECP256K1_G_Y)),
        }
    }

    /// Create the identity point (point at infinity).
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// Check if this point is the identity element.
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// Check if this point is valid (on the curve).
    pub fn is_valid(&self) -> bool {
        if self.is_identity() {
            return true;
        }
        Self::is_on_curve(&self.x, &self.y)
    }

    /// Affine x-coordinate
    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    /// Affine y-coordinate
    pub fn y(&self) -> &FieldElement {
        &self.y
    }

    /// True when the affine y-coordinate is even
    pub fn has_even_y(&self) -> bool {
        !self.y.is_odd()
    }

    /// Get the x-coordinate of this point as bytes.
    pub fn x_coordinate_bytes(&self) -> [u8; K256_FIELD_ELEMENT_SIZE] {
        self.x.to_bytes()
    }

    /// Get the y-coordinate of this point as bytes.
    pub fn y_coordinate_bytes(&self) -> [u8; K256_FIELD_ELEMENT_SIZE] {
        self.y.to_bytes()
    }

    /// Serialize this point in uncompressed format.
    ///
    /// The identity serializes as 65 zero bytes.
    pub fn serialize_uncompressed(&self) -> [u8; K256_POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; K256_POINT_UNCOMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[0] = TAG_UNCOMPRESSED;
        out[1..33].copy_from_slice(&self.x.to_bytes());
        out[33..].copy_from_slice(&self.y.to_bytes());
        out
    }

    /// Deserialize a point from uncompressed format.
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "K256 Uncompressed Point",
            bytes.len(),
            K256_POINT_UNCOMPRESSED_SIZE,
        )?;

        // Check for identity (all zeros)
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }

        if bytes[0] != TAG_UNCOMPRESSED {
            return Err(Error::param(
                "K256 Point",
                "Invalid uncompressed point prefix (expected 0x04)",
            ));
        }

        let mut x_bytes = [0u8; K256_FIELD_ELEMENT_SIZE];
        let mut y_bytes = [0u8; K256_FIELD_ELEMENT_SIZE];
        x_bytes.copy_from_slice(&bytes[1..33]);
        y_bytes.copy_from_slice(&bytes[33..65]);

        Self::new_uncompressed(&x_bytes, &y_bytes)
    }

    /// Serialize this point in compressed format.
    ///
    /// The identity serializes as 33 zero bytes.
    pub fn serialize_compressed(&self) -> [u8; K256_POINT_COMPRESSED_SIZE] {
        let mut out = [0u8; K256_POINT_COMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[0] = if self.y.is_odd() { TAG_ODD } else { TAG_EVEN };
        out[1..].copy_from_slice(&self.x.to_bytes());
        out
    }

    /// Deserialize a point from compressed format.
    ///
    /// Recovers y = (x³ + 7)^((p+1)/4) and keeps the root whose parity
    /// matches the prefix.
    pub fn deserialize_compressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "K256 Compressed Point",
            bytes.len(),
            K256_POINT_COMPRESSED_SIZE,
        )?;
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        let tag = bytes[0];
        if tag != TAG_EVEN && tag != TAG_ODD {
            return Err(Error::param("K256 Point", "Invalid compressed point prefix"));
        }
        let x_fe = FieldElement::from_slice(&bytes[1..])?;
        let y_fe = Self::y_from_x(&x_fe)?;
        let want_odd = Choice::from((tag == TAG_ODD) as u8);
        let is_odd = Choice::from(y_fe.is_odd() as u8);
        let y_final = FieldElement::conditional_select(&y_fe, &y_fe.negate(), is_odd ^ want_odd);
        Ok(Point {
            is_identity: Choice::from(0),
            x: x_fe,
            y: y_final,
        })
    }

    /// Deserialize either SEC1 form, dispatching on length and prefix
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        match PointFormat::detect(bytes)? {
            PointFormat::Identity => Ok(Self::identity()),
            PointFormat::Compressed => Self::deserialize_compressed(bytes),
            PointFormat::Uncompressed => Self::deserialize_uncompressed(bytes),
        }
    }

    /// The point with the given x-coordinate and an even y (BIP340 `lift_x`)
    pub fn lift_x(x: &FieldElement) -> Result<Self> {
        let y = Self::y_from_x(x)?;
        let y_even = FieldElement::conditional_select(&y, &y.negate(), Choice::from(y.is_odd() as u8));
        Ok(Point {
            is_identity: Choice::from(0),
            x: *x,
            y: y_even,
        })
    }

    /// Add two points using the group law.
    pub fn add(&self, other: &Self) -> Self {
        self.to_projective().add(&other.to_projective()).to_affine()
    }

    /// Double a point (add it to itself).
    pub fn double(&self) -> Self {
        self.to_projective().double().to_affine()
    }

    /// Additive inverse: (x, −y)
    pub fn negate(&self) -> Self {
        Point {
            is_identity: self.is_identity,
            x: self.x,
            y: self.y.negate(),
        }
    }

    /// Scalar multiplication: compute scalar * self.
    ///
    /// Multiplication by zero, or of the identity, yields the identity.
    pub fn mul(&self, scalar: &Scalar) -> Self {
        self.to_projective().mul(scalar).to_affine()
    }

    /// Check y² = x³ + 7 (mod p) for arbitrary coordinates
    pub fn is_on_curve(x: &FieldElement, y: &FieldElement) -> bool {
        let y_squared = y.square();
        let rhs = x.square().mul(x).add(&FieldElement::B);
        y_squared == rhs
    }

    /// Some y with y² = x³ + 7, or `NotOnCurve` if x is not a valid abscissa
    fn y_from_x(x: &FieldElement) -> Result<FieldElement> {
        let rhs = x.square().mul(x).add(&FieldElement::B);
        rhs.sqrt().ok_or(Error::NotOnCurve {
            context: "K256 Point: x has no square root",
        })
    }

    pub(crate) fn to_projective(self) -> ProjectivePoint {
        let lifted = ProjectivePoint {
            x: self.x,
            y: self.y,
            z: FieldElement::one(),
        };
        ProjectivePoint::conditional_select(&lifted, &ProjectivePoint::identity(), self.is_identity)
    }
}

impl ProjectivePoint {
    pub fn identity() -> Self {
        ProjectivePoint {
            x: FieldElement::one(),
            y: FieldElement::one(),
            z: FieldElement::zero(),
        }
    }

    fn is_identity_ct(&self) -> Choice {
        self.z.ct_eq(&FieldElement::zero())
    }

    /// Jacobian addition; the exceptional cases are resolved by selection
    /// rather than early returns.
    pub fn add(&self, other: &Self) -> Self {
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x.mul(&z2z2);
        let u2 = other.x.mul(&z1z1);
        let s1 = self.y.mul(&other.z).mul(&z2z2);
        let s2 = other.y.mul(&self.z).mul(&z1z1);

        let h = u2.sub(&u1);
        let r = s2.sub(&s1);

        let h_sq = h.square();
        let h_cu = h_sq.mul(&h);
        let v = u1.mul(&h_sq);

        // x3 = r² − h³ − 2v
        let x3 = r.square().sub(&h_cu).sub(&v.double());
        // y3 = r·(v − x3) − s1·h³
        let y3 = r.mul(&v.sub(&x3)).sub(&s1.mul(&h_cu));
        // z3 = z1·z2·h, zero when h = 0 so P + (−P) falls out as the identity
        let z3 = self.z.mul(&other.z).mul(&h);

        let mut out = ProjectivePoint { x: x3, y: y3, z: z3 };

        let self_id = self.is_identity_ct();
        let other_id = other.is_identity_ct();
        let same_point = h.ct_eq(&FieldElement::zero()) & r.ct_eq(&FieldElement::zero());

        out = Self::conditional_select(&out, &self.double(), same_point & !self_id & !other_id);
        out = Self::conditional_select(&out, other, self_id);
        out = Self::conditional_select(&out, self, other_id);
        out
    }

    /// Jacobian doubling for a = 0 (dbl-2009-l)
    pub fn double(&self) -> Self {
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        // d = 2·((x + b)² − a − c)
        let d = self.x.add(&b).square().sub(&a).sub(&c).double();
        let e = a.double().add(&a);
        let f = e.square();
        let x3 = f.sub(&d.double());
        let eight_c = c.double().double().double();
        let y3 = e.mul(&d.sub(&x3)).sub(&eight_c);
        let z3 = self.y.mul(&self.z).double();
        ProjectivePoint { x: x3, y: y3, z: z3 }
    }

    /// Double-and-add from the most significant bit down.
    ///
    /// Both branches are computed for every bit and the result selected, so
    /// the sequence of field operations does not depend on the scalar.
    pub fn mul(&self, scalar: &Scalar) -> Self {
        let mut acc = Self::identity();
        for i in (0..256).rev() {
            acc = acc.double();
            let with_base = acc.add(self);
            acc = Self::conditional_select(&acc, &with_base, scalar.bit(i));
        }
        acc
    }

    pub fn to_affine(&self) -> Point {
        let z_inv = match self.z.invert() {
            Ok(z_inv) => z_inv,
            Err(_) => return Point::identity(),
        };
        let z_inv_sq = z_inv.square();
        let z_inv_cu = z_inv_sq.mul(&z_inv);
        Point {
            is_identity: Choice::from(0),
            x: self.x.mul(&z_inv_sq),
            y: self.y.mul(&z_inv_cu),
        }
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}
