//! Shared constants for secp256k1 operations

pub use hdcrypt_params::traditional::secp256k1::{
    SECP256K1_FIELD_ELEMENT_SIZE as K256_FIELD_ELEMENT_SIZE,
    SECP256K1_POINT_COMPRESSED_SIZE as K256_POINT_COMPRESSED_SIZE,
    SECP256K1_POINT_UNCOMPRESSED_SIZE as K256_POINT_UNCOMPRESSED_SIZE,
    SECP256K1_SCALAR_SIZE as K256_SCALAR_SIZE, SECP256K1_SIGNATURE_SIZE as K256_SIGNATURE_SIZE,
    SECP256K1_XONLY_SIZE as K256_XONLY_SIZE,
};

/// Size of the hashed ECDH shared secret
pub const K256_ECDH_SHARED_SECRET_SIZE: usize = 32;

/// Prefix of an uncompressed SEC1 point
pub(crate) const TAG_UNCOMPRESSED: u8 = 0x04;

/// Compressed SEC1 prefix for an even y-coordinate
pub(crate) const TAG_EVEN: u8 = 0x02;

/// Compressed SEC1 prefix for an odd y-coordinate
pub(crate) const TAG_ODD: u8 = 0x03;
