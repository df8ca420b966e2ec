//! secp256k1 domain parameters (SEC 2, section 2.4.1)
//!
//! All values are big-endian.

/// Size of a scalar or field element in bytes
pub const SECP256K1_SCALAR_SIZE: usize = 32;

/// Size of a field element in bytes
pub const SECP256K1_FIELD_ELEMENT_SIZE: usize = 32;

/// Compressed SEC1 point: prefix byte plus x
pub const SECP256K1_POINT_COMPRESSED_SIZE: usize = 33;

/// Uncompressed SEC1 point: 0x04 plus x and y
pub const SECP256K1_POINT_UNCOMPRESSED_SIZE: usize = 65;

/// x-only public key (BIP340)
pub const SECP256K1_XONLY_SIZE: usize = 32;

/// Compact `r ‖ s` signature
pub const SECP256K1_SIGNATURE_SIZE: usize = 64;

/// Field prime p = 2^256 - 2^32 - 977
pub const SECP256K1_P: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFC, 0x2F,
];

/// Group order n
pub const SECP256K1_N: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// floor(n / 2), the largest low-S value
pub const SECP256K1_N_HALF: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

/// Curve coefficient b in y^2 = x^3 + b (a = 0)
pub const SECP256K1_B: u32 = 7;

/// Generator x-coordinate
pub const SECP256K1_G_X: [u8; 32] = [
    0x79, 0xBE, 0x66, 0x7E, 0xF9, 0xDC, 0xBB, 0xAC, 0x55, 0xA0, 0x62, 0x95, 0xCE, 0x87, 0x0B, 0x07,
    0x02, 0x9B, 0xFC, 0xDB, 0x2D, 0xCE, 0x28, 0xD9, 0x59, 0xF2, 0x81, 0x5B, 0x16, 0xF8, 0x17, 0x98,
];

/// Generator y-coordinate
pub const SECP256K1_G_Y: [u8; 32] = [
    0x48, 0x3A, 0xDA, 0x77, 0x26, 0xA3, 0xC4, 0x65, 0x5D, 0xA4, 0xFB, 0xFC, 0x0E, 0x11, 0x08, 0xA8,
    0xFD, 0x17, 0xB4, 0x48, 0xA6, 0x85, 0x54, 0x19, 0x9C, 0x47, 0xD0, 0x8F, 0xFB, 0x10, 0xD4, 0xB8,
];
