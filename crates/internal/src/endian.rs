//! Byte-order helpers for 256-bit values and wire integers

/// Load a 32-byte big-endian value into eight little-endian u32 limbs.
pub fn be_bytes_to_limbs(bytes: &[u8; 32]) -> [u32; 8] {
    let mut limbs = [0u32; 8];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let off = 28 - i * 4;
        *limb = u32_from_be_bytes(&bytes[off..off + 4]);
    }
    limbs
}

/// Inverse of [`be_bytes_to_limbs`].
pub fn limbs_to_be_bytes(limbs: &[u32; 8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (i, limb) in limbs.iter().enumerate() {
        let off = 28 - i * 4;
        out[off..off + 4].copy_from_slice(&limb.to_be_bytes());
    }
    out
}

/// Convert a u32 from big-endian byte order to native byte order
///
/// `bytes` must hold at least four bytes.
pub fn u32_from_be_bytes(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
