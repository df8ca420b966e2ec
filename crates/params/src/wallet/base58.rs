//! Base58 alphabets

/// Bitcoin alphabet (no 0, O, I, l)
pub const BITCOIN_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Ripple alphabet
pub const RIPPLE_ALPHABET: &[u8; 58] =
    b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

/// Length of the Base58Check checksum
pub const CHECKSUM_SIZE: usize = 4;
