//! Base58 and Base58Check
//!
//! Big-endian base conversion between bytes and a 58-symbol alphabet. Each
//! leading zero byte becomes one leading zero symbol (`1` in the Bitcoin
//! alphabet, `r` in Ripple's) and back, so leading zeros always round-trip.
//! Base58Check appends the first four bytes of SHA-256(SHA-256(payload)).

use hdcrypt_api::{validate, CryptoProvider, Error, Result};
use hdcrypt_internal::constant_time::ct_eq;
use hdcrypt_params::wallet::base58::{BITCOIN_ALPHABET, CHECKSUM_SIZE, RIPPLE_ALPHABET};

const INVALID: u8 = 0xFF;

/// Reverse lookup from ASCII to digit value
const fn build_index(alphabet: &[u8; 58]) -> [u8; 128] {
    let mut index = [INVALID; 128];
    let mut i = 0;
    while i < 58 {
        index[alphabet[i] as usize] = i as u8;
        i += 1;
    }
    index
}

static BITCOIN_INDEX: [u8; 128] = build_index(BITCOIN_ALPHABET);
static RIPPLE_INDEX: [u8; 128] = build_index(RIPPLE_ALPHABET);

/// Symbol set used for encoding and decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Base58Alphabet {
    /// Bitcoin, Solana and most other chains
    #[default]
    Bitcoin,
    /// XRP Ledger
    Ripple,
}

impl Base58Alphabet {
    fn symbols(self) -> &'static [u8; 58] {
        match self {
            Base58Alphabet::Bitcoin => BITCOIN_ALPHABET,
            Base58Alphabet::Ripple => RIPPLE_ALPHABET,
        }
    }

    fn index(self) -> &'static [u8; 128] {
        match self {
            Base58Alphabet::Bitcoin => &BITCOIN_INDEX,
            Base58Alphabet::Ripple => &RIPPLE_INDEX,
        }
    }

    fn digit(self, c: char) -> Option<u8> {
        let c = c as u32;
        if c >= 128 {
            return None;
        }
        match self.index()[c as usize] {
            INVALID => None,
            d => Some(d),
        }
    }
}

/// Encode with the Bitcoin alphabet
pub fn encode(data: &[u8]) -> String {
    encode_with_alphabet(data, Base58Alphabet::Bitcoin)
}

/// Encode with the given alphabet
pub fn encode_with_alphabet(data: &[u8], alphabet: Base58Alphabet) -> String {
    let symbols = alphabet.symbols();
    let zeros = data.iter().take_while(|&&b| b == 0).count();

    // base-58 digits, least significant first; log(256)/log(58) < 1.37
    let mut digits: Vec<u8> = Vec::with_capacity(data.len() * 137 / 100 + 1);
    for &byte in &data[zeros..] {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut out = String::with_capacity(zeros + digits.len());
    out.extend(core::iter::repeat(symbols[0] as char).take(zeros));
    out.extend(digits.iter().rev().map(|&d| symbols[d as usize] as char));
    out
}

/// Decode with the Bitcoin alphabet
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    decode_with_alphabet(encoded, Base58Alphabet::Bitcoin)
}

/// Decode with the given alphabet
///
/// Fails with `InvalidEncoding` on any character outside the alphabet.
pub fn decode_with_alphabet(encoded: &str, alphabet: Base58Alphabet) -> Result<Vec<u8>> {
    let zero_symbol = alphabet.symbols()[0] as char;
    let zeros = encoded.chars().take_while(|&c| c == zero_symbol).count();

    // base-256 digits, least significant first
    let mut bytes: Vec<u8> = Vec::with_capacity(encoded.len());
    for (pos, c) in encoded.chars().enumerate().skip(zeros) {
        let digit = alphabet.digit(c).ok_or_else(|| {
            Error::encoding(
                "Base58",
                format!("invalid character {:?} at position {}", c, pos),
            )
        })?;
        let mut carry = digit as u32;
        for byte in bytes.iter_mut() {
            carry += (*byte as u32) * 58;
            *byte = carry as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push(carry as u8);
            carry >>= 8;
        }
    }

    let mut out = vec![0u8; zeros];
    out.extend(bytes.iter().rev());
    Ok(out)
}

fn checksum<P: CryptoProvider + ?Sized>(payload: &[u8], provider: &P) -> [u8; CHECKSUM_SIZE] {
    let digest = provider.double_sha256(payload);
    let mut out = [0u8; CHECKSUM_SIZE];
    out.copy_from_slice(&digest[..CHECKSUM_SIZE]);
    out
}

/// Base58Check-encode with the Bitcoin alphabet
pub fn encode_check<P: CryptoProvider + ?Sized>(payload: &[u8], provider: &P) -> String {
    encode_check_with_alphabet(payload, Base58Alphabet::Bitcoin, provider)
}

/// Base58Check-encode with the given alphabet
pub fn encode_check_with_alphabet<P: CryptoProvider + ?Sized>(
    payload: &[u8],
    alphabet: Base58Alphabet,
    provider: &P,
) -> String {
    let mut buf = Vec::with_capacity(payload.len() + CHECKSUM_SIZE);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&checksum(payload, provider));
    encode_with_alphabet(&buf, alphabet)
}

/// Decode Base58Check with the Bitcoin alphabet and strip the checksum
pub fn decode_check<P: CryptoProvider + ?Sized>(encoded: &str, provider: &P) -> Result<Vec<u8>> {
    decode_check_with_alphabet(encoded, Base58Alphabet::Bitcoin, provider)
}

/// Decode Base58Check with the given alphabet and strip the checksum
///
/// Fails with `InvalidLength` when fewer than four bytes decode and with
/// `InvalidChecksum` when the trailing four bytes do not match.
pub fn decode_check_with_alphabet<P: CryptoProvider + ?Sized>(
    encoded: &str,
    alphabet: Base58Alphabet,
    provider: &P,
) -> Result<Vec<u8>> {
    let mut data = decode_with_alphabet(encoded, alphabet)?;
    validate::min_length("Base58Check", data.len(), CHECKSUM_SIZE)?;

    let split = data.len() - CHECKSUM_SIZE;
    let expected = checksum(&data[..split], provider);
    if !ct_eq(expected, &data[split..]) {
        return Err(Error::InvalidChecksum {
            context: "Base58Check",
        });
    }
    data.truncate(split);
    Ok(data)
}
