//! Common utilities for ECDSA implementations

use hdcrypt_api::{error::validate, Error as ApiError, Result as ApiResult};

const DER_SEQUENCE: u8 = 0x30;
const DER_INTEGER: u8 = 0x02;

/// ECDSA signature components (r, s) as minimal big-endian integers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureComponents {
    pub r: Vec<u8>,
    pub s: Vec<u8>,
}

impl SignatureComponents {
    /// Serialize signature to DER format
    ///
    /// SEQUENCE { INTEGER r, INTEGER s }. Component sizes here never exceed
    /// 33 bytes, so every length fits the short form.
    pub fn to_der(&self) -> Vec<u8> {
        let r_bytes = Self::encode_integer(&self.r);
        let s_bytes = Self::encode_integer(&self.s);

        let mut der = Vec::with_capacity(6 + r_bytes.len() + s_bytes.len());
        der.push(DER_SEQUENCE);
        der.push((4 + r_bytes.len() + s_bytes.len()) as u8);

        der.push(DER_INTEGER);
        der.push(r_bytes.len() as u8);
        der.extend_from_slice(&r_bytes);

        der.push(DER_INTEGER);
        der.push(s_bytes.len() as u8);
        der.extend_from_slice(&s_bytes);

        der
    }

    /// Parse signature from strict DER format
    ///
    /// Rejects long-form lengths, trailing bytes, negative integers and
    /// non-minimal integer encodings.
    pub fn from_der(der: &[u8]) -> ApiResult<Self> {
        validate::min_length("ECDSA DER signature", der.len(), 8)?;

        if der[0] != DER_SEQUENCE {
            return Err(ApiError::encoding(
                "ECDSA DER signature",
                "Invalid DER SEQUENCE tag",
            ));
        }
        if der[1] as usize != der.len() - 2 {
            return Err(ApiError::encoding(
                "ECDSA DER signature",
                "SEQUENCE length does not match input",
            ));
        }

        let (r, rest) = Self::read_integer(&der[2..])?;
        let (s, rest) = Self::read_integer(rest)?;
        if !rest.is_empty() {
            return Err(ApiError::encoding(
                "ECDSA DER signature",
                "trailing bytes after s",
            ));
        }

        Ok(SignatureComponents {
            r: Self::decode_integer(r),
            s: Self::decode_integer(s),
        })
    }

    /// Left-pad a component to `N` bytes; fails if it does not fit
    pub fn to_fixed<const N: usize>(component: &[u8]) -> ApiResult<[u8; N]> {
        if component.len() > N {
            return Err(ApiError::InvalidLength {
                context: "ECDSA signature component",
                expected: N,
                actual: component.len(),
            });
        }
        let mut out = [0u8; N];
        out[N - component.len()..].copy_from_slice(component);
        Ok(out)
    }

    /// One INTEGER TLV; returns its content and the remaining input
    fn read_integer(input: &[u8]) -> ApiResult<(&[u8], &[u8])> {
        if input.len() < 2 || input[0] != DER_INTEGER {
            return Err(ApiError::encoding(
                "ECDSA DER signature",
                "Invalid DER INTEGER tag",
            ));
        }
        let len = input[1] as usize;
        if len == 0 || len > 33 || input.len() < 2 + len {
            return Err(ApiError::encoding(
                "ECDSA DER signature",
                "bad INTEGER length",
            ));
        }
        let content = &input[2..2 + len];
        if content[0] & 0x80 != 0 {
            return Err(ApiError::encoding(
                "ECDSA DER signature",
                "negative INTEGER",
            ));
        }
        if len > 1 && content[0] == 0x00 && content[1] & 0x80 == 0 {
            return Err(ApiError::encoding(
                "ECDSA DER signature",
                "non-minimal INTEGER",
            ));
        }
        Ok((content, &input[2 + len..]))
    }

    /// Encode integer for DER (strip leading zeros, then add one back if high bit set)
    fn encode_integer(bytes: &[u8]) -> Vec<u8> {
        let stripped = Self::decode_integer(bytes);
        if stripped[0] & 0x80 == 0 {
            stripped
        } else {
            let mut result = Vec::with_capacity(stripped.len() + 1);
            result.push(0x00);
            result.extend_from_slice(&stripped);
            result
        }
    }

    /// Decode integer from DER (remove leading zeros)
    fn decode_integer(bytes: &[u8]) -> Vec<u8> {
        if bytes.is_empty() {
            return vec![0x00];
        }
        // zero itself keeps one byte
        let first = bytes
            .iter()
            .position(|&b| b != 0)
            .unwrap_or(bytes.len() - 1);
        bytes[first..].to_vec()
    }
}
