//! The cryptographic collaborator interface
//!
//! Hashes, MACs, key stretching, Unicode normalization and randomness are not
//! implemented by the curve or wallet code. Every operation that needs one of
//! them takes a `CryptoProvider` by reference, so a host can route them to
//! whatever backend it trusts without conditional compilation in the core.

use crate::Result;

/// Capability set the curve, signature and wallet layers depend on
///
/// Implementations must match the named primitives bit-for-bit; the
/// BIP32/BIP39/BIP340 test vectors depend on it.
pub trait CryptoProvider: Send + Sync {
    /// SHA-256
    fn sha256(&self, data: &[u8]) -> [u8; 32];

    /// SHA-512
    fn sha512(&self, data: &[u8]) -> [u8; 64];

    /// RIPEMD-160
    fn ripemd160(&self, data: &[u8]) -> [u8; 20];

    /// HMAC-SHA256 keyed with `key`
    fn hmac_sha256(&self, key: &[u8], data: &[u8]) -> [u8; 32];

    /// HMAC-SHA512 keyed with `key`
    fn hmac_sha512(&self, key: &[u8], data: &[u8]) -> [u8; 64];

    /// PBKDF2 (RFC 2898) with HMAC-SHA512, filling all of `output`
    fn pbkdf2_hmac_sha512(&self, password: &[u8], salt: &[u8], iterations: u32, output: &mut [u8]);

    /// Unicode Normalization Form KD
    fn nfkd_normalize(&self, text: &str) -> String;

    /// Fill `dest` from a cryptographically secure source
    fn fill_random(&self, dest: &mut [u8]) -> Result<()>;

    /// RIPEMD-160(SHA-256(data))
    fn hash160(&self, data: &[u8]) -> [u8; 20] {
        self.ripemd160(&self.sha256(data))
    }

    /// SHA-256(SHA-256(data))
    fn double_sha256(&self, data: &[u8]) -> [u8; 32] {
        self.sha256(&self.sha256(data))
    }

    /// BIP340 tagged hash: SHA-256(SHA-256(tag) ‖ SHA-256(tag) ‖ parts...)
    fn tagged_hash(&self, tag: &[u8], parts: &[&[u8]]) -> [u8; 32] {
        let tag_hash = self.sha256(tag);
        let len = 64 + parts.iter().map(|p| p.len()).sum::<usize>();
        let mut buf = zeroize::Zeroizing::new(Vec::with_capacity(len));
        buf.extend_from_slice(&tag_hash);
        buf.extend_from_slice(&tag_hash);
        for part in parts {
            buf.extend_from_slice(part);
        }
        self.sha256(&buf)
    }
}

impl<P: CryptoProvider + ?Sized> CryptoProvider for &P {
    fn sha256(&self, data: &[u8]) -> [u8; 32] {
        (**self).sha256(data)
    }
    fn sha512(&self, data: &[u8]) -> [u8; 64] {
        (**self).sha512(data)
    }
    fn ripemd160(&self, data: &[u8]) -> [u8; 20] {
        (**self).ripemd160(data)
    }
    fn hmac_sha256(&self, key: &[u8], data: &[u8]) -> [u8; 32] {
        (**self).hmac_sha256(key, data)
    }
    fn hmac_sha512(&self, key: &[u8], data: &[u8]) -> [u8; 64] {
        (**self).hmac_sha512(key, data)
    }
    fn pbkdf2_hmac_sha512(&self, password: &[u8], salt: &[u8], iterations: u32, output: &mut [u8]) {
        (**self).pbkdf2_hmac_sha512(password, salt, iterations, output)
    }
    fn nfkd_normalize(&self, text: &str) -> String {
        (**self).nfkd_normalize(text)
    }
    fn fill_random(&self, dest: &mut [u8]) -> Result<()> {
        (**self).fill_random(dest)
    }
}
