use hdcrypt_api::{CryptoProvider, Error, Result};
use hmac::digest::generic_array::GenericArray;
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512};
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

const SHA256_BLOCK_SIZE: usize = 64;
const SHA512_BLOCK_SIZE: usize = 128;

/// Stateless provider backed by pure-Rust primitives
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftwareProvider;

impl SoftwareProvider {
    /// Create a provider
    pub fn new() -> Self {
        SoftwareProvider
    }
}

/// HMAC key block: keys longer than the block are hashed, then zero-padded
/// (RFC 2104). Building the block up front keeps keying infallible.
fn hmac_key_block<D: Digest, const B: usize>(key: &[u8]) -> Zeroizing<[u8; B]> {
    let mut block = Zeroizing::new([0u8; B]);
    if key.len() > B {
        let digest = D::digest(key);
        block[..digest.len()].copy_from_slice(&digest);
    } else {
        block[..key.len()].copy_from_slice(key);
    }
    block
}

impl CryptoProvider for SoftwareProvider {
    fn sha256(&self, data: &[u8]) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&Sha256::digest(data));
        out
    }

    fn sha512(&self, data: &[u8]) -> [u8; 64] {
        let mut out = [0u8; 64];
        out.copy_from_slice(&Sha512::digest(data));
        out
    }

    fn ripemd160(&self, data: &[u8]) -> [u8; 20] {
        let mut out = [0u8; 20];
        out.copy_from_slice(&Ripemd160::digest(data));
        out
    }

    fn hmac_sha256(&self, key: &[u8], data: &[u8]) -> [u8; 32] {
        let block = hmac_key_block::<Sha256, SHA256_BLOCK_SIZE>(key);
        let mut mac = <Hmac<Sha256> as Mac>::new(GenericArray::from_slice(&block[..]));
        mac.update(data);
        let mut out = [0u8; 32];
        out.copy_from_slice(&mac.finalize().into_bytes());
        out
    }

    fn hmac_sha512(&self, key: &[u8], data: &[u8]) -> [u8; 64] {
        let block = hmac_key_block::<Sha512, SHA512_BLOCK_SIZE>(key);
        let mut mac = <Hmac<Sha512> as Mac>::new(GenericArray::from_slice(&block[..]));
        mac.update(data);
        let mut out = [0u8; 64];
        out.copy_from_slice(&mac.finalize().into_bytes());
        out
    }

    fn pbkdf2_hmac_sha512(&self, password: &[u8], salt: &[u8], iterations: u32, output: &mut [u8]) {
        pbkdf2::pbkdf2_hmac::<Sha512>(password, salt, iterations, output);
    }

    fn nfkd_normalize(&self, text: &str) -> String {
        text.nfkd().collect()
    }

    fn fill_random(&self, dest: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(dest).map_err(|e| Error::Provider {
            context: "SoftwareProvider::fill_random",
            message: e.to_string(),
        })
    }
}
