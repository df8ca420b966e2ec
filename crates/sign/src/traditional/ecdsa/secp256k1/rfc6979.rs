//! RFC 6979 deterministic nonce generation (HMAC-SHA256, qlen = 256)

use hdcrypt_algorithms::ec::k256::{Scalar, K256_SCALAR_SIZE};
use hdcrypt_api::CryptoProvider;
use zeroize::Zeroize;

/// HMAC_DRBG state of RFC 6979 §3.2, seeded from the private key and the
/// reduced message hash
///
/// Each call to [`next_nonce`](Self::next_nonce) yields the next candidate k
/// in [1, n−1]; calling it again after a rejected k performs the step-H
/// reseed, so signers simply ask for another nonce when r or s is zero.
pub(crate) struct NonceGenerator<'a, P: CryptoProvider + ?Sized> {
    provider: &'a P,
    k: [u8; 32],
    v: [u8; 32],
    started: bool,
}

impl<'a, P: CryptoProvider + ?Sized> NonceGenerator<'a, P> {
    /// Steps B through F: x is int2octets(d), h is bits2octets(H(m))
    pub(crate) fn new(
        provider: &'a P,
        x: &[u8; K256_SCALAR_SIZE],
        h: &[u8; K256_SCALAR_SIZE],
    ) -> Self {
        let mut gen = NonceGenerator {
            provider,
            k: [0x00; 32],
            v: [0x01; 32],
            started: false,
        };
        gen.update(0x00, x, h);
        gen.update(0x01, x, h);
        gen
    }

    /// K = HMAC_K(V ‖ tag ‖ x ‖ h); V = HMAC_K(V)
    fn update(&mut self, tag: u8, x: &[u8], h: &[u8]) {
        let mut data = [0u8; 32 + 1 + 2 * K256_SCALAR_SIZE];
        data[..32].copy_from_slice(&self.v);
        data[32] = tag;
        data[33..33 + x.len()].copy_from_slice(x);
        data[33 + x.len()..33 + x.len() + h.len()].copy_from_slice(h);
        let len = 33 + x.len() + h.len();
        self.k = self.provider.hmac_sha256(&self.k, &data[..len]);
        data.zeroize();
        self.v = self.provider.hmac_sha256(&self.k, &self.v);
    }

    /// Step H: the next k in [1, n−1]
    pub(crate) fn next_nonce(&mut self) -> Scalar {
        if self.started {
            self.update(0x00, &[], &[]);
        }
        self.started = true;
        loop {
            self.v = self.provider.hmac_sha256(&self.k, &self.v);
            if let Ok(k) = Scalar::from_bytes(&self.v) {
                if !k.is_zero() {
                    return k;
                }
            }
            tracing::trace!("RFC 6979 candidate out of range, reseeding");
            self.update(0x00, &[], &[]);
        }
    }
}

impl<P: CryptoProvider + ?Sized> Drop for NonceGenerator<'_, P> {
    fn drop(&mut self) {
        self.k.zeroize();
        self.v.zeroize();
    }
}
