//! BIP39 mnemonic phrases
//!
//! Entropy of 128 to 256 bits is extended with the leading ENT/32 bits of
//! its SHA-256 and cut into 11-bit word indices. A phrase becomes a 64-byte
//! seed through PBKDF2-HMAC-SHA512 (2048 rounds) with the salt
//! `"mnemonic" ‖ passphrase`, both sides NFKD-normalized.
//!
//! Only the English wordlist is embedded.

mod wordlist;

pub use wordlist::words_with_prefix;

use core::fmt;
use hdcrypt_api::{CryptoProvider, Error, Result};
use hdcrypt_common::{SecretBuffer, SecretVec};
use hdcrypt_internal::constant_time::ct_eq;
use hdcrypt_params::wallet::bip39::{
    BITS_PER_WORD, ENTROPY_SIZES, PBKDF2_ROUNDS, SALT_PREFIX, SEED_SIZE, WORD_COUNTS,
};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Longest entropy plus checksum: 24 words × 11 bits
const MAX_PACKED_BYTES: usize = 33;

/// Supported mnemonic lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    #[default]
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    /// The word count for a phrase of `words` words
    pub fn from_words(words: usize) -> Result<Self> {
        match words {
            12 => Ok(WordCount::Twelve),
            15 => Ok(WordCount::Fifteen),
            18 => Ok(WordCount::Eighteen),
            21 => Ok(WordCount::TwentyOne),
            24 => Ok(WordCount::TwentyFour),
            n => Err(Error::param(
                "BIP39 mnemonic",
                format!("word count must be one of {:?}, got {}", WORD_COUNTS, n),
            )),
        }
    }

    /// The word count that encodes `len` bytes of entropy
    pub fn from_entropy_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(WordCount::Twelve),
            20 => Ok(WordCount::Fifteen),
            24 => Ok(WordCount::Eighteen),
            28 => Ok(WordCount::TwentyOne),
            32 => Ok(WordCount::TwentyFour),
            n => Err(Error::param(
                "BIP39 entropy",
                format!("entropy must be one of {:?} bytes, got {}", ENTROPY_SIZES, n),
            )),
        }
    }

    /// Number of words
    #[inline]
    pub const fn words(self) -> usize {
        self as usize
    }

    /// Entropy length in bytes
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }

    /// Checksum length in bits (ENT / 32)
    #[inline]
    pub const fn checksum_bits(self) -> usize {
        self.entropy_bytes() * 8 / 32
    }
}

/// A 64-byte BIP39 seed, wiped on drop
#[derive(Clone, PartialEq, Eq)]
pub struct Seed(SecretBuffer<SEED_SIZE>);

impl Seed {
    /// Borrow the seed bytes
    pub fn as_bytes(&self) -> &[u8; SEED_SIZE] {
        self.0.as_array()
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

/// A checksum-valid mnemonic, held as wordlist indices
///
/// `Display` renders the phrase with single spaces; `Debug` never does.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    indices: Vec<u16>,
}

impl Mnemonic {
    /// Encode entropy of 16, 20, 24, 28 or 32 bytes
    pub fn from_entropy<P: CryptoProvider + ?Sized>(entropy: &[u8], provider: &P) -> Result<Self> {
        let count = WordCount::from_entropy_len(entropy.len())?;
        let checksum = provider.sha256(entropy)[0];

        let mut packed = Zeroizing::new([0u8; MAX_PACKED_BYTES]);
        packed[..entropy.len()].copy_from_slice(entropy);
        packed[entropy.len()] = checksum;

        let indices = (0..count.words())
            .map(|i| read_bits(&packed[..], i * BITS_PER_WORD))
            .collect();
        Ok(Mnemonic { indices })
    }

    /// Fresh random mnemonic; entropy comes from the provider
    pub fn generate<P: CryptoProvider + ?Sized>(word_count: WordCount, provider: &P) -> Result<Self> {
        let mut entropy = Zeroizing::new([0u8; 32]);
        let entropy = &mut entropy[..word_count.entropy_bytes()];
        provider.fill_random(entropy)?;
        Self::from_entropy(entropy, provider)
    }

    /// Parse and validate a phrase
    ///
    /// The phrase is NFKD-normalized and split on any whitespace. Fails
    /// with `InvalidParameter` for a bad word count, `InvalidEncoding` for a
    /// word outside the list and `InvalidChecksum` when the checksum bits
    /// disagree with the entropy.
    pub fn parse<P: CryptoProvider + ?Sized>(phrase: &str, provider: &P) -> Result<Self> {
        let normalized = Zeroizing::new(provider.nfkd_normalize(phrase));
        let words: Vec<&str> = normalized.split_whitespace().collect();
        let count = WordCount::from_words(words.len())?;

        let mut indices = Vec::with_capacity(words.len());
        for (position, word) in words.iter().enumerate() {
            match wordlist::index_of(word) {
                Some(index) => indices.push(index),
                None => {
                    tracing::debug!(position, "BIP39 word not in wordlist");
                    return Err(Error::encoding(
                        "BIP39 mnemonic",
                        format!("word {} is not in the wordlist", position + 1),
                    ));
                }
            }
        }

        let mnemonic = Mnemonic { indices };
        let mut packed = Zeroizing::new([0u8; MAX_PACKED_BYTES]);
        mnemonic.pack(&mut packed);

        let entropy_len = count.entropy_bytes();
        let shift = 8 - count.checksum_bits();
        let expected = provider.sha256(&packed[..entropy_len])[0] >> shift;
        let actual = packed[entropy_len] >> shift;
        if !ct_eq([expected], [actual]) {
            tracing::debug!(words = count.words(), "BIP39 checksum mismatch");
            return Err(Error::InvalidChecksum {
                context: "BIP39 mnemonic",
            });
        }
        Ok(mnemonic)
    }

    /// Write the 11-bit indices big-endian into `out`
    fn pack(&self, out: &mut [u8; MAX_PACKED_BYTES]) {
        for (i, &index) in self.indices.iter().enumerate() {
            for bit in 0..BITS_PER_WORD {
                if (index >> (BITS_PER_WORD - 1 - bit)) & 1 == 1 {
                    let pos = i * BITS_PER_WORD + bit;
                    out[pos / 8] |= 0x80 >> (pos % 8);
                }
            }
        }
    }

    /// The encoded entropy
    pub fn to_entropy(&self) -> SecretVec {
        let mut packed = Zeroizing::new([0u8; MAX_PACKED_BYTES]);
        self.pack(&mut packed);
        SecretVec::from_slice(&packed[..self.word_count().entropy_bytes()])
    }

    /// Stretch into a 64-byte seed with an optional passphrase
    pub fn to_seed<P: CryptoProvider + ?Sized>(&self, passphrase: &str, provider: &P) -> Seed {
        let phrase = Zeroizing::new(self.to_string());
        bip39_seed(&phrase, passphrase, provider)
    }

    /// The phrase length
    pub fn word_count(&self) -> WordCount {
        match self.indices.len() {
            15 => WordCount::Fifteen,
            18 => WordCount::Eighteen,
            21 => WordCount::TwentyOne,
            24 => WordCount::TwentyFour,
            _ => WordCount::Twelve,
        }
    }

    /// The words in order
    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.indices.iter().map(|&i| wordlist::word(i))
    }

    /// The wordlist indices in order
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.indices.len())
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

/// Read 11 bits starting at bit `start`, most significant first
fn read_bits(data: &[u8], start: usize) -> u16 {
    let mut value = 0u16;
    for pos in start..start + BITS_PER_WORD {
        let bit = (data[pos / 8] >> (7 - pos % 8)) & 1;
        value = (value << 1) | bit as u16;
    }
    value
}

/// Encode entropy as a space-separated phrase
pub fn entropy_to_mnemonic<P: CryptoProvider + ?Sized>(entropy: &[u8], provider: &P) -> Result<String> {
    Ok(Mnemonic::from_entropy(entropy, provider)?.to_string())
}

/// Decode and checksum-verify a phrase back to its entropy
pub fn mnemonic_to_entropy<P: CryptoProvider + ?Sized>(mnemonic: &str, provider: &P) -> Result<SecretVec> {
    Ok(Mnemonic::parse(mnemonic, provider)?.to_entropy())
}

/// True when the word count, every word and the checksum are valid
pub fn validate<P: CryptoProvider + ?Sized>(mnemonic: &str, provider: &P) -> bool {
    Mnemonic::parse(mnemonic, provider).is_ok()
}

/// PBKDF2-HMAC-SHA512(NFKD(mnemonic), NFKD("mnemonic" ‖ passphrase), 2048)
///
/// The phrase is not validated; any string yields a seed.
pub fn bip39_seed<P: CryptoProvider + ?Sized>(mnemonic: &str, passphrase: &str, provider: &P) -> Seed {
    let password = Zeroizing::new(provider.nfkd_normalize(mnemonic));
    let mut salt = Zeroizing::new(String::with_capacity(SALT_PREFIX.len() + passphrase.len()));
    salt.push_str(SALT_PREFIX);
    salt.push_str(passphrase);
    let salt = Zeroizing::new(provider.nfkd_normalize(&salt));

    let mut seed = SecretBuffer::<SEED_SIZE>::zeroed();
    provider.pbkdf2_hmac_sha512(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        seed.as_mut_slice(),
    );
    Seed(seed)
}
