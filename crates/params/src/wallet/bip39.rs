//! BIP39 constants

/// Number of words in a wordlist
pub const WORDLIST_SIZE: usize = 2048;

/// Bits encoded by each word
pub const BITS_PER_WORD: usize = 11;

/// Allowed entropy lengths in bytes
pub const ENTROPY_SIZES: [usize; 5] = [16, 20, 24, 28, 32];

/// Allowed mnemonic lengths in words
pub const WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// PBKDF2 iteration count for seed derivation
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Seed length in bytes
pub const SEED_SIZE: usize = 64;

/// Prefix of the PBKDF2 salt; the passphrase is appended
pub const SALT_PREFIX: &str = "mnemonic";
