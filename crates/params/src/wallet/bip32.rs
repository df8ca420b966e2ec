//! BIP32 constants

/// HMAC-SHA512 key used to derive the master node from a seed
pub const MASTER_KEY_HMAC_KEY: &[u8] = b"Bitcoin seed";

/// First hardened child index (2^31)
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Serialized extended key length, before Base58Check
pub const EXTENDED_KEY_SIZE: usize = 78;

/// Chain code length
pub const CHAIN_CODE_SIZE: usize = 32;

/// Key fingerprint length
pub const FINGERPRINT_SIZE: usize = 4;

/// Deepest node that can be serialized
pub const MAX_DEPTH: u8 = u8::MAX;

/// Shortest seed BIP32 accepts (128 bits)
pub const MIN_SEED_SIZE: usize = 16;

/// Longest seed BIP32 accepts (512 bits)
pub const MAX_SEED_SIZE: usize = 64;

/// Mainnet private version ("xprv")
pub const VERSION_MAINNET_PRIVATE: [u8; 4] = [0x04, 0x88, 0xAD, 0xE4];

/// Mainnet public version ("xpub")
pub const VERSION_MAINNET_PUBLIC: [u8; 4] = [0x04, 0x88, 0xB2, 0x1E];

/// Testnet private version ("tprv")
pub const VERSION_TESTNET_PRIVATE: [u8; 4] = [0x04, 0x35, 0x83, 0x94];

/// Testnet public version ("tpub")
pub const VERSION_TESTNET_PUBLIC: [u8; 4] = [0x04, 0x35, 0x87, 0xCF];
