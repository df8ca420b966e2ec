//! Default `CryptoProvider` implementation
//!
//! Hashing, HMAC and PBKDF2 come from the RustCrypto crates, NFKD from
//! `unicode-normalization`, randomness from the operating system via
//! `rand::rngs::OsRng`.

mod software;

pub use software::SoftwareProvider;
