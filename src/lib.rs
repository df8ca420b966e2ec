//! # hdcrypt
//!
//! A pure Rust secp256k1 and hierarchical-deterministic wallet engine.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! hdcrypt = "0.3"
//! ```
//!
//! ## Features
//!
//! - `software-provider` (default): RustCrypto-backed [`CryptoProvider`](api::CryptoProvider)
//! - `sign` (default): ECDSA and BIP340 Schnorr
//! - `wallet` (default): Base58Check, BIP32, BIP39 and address encoders
//! - `serde`: string serialization of derivation paths and networks
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`hdcrypt-api`]: errors and the `CryptoProvider` / `Signature` traits
//! - [`hdcrypt-common`]: zeroizing secret containers
//! - [`hdcrypt-params`]: curve and wallet constants
//! - [`hdcrypt-algorithms`]: field, scalar and point arithmetic
//! - [`hdcrypt-sign`]: signature schemes
//! - [`hdcrypt-wallet`]: key trees, mnemonics and encodings

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use hdcrypt_algorithms as algorithms;
pub use hdcrypt_api as api;
pub use hdcrypt_common as common;
pub use hdcrypt_params as params;

pub use hdcrypt_algorithms::ec::k256;

// Feature-gated re-exports
#[cfg(feature = "sign")]
pub use hdcrypt_sign as sign;

#[cfg(feature = "wallet")]
pub use hdcrypt_wallet as wallet;

/// Common imports for hdcrypt users
pub mod prelude {
    pub use crate::api::{CryptoProvider, Error, Result, Signature};
    pub use crate::common::{SecretBuffer, SecretVec};
    pub use crate::k256::{PrivateKey, PublicKey};

    #[cfg(feature = "software-provider")]
    pub use crate::algorithms::SoftwareProvider;

    #[cfg(feature = "sign")]
    pub use crate::sign::{EcdsaSecp256k1, EcdsaSignature, SchnorrBip340, SchnorrSignature, XOnlyPublicKey};

    #[cfg(feature = "wallet")]
    pub use crate::wallet::{
        Base58Alphabet, ChildNumber, DerivationPath, ExtendedPrivateKey, ExtendedPublicKey,
        Mnemonic, Network, Seed, WordCount,
    };
}
