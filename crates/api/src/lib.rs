//! Public API traits and types for the hdcrypt library
//!
//! This crate provides the public API surface shared by every hdcrypt crate:
//! the error taxonomy, the [`CryptoProvider`] collaborator trait through which
//! hashing, HMAC, PBKDF2, Unicode normalization and randomness are injected,
//! and the [`Signature`] trait implemented by the signature schemes.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use traits::{CryptoProvider, Signature};
