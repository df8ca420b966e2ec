//! Common implementations and shared functionality for the hdcrypt library
//!
//! Key material, chain codes, entropy and seeds all travel in the containers
//! defined here so that they are wiped when dropped and never printed.

pub mod secret;

pub use secret::{SecretBuffer, SecretVec};
