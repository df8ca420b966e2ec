//! Constant values for the hdcrypt library
//!
//! Curve domain parameters, BIP32 version bytes, BIP39 sizing rules and the
//! Base58 alphabets. Everything here is immutable `const` data.

#![no_std]

pub mod traditional;
pub mod utils;
pub mod wallet;
