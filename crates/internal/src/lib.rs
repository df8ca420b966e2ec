//! Internal helpers shared by the hdcrypt crates.
//!
//! Nothing in here is part of the public API surface; the curve, signature
//! and wallet crates use these to keep secret-dependent branches out of
//! their comparisons and to move between big-endian bytes and limbs.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod endian;
