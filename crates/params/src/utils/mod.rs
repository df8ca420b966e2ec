//! Hashing constants

pub mod hash;
