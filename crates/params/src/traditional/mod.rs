//! Constants for traditional cryptographic algorithms

pub mod secp256k1;
