//! Errors raised while loading or checking a vector

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed vector file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("operation failed: {0}")]
    Crypto(#[from] hdcrypt_api::Error),

    #[error("{field} mismatch - expected: {expected}, got: {actual}")]
    Mismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, VectorError>;

/// `Ok` when `actual == expected`, otherwise a `Mismatch` naming `field`
pub fn expect_eq(field: &'static str, expected: &str, actual: &str) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(VectorError::Mismatch {
            field,
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}
