//! Error type definitions for key, signature and wallet operations

/// Primary error type for hdcrypt operations
///
/// Verification functions never surface these; they collapse every
/// malformed-input condition into `false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A key, hash, signature or encoded blob has the wrong byte length
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A scalar or field element lies outside its modulus, or a private key is zero
    #[error("{context}: value out of range")]
    OutOfRange { context: &'static str },

    /// Base58Check or BIP39 checksum mismatch
    #[error("{context}: checksum mismatch")]
    InvalidChecksum { context: &'static str },

    /// A parsed point fails the curve equation, or an x-coordinate has no square root
    #[error("{context}: point is not on the curve")]
    NotOnCurve { context: &'static str },

    /// This BIP32 child index yields an invalid key; the caller should try the next index
    #[error("child index {index} yields an invalid key")]
    DerivationSkip { index: u32 },

    /// Malformed textual or binary encoding
    #[error("{context}: invalid encoding: {message}")]
    InvalidEncoding {
        context: &'static str,
        message: String,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// The injected crypto provider failed
    #[error("{context}: provider failure: {message}")]
    Provider {
        context: &'static str,
        message: String,
    },
}

/// Result type for hdcrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for an [`Error::InvalidParameter`]
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::InvalidEncoding`]
    pub fn encoding(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidEncoding {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error
    ///
    /// `DerivationSkip` carries no context and is returned unchanged.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::OutOfRange { .. } => Self::OutOfRange { context },
            Self::InvalidChecksum { .. } => Self::InvalidChecksum { context },
            Self::NotOnCurve { .. } => Self::NotOnCurve { context },
            Self::DerivationSkip { index } => Self::DerivationSkip { index },
            Self::InvalidEncoding { message, .. } => Self::InvalidEncoding { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Provider { message, .. } => Self::Provider { context, message },
        }
    }

    /// True for the one error kind callers are expected to recover from
    pub fn is_derivation_skip(&self) -> bool {
        matches!(self, Self::DerivationSkip { .. })
    }
}
