//! Error handling for the curve primitives

use std::borrow::Cow;
use std::fmt;

use hdcrypt_api::Error as CoreError;

pub mod validate;

/// The error type for curve and scalar primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Coordinates fail y^2 = x^3 + 7, or x has no square root
    NotOnCurve {
        /// Where the point was being parsed
        context: &'static str,
    },

    /// A scalar or field element outside [0, modulus), or a zero where one is forbidden
    OutOfRange {
        /// What was out of range
        context: &'static str,
    },

    /// Processing error during a curve operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for curve primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::NotOnCurve { context } => write!(f, "{}: point not on curve", context),
            Error::OutOfRange { context } => write!(f, "{}: value out of range", context),
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "curve primitive",
                },
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::NotOnCurve { context } => CoreError::NotOnCurve { context },
            Error::OutOfRange { context } => CoreError::OutOfRange { context },
            Error::Processing { operation, details } => CoreError::InvalidParameter {
                context: operation,
                message: details.to_string(),
            },
        }
    }
}
