//! Validation utilities for input checking

use super::types::{Error, Result};

/// Validate that a byte string has exactly the expected length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a byte string is at least `min` bytes long
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::InvalidLength {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate a parameter condition
pub fn parameter(condition: bool, context: &'static str, message: &str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, message));
    }
    Ok(())
}

/// Validate that a value lies in its permitted range
pub fn range(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::OutOfRange { context });
    }
    Ok(())
}
