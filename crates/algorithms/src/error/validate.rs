//! Validation utilities for curve primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a decoded point satisfies the curve equation
#[inline(always)]
pub fn on_curve(is_on_curve: bool, context: &'static str) -> Result<()> {
    if !is_on_curve {
        return Err(Error::NotOnCurve { context });
    }
    Ok(())
}

/// Validate that a value lies inside its modulus
#[inline(always)]
pub fn in_range(in_range: bool, context: &'static str) -> Result<()> {
    if !in_range {
        return Err(Error::OutOfRange { context });
    }
    Ok(())
}
