//! Validation utilities for curve parameters

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate that a real input is a finite number
#[inline(always)]
pub fn finite(value: f64, context: &'static str, name: &'static str) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::param(
            context,
            format!("{} must be a finite number, got {}", name, value),
        ));
    }
    Ok(())
}

/// Validate that a raw numeric input is a finite integer representable as `i64`
#[inline(always)]
pub fn integral(value: f64, context: &'static str, name: &'static str) -> Result<i64> {
    finite(value, context, name)?;
    if value.fract() != 0.0 || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(Error::param(
            context,
            format!("{} must be an integer, got {}", name, value),
        ));
    }
    Ok(value as i64)
}

/// Validate a modulus
#[inline(always)]
pub fn modulus(k: i64, context: &'static str) -> Result<()> {
    if k < 1 {
        return Err(Error::param(
            context,
            format!("modulus must be at least 1, got {}", k),
        ));
    }
    Ok(())
}
