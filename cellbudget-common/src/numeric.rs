//! Numeric helpers shared by the loss models and the link budget.

use crate::error::{Error, Result};

/// Rounds to 2 decimal places.
///
/// Every reported metric (loss, powers, SNR, capacity, SINR) is published
/// with this precision. Rounding works on the exact binary value, so
/// `62.004999999999995` stays below the half-cent and becomes `62.0`;
/// scaling by 100 first would push it onto the tie and round it up.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Checks that `value` is finite and strictly positive.
///
/// Used in front of every logarithm so that a bad input surfaces as
/// [`Error::InvalidParameter`] instead of a NaN or infinite loss.
pub fn ensure_positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidParameter(format!(
            "{name} must be a positive finite number, got {value}"
        )))
    }
}
