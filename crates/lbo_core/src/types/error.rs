//! Error types for deal evaluation.
//!
//! This module provides `DealError`, the error taxonomy shared by the risk
//! model, the financial model and the evaluator.

use thiserror::Error;

/// Categorised deal evaluation errors.
///
/// # Variants
/// - `InvalidInput`: Deal fields outside their expected ranges, or a
///   non-positive equity cheque
/// - `NumericOverflow`: A computation produced a non-finite value
///
/// # Examples
/// ```
/// use lbo_core::types::DealError;
///
/// let err = DealError::InvalidInput("equity must be positive".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: equity must be positive");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DealError {
    /// Invalid deal field or derived quantity.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Non-finite intermediate or final value.
    #[error("Numeric overflow: {0}")]
    NumericOverflow(String),
}

impl DealError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a numeric overflow error
    pub fn numeric_overflow(msg: impl Into<String>) -> Self {
        Self::NumericOverflow(msg.into())
    }

    /// Returns an overflow error naming `what` unless `value` is finite.
    #[inline]
    pub fn ensure_finite(what: &str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NumericOverflow(format!("{} is not finite ({})", what, value)))
        }
    }
}
