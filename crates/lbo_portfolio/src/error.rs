//! Evaluation error types.
//!
//! This module provides structured error types for batch evaluation
//! using `thiserror` for derivation.

use lbo_core::config::ConfigError;
use lbo_core::types::DealError;
use thiserror::Error;

/// Errors that abort a batch evaluation.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// Engine configuration failed validation.
    #[error("Invalid engine configuration: {0}")]
    Config(#[from] ConfigError),

    /// A deal failed; the batch was aborted.
    #[error("Deal #{index} '{name}' failed: {source}")]
    DealFailed {
        /// Position of the deal in the input batch.
        index: usize,
        /// Deal name.
        name: String,
        /// Underlying deal error.
        #[source]
        source: DealError,
    },
}

impl EvaluationError {
    /// Returns the underlying deal error, if any.
    pub fn deal_error(&self) -> Option<&DealError> {
        match self {
            EvaluationError::DealFailed { source, .. } => Some(source),
            EvaluationError::Config(_) => None,
        }
    }
}
