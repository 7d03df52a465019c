//! Error types for the Monte Carlo simulator.
//!
//! All parameter problems are reported before any sampling takes place.

use thiserror::Error;

/// Simulation configuration or parameter error.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum SimulationError {
    /// Trial count outside valid range [1, 10_000_000].
    #[error("Invalid trial count {0}: must be in range [1, 10_000_000]")]
    InvalidTrialCount(usize),

    /// Period count outside valid range [1, 10_000].
    #[error("Invalid period count {0}: must be in range [1, 10_000]")]
    InvalidPeriodCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl SimulationError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}
