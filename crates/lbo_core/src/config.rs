//! Engine configuration.
//!
//! Every constant the evaluation pipeline depends on is a named, overridable
//! field here and is passed into the models at construction time.
//!
//! # TOML layout
//!
//! ```toml
//! horizon_years = 5
//! discount_rate = 0.12
//! risk_penalty_per_point = 0.01
//!
//! [decision]
//! min_risk_adjusted_irr = 0.15
//! min_moic = 2.0
//!
//! [parallel]
//! enabled = true
//! parallel_threshold = 100
//! ```

use crate::types::Decision;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default holding period in years.
pub const DEFAULT_HORIZON_YEARS: u32 = 5;

/// Longest holding period the engine will project.
pub const MAX_HORIZON_YEARS: u32 = 100;

/// Default discount rate. Reserved: not used by the return computation.
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.12;

/// Default IRR deduction per risk point.
pub const DEFAULT_RISK_PENALTY_PER_POINT: f64 = 0.01;

/// Default risk-adjusted IRR hurdle (strict).
pub const DEFAULT_MIN_RISK_ADJUSTED_IRR: f64 = 0.15;

/// Default MOIC hurdle (inclusive).
pub const DEFAULT_MIN_MOIC: f64 = 2.0;

/// Default batch size at which evaluation switches to rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// One or more fields failed validation.
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Decision hurdles.
///
/// A deal is an investment iff `risk_adjusted_irr > min_risk_adjusted_irr`
/// AND `moic >= min_moic`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionThresholds {
    /// Strict lower bound on risk-adjusted IRR.
    pub min_risk_adjusted_irr: f64,
    /// Inclusive lower bound on MOIC.
    pub min_moic: f64,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            min_risk_adjusted_irr: DEFAULT_MIN_RISK_ADJUSTED_IRR,
            min_moic: DEFAULT_MIN_MOIC,
        }
    }
}

impl DecisionThresholds {
    /// Applies the decision rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use lbo_core::config::DecisionThresholds;
    /// use lbo_core::types::Decision;
    ///
    /// let hurdles = DecisionThresholds::default();
    /// assert_eq!(hurdles.decide(0.16, 2.0), Decision::Invest);
    /// assert_eq!(hurdles.decide(0.15, 3.0), Decision::Pass);
    /// ```
    #[inline]
    pub fn decide(&self, risk_adjusted_irr: f64, moic: f64) -> Decision {
        if risk_adjusted_irr > self.min_risk_adjusted_irr && moic >= self.min_moic {
            Decision::Invest
        } else {
            Decision::Pass
        }
    }
}

/// Parallel evaluation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelSettings {
    /// Whether rayon may be used at all.
    pub enabled: bool,
    /// Minimum number of items before parallel execution is used.
    pub parallel_threshold: usize,
}

impl Default for ParallelSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelSettings {
    /// Settings that never parallelise.
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        self.enabled && n_items >= self.parallel_threshold
    }
}

/// Engine-wide evaluation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of annual periods simulated per deal.
    pub horizon_years: u32,
    /// Reserved discount rate.
    pub discount_rate: f64,
    /// IRR deduction per risk point.
    pub risk_penalty_per_point: f64,
    /// Invest/pass hurdles.
    pub decision: DecisionThresholds,
    /// Parallel evaluation settings.
    pub parallel: ParallelSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
            discount_rate: DEFAULT_DISCOUNT_RATE,
            risk_penalty_per_point: DEFAULT_RISK_PENALTY_PER_POINT,
            decision: DecisionThresholds::default(),
            parallel: ParallelSettings::default(),
        }
    }
}

impl EngineConfig {
    /// Sets the horizon.
    pub fn with_horizon(mut self, horizon_years: u32) -> Self {
        self.horizon_years = horizon_years;
        self
    }

    /// Sets the decision hurdles.
    pub fn with_decision(mut self, decision: DecisionThresholds) -> Self {
        self.decision = decision;
        self
    }

    /// Sets the parallel settings.
    pub fn with_parallel(mut self, parallel: ParallelSettings) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` listing every failing field:
    /// - `horizon_years` is 0
    /// - `discount_rate` or a hurdle is not finite
    /// - `risk_penalty_per_point` is negative or not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.horizon_years == 0 {
            errors.push("horizon_years must be greater than 0".to_string());
        } else if self.horizon_years > MAX_HORIZON_YEARS {
            errors.push(format!(
                "horizon_years {} exceeds maximum {}",
                self.horizon_years, MAX_HORIZON_YEARS
            ));
        }

        if !self.discount_rate.is_finite() {
            errors.push(format!("discount_rate {} is not finite", self.discount_rate));
        }

        if !(self.risk_penalty_per_point.is_finite() && self.risk_penalty_per_point >= 0.0) {
            errors.push(format!(
                "risk_penalty_per_point {} must be finite and non-negative",
                self.risk_penalty_per_point
            ));
        }

        if !self.decision.min_risk_adjusted_irr.is_finite() {
            errors.push("decision.min_risk_adjusted_irr must be finite".to_string());
        }

        if !self.decision.min_moic.is_finite() {
            errors.push("decision.min_moic must be finite".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}
