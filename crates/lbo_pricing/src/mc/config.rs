//! Monte Carlo simulation configuration.
//!
//! This module provides the validated [`MonteCarloConfig`] with its builder,
//! and the deserialisable [`MonteCarloDefaults`] used by front ends.

use super::error::SimulationError;
use super::simulator::GrowthParams;
use serde::{Deserialize, Serialize};

/// Maximum number of trials allowed.
pub const MAX_TRIALS: usize = 10_000_000;

/// Maximum number of compounding periods allowed per trial.
pub const MAX_PERIODS: usize = 10_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use lbo_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_trials(1_000)
///     .n_periods(5)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_trials(), 1_000);
/// assert_eq!(config.n_periods(), 5);
/// assert!(!config.parallel());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Number of independent trials.
    n_trials: usize,
    /// Number of compounding periods per trial.
    n_periods: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Run trials on the rayon pool.
    parallel: bool,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of trials.
    #[inline]
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Returns the number of periods per trial.
    #[inline]
    pub fn n_periods(&self) -> usize {
        self.n_periods
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns whether trials run in parallel.
    #[inline]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError` if:
    /// - `n_trials` is 0 or greater than 10,000,000
    /// - `n_periods` is 0 or greater than 10,000
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.n_trials == 0 || self.n_trials > MAX_TRIALS {
            return Err(SimulationError::InvalidTrialCount(self.n_trials));
        }
        if self.n_periods == 0 || self.n_periods > MAX_PERIODS {
            return Err(SimulationError::InvalidPeriodCount(self.n_periods));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Trial and period counts are mandatory; validation happens at build time.
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_trials: Option<usize>,
    n_periods: Option<usize>,
    seed: Option<u64>,
    parallel: bool,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of trials in [1, 10_000_000].
    #[inline]
    pub fn n_trials(mut self, n_trials: usize) -> Self {
        self.n_trials = Some(n_trials);
        self
    }

    /// Sets the number of periods in [1, 10_000].
    #[inline]
    pub fn n_periods(mut self, n_periods: usize) -> Self {
        self.n_periods = Some(n_periods);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an optional seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables parallel trials.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError` if:
    /// - `n_trials` not set or invalid
    /// - `n_periods` not set or invalid
    pub fn build(self) -> Result<MonteCarloConfig, SimulationError> {
        let n_trials = self
            .n_trials
            .ok_or_else(|| SimulationError::invalid_parameter("n_trials", "must be specified"))?;

        let n_periods = self
            .n_periods
            .ok_or_else(|| SimulationError::invalid_parameter("n_periods", "must be specified"))?;

        let config = MonteCarloConfig {
            n_trials,
            n_periods,
            seed: self.seed,
            parallel: self.parallel,
        };

        config.validate()?;
        Ok(config)
    }
}

/// Default simulation inputs, deserialisable from a `[monte_carlo]` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloDefaults {
    /// Starting value.
    pub start: f64,
    /// Mean growth per period.
    pub mu: f64,
    /// Standard deviation of growth per period.
    pub sigma: f64,
    /// Compounding periods per trial.
    pub periods: usize,
    /// Number of trials.
    pub trials: usize,
    /// Seed; `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Run trials on the rayon pool.
    pub parallel: bool,
}

impl Default for MonteCarloDefaults {
    fn default() -> Self {
        Self {
            start: 100.0,
            mu: 0.05,
            sigma: 0.2,
            periods: 5,
            trials: 1_000,
            seed: Some(42),
            parallel: false,
        }
    }
}

impl MonteCarloDefaults {
    /// Growth parameters.
    pub fn growth(&self) -> GrowthParams {
        GrowthParams::new(self.mu, self.sigma)
    }

    /// Builds the validated simulator configuration.
    ///
    /// # Errors
    ///
    /// See [`MonteCarloConfigBuilder::build`].
    pub fn to_config(&self) -> Result<MonteCarloConfig, SimulationError> {
        MonteCarloConfig::builder()
            .n_trials(self.trials)
            .n_periods(self.periods)
            .maybe_seed(self.seed)
            .parallel(self.parallel)
            .build()
    }
}
