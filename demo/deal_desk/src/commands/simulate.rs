//! Simulate command implementation
//!
//! Runs the Monte Carlo growth simulator and prints summary statistics.

use crate::error::Result;
use lbo_pricing::mc::{MonteCarloDefaults, MonteCarloSimulator, SimulationResult};
use std::io::Write;
use tracing::info;

/// Percentiles reported after a run.
pub const REPORTED_PERCENTILES: [f64; 3] = [5.0, 50.0, 95.0];

/// Command-line overrides for the configured simulation defaults.
#[derive(Debug, Clone, Default)]
pub struct SimulateOptions {
    /// Starting value.
    pub start: Option<f64>,
    /// Mean growth per period.
    pub mu: Option<f64>,
    /// Growth standard deviation per period.
    pub sigma: Option<f64>,
    /// Periods per trial.
    pub periods: Option<usize>,
    /// Number of trials.
    pub trials: Option<usize>,
    /// Base seed.
    pub seed: Option<u64>,
    /// Run trials on the rayon pool.
    pub parallel: bool,
}

impl SimulateOptions {
    /// Applies these overrides on top of `defaults`.
    pub fn apply(&self, defaults: &MonteCarloDefaults) -> MonteCarloDefaults {
        MonteCarloDefaults {
            start: self.start.unwrap_or(defaults.start),
            mu: self.mu.unwrap_or(defaults.mu),
            sigma: self.sigma.unwrap_or(defaults.sigma),
            periods: self.periods.unwrap_or(defaults.periods),
            trials: self.trials.unwrap_or(defaults.trials),
            seed: self.seed.or(defaults.seed),
            parallel: self.parallel || defaults.parallel,
        }
    }
}

/// Run the simulate command
pub fn run<W: Write>(
    defaults: &MonteCarloDefaults,
    options: &SimulateOptions,
    out: &mut W,
) -> Result<SimulationResult> {
    let params = options.apply(defaults);
    let simulator = MonteCarloSimulator::new(params.to_config()?);

    info!("Starting Monte Carlo simulation...");
    let result = simulator.simulate(params.start, params.growth())?;

    writeln!(
        out,
        "Monte Carlo Simulation ({} trials, {} periods, seed {})",
        result.terminal_values().len(),
        result.n_periods(),
        result.seed()
    )?;
    writeln!(out, "  Start: {:.2}", params.start)?;
    writeln!(out, "  Mean: {:.2}", result.mean())?;
    writeln!(out, "  Std Dev: {:.2}", result.std_dev())?;
    writeln!(out, "  Min: {:.2}", result.min())?;
    writeln!(out, "  Max: {:.2}", result.max())?;
    for p in REPORTED_PERCENTILES {
        if let Some(value) = result.percentile(p) {
            writeln!(out, "  P{:.0}: {:.2}", p, value)?;
        }
    }
    Ok(result)
}
