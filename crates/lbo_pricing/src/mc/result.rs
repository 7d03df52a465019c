//! Simulation output and summary statistics.

/// Terminal values of a Monte Carlo run.
///
/// Always holds at least one value: the simulator rejects zero trials.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResult {
    terminal_values: Vec<f64>,
    n_periods: usize,
    seed: u64,
}

impl SimulationResult {
    pub(crate) fn new(terminal_values: Vec<f64>, n_periods: usize, seed: u64) -> Self {
        Self {
            terminal_values,
            n_periods,
            seed,
        }
    }

    /// Terminal value of every trial, in trial order.
    #[inline]
    pub fn terminal_values(&self) -> &[f64] {
        &self.terminal_values
    }

    /// Consumes the result, returning the terminal values.
    pub fn into_terminal_values(self) -> Vec<f64> {
        self.terminal_values
    }

    /// Compounding periods per trial.
    #[inline]
    pub fn n_periods(&self) -> usize {
        self.n_periods
    }

    /// Base seed the trial streams were derived from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Arithmetic mean of the terminal values.
    pub fn mean(&self) -> f64 {
        self.terminal_values.iter().sum::<f64>() / self.terminal_values.len() as f64
    }

    /// Sample standard deviation (n − 1 denominator); zero for a single trial.
    pub fn std_dev(&self) -> f64 {
        let n = self.terminal_values.len();
        if n < 2 {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .terminal_values
            .iter()
            .map(|&v| (v - mean).powi(2))
            .sum::<f64>()
            / (n - 1) as f64;
        variance.sqrt()
    }

    /// Smallest terminal value.
    pub fn min(&self) -> f64 {
        self.terminal_values
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }

    /// Largest terminal value.
    pub fn max(&self) -> f64 {
        self.terminal_values
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Percentile `p` in `[0, 100]` with linear interpolation between order
    /// statistics.
    ///
    /// Returns `None` when `p` is outside `[0, 100]` or NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use lbo_pricing::mc::{GrowthParams, MonteCarloConfig, MonteCarloSimulator};
    ///
    /// let config = MonteCarloConfig::builder().n_trials(3).n_periods(1).seed(1).build().unwrap();
    /// let result = MonteCarloSimulator::new(config)
    ///     .simulate(10.0, GrowthParams::new(0.0, 0.0))
    ///     .unwrap();
    /// assert_eq!(result.percentile(50.0), Some(10.0));
    /// assert_eq!(result.percentile(101.0), None);
    /// ```
    pub fn percentile(&self, p: f64) -> Option<f64> {
        if !(0.0..=100.0).contains(&p) || self.terminal_values.is_empty() {
            return None;
        }
        let mut sorted = self.terminal_values.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let rank = p / 100.0 * (sorted.len() - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = rank.ceil() as usize;
        let weight = rank - lower as f64;
        Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
    }
}
