//! Monte Carlo simulation of multiplicative growth paths.
//!
//! For each of `n_trials` independent runs the value starts at `start` and
//! is compounded `n_periods` times by `(1 + x)` with `x ~ Normal(mu, sigma)`.
//! The terminal values form the simulated distribution.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloSimulator
//! ├── MonteCarloConfig  (trial/period counts, seed, parallelism)
//! ├── GrowthParams      (drift and volatility per period)
//! ├── DealRng           (one stream per trial)
//! └── SimulationResult  (terminal values + summary statistics)
//! ```
//!
//! # Examples
//!
//! ## Configured simulator
//!
//! ```rust
//! use lbo_pricing::mc::{GrowthParams, MonteCarloConfig, MonteCarloSimulator};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_trials(10)
//!     .n_periods(5)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let result = MonteCarloSimulator::new(config)
//!     .simulate(100.0, GrowthParams::new(0.0, 0.0))
//!     .unwrap();
//!
//! assert!(result.terminal_values().iter().all(|&v| v == 100.0));
//! ```
//!
//! ## Caller-owned random source
//!
//! ```rust
//! use lbo_pricing::mc::{simulate_terminal_values, GrowthParams};
//! use lbo_pricing::rng::DealRng;
//!
//! let mut rng = DealRng::from_seed(42);
//! let values = simulate_terminal_values(100.0, GrowthParams::new(0.05, 0.2), 5, 1_000, &mut rng)
//!     .unwrap();
//! assert_eq!(values.len(), 1_000);
//! ```

pub mod config;
pub mod error;
pub mod result;
pub mod simulator;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, MonteCarloDefaults};
pub use error::SimulationError;
pub use result::SimulationResult;
pub use simulator::{simulate_terminal_values, GrowthParams, MonteCarloSimulator};
