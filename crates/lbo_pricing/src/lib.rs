//! # LBO Pricing (Layer 3: Simulation)
//!
//! ## Layer 3 Role
//!
//! lbo_pricing provides the stochastic side of deal analysis:
//! - Seeded random number generation (`rng`)
//! - Monte Carlo simulation of multiplicative growth paths (`mc`)
//! - Deterministic up/down shocks and sensitivity tables (`sensitivity`)
//!
//! The simulator runs over a scalar starting value, not over deals, and is
//! not wired into the invest/pass decision.
//!
//! ## Reproducibility
//!
//! Randomness is never ambient. Callers either pass a [`rng::DealRng`]
//! handle explicitly or configure a seed on [`mc::MonteCarloConfig`]. Seeded
//! runs give every trial its own stream derived from `(seed, trial index)`,
//! so sequential and parallel execution produce identical outcomes.
//!
//! ## Usage Example
//!
//! ```rust
//! use lbo_pricing::mc::{GrowthParams, MonteCarloConfig, MonteCarloSimulator};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_trials(1_000)
//!     .n_periods(5)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let simulator = MonteCarloSimulator::new(config);
//! let result = simulator.simulate(100.0, GrowthParams::new(0.05, 0.2)).unwrap();
//!
//! assert_eq!(result.terminal_values().len(), 1_000);
//! println!("Mean terminal value: {:.2}", result.mean());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;
pub mod sensitivity;

pub use mc::{
    simulate_terminal_values, GrowthParams, MonteCarloConfig, MonteCarloDefaults,
    MonteCarloSimulator, SimulationError, SimulationResult,
};
pub use rng::DealRng;
pub use sensitivity::{scenario_analysis, sensitivity_table, ScenarioOutcome, SensitivityRow};
