//! # lbo_core: Foundation Types for LBO Deal Evaluation
//!
//! ## Layer 1 (Foundation) Role
//!
//! lbo_core is the bottom layer of the workspace and provides:
//! - Deal input records and the scored wrapper (`types::deal`)
//! - Evaluation outputs and the closed decision enum (`types::result`)
//! - Error types: `DealError` (`types::error`)
//! - Engine-wide configuration: horizon, thresholds, penalties (`config`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other lbo_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Configuration and record deserialisation
//!
//! ## Usage Examples
//!
//! ```rust
//! use lbo_core::types::{Deal, Decision};
//! use lbo_core::config::EngineConfig;
//!
//! let deal = Deal::builder("TargetCo_1")
//!     .ebitda(10_000_000.0)
//!     .entry_multiple(8.0)
//!     .exit_multiple(9.0)
//!     .revenue_growth(0.1)
//!     .margin(0.2)
//!     .leverage(0.5)
//!     .interest_rate(0.07)
//!     .sector("Tech")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(deal.equity(), 40_000_000.0);
//!
//! let config = EngineConfig::default();
//! assert_eq!(config.horizon_years, 5);
//! assert_eq!(config.decision.decide(0.2, 2.0), Decision::Invest);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod types;

pub use config::{
    ConfigError, DecisionThresholds, EngineConfig, ParallelSettings, MAX_HORIZON_YEARS,
};
pub use types::{Deal, DealBuilder, DealError, DealResult, Decision, ScoredDeal};

/// Result alias for deal-level computations.
pub type LboResult<T> = Result<T, DealError>;
