//! # LBO Portfolio (L4: Application)
//!
//! Batch evaluation of leveraged-buyout candidates.
//!
//! This crate provides:
//! - [`Evaluator`]: the per-deal pipeline (risk → projection → returns →
//!   decision → commentary) applied across a batch
//! - [`DealOutcome`]: per-deal success or failure for skip-and-record runs
//! - [`PortfolioSummary`]: decision counts and average metrics
//! - Rayon-based parallel helpers
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           lbo_portfolio (L4)            │
//! │  evaluator/ - batch pipeline            │
//! │  summary/   - portfolio aggregates      │
//! │  parallel/  - rayon utilities           │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            lbo_models (L2)              │
//! │  RiskModel, FinancialModel, Commentary  │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │             lbo_core (L1)               │
//! │  Deal, DealResult, EngineConfig         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Failure policy
//!
//! [`Evaluator::evaluate`] aborts the batch on the first failing deal in
//! input order. [`Evaluator::evaluate_all`] instead records a
//! [`DealOutcome::Failed`] marker in place of the result and carries on.
//!
//! ## Example
//!
//! ```
//! use lbo_core::config::EngineConfig;
//! use lbo_core::types::{Deal, Decision};
//! use lbo_portfolio::Evaluator;
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
//! let evaluator = Evaluator::new(EngineConfig::default()).unwrap();
//! let results = evaluator.evaluate(&[deal]).unwrap();
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].decision, Decision::Invest);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod evaluator;
pub mod parallel;
pub mod summary;

pub use error::EvaluationError;
pub use evaluator::{DealOutcome, Evaluator};
pub use parallel::{maybe_parallel_map, parallel_map};
pub use summary::PortfolioSummary;
