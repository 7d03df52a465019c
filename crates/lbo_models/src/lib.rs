//! # LBO Models (L2: Business Logic)
//!
//! Deal-level models used by the evaluation pipeline.
//!
//! This crate provides:
//! - [`RiskModel`]: additive structural and sector risk points
//! - [`FinancialModel`]: annual cash flows, exit value and the IRR/MOIC pair
//! - [`CommentaryEngine`]: qualitative labels derived from the metrics
//!
//! ## Design Principles
//!
//! - **Pure functions**: every model is deterministic and side-effect free
//! - **Explicit horizon**: the holding period is passed in at construction
//! - **Loud failures**: a non-positive equity cheque or a non-finite result is
//!   an error, never a sentinel value
//!
//! ## Example
//!
//! ```
//! use lbo_core::types::Deal;
//! use lbo_models::{CommentaryEngine, FinancialModel, RiskModel};
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
//! let risk = RiskModel::new().assess(&deal);
//! let projection = FinancialModel::new(5).project(&deal).unwrap();
//! let returns = projection.returns().unwrap();
//! let note = CommentaryEngine::new().generate(&deal, returns.irr, returns.moic, risk);
//!
//! assert_eq!(note, "High return potential, Strong value multiple, Low risk");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod commentary;
pub mod financial;
pub mod risk;

pub use commentary::{CommentaryEngine, NEUTRAL_OUTLOOK};
pub use financial::{FinancialModel, Projection, Returns};
pub use risk::{RiskBreakdown, RiskModel, SectorRisk};
