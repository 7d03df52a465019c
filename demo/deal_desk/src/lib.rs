//! # Deal Desk
//!
//! Deal Desk is the demo front end for the LBO evaluation engine. It plays
//! the collaborator roles the engine itself leaves open:
//!
//! - **Generator**: seeded mock deal batches
//! - **Loader**: CSV deal files with required-column checks
//! - **Reporter**: console summary, sectioned text report, JSON/CSV export
//! - **Commands**: `evaluate`, `simulate` and `sensitivity`
//!
//! ## Layering
//!
//! This crate sits in the demo layer, above the engine crates:
//! - `lbo_core` for deal and configuration types
//! - `lbo_pricing` for the seeded random source and Monte Carlo
//! - `lbo_portfolio` for batch evaluation

pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod loader;
pub mod report;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::commands::evaluate::EvaluateOptions;
    pub use crate::commands::simulate::SimulateOptions;
    pub use crate::commands::OutputFormat;
    pub use crate::config::{DeskConfig, DeskSettings};
    pub use crate::error::DeskError;
    pub use crate::generator::generate_mock_deals;
    pub use crate::loader::load_deals;
    pub use crate::report::{render_summary, Report};
}
