//! Deal, result and error types.
//!
//! This module provides:
//! - `deal`: The immutable [`Deal`] input record, its builder and the [`ScoredDeal`] wrapper
//! - `result`: The [`DealResult`] output record and the [`Decision`] enum
//! - `error`: Structured [`DealError`] for invalid inputs and numeric overflow
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level.

pub mod deal;
pub mod error;
pub mod result;

pub use deal::{Deal, DealBuilder, ScoredDeal, DEFAULT_SECTOR};
pub use error::DealError;
pub use result::{DealResult, Decision};
