//! Command implementations.
//!
//! Each command writes its console output to a caller-supplied writer so the
//! binary can pass stdout and tests can pass a buffer.

pub mod evaluate;
pub mod sensitivity;
pub mod simulate;

use clap::ValueEnum;

/// Output format for evaluation results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console summary
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
    /// CSV with a header row
    Csv,
}
