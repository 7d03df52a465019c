//! Error types for the Deal Desk demo.

use thiserror::Error;

/// Deal Desk error type
#[derive(Debug, Error)]
pub enum DeskError {
    /// Deal file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Deal file has an extension the loader cannot read
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Required columns absent from the deal file
    #[error("Missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Batch evaluation aborted
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] lbo_portfolio::EvaluationError),

    /// Monte Carlo simulation error
    #[error("Simulation error: {0}")]
    Simulation(#[from] lbo_pricing::mc::SimulationError),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for the Deal Desk.
pub type Result<T> = std::result::Result<T, DeskError>;
