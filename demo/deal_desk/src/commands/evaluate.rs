//! Evaluate command implementation
//!
//! Loads or generates deals, runs the evaluator and renders the results.

use super::OutputFormat;
use crate::config::DeskConfig;
use crate::error::Result;
use crate::generator::generate_mock_deals;
use crate::loader::load_deals;
use crate::report::{
    evaluation_report, render_outcomes, render_portfolio_summary, render_summary, write_csv,
    write_json,
};
use chrono::Utc;
use lbo_core::types::{Deal, DealResult};
use lbo_portfolio::{DealOutcome, Evaluator, PortfolioSummary};
use lbo_pricing::rng::DealRng;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Options for the evaluate command.
#[derive(Debug, Clone, Default)]
pub struct EvaluateOptions {
    /// CSV deal file; mock deals are generated when absent.
    pub input: Option<PathBuf>,
    /// Number of mock deals, overriding the configured count.
    pub mock: Option<usize>,
    /// Generator seed, overriding the configured seed.
    pub seed: Option<u64>,
    /// Record failing deals instead of aborting the batch.
    pub skip_failures: bool,
    /// Output format.
    pub format: OutputFormat,
    /// Write formatted results here instead of the console.
    pub output: Option<PathBuf>,
    /// Also write a sectioned text report here.
    pub report: Option<PathBuf>,
}

/// Run the evaluate command
pub fn run<W: Write>(config: &DeskConfig, options: &EvaluateOptions, out: &mut W) -> Result<()> {
    let deals = source_deals(config, options)?;
    let evaluator = Evaluator::new(config.engine.clone())?;

    info!(
        n_deals = deals.len(),
        skip_failures = options.skip_failures,
        "Starting evaluation..."
    );
    let outcomes = if options.skip_failures {
        evaluator.evaluate_all(&deals)
    } else {
        evaluator
            .evaluate(&deals)?
            .into_iter()
            .map(DealOutcome::Evaluated)
            .collect()
    };

    match &options.output {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            render(config, options.format, &outcomes, &mut file)?;
            info!(path = %path.display(), "results written");
        }
        None => render(config, options.format, &outcomes, out)?,
    }

    if let Some(path) = &options.report {
        evaluation_report(&config.desk.team_label, &outcomes, Utc::now()).write_to(path)?;
    }

    info!("Evaluation complete");
    Ok(())
}

fn source_deals(config: &DeskConfig, options: &EvaluateOptions) -> Result<Vec<Deal>> {
    match &options.input {
        Some(path) => load_deals(path),
        None => {
            let n = options.mock.unwrap_or(config.desk.mock_deals);
            let seed = options.seed.unwrap_or(config.desk.seed);
            info!(n, seed, "generating mock deals");
            Ok(generate_mock_deals(n, &mut DealRng::from_seed(seed)))
        }
    }
}

fn render<W: Write>(
    config: &DeskConfig,
    format: OutputFormat,
    outcomes: &[DealOutcome],
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let summary = PortfolioSummary::from_outcomes(outcomes);
            let team = &config.desk.team_label;
            let text = if summary.n_failed == 0 {
                render_summary(team, &evaluated(outcomes))
            } else {
                render_outcomes(team, outcomes)
            };
            write!(out, "{}", text)?;
            writeln!(out)?;
            write!(out, "{}", render_portfolio_summary(&summary))?;
        }
        OutputFormat::Json => {
            write_json(&mut *out, &evaluated(outcomes))?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_csv(&mut *out, &evaluated(outcomes))?,
    }
    Ok(())
}

fn evaluated(outcomes: &[DealOutcome]) -> Vec<DealResult> {
    outcomes
        .iter()
        .filter_map(DealOutcome::result)
        .cloned()
        .collect()
}
