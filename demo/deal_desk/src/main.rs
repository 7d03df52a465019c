//! Deal Desk CLI
//!
//! Entry point for evaluating LBO candidates and running sensitivity
//! analysis.
//!
//! # Commands
//!
//! - `deal-desk evaluate` - Evaluate mock deals or a CSV deal file
//! - `deal-desk simulate` - Monte Carlo growth simulation
//! - `deal-desk sensitivity` - Scenario and sensitivity table for a value

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deal_desk::commands::{self, sensitivity::DEFAULT_SHOCKS};
use deal_desk::config::DEFAULT_CONFIG_PATH;
use deal_desk::prelude::*;
use lbo_pricing::sensitivity::DEFAULT_SHOCK;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// LBO deal evaluation desk
#[derive(Parser)]
#[command(name = "deal-desk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a batch of deals
    Evaluate {
        /// CSV deal file; mock deals are generated when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Number of mock deals to generate
        #[arg(short, long, conflicts_with = "input")]
        mock: Option<usize>,

        /// Seed for the mock deal generator
        #[arg(short, long)]
        seed: Option<u64>,

        /// Record failing deals and carry on instead of aborting
        #[arg(long)]
        skip_failures: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Output file for formatted results
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for the sectioned text report
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Run a Monte Carlo growth simulation
    Simulate {
        /// Starting value
        #[arg(long, allow_hyphen_values = true)]
        start: Option<f64>,

        /// Mean growth per period
        #[arg(long, allow_hyphen_values = true)]
        mu: Option<f64>,

        /// Growth standard deviation per period
        #[arg(long)]
        sigma: Option<f64>,

        /// Periods per trial
        #[arg(short, long)]
        periods: Option<usize>,

        /// Number of trials
        #[arg(short = 'n', long)]
        trials: Option<usize>,

        /// Base seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Run trials in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Print upside/downside scenarios and a sensitivity table
    Sensitivity {
        /// Base value
        #[arg(short, long, default_value_t = 100.0)]
        base: f64,

        /// Upside shock
        #[arg(long, default_value_t = DEFAULT_SHOCK)]
        up: f64,

        /// Downside shock
        #[arg(long, default_value_t = DEFAULT_SHOCK)]
        down: f64,

        /// Comma-separated relative shocks
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        shocks: Vec<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = DeskConfig::load_with_env_and_validate(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.desk.log_level.as_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?)
        .init();

    info!(team = %config.desk.team_label, "Deal Desk starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Evaluate {
            input,
            mock,
            seed,
            skip_failures,
            format,
            output,
            report,
        } => {
            let options = EvaluateOptions {
                input,
                mock,
                seed,
                skip_failures,
                format,
                output,
                report,
            };
            commands::evaluate::run(&config, &options, &mut out)?;
        }
        Commands::Simulate {
            start,
            mu,
            sigma,
            periods,
            trials,
            seed,
            parallel,
        } => {
            let options = SimulateOptions {
                start,
                mu,
                sigma,
                periods,
                trials,
                seed,
                parallel,
            };
            commands::simulate::run(&config.monte_carlo, &options, &mut out)?;
        }
        Commands::Sensitivity {
            base,
            up,
            down,
            shocks,
        } => {
            let shocks = if shocks.is_empty() {
                DEFAULT_SHOCKS.to_vec()
            } else {
                shocks
            };
            commands::sensitivity::run(base, up, down, &shocks, &mut out)?;
        }
    }

    Ok(())
}
