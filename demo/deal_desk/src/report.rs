//! Console summaries, sectioned text reports and result exports.

use crate::error::Result;
use chrono::{DateTime, Utc};
use lbo_core::types::DealResult;
use lbo_portfolio::{DealOutcome, PortfolioSummary};
use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Renders the per-deal console summary.
///
/// # Examples
///
/// ```
/// use deal_desk::report::render_summary;
///
/// let text = render_summary("MANKEY_PE", &[]);
/// assert_eq!(text, "=== MANKEY_PE | LBO Evaluation Report ===\n");
/// ```
pub fn render_summary(team: &str, results: &[DealResult]) -> String {
    let mut out = report_header(team);
    for result in results {
        out.push_str(&render_deal(result));
    }
    out
}

fn report_header(team: &str) -> String {
    format!("=== {} | LBO Evaluation Report ===\n", team)
}

fn render_deal(r: &DealResult) -> String {
    format!(
        "\nDeal: {}\n  Decision: {}\n  IRR: {:.2}%\n  Risk-Adjusted IRR: {:.2}%\n  MOIC: {:.2}x\n  Notes: {}\n",
        r.name,
        r.decision,
        r.irr * 100.0,
        r.risk_adjusted_irr * 100.0,
        r.moic,
        r.commentary
    )
}

/// Renders a skip-and-record batch; failed deals are shown in place.
///
/// Without failures the output is identical to [`render_summary`].
pub fn render_outcomes(team: &str, outcomes: &[DealOutcome]) -> String {
    let mut out = report_header(team);
    for outcome in outcomes {
        match outcome {
            DealOutcome::Evaluated(result) => out.push_str(&render_deal(result)),
            DealOutcome::Failed { name, error } => {
                let _ = write!(out, "\nDeal: {}\n  Decision: FAILED\n  Error: {}\n", name, error);
            }
        }
    }
    out
}

/// Renders portfolio aggregates.
pub fn render_portfolio_summary(summary: &PortfolioSummary) -> String {
    let pct = |v: Option<f64>| v.map_or_else(|| "n/a".to_string(), |x| format!("{:.2}%", x * 100.0));

    let mut out = String::new();
    let _ = writeln!(out, "Deals evaluated: {}", summary.n_deals - summary.n_failed);
    let _ = writeln!(out, "INVEST: {}", summary.n_invest);
    let _ = writeln!(out, "PASS: {}", summary.n_pass);
    if summary.n_failed > 0 {
        let _ = writeln!(out, "Failed: {}", summary.n_failed);
    }
    let _ = writeln!(out, "Average IRR: {}", pct(summary.mean_irr));
    let _ = writeln!(out, "Average Risk-Adjusted IRR: {}", pct(summary.mean_risk_adjusted_irr));
    let _ = writeln!(
        out,
        "Average MOIC: {}",
        summary
            .mean_moic
            .map_or_else(|| "n/a".to_string(), |m| format!("{:.2}x", m))
    );
    if let Some(best) = &summary.best_deal {
        let _ = writeln!(out, "Top risk-adjusted deal: {}", best);
    }
    out
}

/// A titled report section.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Section title.
    pub title: String,
    /// Section body.
    pub content: String,
}

/// Plain-text report made of titled sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    sections: Vec<Section>,
}

impl Report {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a section.
    pub fn add_section(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.sections.push(Section {
            title: title.into(),
            content: content.into(),
        });
    }

    /// Sections in insertion order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Renders every section as `### title`, the content and a blank line.
    pub fn to_text(&self) -> String {
        self.sections
            .iter()
            .map(|s| format!("### {}\n{}\n\n", s.title, s.content))
            .collect()
    }

    /// Writes the rendered report to `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_text())?;
        info!(path = %path.display(), sections = self.sections.len(), "report saved");
        Ok(())
    }
}

/// Builds the full evaluation report for a batch.
pub fn evaluation_report(
    team: &str,
    outcomes: &[DealOutcome],
    generated_at: DateTime<Utc>,
) -> Report {
    let summary = PortfolioSummary::from_outcomes(outcomes);

    let mut report = Report::new();
    report.add_section(
        "Executive Summary",
        format!(
            "{} LBO screening of {} candidate deals.\nGenerated: {}",
            team,
            summary.n_deals,
            generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
    );
    report.add_section("Key Metrics", render_portfolio_summary(&summary).trim_end());
    report.add_section("Deal Results", render_outcomes(team, outcomes).trim_end());
    report
}

/// Writes results as pretty-printed JSON.
pub fn write_json<W: Write>(writer: W, results: &[DealResult]) -> Result<()> {
    serde_json::to_writer_pretty(writer, results)?;
    Ok(())
}

/// Writes results as CSV with a header row.
pub fn write_csv<W: Write>(writer: W, results: &[DealResult]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for result in results {
        writer.serialize(result)?;
    }
    writer.flush()?;
    Ok(())
}
