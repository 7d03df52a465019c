//! Evaluation outputs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Invest/pass verdict for a single deal.
///
/// A closed variant: every call site matches exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    /// Risk-adjusted return and multiple both clear their hurdles.
    Invest,
    /// At least one hurdle missed.
    Pass,
}

impl Decision {
    /// Returns the upper-case label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Invest => "INVEST",
            Decision::Pass => "PASS",
        }
    }

    /// Returns `true` for [`Decision::Invest`].
    #[inline]
    pub fn is_invest(&self) -> bool {
        matches!(self, Decision::Invest)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one deal.
///
/// Created once at the end of the per-deal pipeline and never updated in
/// place; re-evaluation produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealResult {
    /// Name of the evaluated deal.
    pub name: String,
    /// Invest/pass verdict.
    pub decision: Decision,
    /// Annualised return approximation.
    pub irr: f64,
    /// Multiple on invested capital.
    pub moic: f64,
    /// IRR net of the linear risk penalty.
    pub risk_adjusted_irr: f64,
    /// Heuristic risk score the penalty was derived from.
    pub risk_score: f64,
    /// Comma-separated qualitative labels.
    pub commentary: String,
}
