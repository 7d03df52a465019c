//! Portfolio-level aggregates over evaluated deals.

use crate::evaluator::DealOutcome;
use lbo_core::types::DealResult;

/// Decision counts and average metrics for a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSummary {
    /// Deals in the batch, failed ones included.
    pub n_deals: usize,
    /// Deals with an INVEST decision.
    pub n_invest: usize,
    /// Deals with a PASS decision.
    pub n_pass: usize,
    /// Deals that failed evaluation.
    pub n_failed: usize,
    /// Mean IRR over evaluated deals; `None` if there are none.
    pub mean_irr: Option<f64>,
    /// Mean MOIC over evaluated deals.
    pub mean_moic: Option<f64>,
    /// Mean risk-adjusted IRR over evaluated deals.
    pub mean_risk_adjusted_irr: Option<f64>,
    /// Name of the evaluated deal with the highest risk-adjusted IRR.
    pub best_deal: Option<String>,
}

impl PortfolioSummary {
    /// Summarises a fully evaluated batch.
    ///
    /// # Examples
    ///
    /// ```
    /// use lbo_portfolio::PortfolioSummary;
    ///
    /// let summary = PortfolioSummary::from_results(&[]);
    /// assert_eq!(summary.n_deals, 0);
    /// assert_eq!(summary.mean_irr, None);
    /// ```
    pub fn from_results(results: &[DealResult]) -> Self {
        Self::build(results.iter(), 0)
    }

    /// Summarises a skip-and-record batch.
    pub fn from_outcomes(outcomes: &[DealOutcome]) -> Self {
        let n_failed = outcomes.iter().filter(|o| o.is_failed()).count();
        Self::build(outcomes.iter().filter_map(DealOutcome::result), n_failed)
    }

    /// Fraction of evaluated deals marked INVEST.
    pub fn invest_ratio(&self) -> Option<f64> {
        let evaluated = self.n_invest + self.n_pass;
        (evaluated > 0).then(|| self.n_invest as f64 / evaluated as f64)
    }

    fn build<'a>(results: impl Iterator<Item = &'a DealResult>, n_failed: usize) -> Self {
        let mut n_invest = 0;
        let mut n_pass = 0;
        let (mut irr, mut moic, mut rairr) = (0.0, 0.0, 0.0);
        let mut best: Option<&DealResult> = None;

        for result in results {
            if result.decision.is_invest() {
                n_invest += 1;
            } else {
                n_pass += 1;
            }
            irr += result.irr;
            moic += result.moic;
            rairr += result.risk_adjusted_irr;
            if best.map_or(true, |b| result.risk_adjusted_irr > b.risk_adjusted_irr) {
                best = Some(result);
            }
        }

        let evaluated = n_invest + n_pass;
        let mean = |total: f64| (evaluated > 0).then(|| total / evaluated as f64);

        Self {
            n_deals: evaluated + n_failed,
            n_invest,
            n_pass,
            n_failed,
            mean_irr: mean(irr),
            mean_moic: mean(moic),
            mean_risk_adjusted_irr: mean(rairr),
            best_deal: best.map(|b| b.name.clone()),
        }
    }
}
