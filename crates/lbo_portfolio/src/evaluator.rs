//! Batch deal evaluation.
//!
//! The per-deal pipeline is:
//!
//! 1. validate the deal inputs
//! 2. score risk ([`RiskModel`])
//! 3. project equity, cash flows and exit value ([`FinancialModel`])
//! 4. derive IRR and MOIC, then the risk-adjusted IRR
//! 5. apply the decision hurdles and attach commentary
//!
//! Deals are independent, so batches above the configured threshold run on
//! the rayon pool. Results always come back in input order.

use crate::error::EvaluationError;
use crate::parallel::maybe_parallel_map;
use lbo_core::config::EngineConfig;
use lbo_core::types::{Deal, DealError, DealResult, ScoredDeal};
use lbo_models::{CommentaryEngine, FinancialModel, RiskModel};
use tracing::{debug, info, warn};

/// Result of one deal in a skip-and-record batch.
#[derive(Debug, Clone, PartialEq)]
pub enum DealOutcome {
    /// The deal was evaluated.
    Evaluated(DealResult),
    /// The deal failed and was skipped.
    Failed {
        /// Deal name.
        name: String,
        /// Why the deal failed.
        error: DealError,
    },
}

impl DealOutcome {
    /// Name of the deal this outcome belongs to.
    pub fn name(&self) -> &str {
        match self {
            DealOutcome::Evaluated(result) => &result.name,
            DealOutcome::Failed { name, .. } => name,
        }
    }

    /// Returns the result when the deal was evaluated.
    pub fn result(&self) -> Option<&DealResult> {
        match self {
            DealOutcome::Evaluated(result) => Some(result),
            DealOutcome::Failed { .. } => None,
        }
    }

    /// Returns `true` when the deal failed.
    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, DealOutcome::Failed { .. })
    }
}

/// Evaluates deals against a fixed engine configuration.
///
/// The evaluator holds no per-deal state and is `Sync`, so one instance can
/// serve any number of concurrent batches.
#[derive(Debug, Clone)]
pub struct Evaluator {
    config: EngineConfig,
    risk_model: RiskModel,
    financial_model: FinancialModel,
    commentary: CommentaryEngine,
}

impl Evaluator {
    /// Creates an evaluator.
    ///
    /// # Errors
    ///
    /// Returns `EvaluationError::Config` if `config` fails validation.
    pub fn new(config: EngineConfig) -> Result<Self, EvaluationError> {
        config.validate()?;
        Ok(Self {
            financial_model: FinancialModel::new(config.horizon_years),
            config,
            risk_model: RiskModel::new(),
            commentary: CommentaryEngine::new(),
        })
    }

    /// Returns the engine configuration.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validates `deal` and attaches its risk score.
    ///
    /// # Errors
    ///
    /// Returns `DealError::InvalidInput` if the deal fails validation.
    pub fn score<'a>(&self, deal: &'a Deal) -> Result<ScoredDeal<'a>, DealError> {
        deal.validate()?;
        Ok(ScoredDeal::new(deal, self.risk_model.assess(deal)))
    }

    /// Runs the full pipeline for one deal.
    ///
    /// # Errors
    ///
    /// - `DealError::InvalidInput` for invalid inputs or non-positive equity
    /// - `DealError::NumericOverflow` when returns are not finite
    pub fn evaluate_deal(&self, deal: &Deal) -> Result<DealResult, DealError> {
        let scored = self.score(deal)?;
        let returns = self.financial_model.project(deal)?.returns()?;

        let risk_adjusted_irr =
            returns.irr - scored.risk_score * self.config.risk_penalty_per_point;
        let decision = self.config.decision.decide(risk_adjusted_irr, returns.moic);
        let commentary =
            self.commentary
                .generate(deal, returns.irr, returns.moic, scored.risk_score);

        debug!(
            deal = %deal.name,
            irr = returns.irr,
            moic = returns.moic,
            risk_score = scored.risk_score,
            %decision,
            "deal evaluated"
        );

        Ok(DealResult {
            name: deal.name.clone(),
            decision,
            irr: returns.irr,
            moic: returns.moic,
            risk_adjusted_irr,
            risk_score: scored.risk_score,
            commentary,
        })
    }

    /// Evaluates every deal, aborting on failure.
    ///
    /// Output has the same length and order as `deals`. When several deals
    /// fail, the error reported is the one with the lowest input index.
    ///
    /// # Errors
    ///
    /// `EvaluationError::DealFailed` naming the first failing deal.
    pub fn evaluate(&self, deals: &[Deal]) -> Result<Vec<DealResult>, EvaluationError> {
        let evaluated = maybe_parallel_map(deals, &self.config.parallel, |deal| {
            self.evaluate_deal(deal)
        });

        let mut results = Vec::with_capacity(evaluated.len());
        for (index, (deal, outcome)) in deals.iter().zip(evaluated).enumerate() {
            match outcome {
                Ok(result) => results.push(result),
                Err(source) => {
                    warn!(index, deal = %deal.name, error = %source, "aborting batch");
                    return Err(EvaluationError::DealFailed {
                        index,
                        name: deal.name.clone(),
                        source,
                    });
                }
            }
        }

        info!(n_deals = results.len(), "batch evaluated");
        Ok(results)
    }

    /// Evaluates every deal, recording failures instead of aborting.
    ///
    /// Output has the same length and order as `deals`.
    pub fn evaluate_all(&self, deals: &[Deal]) -> Vec<DealOutcome> {
        let outcomes = maybe_parallel_map(deals, &self.config.parallel, |deal| {
            match self.evaluate_deal(deal) {
                Ok(result) => DealOutcome::Evaluated(result),
                Err(error) => DealOutcome::Failed {
                    name: deal.name.clone(),
                    error,
                },
            }
        });

        let n_failed = outcomes.iter().filter(|o| o.is_failed()).count();
        for (index, outcome) in outcomes.iter().enumerate() {
            if let DealOutcome::Failed { name, error } = outcome {
                warn!(index, deal = %name, error = %error, "deal skipped");
            }
        }
        info!(
            n_deals = outcomes.len(),
            n_failed, "batch evaluated with skip-and-record"
        );
        outcomes
    }
}
