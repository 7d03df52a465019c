//! Deal input records.
//!
//! A [`Deal`] is the analyst-supplied description of one buyout candidate.
//! It is never mutated during evaluation: the heuristic risk score lives in
//! the separate [`ScoredDeal`] wrapper produced once the risk model has run.

use super::error::DealError;
use serde::{Deserialize, Serialize};

/// Sector label used when none is supplied.
pub const DEFAULT_SECTOR: &str = "General";

fn default_sector() -> String {
    DEFAULT_SECTOR.to_string()
}

/// A leveraged-buyout candidate.
///
/// All rates and fractions are decimals (`0.07` is 7%). Monetary amounts
/// share a single, unspecified currency.
///
/// # Examples
///
/// ```rust
/// use lbo_core::types::Deal;
///
/// let deal = Deal::builder("TargetCo_7")
///     .ebitda(5_000_000.0)
///     .entry_multiple(7.0)
///     .exit_multiple(8.0)
///     .leverage(0.6)
///     .build()
///     .unwrap();
///
/// assert_eq!(deal.sector, "General");
/// assert_eq!(deal.purchase_price(), 35_000_000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    /// Deal identifier (uniqueness within a batch is not enforced).
    pub name: String,
    /// Entry EBITDA.
    pub ebitda: f64,
    /// Purchase price as a multiple of entry EBITDA.
    pub entry_multiple: f64,
    /// Exit valuation as a multiple of final-year EBITDA.
    pub exit_multiple: f64,
    /// Annual EBITDA growth rate (may be negative).
    pub revenue_growth: f64,
    /// EBITDA margin.
    pub margin: f64,
    /// Fraction of the purchase price financed with debt.
    pub leverage: f64,
    /// Annual interest rate on the acquisition debt.
    pub interest_rate: f64,
    /// Free-text sector label, matched case-insensitively by the risk model.
    #[serde(default = "default_sector")]
    pub sector: String,
}

impl Deal {
    /// Creates a new deal builder with the given name.
    #[inline]
    pub fn builder(name: impl Into<String>) -> DealBuilder {
        DealBuilder::new(name)
    }

    /// Returns `ebitda × entry_multiple`.
    #[inline]
    pub fn purchase_price(&self) -> f64 {
        self.ebitda * self.entry_multiple
    }

    /// Returns the acquisition debt, `purchase_price × leverage`.
    ///
    /// The principal is held constant over the holding period.
    #[inline]
    pub fn debt(&self) -> f64 {
        self.purchase_price() * self.leverage
    }

    /// Returns the sponsor equity cheque, `purchase_price × (1 − leverage)`.
    #[inline]
    pub fn equity(&self) -> f64 {
        self.purchase_price() * (1.0 - self.leverage)
    }

    /// Validates the deal fields.
    ///
    /// # Errors
    ///
    /// Returns `DealError::InvalidInput` if:
    /// - `ebitda`, `entry_multiple` or `exit_multiple` is not finite and positive
    /// - `leverage` is not finite or lies outside `[0, 1]`
    /// - `revenue_growth` is not finite or is `<= -1`
    /// - `margin` or `interest_rate` is not finite
    pub fn validate(&self) -> Result<(), DealError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("ebitda", self.ebitda),
            ("entry_multiple", self.entry_multiple),
            ("exit_multiple", self.exit_multiple),
        ] {
            if !(value.is_finite() && value > 0.0) {
                errors.push(format!("{} must be positive, got {}", field, value));
            }
        }

        if !(self.leverage.is_finite() && (0.0..=1.0).contains(&self.leverage)) {
            errors.push(format!("leverage {} outside [0, 1]", self.leverage));
        }

        if !(self.revenue_growth.is_finite() && self.revenue_growth > -1.0) {
            errors.push(format!(
                "revenue_growth must be greater than -1, got {}",
                self.revenue_growth
            ));
        }

        for (field, value) in [("margin", self.margin), ("interest_rate", self.interest_rate)] {
            if !value.is_finite() {
                errors.push(format!("{} must be finite, got {}", field, value));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DealError::InvalidInput(format!(
                "deal '{}': {}",
                self.name,
                errors.join("; ")
            )))
        }
    }
}

/// Builder for [`Deal`].
///
/// Unset numeric fields default to zero and `sector` defaults to
/// [`DEFAULT_SECTOR`]; [`build`](DealBuilder::build) validates the result.
#[derive(Debug, Clone)]
pub struct DealBuilder {
    deal: Deal,
}

impl DealBuilder {
    /// Creates a builder for a deal named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            deal: Deal {
                name: name.into(),
                ebitda: 0.0,
                entry_multiple: 0.0,
                exit_multiple: 0.0,
                revenue_growth: 0.0,
                margin: 0.0,
                leverage: 0.0,
                interest_rate: 0.0,
                sector: default_sector(),
            },
        }
    }

    /// Sets entry EBITDA.
    #[inline]
    pub fn ebitda(mut self, ebitda: f64) -> Self {
        self.deal.ebitda = ebitda;
        self
    }

    /// Sets the entry multiple.
    #[inline]
    pub fn entry_multiple(mut self, multiple: f64) -> Self {
        self.deal.entry_multiple = multiple;
        self
    }

    /// Sets the exit multiple.
    #[inline]
    pub fn exit_multiple(mut self, multiple: f64) -> Self {
        self.deal.exit_multiple = multiple;
        self
    }

    /// Sets annual EBITDA growth.
    #[inline]
    pub fn revenue_growth(mut self, growth: f64) -> Self {
        self.deal.revenue_growth = growth;
        self
    }

    /// Sets the EBITDA margin.
    #[inline]
    pub fn margin(mut self, margin: f64) -> Self {
        self.deal.margin = margin;
        self
    }

    /// Sets the debt fraction of the purchase price.
    #[inline]
    pub fn leverage(mut self, leverage: f64) -> Self {
        self.deal.leverage = leverage;
        self
    }

    /// Sets the debt interest rate.
    #[inline]
    pub fn interest_rate(mut self, rate: f64) -> Self {
        self.deal.interest_rate = rate;
        self
    }

    /// Sets the sector label.
    #[inline]
    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.deal.sector = sector.into();
        self
    }

    /// Builds and validates the deal.
    ///
    /// # Errors
    ///
    /// See [`Deal::validate`].
    pub fn build(self) -> Result<Deal, DealError> {
        self.deal.validate()?;
        Ok(self.deal)
    }

    /// Builds the deal without validation.
    ///
    /// Useful for exercising the evaluator's error paths.
    pub fn build_unchecked(self) -> Deal {
        self.deal
    }
}

/// A deal paired with its heuristic risk score.
///
/// Produced by the evaluator after the risk model has run; the score is
/// never written back onto the underlying [`Deal`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDeal<'a> {
    /// The scored deal.
    pub deal: &'a Deal,
    /// Additive risk points, always finite and non-negative.
    pub risk_score: f64,
}

impl<'a> ScoredDeal<'a> {
    /// Wraps `deal` with its `risk_score`.
    #[inline]
    pub fn new(deal: &'a Deal, risk_score: f64) -> Self {
        Self { deal, risk_score }
    }
}
