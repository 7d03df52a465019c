//! Cash-flow projection and return metrics.
//!
//! # Model
//!
//! Acquisition debt is fixed at entry and never amortised, so the interest
//! charge is flat while EBITDA compounds:
//! ```text
//! debt       = ebitda × entry_multiple × leverage
//! cf_y       = ebitda × (1 + g)^y − debt × interest_rate,   y = 1..=N
//! exit_value = ebitda × (1 + g)^N × exit_multiple
//! ```
//!
//! # Return approximation
//!
//! Total nominal proceeds are treated as a single terminal amount against the
//! initial equity cheque:
//! ```text
//! moic = (Σ cf_y + exit_value) / equity
//! irr  = moic^(1/N) − 1
//! ```
//! This is an annualised multiple, not a dated-cash-flow internal rate of
//! return, and `(1 + irr)^N == moic` holds by construction.

use lbo_core::config::MAX_HORIZON_YEARS;
use lbo_core::types::{Deal, DealError};
use lbo_core::LboResult;

/// Equity, cash flows and exit value for one deal.
///
/// IRR and MOIC are only ever derived from a complete projection, so the
/// pair cannot be computed from mismatched inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    /// Sponsor equity invested at entry.
    pub equity: f64,
    /// Annual cash flows, year 1 first.
    pub cash_flows: Vec<f64>,
    /// Terminal exit value.
    pub exit_value: f64,
    horizon_years: u32,
}

impl Projection {
    /// Holding period the projection was built for.
    #[inline]
    pub fn horizon_years(&self) -> u32 {
        self.horizon_years
    }

    /// Derives the IRR/MOIC pair from this projection.
    ///
    /// # Errors
    ///
    /// See [`FinancialModel::compute_irr_and_moic`].
    pub fn returns(&self) -> LboResult<Returns> {
        FinancialModel::new(self.horizon_years).compute_irr_and_moic(
            self.equity,
            &self.cash_flows,
            self.exit_value,
        )
    }
}

/// Return metrics for a projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Returns {
    /// Annualised return approximation.
    pub irr: f64,
    /// Multiple on invested capital.
    pub moic: f64,
    /// Sum of cash flows plus exit value.
    pub total_return: f64,
}

/// Deterministic cash-flow and exit-value model.
///
/// # Examples
///
/// ```
/// use lbo_core::types::Deal;
/// use lbo_models::FinancialModel;
///
/// let deal = Deal::builder("Flat")
///     .ebitda(100.0)
///     .entry_multiple(10.0)
///     .exit_multiple(10.0)
///     .leverage(0.0)
///     .build()
///     .unwrap();
///
/// let model = FinancialModel::new(5);
/// assert_eq!(model.simulate_cashflows(&deal), vec![100.0; 5]);
/// assert_eq!(model.compute_exit_value(&deal), 1_000.0);
///
/// let returns = model.compute_irr_and_moic(1_000.0, &[100.0; 5], 1_000.0).unwrap();
/// assert_eq!(returns.moic, 1.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinancialModel {
    horizon_years: u32,
}

impl Default for FinancialModel {
    fn default() -> Self {
        Self::new(lbo_core::config::DEFAULT_HORIZON_YEARS)
    }
}

impl FinancialModel {
    /// Creates a model projecting `horizon_years` annual periods.
    #[inline]
    pub fn new(horizon_years: u32) -> Self {
        Self { horizon_years }
    }

    /// Returns the projection horizon.
    #[inline]
    pub fn horizon_years(&self) -> u32 {
        self.horizon_years
    }

    fn check_horizon(&self) -> LboResult<()> {
        if self.horizon_years == 0 {
            return Err(DealError::invalid_input("horizon must be at least one year"));
        }
        if self.horizon_years > MAX_HORIZON_YEARS {
            return Err(DealError::InvalidInput(format!(
                "horizon of {} years exceeds maximum {}",
                self.horizon_years, MAX_HORIZON_YEARS
            )));
        }
        Ok(())
    }

    /// Simulates annual levered cash flows for years `1..=N`.
    pub fn simulate_cashflows(&self, deal: &Deal) -> Vec<f64> {
        let interest = deal.debt() * deal.interest_rate;
        let growth = 1.0 + deal.revenue_growth;

        (1..=self.horizon_years)
            .map(|year| deal.ebitda * growth.powi(exponent(year)) - interest)
            .collect()
    }

    /// Computes the exit value from final-year EBITDA.
    pub fn compute_exit_value(&self, deal: &Deal) -> f64 {
        let growth = (1.0 + deal.revenue_growth).powi(exponent(self.horizon_years));
        let ebitda_final = deal.ebitda * growth;
        ebitda_final * deal.exit_multiple
    }

    /// Computes IRR and MOIC from an equity/cash-flow/exit-value triple.
    ///
    /// # Errors
    ///
    /// - `DealError::InvalidInput` if `equity` is not finite and positive, or
    ///   the horizon is outside `1..=MAX_HORIZON_YEARS`
    /// - `DealError::NumericOverflow` if the proceeds, the multiple or the
    ///   annualised return are not finite (a negative multiple has no real
    ///   fractional root)
    pub fn compute_irr_and_moic(
        &self,
        equity: f64,
        cash_flows: &[f64],
        exit_value: f64,
    ) -> LboResult<Returns> {
        self.check_horizon()?;
        if !(equity.is_finite() && equity > 0.0) {
            return Err(DealError::InvalidInput(format!(
                "equity must be positive, got {}",
                equity
            )));
        }

        let total_return = DealError::ensure_finite(
            "total return",
            cash_flows.iter().sum::<f64>() + exit_value,
        )?;
        let moic = DealError::ensure_finite("moic", total_return / equity)?;
        if moic < 0.0 {
            return Err(DealError::NumericOverflow(format!(
                "irr undefined for negative multiple {}",
                moic
            )));
        }
        let irr = DealError::ensure_finite(
            "irr",
            moic.powf(1.0 / f64::from(self.horizon_years)) - 1.0,
        )?;

        Ok(Returns {
            irr,
            moic,
            total_return,
        })
    }

    /// Builds the full projection for `deal`.
    ///
    /// # Errors
    ///
    /// - `DealError::InvalidInput` if the horizon is outside
    ///   `1..=MAX_HORIZON_YEARS`
    /// - `DealError::NumericOverflow` if any cash flow or the exit value is
    ///   not finite
    pub fn project(&self, deal: &Deal) -> LboResult<Projection> {
        self.check_horizon()?;
        let cash_flows = self.simulate_cashflows(deal);
        for (year, cash_flow) in cash_flows.iter().enumerate() {
            if !cash_flow.is_finite() {
                return Err(DealError::NumericOverflow(format!(
                    "cash flow in year {} of '{}' is not finite",
                    year + 1,
                    deal.name
                )));
            }
        }
        let exit_value = DealError::ensure_finite("exit value", self.compute_exit_value(deal))?;

        Ok(Projection {
            equity: deal.equity(),
            cash_flows,
            exit_value,
            horizon_years: self.horizon_years,
        })
    }
}

/// Converts a year count to a `powi` exponent, saturating instead of wrapping.
#[inline]
fn exponent(years: u32) -> i32 {
    i32::try_from(years).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn golden_deal() -> Deal {
        Deal::builder("Golden")
            .ebitda(10_000_000.0)
            .entry_multiple(8.0)
            .exit_multiple(9.0)
            .revenue_growth(0.1)
            .margin(0.2)
            .leverage(0.5)
            .interest_rate(0.07)
            .sector("Tech")
            .build()
            .unwrap()
    }

    #[test]
    fn test_cashflows_compound_with_flat_interest() {
        let flows = FinancialModel::new(5).simulate_cashflows(&golden_deal());
        let expected = [8_200_000.0, 9_300_000.0, 10_510_000.0, 11_841_000.0, 13_305_100.0];

        assert_eq!(flows.len(), 5);
        for (got, want) in flows.iter().zip(expected) {
            assert_relative_eq!(*got, want, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_cashflow_length_follows_horizon() {
        let deal = golden_deal();
        assert_eq!(FinancialModel::new(1).simulate_cashflows(&deal).len(), 1);
        assert_eq!(FinancialModel::new(10).simulate_cashflows(&deal).len(), 10);
    }

    #[test]
    fn test_negative_growth_shrinks_ebitda() {
        let mut deal = golden_deal();
        deal.revenue_growth = -0.1;
        deal.leverage = 0.0;
        let flows = FinancialModel::new(3).simulate_cashflows(&deal);
        assert!(flows.windows(2).all(|w| w[1] < w[0]));
        assert_relative_eq!(flows[0], 9_000_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_exit_value() {
        let exit = FinancialModel::new(5).compute_exit_value(&golden_deal());
        assert_relative_eq!(exit, 144_945_900.0, max_relative = 1e-12);
    }

    #[test]
    fn test_irr_and_moic_golden() {
        let model = FinancialModel::new(5);
        let deal = golden_deal();
        let returns = model
            .compute_irr_and_moic(
                deal.equity(),
                &model.simulate_cashflows(&deal),
                model.compute_exit_value(&deal),
            )
            .unwrap();

        assert_relative_eq!(returns.total_return, 198_102_000.0, max_relative = 1e-12);
        assert_relative_eq!(returns.moic, 4.95255, max_relative = 1e-12);
        assert_relative_eq!(returns.irr, 0.377_100_936_895_443_66, max_relative = 1e-9);
    }

    #[test]
    fn test_zero_equity_is_rejected() {
        let result = FinancialModel::new(5).compute_irr_and_moic(0.0, &[1.0; 5], 10.0);
        assert!(matches!(result, Err(DealError::InvalidInput(_))));
    }

    #[test]
    fn test_negative_equity_is_rejected() {
        let result = FinancialModel::new(5).compute_irr_and_moic(-5.0, &[1.0; 5], 10.0);
        assert!(matches!(result, Err(DealError::InvalidInput(_))));
    }

    #[test]
    fn test_zero_horizon_is_rejected() {
        let result = FinancialModel::new(0).compute_irr_and_moic(10.0, &[], 10.0);
        assert!(matches!(result, Err(DealError::InvalidInput(_))));
    }

    #[test]
    fn test_oversized_horizon_is_rejected() {
        let deal = golden_deal();
        for horizon in [MAX_HORIZON_YEARS + 1, i32::MAX as u32 + 1, u32::MAX] {
            let model = FinancialModel::new(horizon);
            assert!(matches!(
                model.compute_irr_and_moic(10.0, &[1.0; 5], 10.0),
                Err(DealError::InvalidInput(_))
            ));
            assert!(matches!(model.project(&deal), Err(DealError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_max_horizon_is_projected() {
        let mut deal = golden_deal();
        deal.revenue_growth = 0.0;
        let projection = FinancialModel::new(MAX_HORIZON_YEARS).project(&deal).unwrap();
        assert_eq!(projection.cash_flows.len(), MAX_HORIZON_YEARS as usize);
        assert_relative_eq!(projection.exit_value, 90_000_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_exponent_saturates() {
        assert_eq!(exponent(5), 5);
        assert_eq!(exponent(i32::MAX as u32), i32::MAX);
        assert_eq!(exponent(i32::MAX as u32 + 1), i32::MAX);
        assert_eq!(exponent(u32::MAX), i32::MAX);
    }

    #[test]
    fn test_negative_multiple_overflows() {
        let result = FinancialModel::new(5).compute_irr_and_moic(100.0, &[-80.0; 5], 10.0);
        assert!(matches!(result, Err(DealError::NumericOverflow(_))));
    }

    #[test]
    fn test_infinite_proceeds_overflow() {
        let result = FinancialModel::new(5).compute_irr_and_moic(1.0, &[f64::MAX, f64::MAX], 0.0);
        assert!(matches!(result, Err(DealError::NumericOverflow(_))));
    }

    #[test]
    fn test_project_rejects_explosive_growth() {
        let mut deal = golden_deal();
        deal.revenue_growth = 1e300;
        let result = FinancialModel::new(5).project(&deal);
        assert!(matches!(result, Err(DealError::NumericOverflow(_))));
    }

    #[test]
    fn test_project_matches_components() {
        let model = FinancialModel::new(5);
        let deal = golden_deal();
        let projection = model.project(&deal).unwrap();

        assert_eq!(projection.equity, deal.equity());
        assert_eq!(projection.cash_flows, model.simulate_cashflows(&deal));
        assert_eq!(projection.exit_value, model.compute_exit_value(&deal));
        assert_eq!(projection.horizon_years(), 5);
        assert_eq!(
            projection.returns().unwrap(),
            model
                .compute_irr_and_moic(projection.equity, &projection.cash_flows, projection.exit_value)
                .unwrap()
        );
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_moic_irr_round_trip(
                equity in 1.0..1e9f64,
                flow in 0.0..1e8f64,
                exit_value in 0.0..1e10f64,
                horizon in 1u32..15
            ) {
                let model = FinancialModel::new(horizon);
                let flows = vec![flow; horizon as usize];
                let returns = model.compute_irr_and_moic(equity, &flows, exit_value).unwrap();
                let rebuilt = (1.0 + returns.irr).powi(horizon as i32);
                prop_assert!(
                    (rebuilt - returns.moic).abs() <= 1e-9 * returns.moic.max(1.0),
                    "(1 + {})^{} = {} vs moic {}", returns.irr, horizon, rebuilt, returns.moic
                );
            }
        }
    }
}
