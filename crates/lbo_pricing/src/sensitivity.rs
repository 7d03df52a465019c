//! Deterministic relative shocks.
//!
//! Provides the scalar counterparts of scenario analysis:
//! - [`scenario_analysis`]: one upside and one downside shock around a base
//! - [`sensitivity_table`]: a value re-evaluated under a list of shocks
//!
//! Shocks are relative: a shock of `0.1` multiplies the value by `1.1`.

/// Default upside/downside shock.
pub const DEFAULT_SHOCK: f64 = 0.1;

/// Base value with its upside and downside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenarioOutcome {
    /// Unshocked value.
    pub base: f64,
    /// Upside shock applied.
    pub up_pct: f64,
    /// `base × (1 + up_pct)`.
    pub upside: f64,
    /// Downside shock applied.
    pub down_pct: f64,
    /// `base × (1 − down_pct)`.
    pub downside: f64,
}

/// One row of a sensitivity table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensitivityRow {
    /// Relative shock.
    pub shock: f64,
    /// `value × (1 + shock)`.
    pub value: f64,
}

/// Applies an upside and a downside shock to `base`.
///
/// # Examples
///
/// ```
/// use lbo_pricing::sensitivity::{scenario_analysis, DEFAULT_SHOCK};
///
/// let outcome = scenario_analysis(100.0, DEFAULT_SHOCK, DEFAULT_SHOCK);
/// assert!((outcome.upside - 110.0).abs() < 1e-12);
/// assert!((outcome.downside - 90.0).abs() < 1e-12);
/// ```
pub fn scenario_analysis(base: f64, up_pct: f64, down_pct: f64) -> ScenarioOutcome {
    ScenarioOutcome {
        base,
        up_pct,
        upside: base * (1.0 + up_pct),
        down_pct,
        downside: base * (1.0 - down_pct),
    }
}

/// Applies each shock in `shocks` to `value`, preserving order.
pub fn sensitivity_table(value: f64, shocks: &[f64]) -> Vec<SensitivityRow> {
    shocks
        .iter()
        .map(|&shock| SensitivityRow {
            shock,
            value: value * (1.0 + shock),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scenario_analysis_asymmetric() {
        let outcome = scenario_analysis(200.0, 0.25, 0.1);
        assert_eq!(outcome.base, 200.0);
        assert_relative_eq!(outcome.upside, 250.0);
        assert_relative_eq!(outcome.downside, 180.0);
        assert_eq!(outcome.up_pct, 0.25);
        assert_eq!(outcome.down_pct, 0.1);
    }

    #[test]
    fn test_sensitivity_table() {
        let rows = sensitivity_table(100.0, &[-0.2, -0.1, 0.0, 0.1, 0.2]);
        let values: Vec<f64> = rows.iter().map(|r| r.value).collect();

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].shock, -0.2);
        for (got, want) in values.iter().zip([80.0, 90.0, 100.0, 110.0, 120.0]) {
            assert_relative_eq!(*got, want, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_sensitivity_table_empty() {
        assert!(sensitivity_table(100.0, &[]).is_empty());
    }

    mod prop {
        use crate::sensitivity::{scenario_analysis, sensitivity_table};
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn prop_table_preserves_shock_order(
                value in 1.0..1e9_f64,
                shocks in proptest::collection::vec(-0.99..1.0_f64, 0..20),
            ) {
                let rows = sensitivity_table(value, &shocks);
                prop_assert_eq!(rows.len(), shocks.len());
                for (row, shock) in rows.iter().zip(&shocks) {
                    prop_assert_eq!(row.shock, *shock);
                    prop_assert!(row.value > 0.0);
                }
            }

            #[test]
            fn prop_scenario_brackets_base(base in 0.0..1e9_f64, up in 0.0..1.0_f64, down in 0.0..1.0_f64) {
                let outcome = scenario_analysis(base, up, down);
                prop_assert!(outcome.downside <= outcome.base);
                prop_assert!(outcome.upside >= outcome.base);
            }
        }
    }
}
