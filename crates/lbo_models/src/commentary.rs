//! Rule-based deal commentary.
//!
//! Three independent rule groups are evaluated in order (IRR, MOIC, risk).
//! Each contributes at most one label: the first matching branch of the group.
//!
//! | Group | Condition | Label |
//! |-------|-----------|-------|
//! | IRR | `> 0.25` | High return potential |
//! | | `< 0.10` | Weak IRR |
//! | MOIC | `> 2.5` | Strong value multiple |
//! | | `< 1.5` | Low MOIC |
//! | Risk | `> 3` | Elevated risk profile |
//! | | `<= 1` | Low risk |

use lbo_core::types::Deal;

/// Commentary returned when no rule fires.
pub const NEUTRAL_OUTLOOK: &str = "Neutral outlook";

const LABEL_SEPARATOR: &str = ", ";

/// Maps metrics to qualitative labels.
#[derive(Clone, Copy, Debug, Default)]
pub struct CommentaryEngine;

impl CommentaryEngine {
    /// Creates a commentary engine.
    pub fn new() -> Self {
        Self
    }

    /// Generates the commentary string for one deal.
    ///
    /// # Examples
    ///
    /// ```
    /// use lbo_core::types::Deal;
    /// use lbo_models::CommentaryEngine;
    ///
    /// let deal = Deal::builder("X").build_unchecked();
    /// let engine = CommentaryEngine::new();
    ///
    /// assert_eq!(
    ///     engine.generate(&deal, 0.30, 3.0, 0.5),
    ///     "High return potential, Strong value multiple, Low risk"
    /// );
    /// assert_eq!(engine.generate(&deal, 0.2, 2.0, 2.0), "Neutral outlook");
    /// ```
    pub fn generate(&self, _deal: &Deal, irr: f64, moic: f64, risk_score: f64) -> String {
        let labels: Vec<&str> = [irr_label(irr), moic_label(moic), risk_label(risk_score)]
            .into_iter()
            .flatten()
            .collect();

        if labels.is_empty() {
            NEUTRAL_OUTLOOK.to_string()
        } else {
            labels.join(LABEL_SEPARATOR)
        }
    }
}

fn irr_label(irr: f64) -> Option<&'static str> {
    if irr > 0.25 {
        Some("High return potential")
    } else if irr < 0.10 {
        Some("Weak IRR")
    } else {
        None
    }
}

fn moic_label(moic: f64) -> Option<&'static str> {
    if moic > 2.5 {
        Some("Strong value multiple")
    } else if moic < 1.5 {
        Some("Low MOIC")
    } else {
        None
    }
}

fn risk_label(risk_score: f64) -> Option<&'static str> {
    if risk_score > 3.0 {
        Some("Elevated risk profile")
    } else if risk_score <= 1.0 {
        Some("Low risk")
    } else {
        None
    }
}
