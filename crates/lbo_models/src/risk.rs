//! Heuristic deal risk scoring.
//!
//! The score is an additive point system over three independent factors:
//!
//! | Factor | Condition | Points |
//! |--------|-----------|--------|
//! | Leverage | `> 0.65` | 2 |
//! | | `> 0.5` | 1 |
//! | Margin | `< 0.10` | 2 |
//! | | `< 0.15` | 1 |
//! | Sector | biotech, crypto | 2 |
//! | | industrial, consumer | 0.5 |
//!
//! Within a factor the highest tier wins. There is no upper bound.

use lbo_core::types::Deal;

const HIGH_LEVERAGE: f64 = 0.65;
const ELEVATED_LEVERAGE: f64 = 0.5;
const THIN_MARGIN: f64 = 0.10;
const MODERATE_MARGIN: f64 = 0.15;

/// Sector risk bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectorRisk {
    /// Biotech, crypto.
    High,
    /// Industrial, consumer.
    Moderate,
    /// Everything else.
    Neutral,
}

impl SectorRisk {
    /// Classifies a free-text sector label, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use lbo_models::SectorRisk;
    ///
    /// assert_eq!(SectorRisk::classify("BioTech"), SectorRisk::High);
    /// assert_eq!(SectorRisk::classify("Consumer"), SectorRisk::Moderate);
    /// assert_eq!(SectorRisk::classify("Tech"), SectorRisk::Neutral);
    /// ```
    pub fn classify(sector: &str) -> Self {
        match sector.trim().to_lowercase().as_str() {
            "biotech" | "crypto" => SectorRisk::High,
            "industrial" | "consumer" => SectorRisk::Moderate,
            _ => SectorRisk::Neutral,
        }
    }

    /// Risk points contributed by this bucket.
    #[inline]
    pub fn points(&self) -> f64 {
        match self {
            SectorRisk::High => 2.0,
            SectorRisk::Moderate => 0.5,
            SectorRisk::Neutral => 0.0,
        }
    }
}

/// Per-factor risk points.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskBreakdown {
    /// Points from the debt fraction.
    pub leverage: f64,
    /// Points from the EBITDA margin.
    pub margin: f64,
    /// Points from the sector bucket.
    pub sector: f64,
}

impl RiskBreakdown {
    /// Sum of all factor points.
    #[inline]
    pub fn total(&self) -> f64 {
        self.leverage + self.margin + self.sector
    }
}

/// Additive structural and sector risk model.
#[derive(Clone, Copy, Debug, Default)]
pub struct RiskModel;

impl RiskModel {
    /// Creates a risk model.
    pub fn new() -> Self {
        Self
    }

    /// Scores a deal.
    ///
    /// Always returns a finite, non-negative number. A NaN leverage or margin
    /// matches no tier and contributes zero points.
    #[inline]
    pub fn assess(&self, deal: &Deal) -> f64 {
        self.breakdown(deal).total()
    }

    /// Scores a deal factor by factor.
    pub fn breakdown(&self, deal: &Deal) -> RiskBreakdown {
        RiskBreakdown {
            leverage: leverage_points(deal.leverage),
            margin: margin_points(deal.margin),
            sector: SectorRisk::classify(&deal.sector).points(),
        }
    }
}

fn leverage_points(leverage: f64) -> f64 {
    if leverage > HIGH_LEVERAGE {
        2.0
    } else if leverage > ELEVATED_LEVERAGE {
        1.0
    } else {
        0.0
    }
}

fn margin_points(margin: f64) -> f64 {
    if margin < THIN_MARGIN {
        2.0
    } else if margin < MODERATE_MARGIN {
        1.0
    } else {
        0.0
    }
}
