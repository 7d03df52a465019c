//! Mock deal generation.
//!
//! Draws candidate deals from fixed ranges using an explicit [`DealRng`], so a
//! given seed always yields the same batch.

use lbo_core::types::Deal;
use lbo_pricing::rng::DealRng;

/// Sector labels drawn uniformly for mock deals.
pub const MOCK_SECTORS: [&str; 6] = [
    "Industrial",
    "Consumer",
    "Biotech",
    "Tech",
    "Crypto",
    "Healthcare",
];

/// Generates `n` mock deals named `TargetCo_0` .. `TargetCo_{n-1}`.
///
/// # Examples
///
/// ```
/// use deal_desk::generator::generate_mock_deals;
/// use lbo_pricing::rng::DealRng;
///
/// let deals = generate_mock_deals(3, &mut DealRng::from_seed(42));
/// assert_eq!(deals.len(), 3);
/// assert_eq!(deals[2].name, "TargetCo_2");
/// ```
pub fn generate_mock_deals(n: usize, rng: &mut DealRng) -> Vec<Deal> {
    (0..n)
        .map(|i| Deal {
            name: format!("TargetCo_{}", i),
            ebitda: rng.gen_int_inclusive(3_000_000, 15_000_000) as f64,
            entry_multiple: rng.gen_range(6.0, 10.0),
            exit_multiple: rng.gen_range(7.0, 12.0),
            revenue_growth: rng.gen_range(0.05, 0.2),
            margin: rng.gen_range(0.1, 0.3),
            leverage: rng.gen_range(0.4, 0.7),
            interest_rate: rng.gen_range(0.05, 0.09),
            sector: MOCK_SECTORS[rng.gen_index(MOCK_SECTORS.len())].to_string(),
        })
        .collect()
}
