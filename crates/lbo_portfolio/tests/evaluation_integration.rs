//! End-to-end evaluation tests for lbo_portfolio
//!
//! These tests drive the full L1 → L2 → L4 pipeline:
//! - lbo_core: Deal, EngineConfig, DealResult
//! - lbo_models: RiskModel, FinancialModel, CommentaryEngine
//! - lbo_portfolio: Evaluator, DealOutcome, PortfolioSummary

use approx::assert_relative_eq;
use lbo_core::config::{DecisionThresholds, EngineConfig, ParallelSettings};
use lbo_core::types::{Deal, DealError, Decision};
use lbo_portfolio::{DealOutcome, EvaluationError, Evaluator, PortfolioSummary};
use lbo_pricing::rng::DealRng;
use proptest::prelude::*;

// =============================================================================
// Fixtures
// =============================================================================

fn golden() -> Deal {
    Deal::builder("TargetCo_1")
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

fn shrinking() -> Deal {
    Deal::builder("Shrinking")
        .ebitda(10_000_000.0)
        .entry_multiple(12.0)
        .exit_multiple(6.0)
        .revenue_growth(-0.05)
        .margin(0.2)
        .leverage(0.3)
        .interest_rate(0.05)
        .sector("Tech")
        .build()
        .unwrap()
}

fn fully_levered() -> Deal {
    Deal::builder("AllDebt")
        .ebitda(5_000_000.0)
        .entry_multiple(8.0)
        .exit_multiple(9.0)
        .revenue_growth(0.1)
        .margin(0.2)
        .leverage(1.0)
        .interest_rate(0.07)
        .build()
        .unwrap()
}

/// Deterministic random batch drawn from the mock-deal ranges.
fn random_batch(n: usize, seed: u64) -> Vec<Deal> {
    const SECTORS: [&str; 6] = ["Industrial", "Consumer", "Biotech", "Tech", "Crypto", "Healthcare"];
    let mut rng = DealRng::from_seed(seed);
    (0..n)
        .map(|i| {
            Deal::builder(format!("TargetCo_{}", i))
                .ebitda(rng.gen_int_inclusive(3_000_000, 15_000_000) as f64)
                .entry_multiple(rng.gen_range(6.0, 10.0))
                .exit_multiple(rng.gen_range(7.0, 12.0))
                .revenue_growth(rng.gen_range(0.05, 0.2))
                .margin(rng.gen_range(0.1, 0.3))
                .leverage(rng.gen_range(0.4, 0.7))
                .interest_rate(rng.gen_range(0.05, 0.09))
                .sector(SECTORS[rng.gen_index(SECTORS.len())])
                .build()
                .unwrap()
        })
        .collect()
}

fn evaluator() -> Evaluator {
    Evaluator::new(EngineConfig::default()).unwrap()
}

// =============================================================================
// Golden path
// =============================================================================

#[test]
fn test_golden_deal_end_to_end() {
    let results = evaluator().evaluate(&[golden()]).unwrap();
    let result = &results[0];

    assert_eq!(result.name, "TargetCo_1");
    assert_eq!(result.decision, Decision::Invest);
    assert_relative_eq!(result.moic, 4.95255, max_relative = 1e-12);
    assert_relative_eq!(result.irr, 0.377_100_936_895_443_66, max_relative = 1e-12);
    assert_relative_eq!(result.risk_adjusted_irr, result.irr);
    assert_eq!(
        result.commentary,
        "High return potential, Strong value multiple, Low risk"
    );
}

// =============================================================================
// Decision quadrants
// =============================================================================

#[test]
fn test_quadrant_both_hurdles_cleared() {
    let result = evaluator().evaluate_deal(&golden()).unwrap();
    assert!(result.risk_adjusted_irr > 0.15 && result.moic >= 2.0);
    assert_eq!(result.decision, Decision::Invest);
}

#[test]
fn test_quadrant_irr_cleared_moic_missed() {
    let config = EngineConfig::default().with_decision(DecisionThresholds {
        min_risk_adjusted_irr: 0.15,
        min_moic: 5.0,
    });
    let result = Evaluator::new(config).unwrap().evaluate_deal(&golden()).unwrap();

    assert!(result.risk_adjusted_irr > 0.15);
    assert!(result.moic < 5.0);
    assert_eq!(result.decision, Decision::Pass);
}

#[test]
fn test_quadrant_irr_missed_moic_cleared() {
    let config = EngineConfig {
        risk_penalty_per_point: 0.2,
        ..EngineConfig::default()
    };
    let mut deal = golden();
    deal.sector = "Crypto".to_string();
    let result = Evaluator::new(config).unwrap().evaluate_deal(&deal).unwrap();

    assert_eq!(result.risk_score, 2.0);
    assert!(result.risk_adjusted_irr < 0.15);
    assert!(result.moic >= 2.0);
    assert_eq!(result.decision, Decision::Pass);
}

#[test]
fn test_quadrant_both_hurdles_missed() {
    let result = evaluator().evaluate_deal(&shrinking()).unwrap();

    assert!(result.moic < 1.0);
    assert!(result.irr < 0.0);
    assert_eq!(result.decision, Decision::Pass);
    assert_eq!(result.commentary, "Weak IRR, Low MOIC, Low risk");
}

// =============================================================================
// Failure policy
// =============================================================================

#[test]
fn test_zero_equity_aborts_batch() {
    let deals = vec![golden(), fully_levered(), shrinking()];
    let err = evaluator().evaluate(&deals).unwrap_err();

    match err {
        EvaluationError::DealFailed { index, name, source } => {
            assert_eq!(index, 1);
            assert_eq!(name, "AllDebt");
            assert!(matches!(source, DealError::InvalidInput(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_first_failure_by_input_index_is_reported() {
    let mut broken = golden();
    broken.name = "Broken".to_string();
    broken.ebitda = -1.0;

    // Large enough to go through the rayon path
    let mut deals = random_batch(300, 7);
    deals[120] = broken;
    deals[250] = fully_levered();

    let err = evaluator().evaluate(&deals).unwrap_err();
    assert!(matches!(err, EvaluationError::DealFailed { index: 120, .. }));
}

#[test]
fn test_evaluate_all_records_failures_in_place() {
    let deals = vec![golden(), fully_levered(), shrinking()];
    let outcomes = evaluator().evaluate_all(&deals);

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].result().unwrap().decision, Decision::Invest);
    assert!(matches!(
        &outcomes[1],
        DealOutcome::Failed { name, error: DealError::InvalidInput(_) } if name == "AllDebt"
    ));
    assert_eq!(outcomes[2].name(), "Shrinking");

    let summary = PortfolioSummary::from_outcomes(&outcomes);
    assert_eq!(summary.n_failed, 1);
    assert_eq!(summary.n_invest, 1);
    assert_eq!(summary.n_pass, 1);
    assert_eq!(summary.best_deal.as_deref(), Some("TargetCo_1"));
}

// =============================================================================
// Parallel evaluation
// =============================================================================

#[test]
fn test_parallel_matches_sequential() {
    let deals = random_batch(250, 42);
    let sequential = Evaluator::new(EngineConfig::default().with_parallel(ParallelSettings::sequential()))
        .unwrap()
        .evaluate(&deals)
        .unwrap();
    let parallel = Evaluator::new(EngineConfig::default().with_parallel(ParallelSettings {
        enabled: true,
        parallel_threshold: 1,
    }))
    .unwrap()
    .evaluate(&deals)
    .unwrap();

    assert_eq!(sequential, parallel);
}

// =============================================================================
// Property-based tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_results_preserve_order_and_cardinality(n in 0usize..150, seed in any::<u64>()) {
        let deals = random_batch(n, seed);
        let results = evaluator().evaluate(&deals).unwrap();

        prop_assert_eq!(results.len(), deals.len());
        for (deal, result) in deals.iter().zip(&results) {
            prop_assert_eq!(&deal.name, &result.name);
        }
    }

    #[test]
    fn prop_decision_is_function_of_metrics(seed in any::<u64>()) {
        let config = EngineConfig::default();
        for result in evaluator().evaluate(&random_batch(20, seed)).unwrap() {
            let expected = if result.risk_adjusted_irr > config.decision.min_risk_adjusted_irr
                && result.moic >= config.decision.min_moic
            {
                Decision::Invest
            } else {
                Decision::Pass
            };
            prop_assert_eq!(result.decision, expected);
            prop_assert!(
                (result.risk_adjusted_irr - (result.irr - result.risk_score * 0.01)).abs() < 1e-12
            );
        }
    }
}
