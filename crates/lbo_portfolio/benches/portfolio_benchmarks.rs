//! Criterion benchmarks for lbo_portfolio.
//!
//! Benchmarks cover:
//! - Batch evaluation, sequential versus rayon, over growing batch sizes
//! - Monte Carlo terminal-value simulation, sequential versus rayon

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lbo_core::config::{EngineConfig, ParallelSettings};
use lbo_core::types::Deal;
use lbo_portfolio::Evaluator;
use lbo_pricing::mc::{GrowthParams, MonteCarloConfig, MonteCarloSimulator};
use lbo_pricing::rng::DealRng;

/// Generate a synthetic, always-valid deal batch.
fn generate_deals(n: usize) -> Vec<Deal> {
    let mut rng = DealRng::from_seed(42);
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
                .sector("Industrial")
                .build_unchecked()
        })
        .collect()
}

/// Benchmark batch evaluation.
fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let sequential =
        Evaluator::new(EngineConfig::default().with_parallel(ParallelSettings::sequential()))
            .unwrap();
    let parallel = Evaluator::new(EngineConfig::default().with_parallel(ParallelSettings {
        enabled: true,
        parallel_threshold: 1,
    }))
    .unwrap();

    for n in [100, 1_000, 10_000] {
        let deals = generate_deals(n);
        group.bench_with_input(BenchmarkId::new("sequential", n), &deals, |b, deals| {
            b.iter(|| sequential.evaluate(black_box(deals)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &deals, |b, deals| {
            b.iter(|| parallel.evaluate(black_box(deals)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark Monte Carlo simulation.
fn bench_monte_carlo(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte_carlo");
    let growth = GrowthParams::new(0.05, 0.2);

    for parallel in [false, true] {
        let config = MonteCarloConfig::builder()
            .n_trials(100_000)
            .n_periods(5)
            .seed(42)
            .parallel(parallel)
            .build()
            .unwrap();
        let simulator = MonteCarloSimulator::new(config);
        let label = if parallel { "parallel" } else { "sequential" };

        group.bench_function(BenchmarkId::new("100k_trials", label), |b| {
            b.iter(|| simulator.simulate(black_box(100.0), growth).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_monte_carlo);
criterion_main!(benches);
