//! Criterion benchmarks for tailcast_core simulation
//!
//! Run with: cargo bench -p tailcast_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tailcast_core::model::{ForecastConfig, ReturnMethod};
use tailcast_core::risk;
use tailcast_core::simulation::simulate;
use tailcast_core::statistics::ReturnEstimate;

fn daily_estimate() -> ReturnEstimate {
    ReturnEstimate {
        method: ReturnMethod::Simple,
        mean_return: 0.0004,
        volatility: 0.015,
        period_returns: Vec::new(),
    }
}

fn config(num_simulations: usize) -> ForecastConfig {
    ForecastConfig {
        num_simulations,
        horizon_days: 90,
        starting_price: 100.0,
        confidence_level: 95.0,
    }
}

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    let estimate = daily_estimate();

    for sims in [100, 500, 1000].iter() {
        let cfg = config(*sims);
        group.bench_with_input(BenchmarkId::new("paths", sims), sims, |b, _| {
            b.iter(|| simulate(black_box(&estimate), black_box(&cfg), black_box(42)))
        });
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let estimate = daily_estimate();
    let paths = simulate(&estimate, &config(10_000), 42).unwrap();
    let terminal = paths.terminal_prices();

    c.bench_function("evaluate_10k_terminal", |b| {
        b.iter(|| risk::evaluate(black_box(&terminal), black_box(100.0), black_box(95.0)))
    });
}

criterion_group!(benches, bench_simulate, bench_evaluate);
criterion_main!(benches);
