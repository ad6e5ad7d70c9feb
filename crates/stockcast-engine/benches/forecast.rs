//! Benchmarks for the forecast engine.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stockcast_core::types::PriceSeries;
use stockcast_engine::{business_days_after, forecast, lagged_samples, LinearModel};

fn generate_series(size: usize) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2000, 1, 3).unwrap();
    let closes = business_days_after(start, size)
        .enumerate()
        .map(|(i, d)| (d, 100.0 + (i as f64 * 0.1).sin() * 10.0 + i as f64 * 0.01));
    PriceSeries::from_closes("BENCH", closes.collect::<Vec<_>>())
}

fn benchmark_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");

    for size in [250, 2500, 25000].iter() {
        let closes = generate_series(*size).closes();

        group.bench_with_input(BenchmarkId::new("ols", size), &closes, |b, closes| {
            b.iter(|| LinearModel::fit(&lagged_samples(black_box(closes))))
        });
    }

    group.finish();
}

fn benchmark_forecast(c: &mut Criterion) {
    let mut group = c.benchmark_group("forecast");
    let series = generate_series(2500);

    for horizon in [5, 30, 250].iter() {
        group.bench_with_input(BenchmarkId::new("horizon", horizon), horizon, |b, &h| {
            b.iter(|| forecast(black_box(&series), black_box(h)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_fit, benchmark_forecast);
criterion_main!(benches);
