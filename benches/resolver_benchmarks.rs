//! Performance benchmarks for the AccShift rate engine.
//!
//! This benchmark suite verifies that the resolution core stays cheap enough
//! to run once per day of a monthly report without caching:
//! - Single rate resolution: < 1μs mean
//! - Settings load: < 10μs mean
//! - A month of daily resolutions: < 100μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::str::FromStr;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use accshift_engine::calculation::resolve_overtime_rate;
use accshift_engine::config::{load_rate_config, store_rate_config, NightOtRule, RateConfig};
use accshift_engine::models::DayType;

/// Creates a configuration with every feature switched on.
fn full_config() -> RateConfig {
    let mut config = RateConfig::default();
    config.ot_threshold_enabled = true;
    config.ot_threshold_hours = Decimal::from_str("8").unwrap();
    config.night_work_enabled = true;
    config.night_ot_rule = NightOtRule::Multiply;
    config
}

/// Benchmark: a single rate resolution with threshold and night premium.
///
/// Target: < 1μs mean
fn bench_single_resolution(c: &mut Criterion) {
    let config = full_config();
    let hours = Decimal::from_str("10.5").unwrap();

    c.bench_function("single_resolution", |b| {
        b.iter(|| {
            let resolution = resolve_overtime_rate(
                black_box(DayType::Sunday),
                black_box(hours),
                black_box(true),
                &config,
            );
            black_box(resolution)
        })
    });
}

/// Benchmark: loading the configuration from the persisted settings map.
///
/// Target: < 10μs mean
fn bench_settings_load(c: &mut Criterion) {
    let settings = store_rate_config(&full_config());

    c.bench_function("settings_load", |b| {
        b.iter(|| {
            let config = load_rate_config(black_box(&settings)).unwrap();
            black_box(config)
        })
    });
}

/// Benchmark: resolving every day of reports of increasing length.
///
/// Target: < 100μs mean for 31 days
fn bench_report_batch(c: &mut Criterion) {
    let config = full_config();
    let day_types = [
        DayType::Weekday,
        DayType::Weekday,
        DayType::Weekday,
        DayType::Weekday,
        DayType::Weekday,
        DayType::Saturday,
        DayType::Sunday,
    ];

    let mut group = c.benchmark_group("report_batch");
    for days in [7usize, 31, 365] {
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &days, |b, &days| {
            b.iter(|| {
                let mut total = Decimal::ZERO;
                for i in 0..days {
                    let hours = Decimal::new(((i % 5) + 8) as i64, 0);
                    let resolution = resolve_overtime_rate(
                        day_types[i % day_types.len()],
                        hours,
                        i % 3 == 0,
                        &config,
                    );
                    total += resolution.pay_units();
                }
                black_box(total)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_resolution,
    bench_settings_load,
    bench_report_batch
);
criterion_main!(benches);
