//! Criterion benchmarks for the pipeline hot paths.
//!
//! Benchmarks:
//! 1. Cleaning (coerce + filter + dedup) over a raw feed
//! 2. Aggregation (bin + group + grid-complete + normalize)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fleetmix_core::domain::{CleanRecord, RawVehicleRecord};
use fleetmix_core::pipeline::{aggregate, clean};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_raw_records(n: usize) -> Vec<RawVehicleRecord> {
    (0..n)
        .map(|i| {
            let year = 1990 + (i % 35) as i32;
            let weight = 1800.0 + ((i * 37) % 6000) as f64;
            // One VIN in ten repeats an earlier one.
            let vin_id = if i % 10 == 9 { i / 2 } else { i };
            RawVehicleRecord::new(
                year.to_string(),
                format!("{weight:.1}"),
                format!("VIN{vin_id:08}"),
            )
        })
        .collect()
}

fn make_clean_records(n: usize) -> Vec<CleanRecord> {
    (0..n)
        .map(|i| CleanRecord {
            model_year: 1990 + (i % 35) as i32,
            unladen_weight: 1800.0 + ((i * 37) % 6000) as f64,
            vin: format!("VIN{i:08}"),
        })
        .collect()
}

// ── 1. Cleaning ──────────────────────────────────────────────────────

fn bench_clean(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean");
    for n in [10_000, 100_000, 400_000] {
        let records = make_raw_records(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &records, |b, records| {
            b.iter(|| clean(black_box(records)))
        });
    }
    group.finish();
}

// ── 2. Aggregation ───────────────────────────────────────────────────

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for n in [10_000, 100_000, 400_000] {
        let records = make_clean_records(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &records, |b, records| {
            b.iter(|| aggregate(black_box(records)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_clean, bench_aggregate);
criterion_main!(benches);
