//! Property tests for pipeline invariants.
//!
//! Uses proptest to verify:
//! 1. Share partition — per model year with vehicles, shares sum to 1.0
//! 2. Grid completeness — output rows are exactly years × 9 classes
//! 3. Dedup idempotence — repeating the input changes nothing downstream
//! 4. Binning totality — every positive finite weight lands in some bin

use fleetmix_core::domain::{CleanRecord, RawVehicleRecord, WeightClass};
use fleetmix_core::pipeline::{aggregate, clean};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_weight() -> impl Strategy<Value = f64> {
    (1.0..12_000.0_f64).prop_map(|w| (w * 10.0).round() / 10.0)
}

fn arb_year() -> impl Strategy<Value = i32> {
    1960..2030_i32
}

fn arb_clean_records() -> impl Strategy<Value = Vec<CleanRecord>> {
    prop::collection::vec((arb_year(), arb_weight()), 1..200).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (model_year, unladen_weight))| CleanRecord {
                model_year,
                unladen_weight,
                vin: format!("VIN{i:05}"),
            })
            .collect()
    })
}

fn arb_raw_records() -> impl Strategy<Value = Vec<RawVehicleRecord>> {
    // VINs drawn from a small pool so duplicates actually occur.
    prop::collection::vec((arb_year(), arb_weight(), 0..20_usize), 0..100).prop_map(|rows| {
        rows.into_iter()
            .map(|(year, weight, vin_id)| {
                RawVehicleRecord::new(year.to_string(), weight.to_string(), format!("V{vin_id:02}"))
            })
            .collect()
    })
}

// ── 1. Share partition ───────────────────────────────────────────────

proptest! {
    /// For every model year with a positive total, shares sum to 1.0.
    #[test]
    fn shares_partition_each_year(records in arb_clean_records()) {
        let agg = aggregate(&records);
        let years: BTreeSet<i32> = agg.iter().map(|r| r.model_year).collect();

        for year in years {
            let rows: Vec<_> = agg.iter().filter(|r| r.model_year == year).collect();
            let total = rows[0].year_total;
            let share_sum: f64 = rows.iter().map(|r| r.share).sum();
            if total > 0 {
                prop_assert!((share_sum - 1.0).abs() < 1e-9);
            } else {
                prop_assert_eq!(share_sum, 0.0);
            }
        }
    }
}

// ── 2. Grid completeness ─────────────────────────────────────────────

proptest! {
    /// Output is exactly (distinct years) × 9 rows, each year carrying all
    /// nine classes in bin order, and counts re-add to the year total.
    #[test]
    fn grid_is_complete_and_consistent(records in arb_clean_records()) {
        let agg = aggregate(&records);
        let years: BTreeSet<i32> = records.iter().map(|r| r.model_year).collect();

        prop_assert_eq!(agg.len(), years.len() * 9);

        for year in years {
            let rows: Vec<_> = agg.iter().filter(|r| r.model_year == year).collect();
            let classes: Vec<WeightClass> = rows.iter().map(|r| r.weight_class).collect();
            prop_assert_eq!(classes, WeightClass::ALL.to_vec());

            let count_sum: u64 = rows.iter().map(|r| r.vehicle_count).sum();
            prop_assert_eq!(count_sum, rows[0].year_total);
        }
    }
}

// ── 3. Dedup idempotence ─────────────────────────────────────────────

proptest! {
    /// Repeating the whole raw input leaves the cleaned rows and the
    /// aggregate unchanged — duplicates under the same VIN never double
    /// count.
    #[test]
    fn repeated_input_aggregates_identically(records in arb_raw_records()) {
        let once = clean(&records);

        let mut doubled = records.clone();
        doubled.extend(records.iter().cloned());
        let twice = clean(&doubled);

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(aggregate(&once), aggregate(&twice));
    }
}

// ── 4. Binning totality ──────────────────────────────────────────────

proptest! {
    /// Every positive finite weight lands in exactly one bin, and that
    /// bin's bounds contain it.
    #[test]
    fn every_positive_weight_is_binned(weight in arb_weight()) {
        let class = WeightClass::classify(weight);
        prop_assert!(class.is_some());

        let class = class.unwrap();
        prop_assert!(weight >= class.lower_bound());
        if let Some(upper) = class.upper_bound() {
            prop_assert!(weight < upper);
        }
    }
}
