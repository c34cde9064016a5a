//! Aggregation stage: bin, group, grid-complete, normalize.

use crate::domain::{ClassSummary, CleanRecord, FleetSummary, WeightClass, YearClassAggregate};
use std::collections::BTreeMap;

/// Group cleaned records into the (model_year, weight_class) grid.
///
/// Every model year present in the input gets a row for all nine classes,
/// zero-filled where no vehicle fell in the bin, so stacked-area renderers
/// never see a gap. Shares are counts over the year total, 0 for an empty
/// year. Output is sorted by (model_year, bin index).
pub fn aggregate(records: &[CleanRecord]) -> Vec<YearClassAggregate> {
    // BTreeMap keeps years sorted; the per-year array keeps bin order.
    let mut counts: BTreeMap<i32, [u64; 9]> = BTreeMap::new();

    for record in records {
        let Some(class) = WeightClass::classify(record.unladen_weight) else {
            continue;
        };
        counts.entry(record.model_year).or_insert([0u64; 9])[class.bin_index()] += 1;
    }

    let mut out = Vec::with_capacity(counts.len() * 9);
    for (model_year, by_class) in &counts {
        let year_total: u64 = by_class.iter().sum();
        for class in WeightClass::ALL {
            let vehicle_count = by_class[class.bin_index()];
            let share = if year_total > 0 {
                vehicle_count as f64 / year_total as f64
            } else {
                0.0
            };
            out.push(YearClassAggregate {
                model_year: *model_year,
                weight_class: class,
                vehicle_count,
                year_total,
                share,
            });
        }
    }
    out
}

/// Reshape the aggregate into the summary table: per-class totals across
/// all model years plus a grand total.
pub fn summarize(aggregates: &[YearClassAggregate]) -> FleetSummary {
    let mut totals = [0u64; 9];
    for row in aggregates {
        totals[row.weight_class.bin_index()] += row.vehicle_count;
    }
    let grand_total: u64 = totals.iter().sum();

    let classes = WeightClass::ALL
        .iter()
        .map(|&class| ClassSummary {
            weight_class: class,
            vehicle_count: totals[class.bin_index()],
            share: if grand_total > 0 {
                totals[class.bin_index()] as f64 / grand_total as f64
            } else {
                0.0
            },
        })
        .collect();

    FleetSummary {
        classes,
        grand_total,
    }
}
