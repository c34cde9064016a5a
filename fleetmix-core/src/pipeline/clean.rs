//! Cleaning stage: coerce, filter, dedup.

use crate::domain::{CleanRecord, RawVehicleRecord};
use std::collections::HashSet;

/// Coerce raw records to typed rows, drop the unusable ones, and keep one
/// row per VIN.
///
/// - Coerce: `model_year` and `unladen_weight` parse to numbers; parse
///   failures count as missing rather than erroring.
/// - Filter: rows with a missing field, an empty VIN, or a non-positive
///   weight are dropped.
/// - Dedup: first surviving row per VIN in input order wins. Input order is
///   pagination order, which the source sorts by model year only, so which
///   duplicate is "first" is as stable as the server's sort.
pub fn clean(records: &[RawVehicleRecord]) -> Vec<CleanRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for raw in records {
        let Some(record) = coerce(raw) else {
            continue;
        };
        if seen.insert(record.vin.clone()) {
            out.push(record);
        }
    }

    out
}

/// Parse one raw record, or `None` when any field is missing/unparseable or
/// the weight is non-positive.
fn coerce(raw: &RawVehicleRecord) -> Option<CleanRecord> {
    let vin = raw.vin.as_deref()?.trim();
    if vin.is_empty() {
        return None;
    }

    // Socrata serves numerics as strings like "2020" or "3040.0"; parse via
    // f64 so either form coerces.
    let model_year = raw.model_year.as_deref()?.trim().parse::<f64>().ok()?;
    let unladen_weight = raw.unladen_weight.as_deref()?.trim().parse::<f64>().ok()?;

    if !model_year.is_finite() || !unladen_weight.is_finite() || unladen_weight <= 0.0 {
        return None;
    }

    Some(CleanRecord {
        model_year: model_year as i32,
        unladen_weight,
        vin: vin.to_string(),
    })
}
