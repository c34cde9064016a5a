//! Artifact writers for the rendering collaborators.
//!
//! The chart renderer takes the JSON payload (rows plus the taxonomy with
//! display colors); the table renderer takes the summary CSV. Both are
//! presentation-side consumers — nothing here styles anything.

use crate::data::provider::DataError;
use crate::domain::{FleetSummary, YearClassAggregate, WEIGHT_CLASS_TABLE};
use serde::Serialize;
use std::path::Path;

/// Write the full (year, class) grid as CSV.
pub fn write_aggregate_csv(
    path: &Path,
    aggregates: &[YearClassAggregate],
) -> Result<(), DataError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| DataError::ExportError(format!("{}: {e}", path.display())))?;

    writer
        .write_record([
            "model_year",
            "weight_class",
            "vehicle_count",
            "year_total",
            "share",
        ])
        .map_err(|e| DataError::ExportError(e.to_string()))?;

    for row in aggregates {
        writer
            .write_record([
                row.model_year.to_string(),
                row.weight_class.label().to_string(),
                row.vehicle_count.to_string(),
                row.year_total.to_string(),
                format!("{:.6}", row.share),
            ])
            .map_err(|e| DataError::ExportError(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| DataError::ExportError(e.to_string()))
}

/// Write the per-class summary table as CSV, grand-total row last.
pub fn write_summary_csv(path: &Path, summary: &FleetSummary) -> Result<(), DataError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| DataError::ExportError(format!("{}: {e}", path.display())))?;

    writer
        .write_record(["weight_class", "vehicle_count", "share"])
        .map_err(|e| DataError::ExportError(e.to_string()))?;

    for class in &summary.classes {
        writer
            .write_record([
                class.weight_class.label().to_string(),
                class.vehicle_count.to_string(),
                format!("{:.6}", class.share),
            ])
            .map_err(|e| DataError::ExportError(e.to_string()))?;
    }
    writer
        .write_record([
            "total".to_string(),
            summary.grand_total.to_string(),
            format!("{:.6}", if summary.grand_total > 0 { 1.0 } else { 0.0 }),
        ])
        .map_err(|e| DataError::ExportError(e.to_string()))?;

    writer
        .flush()
        .map_err(|e| DataError::ExportError(e.to_string()))
}

#[derive(Serialize)]
struct ChartClass {
    label: &'static str,
    lower_bound: f64,
    upper_bound: Option<f64>,
    display_color: &'static str,
}

#[derive(Serialize)]
struct ChartPayload<'a> {
    /// Taxonomy in stacking order, colors included.
    classes: Vec<ChartClass>,
    rows: &'a [YearClassAggregate],
    complete: bool,
}

/// Write the chart payload: taxonomy (with colors, in stacking order) plus
/// the aggregate rows. `complete` carries the fetch-completeness flag so a
/// renderer can label a truncated chart.
pub fn write_chart_json(
    path: &Path,
    aggregates: &[YearClassAggregate],
    complete: bool,
) -> Result<(), DataError> {
    let payload = ChartPayload {
        classes: WEIGHT_CLASS_TABLE
            .iter()
            .map(|spec| ChartClass {
                label: spec.label,
                lower_bound: spec.lower_bound,
                upper_bound: spec.upper_bound,
                display_color: spec.display_color,
            })
            .collect(),
        rows: aggregates,
        complete,
    };

    let json = serde_json::to_string_pretty(&payload)
        .map_err(|e| DataError::ExportError(e.to_string()))?;
    std::fs::write(path, json)
        .map_err(|e| DataError::ExportError(format!("{}: {e}", path.display())))
}
