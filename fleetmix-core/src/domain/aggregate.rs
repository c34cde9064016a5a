//! Aggregate output types consumed by chart and table renderers.

use super::weight_class::WeightClass;
use serde::{Deserialize, Serialize};

/// One cell of the (model_year, weight_class) grid.
///
/// The grid is complete: every model year present in the cleaned data has a
/// row for all nine classes, zero-filled where no vehicles fell in the bin.
/// Per year with `year_total > 0`, the shares sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearClassAggregate {
    pub model_year: i32,
    pub weight_class: WeightClass,
    pub vehicle_count: u64,
    pub year_total: u64,
    pub share: f64,
}

/// Per-class totals summed across all model years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub weight_class: WeightClass,
    pub vehicle_count: u64,
    /// Share of the whole fleet, 0 when the fleet is empty.
    pub share: f64,
}

/// The summary table: one row per class plus a grand total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetSummary {
    pub classes: Vec<ClassSummary>,
    pub grand_total: u64,
}
