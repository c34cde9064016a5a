//! Raw and cleaned registration records.
//!
//! The open-data API returns every field as a JSON string, so the raw record
//! keeps optional strings and leaves numeric coercion to the cleaning stage.

use serde::{Deserialize, Serialize};

/// One registration row as returned by the remote endpoint, before any
/// validation. Not unique per VIN; the feed may repeat vehicles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawVehicleRecord {
    #[serde(default)]
    pub model_year: Option<String>,
    #[serde(default)]
    pub unladen_weight: Option<String>,
    #[serde(default)]
    pub vin: Option<String>,
}

impl RawVehicleRecord {
    pub fn new(
        model_year: impl Into<String>,
        unladen_weight: impl Into<String>,
        vin: impl Into<String>,
    ) -> Self {
        Self {
            model_year: Some(model_year.into()),
            unladen_weight: Some(unladen_weight.into()),
            vin: Some(vin.into()),
        }
    }
}

/// A record that survived coercion and filtering: positive weight, parsed
/// year, non-empty VIN. One row per VIN after dedup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub model_year: i32,
    pub unladen_weight: f64,
    pub vin: String,
}
