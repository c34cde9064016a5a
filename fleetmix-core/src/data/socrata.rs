//! Socrata open-data provider.
//!
//! Fetches registration rows from a Socrata SODA 2.x JSON endpoint using
//! SoQL query parameters: `$select` projects the three columns the pipeline
//! needs, `$where` restricts to one record category server-side, and
//! `$order` pins a sort column so offset pagination is reproducible.
//!
//! The endpoint returns a JSON array of flat objects whose fields are all
//! strings; numeric coercion happens in the cleaning stage, not here.

use super::provider::{DataError, RecordProvider};
use crate::domain::RawVehicleRecord;
use std::time::Duration;

/// Default endpoint: NY State DMV vehicle/snowmobile/boat registrations.
pub const DEFAULT_ENDPOINT: &str = "https://data.ny.gov/resource/w4pv-hbkt.json";

/// Default server-side predicate selecting vehicle records only.
pub const DEFAULT_PREDICATE: &str = "record_type='VEH'";

/// Column the pagination is ordered by. Not a unique key, so duplicate-VIN
/// "first occurrence" depends on the server's sort stability.
const ORDER_COLUMN: &str = "model_year";

const SELECT_COLUMNS: &str = "model_year,unladen_weight,vin";

/// Socrata HTTP provider.
pub struct SocrataProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
    predicate: String,
}

impl SocrataProvider {
    pub fn new(endpoint: impl Into<String>, predicate: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            endpoint: endpoint.into(),
            predicate: predicate.into(),
        }
    }

    /// Provider against the NY DMV registrations dataset.
    pub fn ny_dmv() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_PREDICATE)
    }

    /// SoQL query URL for one page.
    fn page_url(&self, offset: usize, limit: usize) -> String {
        format!(
            "{}?$select={SELECT_COLUMNS}&$where={}&$order={ORDER_COLUMN}\
             &$limit={limit}&$offset={offset}",
            self.endpoint, self.predicate
        )
    }
}

impl RecordProvider for SocrataProvider {
    fn name(&self) -> &str {
        "socrata"
    }

    fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<RawVehicleRecord>, DataError> {
        let url = self.page_url(offset, limit);

        let resp = self.client.get(&url).send().map_err(|e| {
            DataError::NetworkUnreachable(e.to_string())
        })?;

        let status = resp.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(DataError::RateLimited {
                retry_after_secs: retry_after,
            });
        }
        if !status.is_success() {
            return Err(DataError::HttpStatus {
                status: status.as_u16(),
                offset,
            });
        }

        resp.json::<Vec<RawVehicleRecord>>().map_err(|e| {
            DataError::ResponseFormatChanged(format!(
                "failed to parse page at offset {offset}: {e}"
            ))
        })
    }
}
