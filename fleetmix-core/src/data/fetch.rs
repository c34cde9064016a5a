//! Offset-pagination loop.
//!
//! Pulls pages from a [`RecordProvider`] one at a time, sleeping a fixed
//! delay between requests, until the source is exhausted or a caller cap is
//! reached. A page failure aborts the loop but the accumulated records are
//! still returned, with the outcome marked incomplete and the error kept —
//! callers can always tell "fully fetched" from "aborted early".

use super::provider::{DataError, FetchProgress, RecordProvider};
use crate::domain::RawVehicleRecord;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Knobs for one fetch run.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Stop requesting further pages once this many records are accumulated.
    /// The last page is kept whole, so the result may exceed the cap.
    pub max_records: Option<usize>,
    /// Page size requested from the source.
    pub batch_size: usize,
    /// Pause between successive requests, bounding the request rate.
    pub delay: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            max_records: None,
            batch_size: 1000,
            delay: Duration::from_millis(500),
        }
    }
}

/// Everything a fetch run produced, including whether it ran to the end.
#[derive(Debug)]
pub struct FetchOutcome {
    /// All successfully fetched records, in pagination order.
    pub records: Vec<RawVehicleRecord>,
    /// True when the loop terminated normally (exhaustion or cap), false
    /// when a page error aborted it.
    pub complete: bool,
    /// Number of successful page requests.
    pub batches: usize,
    /// The error that aborted the loop, when `complete` is false.
    pub last_error: Option<DataError>,
    pub fetched_at: DateTime<Utc>,
}

/// Fetch all matching records via offset pagination.
///
/// Termination conditions, checked in order after each page: the page was
/// empty; the cap is reached; the page was short (fewer than `batch_size`
/// records signals the end of the remote data). Otherwise sleep and
/// continue. Fully sequential — one request in flight at a time.
pub fn fetch_all(
    provider: &dyn RecordProvider,
    options: &FetchOptions,
    progress: &dyn FetchProgress,
) -> FetchOutcome {
    let mut records: Vec<RawVehicleRecord> = Vec::new();
    let mut offset = 0usize;
    let mut batches = 0usize;
    let mut complete = true;
    let mut last_error = None;

    loop {
        progress.on_page_start(batches, offset);

        let page = match provider.fetch_page(offset, options.batch_size) {
            Ok(page) => page,
            Err(e) => {
                complete = false;
                last_error = Some(e);
                break;
            }
        };

        let page_len = page.len();
        records.extend(page);
        offset += options.batch_size;
        batches += 1;
        progress.on_page_complete(batches - 1, page_len, records.len());

        if page_len == 0 {
            break;
        }
        if let Some(cap) = options.max_records {
            if records.len() >= cap {
                break;
            }
        }
        if page_len < options.batch_size {
            break;
        }

        if !options.delay.is_zero() {
            std::thread::sleep(options.delay);
        }
    }

    progress.on_fetch_complete(records.len(), batches, complete);

    FetchOutcome {
        records,
        complete,
        batches,
        last_error,
        fetched_at: Utc::now(),
    }
}
