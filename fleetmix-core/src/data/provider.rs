//! Record provider trait and structured error types.
//!
//! The RecordProvider trait abstracts over the remote endpoint so the
//! pagination loop can be exercised against scripted in-memory providers
//! in tests.

use crate::domain::RawVehicleRecord;
use thiserror::Error;

/// Structured error types for data operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("HTTP {status} from endpoint at offset {offset}")]
    HttpStatus { status: u16, offset: usize },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("export error: {0}")]
    ExportError(String),

    #[error("data error: {0}")]
    Other(String),
}

/// Trait for paginated record sources.
///
/// Implementations fetch one page at a time; the loop in [`crate::data::fetch`]
/// owns offsets, delays, and termination. Providers don't know about caps.
pub trait RecordProvider {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch up to `limit` records starting at `offset`, in the source's
    /// pagination order.
    fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<RawVehicleRecord>, DataError>;
}

/// Progress callback for the pagination loop.
pub trait FetchProgress {
    /// Called before each page request.
    fn on_page_start(&self, batch: usize, offset: usize);

    /// Called after each successful page with the page size and running total.
    fn on_page_complete(&self, batch: usize, page_len: usize, total: usize);

    /// Called once when the loop ends, however it ends.
    fn on_fetch_complete(&self, total: usize, batches: usize, complete: bool);
}

/// Progress reporter that prints to stdout.
pub struct StdoutProgress;

impl FetchProgress for StdoutProgress {
    fn on_page_start(&self, batch: usize, offset: usize) {
        println!("[batch {}] requesting offset {offset}...", batch + 1);
    }

    fn on_page_complete(&self, batch: usize, page_len: usize, total: usize) {
        println!("[batch {}] {page_len} records ({total} so far)", batch + 1);
    }

    fn on_fetch_complete(&self, total: usize, batches: usize, complete: bool) {
        let status = if complete { "complete" } else { "INCOMPLETE" };
        println!("\nFetch {status}: {total} records in {batches} batches");
    }
}

/// Progress reporter that stays quiet. Used by tests and library callers.
pub struct SilentProgress;

impl FetchProgress for SilentProgress {
    fn on_page_start(&self, _batch: usize, _offset: usize) {}
    fn on_page_complete(&self, _batch: usize, _page_len: usize, _total: usize) {}
    fn on_fetch_complete(&self, _total: usize, _batches: usize, _complete: bool) {}
}
