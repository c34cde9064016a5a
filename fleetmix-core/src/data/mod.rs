//! Data access: provider trait, Socrata client, and the pagination loop.

pub mod fetch;
pub mod provider;
pub mod socrata;

pub use fetch::{fetch_all, FetchOptions, FetchOutcome};
pub use provider::{DataError, FetchProgress, RecordProvider, StdoutProgress};
pub use socrata::SocrataProvider;
