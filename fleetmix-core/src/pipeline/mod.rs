//! Cleaning and aggregation stages. Both are total functions over their
//! input — data-quality problems drop rows, they never fail the run.

pub mod aggregate;
pub mod clean;

pub use aggregate::{aggregate, summarize};
pub use clean::clean;
