//! FleetMix Core — registration-record fetch and weight-class aggregation.
//!
//! This crate contains the whole analysis pipeline:
//! - Domain types (raw/cleaned records, the weight-class taxonomy, aggregates)
//! - Data providers (Socrata open-data endpoint behind a mockable trait)
//! - Offset-pagination fetch loop with explicit completeness reporting
//! - Cleaning stage (coerce, filter, dedup by VIN)
//! - Aggregation stage (bin, group, grid-complete, normalize shares)
//! - CSV/JSON artifact export for chart and table renderers

pub mod config;
pub mod data;
pub mod domain;
pub mod export;
pub mod pipeline;
