//! Serializable report configuration.

use crate::data::provider::DataError;
use crate::data::socrata::{DEFAULT_ENDPOINT, DEFAULT_PREDICATE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for one fetch-and-aggregate run, loadable from TOML.
///
/// Field defaults target the NY DMV registrations dataset, so an empty
/// config file is a valid one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// SODA JSON endpoint of the source dataset.
    pub endpoint: String,

    /// Server-side row predicate, passed as SoQL `$where`.
    pub predicate: String,

    /// Page size per request.
    pub batch_size: usize,

    /// Pause between requests, in milliseconds.
    pub delay_ms: u64,

    /// Stop requesting pages once this many records are accumulated.
    pub max_records: Option<usize>,

    /// Directory the CSV/JSON artifacts are written to.
    pub out_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            predicate: DEFAULT_PREDICATE.to_string(),
            batch_size: 1000,
            delay_ms: 500,
            max_records: None,
            out_dir: PathBuf::from("out"),
        }
    }
}

impl ReportConfig {
    /// Load from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, DataError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| DataError::ConfigError(format!("{}: {e}", path.display())))?;
        let config: ReportConfig = toml::from_str(&text)
            .map_err(|e| DataError::ConfigError(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DataError> {
        if self.batch_size == 0 {
            return Err(DataError::ConfigError("batch_size must be positive".into()));
        }
        if self.endpoint.is_empty() {
            return Err(DataError::ConfigError("endpoint must not be empty".into()));
        }
        if let Some(0) = self.max_records {
            return Err(DataError::ConfigError(
                "max_records must be positive when set".into(),
            ));
        }
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
