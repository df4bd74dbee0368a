use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::analyzers::hubs::{DEFAULT_HUB_PERCENTILE, check_percentile};
use crate::analyzers::summary::DEFAULT_TOP_ROUTES;
use crate::error::{NetworkError, Result};

/// Tunables for an analysis run.
///
/// Stored as a JSON object on disk; missing keys fall back to defaults:
/// ```json
/// {
///   "hub_percentile": 90.0,
///   "top_routes": 10
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Percentile of total degree a hub must strictly exceed
    pub hub_percentile: f64,
    /// Routes listed in each summary ranking
    pub top_routes: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            hub_percentile: DEFAULT_HUB_PERCENTILE,
            top_routes: DEFAULT_TOP_ROUTES,
        }
    }
}

impl AnalysisConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AnalysisConfig =
            serde_json::from_str(&content).map_err(|e| NetworkError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        config.validate()
    }

    /// Checks that `hub_percentile` lies in `[0, 100]`.
    pub fn validate(self) -> Result<Self> {
        check_percentile(self.hub_percentile)?;
        Ok(self)
    }
}
