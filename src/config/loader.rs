//! Configuration loader
//!
//! Loads `.repogate.yml` from the scan root. Absence or a malformed
//! document falls back to the embedded defaults in full, with a warning;
//! configuration problems are never fatal.

use std::fs;
use std::path::Path;
use tracing::warn;

use super::ScanConfig;
use crate::error::ConfigError;

/// Default configuration document name, looked up in the scan root
pub const CONFIG_FILENAME: &str = ".repogate.yml";

impl ScanConfig {
    /// Load configuration from the given path, or from [`CONFIG_FILENAME`]
    /// when no explicit path is provided. Any failure falls back to the
    /// embedded defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = path.unwrap_or_else(|| Path::new(CONFIG_FILENAME));

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Failed to load configuration, using embedded defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;

        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
