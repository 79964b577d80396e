//! Path management for the estimator
//!
//! ## Path Resolution Order
//!
//! 1. `ESTIMATOR_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory joined with `marketing-estimator`
//!    (`~/.config/marketing-estimator` on Linux, `%APPDATA%\marketing-estimator` on Windows)

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::EstimatorError;

/// Directory name under the platform config directory
const APP_DIR_NAME: &str = "marketing-estimator";

/// Manages all paths used by the estimator
#[derive(Debug, Clone)]
pub struct EstimatorPaths {
    /// Base directory for all estimator files
    base_dir: PathBuf,
}

impl EstimatorPaths {
    /// Create a new EstimatorPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, EstimatorError> {
        let base_dir = if let Ok(custom) = std::env::var("ESTIMATOR_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create EstimatorPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), EstimatorError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| EstimatorError::Io(format!("Failed to create config directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, EstimatorError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| EstimatorError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}
