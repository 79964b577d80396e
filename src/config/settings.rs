//! User settings for the estimator
//!
//! Manages presentation and form preferences: currency code, default output
//! file and the department/country preselected in the form. Settings never
//! affect pricing.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::EstimatorPaths;
use crate::error::EstimatorError;
use crate::export::EXPORT_FILE_NAME;
use crate::models::{Country, Department};

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency code shown in front of totals
    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    /// Where `export` writes the workbook when no path is given
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// Department preselected in the form
    #[serde(default)]
    pub default_department: Department,

    /// Country preselected in the form
    #[serde(default)]
    pub default_country: Country,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_code() -> String {
    "EUR".to_string()
}

fn default_output_file() -> PathBuf {
    PathBuf::from(EXPORT_FILE_NAME)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_code: default_currency_code(),
            output_file: default_output_file(),
            default_department: Department::default(),
            default_country: Country::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &EstimatorPaths) -> Result<Self, EstimatorError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                EstimatorError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                EstimatorError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            debug!(path = %settings_path.display(), "settings loaded");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &EstimatorPaths) -> Result<(), EstimatorError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            EstimatorError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            EstimatorError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_code, "EUR");
        assert_eq!(settings.output_file, PathBuf::from("estimate.xlsx"));
        assert_eq!(settings.default_department, Department::General);
        assert_eq!(settings.default_country, Country::General);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EstimatorPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EstimatorPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_department = Department::Sales;
        settings.default_country = Country::Be;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_department, Department::Sales);
        assert_eq!(loaded.default_country, Country::Be);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EstimatorPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"default_country": "NL"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_country, Country::Nl);
        assert_eq!(loaded.currency_code, "EUR");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EstimatorPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(EstimatorError::Config(_))
        ));
    }
}
