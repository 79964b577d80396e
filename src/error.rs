//! Custom error types for the estimator
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for estimator operations
#[derive(Error, Debug)]
pub enum EstimatorError {
    /// Custom service submitted with a blank name
    #[error("Please enter a service name.")]
    EmptyName,

    /// Custom service submitted without a usable unit price
    #[error("Please enter a Unit Price (EUR) for custom service '{service}'.")]
    MissingPrice { service: String },

    /// Estimate requested before any line item was added
    #[error("Please add at least one service to the list, then run the estimate.")]
    Empty,

    /// Predefined entry naming a service the catalog does not know
    #[error("Service not found in catalog: {0}")]
    UnknownService(String),

    /// Malformed user input (quantity, enum choice, money string)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Workbook export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl EstimatorError {
    /// Create a "missing price" error for a custom service
    pub fn missing_price(service: impl Into<String>) -> Self {
        Self::MissingPrice {
            service: service.into(),
        }
    }

    /// Check if this error was caused by user input the user can correct and retry
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyName
                | Self::MissingPrice { .. }
                | Self::Empty
                | Self::UnknownService(_)
                | Self::Validation(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for EstimatorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EstimatorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for EstimatorError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for EstimatorError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<zip::result::ZipError> for EstimatorError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for estimator operations
pub type EstimatorResult<T> = Result<T, EstimatorError>;
