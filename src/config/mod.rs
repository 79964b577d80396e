//! Configuration module for the estimator
//!
//! This module provides configuration management including:
//! - Platform config path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::EstimatorPaths;
pub use settings::Settings;
