//! Marketing estimator - savings estimates for internal marketing services
//!
//! This library computes how much a department saves by ordering marketing
//! work from the internal team instead of an outside agency. Services are
//! picked from a fixed price catalog or entered as custom items, collected
//! into a list, summed per general task and exported as an xlsx workbook.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `catalog`: The predefined services with unit prices and tasks
//! - `models`: Core data models (money, departments, tasks, line items)
//! - `services`: Line-item builder and the estimate session
//! - `reports`: Estimate aggregation and terminal rendering
//! - `export`: Workbook export
//! - `display`: Table formatting for the terminal
//! - `config`: Configuration and path management
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use marketing_estimator::models::{Country, Department, ItemRequest};
//! use marketing_estimator::services::EstimateSession;
//!
//! let mut session = EstimateSession::new();
//! session.add_item(&ItemRequest::predefined(
//!     Department::Sales,
//!     Country::Be,
//!     "Poster Design",
//!     2,
//! ))?;
//! let estimate = session.estimate()?;
//! println!("{}", estimate.headline("EUR"));
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{EstimatorError, EstimatorResult};
