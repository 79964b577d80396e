//! Core data models for the estimator
//!
//! This module contains the data structures of the estimation domain: money,
//! departments and countries, general tasks and line items.

pub mod department;
pub mod line_item;
pub mod money;
pub mod task;

pub use department::{Country, Department};
pub use line_item::{ItemRequest, ItemType, LineItem};
pub use money::Money;
pub use task::GeneralTask;
