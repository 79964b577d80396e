//! Display formatting for terminal output
//!
//! Provides utilities for formatting line items, the catalog and report
//! breakdowns for terminal display.

pub mod line_item;
pub mod report;

pub use line_item::{format_catalog, format_line_items};
