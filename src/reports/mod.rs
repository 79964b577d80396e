//! Reports module
//!
//! Derived views over the session's line items. The estimate report holds
//! the totals, the per-task breakdown and the chart dataset.

pub mod estimate;

pub use estimate::{ChartSlice, Estimate, EstimateRow, TaskTotal};
