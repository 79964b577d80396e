//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the estimate session and reports.

pub mod catalog;
pub mod estimate;
pub mod session;

pub use catalog::handle_catalog_command;
pub use estimate::{handle_estimate_command, load_item_records, session_from_records, ItemRecord};
pub use session::SessionShell;
