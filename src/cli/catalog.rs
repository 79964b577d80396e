//! Catalog CLI command
//!
//! Lists the predefined services with their prices, optionally narrowed to
//! one general task.

use crate::catalog::Catalog;
use crate::display::format_catalog;
use crate::error::{EstimatorError, EstimatorResult};
use crate::models::GeneralTask;

/// Handle the catalog command
pub fn handle_catalog_command(task: Option<String>) -> EstimatorResult<()> {
    match task {
        Some(task) => {
            let task: GeneralTask = task.parse().map_err(EstimatorError::Validation)?;
            println!("Predefined services for {}", task);
            println!("{}", format_catalog(Catalog::by_task(task)));
        }
        None => {
            println!("Predefined services");
            println!("{}", format_catalog(Catalog::entries()));
            println!();
            println!("General tasks for custom services:");
            for task in GeneralTask::selectable() {
                println!("  - {}", task);
            }
        }
    }

    Ok(())
}
