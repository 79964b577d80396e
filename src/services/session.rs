//! Estimate session
//!
//! Owns the ordered line-item list, the only piece of mutable state. Items
//! are appended by the builder and cleared by `reset`; nothing else mutates
//! the list.

use tracing::{debug, info};

use crate::error::EstimatorResult;
use crate::models::{ItemRequest, LineItem};
use crate::reports::Estimate;

use super::builder::build_line_item;

/// The line items collected during one session, in insertion order
#[derive(Debug, Default)]
pub struct EstimateSession {
    items: Vec<LineItem>,
}

impl EstimateSession {
    /// Start an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a request and append the resulting line item
    ///
    /// On error the list is left untouched.
    pub fn add_item(&mut self, request: &ItemRequest) -> EstimatorResult<&LineItem> {
        let item = match build_line_item(request) {
            Ok(item) => item,
            Err(e) => {
                debug!(service = %request.service, error = %e, "line item rejected");
                return Err(e);
            }
        };

        info!(
            service = %item.service,
            quantity = item.quantity,
            unit_price = %item.unit_price,
            task = %item.task,
            "line item added"
        );

        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Line items in insertion order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of line items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no line item has been added yet
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Compute the estimate for the current list
    pub fn estimate(&self) -> EstimatorResult<Estimate> {
        Estimate::generate(&self.items)
    }

    /// Clear all line items
    pub fn reset(&mut self) {
        info!(count = self.items.len(), "session reset");
        self.items.clear();
    }
}
