//! Line-item builder
//!
//! Validates one submitted entry and normalizes it into a [`LineItem`].
//! Building is pure; appending to the session happens in
//! [`EstimateSession::add_item`](super::session::EstimateSession::add_item).

use crate::catalog::{resolve_task, Catalog};
use crate::error::{EstimatorError, EstimatorResult};
use crate::models::{ItemRequest, ItemType, LineItem, Money};

/// Build a line item from a submitted request
///
/// Predefined entries take price and task from the catalog and ignore any
/// manual fields. Custom entries need a non-blank name and a positive manual
/// price, except when the name matches a catalog service and the manual price
/// is zero: zero means "unset" there, so the catalog price and task win.
pub fn build_line_item(request: &ItemRequest) -> EstimatorResult<LineItem> {
    let (service, unit_price, task) = match request.item_type {
        ItemType::Predefined => {
            let entry = Catalog::lookup(request.service.trim())
                .ok_or_else(|| EstimatorError::UnknownService(request.service.clone()))?;
            (entry.service.to_string(), entry.unit_price, entry.task)
        }
        ItemType::Custom => {
            let name = request.service.trim();
            if name.is_empty() {
                return Err(EstimatorError::EmptyName);
            }

            let manual_price = request.manual_price.unwrap_or_default();

            match Catalog::lookup(name) {
                Some(entry) if manual_price.is_zero() => {
                    (name.to_string(), entry.unit_price, entry.task)
                }
                _ => {
                    if !manual_price.is_positive() {
                        return Err(EstimatorError::missing_price(name));
                    }
                    (
                        name.to_string(),
                        manual_price,
                        resolve_task(request.manual_task, name),
                    )
                }
            }
        }
    };

    if unit_price.checked_mul(request.quantity).is_none() {
        return Err(EstimatorError::Validation(format!(
            "Line total for '{}' is too large",
            service
        )));
    }

    Ok(LineItem {
        department: request.department,
        country: request.country,
        service,
        quantity: request.quantity,
        task,
        unit_price,
    })
}

/// Parse a quantity typed into the form (integer, at least 1)
pub fn parse_quantity(input: &str) -> EstimatorResult<u32> {
    let input = input.trim();
    match input.parse::<u32>() {
        Ok(q) if q >= 1 => Ok(q),
        _ => Err(EstimatorError::Validation(format!(
            "Quantity must be a whole number of at least 1, got '{}'",
            input
        ))),
    }
}

/// Parse a manual unit price typed into the form (non-negative decimal)
pub fn parse_unit_price(input: &str) -> EstimatorResult<Money> {
    let price = Money::parse(input).map_err(|e| EstimatorError::Validation(e.to_string()))?;
    if price.is_negative() {
        return Err(EstimatorError::Validation(
            "Unit price cannot be negative".into(),
        ));
    }
    Ok(price)
}
