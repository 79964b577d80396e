//! Line item model
//!
//! A line item is one service request the user added to the estimate. Items
//! are immutable once built; the session only ever appends or clears them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::department::{Country, Department};
use super::money::Money;
use super::task::GeneralTask;

/// How the service of an entry is specified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// Service picked from the catalog; price and task come from the catalog
    #[default]
    Predefined,
    /// Free-text service with a manual price and task
    Custom,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predefined => write!(f, "Predefined Service"),
            Self::Custom => write!(f, "Custom Service"),
        }
    }
}

impl FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "predefined" | "predefined service" => Ok(Self::Predefined),
            "custom" | "custom service" => Ok(Self::Custom),
            other => Err(format!("Unknown item type: {}", other)),
        }
    }
}

/// One entry as submitted from the form, before validation
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRequest {
    pub department: Department,
    pub country: Country,
    pub item_type: ItemType,
    /// Catalog service name, or free text for custom entries
    pub service: String,
    pub quantity: u32,
    /// Manual unit price for custom entries. `Some(0)` and `None` both mean "unset".
    pub manual_price: Option<Money>,
    /// Manual task for custom entries
    pub manual_task: Option<GeneralTask>,
}

impl ItemRequest {
    /// Request for a catalog service
    pub fn predefined(
        department: Department,
        country: Country,
        service: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            department,
            country,
            item_type: ItemType::Predefined,
            service: service.into(),
            quantity,
            manual_price: None,
            manual_task: None,
        }
    }

    /// Request for a custom service with a manual price and task
    pub fn custom(
        department: Department,
        country: Country,
        service: impl Into<String>,
        quantity: u32,
        manual_price: Money,
        manual_task: GeneralTask,
    ) -> Self {
        Self {
            department,
            country,
            item_type: ItemType::Custom,
            service: service.into(),
            quantity,
            manual_price: Some(manual_price),
            manual_task: Some(manual_task),
        }
    }
}

/// A validated line item of the estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub department: Department,
    pub country: Country,
    pub service: String,
    pub quantity: u32,
    #[serde(rename = "general_task")]
    pub task: GeneralTask,
    pub unit_price: Money,
}

impl LineItem {
    /// Quantity times unit price, `None` if the product overflows
    pub fn total(&self) -> Option<Money> {
        self.unit_price.checked_mul(self.quantity)
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} @ {} ({}, {}/{})",
            self.quantity, self.service, self.unit_price, self.task, self.department, self.country
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_type_parse() {
        assert_eq!("Predefined".parse::<ItemType>().unwrap(), ItemType::Predefined);
        assert_eq!("custom service".parse::<ItemType>().unwrap(), ItemType::Custom);
        assert!("other".parse::<ItemType>().is_err());
    }

    #[test]
    fn test_line_total() {
        let item = LineItem {
            department: Department::Sales,
            country: Country::Be,
            service: "Poster Design".into(),
            quantity: 2,
            task: GeneralTask::Collaterals,
            unit_price: Money::from_euros(150),
        };
        assert_eq!(item.total(), Some(Money::from_euros(300)));

        let huge = LineItem {
            quantity: 4_000_000,
            unit_price: Money::from_euros(9_999_999_999_999),
            ..item
        };
        assert_eq!(huge.total(), None);
    }

    #[test]
    fn test_custom_request_carries_manual_fields() {
        let req = ItemRequest::custom(
            Department::Hr,
            Country::De,
            "Photography Day Rate",
            1,
            Money::from_euros(900),
            GeneralTask::Photography,
        );
        assert_eq!(req.item_type, ItemType::Custom);
        assert_eq!(req.manual_price, Some(Money::from_euros(900)));
        assert_eq!(req.manual_task, Some(GeneralTask::Photography));
    }
}
