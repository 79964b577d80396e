//! Line item display formatting
//!
//! Renders the session's line items as a read-only table and the catalog as
//! a price list.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::catalog::CatalogEntry;
use crate::models::LineItem;

#[derive(Tabled)]
struct LineItemRow<'a> {
    #[tabled(rename = "Department")]
    department: &'static str,
    #[tabled(rename = "Country")]
    country: &'static str,
    #[tabled(rename = "General Task")]
    task: &'static str,
    #[tabled(rename = "Service")]
    service: &'a str,
    #[tabled(rename = "Quantity")]
    quantity: u32,
    #[tabled(rename = "Unit Price (€)")]
    unit_price: String,
}

/// Format the line-item list in insertion order
pub fn format_line_items(items: &[LineItem]) -> String {
    if items.is_empty() {
        return "No services added yet.\n\nUse 'add' to add an item.".to_string();
    }

    let rows = items.iter().map(|item| LineItemRow {
        department: item.department.name(),
        country: item.country.code(),
        task: item.task.name(),
        service: &item.service,
        quantity: item.quantity,
        unit_price: item.unit_price.format_plain(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Service")]
    service: &'static str,
    #[tabled(rename = "General Task")]
    task: &'static str,
    #[tabled(rename = "Unit Price (€)")]
    unit_price: String,
}

/// Format catalog entries as a numbered price list
pub fn format_catalog<'a>(entries: impl IntoIterator<Item = &'a CatalogEntry>) -> String {
    let rows: Vec<CatalogRow> = entries
        .into_iter()
        .enumerate()
        .map(|(i, e)| CatalogRow {
            index: i + 1,
            service: e.service,
            task: e.task.name(),
            unit_price: e.unit_price.format_plain(),
        })
        .collect();

    if rows.is_empty() {
        return "No catalog services match.".to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::{Country, Department, GeneralTask, Money};

    #[test]
    fn test_empty_list_message() {
        assert!(format_line_items(&[]).contains("No services added yet"));
    }

    #[test]
    fn test_table_columns() {
        let items = vec![LineItem {
            department: Department::CustomerService,
            country: Country::OutOfEmea,
            service: "Poster Design".into(),
            quantity: 2,
            task: GeneralTask::Collaterals,
            unit_price: Money::from_euros(150),
        }];
        let table = format_line_items(&items);
        for header in [
            "Department",
            "Country",
            "General Task",
            "Service",
            "Quantity",
            "Unit Price (€)",
        ] {
            assert!(table.contains(header), "missing {}", header);
        }
        assert!(table.contains("Customer Service"));
        assert!(table.contains("OUT-OF-EMEA"));
        assert!(table.contains("150.00"));
        assert!(!table.contains("Total"));
    }

    #[test]
    fn test_catalog_listing() {
        let text = format_catalog(Catalog::entries());
        assert!(text.contains("Trade Show Booth Design"));
        assert!(text.contains("2500.00"));
        assert!(format_catalog(Catalog::by_task(GeneralTask::Training)).contains("No catalog"));
    }
}
