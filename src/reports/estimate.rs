//! Estimate report
//!
//! Aggregates the session's line items into per-line totals, a grand total
//! and per-task totals. The report is derived on demand and never stored.

use std::collections::BTreeMap;

use tracing::info;

use crate::display::report::{format_bar, format_percentage, separator};
use crate::error::{EstimatorError, EstimatorResult};
use crate::models::{Country, Department, GeneralTask, LineItem, Money};

/// A line item enriched with its computed total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateRow {
    pub department: Department,
    pub country: Country,
    pub task: GeneralTask,
    pub service: String,
    pub quantity: u32,
    pub unit_price: Money,
    /// Quantity times unit price
    pub total: Money,
}

impl TryFrom<&LineItem> for EstimateRow {
    type Error = EstimatorError;

    fn try_from(item: &LineItem) -> EstimatorResult<Self> {
        let total = item.total().ok_or_else(|| {
            EstimatorError::Validation(format!("Line total for '{}' is too large", item.service))
        })?;
        Ok(Self {
            department: item.department,
            country: item.country,
            task: item.task,
            service: item.service.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            total,
        })
    }
}

/// Sum of line totals for one general task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTotal {
    pub task: GeneralTask,
    pub total: Money,
}

/// One slice of the breakdown chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: Money,
    /// Share of the grand total, in percent
    pub share: f64,
}

/// Totals computed from a non-empty list of line items
#[derive(Debug, Clone)]
pub struct Estimate {
    /// Enriched rows in insertion order
    pub rows: Vec<EstimateRow>,
    /// Per-task totals, largest first
    pub task_totals: Vec<TaskTotal>,
    pub grand_total: Money,
}

impl Estimate {
    /// Compute the estimate for a list of line items
    ///
    /// Fails with [`EstimatorError::Empty`] when there is nothing to estimate.
    /// Task totals are grouped in ascending label order and then stably sorted
    /// by total descending, so tied tasks stay in label order.
    pub fn generate(items: &[LineItem]) -> EstimatorResult<Self> {
        if items.is_empty() {
            return Err(EstimatorError::Empty);
        }

        let rows = items
            .iter()
            .map(EstimateRow::try_from)
            .collect::<EstimatorResult<Vec<_>>>()?;

        let too_large = || EstimatorError::Validation("Estimate total is too large".into());
        let mut grand_total = Money::zero();
        let mut grouped: BTreeMap<&'static str, TaskTotal> = BTreeMap::new();
        for row in &rows {
            grand_total = grand_total.checked_add(row.total).ok_or_else(too_large)?;

            let entry = grouped.entry(row.task.name()).or_insert(TaskTotal {
                task: row.task,
                total: Money::zero(),
            });
            entry.total = entry.total.checked_add(row.total).ok_or_else(too_large)?;
        }

        let mut task_totals: Vec<TaskTotal> = grouped.into_values().collect();
        task_totals.sort_by(|a, b| b.total.cmp(&a.total));

        info!(
            items = rows.len(),
            tasks = task_totals.len(),
            grand_total = %grand_total,
            "estimate computed"
        );

        Ok(Self {
            rows,
            task_totals,
            grand_total,
        })
    }

    /// Chart dataset over the task totals, in task-total order
    pub fn chart(&self) -> Vec<ChartSlice> {
        self.task_totals
            .iter()
            .map(|t| ChartSlice {
                label: t.task.name(),
                value: t.total,
                share: if self.grand_total.is_zero() {
                    0.0
                } else {
                    t.total.cents() as f64 / self.grand_total.cents() as f64 * 100.0
                },
            })
            .collect()
    }

    /// Headline total, e.g. "Total Estimated Savings: EUR 550.00"
    pub fn headline(&self, currency_code: &str) -> String {
        format!(
            "Total Estimated Savings: {}",
            self.grand_total.format_with_code(currency_code)
        )
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_code: &str) -> String {
        let mut output = String::new();

        output.push_str(&self.headline(currency_code));
        output.push('\n');
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(
            "This amount represents the money saved by leveraging internal marketing\n\
             resources instead of external agencies.\n\
             Remember: Saved money is earned money.\n\n",
        );

        output.push_str("Savings by General Task\n");
        output.push_str(&separator(72));
        output.push('\n');

        let chart = self.chart();
        let max_share = chart.iter().map(|s| s.share).fold(0.0, f64::max);

        for slice in &chart {
            output.push_str(&format!(
                "{:<18} {:>14} {} {:>6}\n",
                slice.label,
                slice.value.format_plain(),
                format_bar(slice.share, max_share, 24),
                format_percentage(slice.share)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(service: &str, quantity: u32, euros: i64, task: GeneralTask) -> LineItem {
        LineItem {
            department: Department::Sales,
            country: Country::Be,
            service: service.to_string(),
            quantity,
            task,
            unit_price: Money::from_euros(euros),
        }
    }

    #[test]
    fn test_empty_list() {
        assert!(matches!(Estimate::generate(&[]), Err(EstimatorError::Empty)));
    }

    #[test]
    fn test_line_total_overflow_is_an_error() {
        let items = vec![LineItem {
            quantity: 4_000_000,
            unit_price: Money::from_cents(999_999_999_999_900),
            ..item("Drone Footage", 1, 0, GeneralTask::VideoProduction)
        }];
        let err = Estimate::generate(&items).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Drone Footage"));
    }

    #[test]
    fn test_grand_total_overflow_is_an_error() {
        let big = LineItem {
            unit_price: Money::from_cents(i64::MAX / 2 + 1),
            ..item("Drone Footage", 1, 0, GeneralTask::VideoProduction)
        };
        let items = vec![big.clone(), big];
        let err = Estimate::generate(&items).unwrap_err();
        assert!(err.to_string().contains("Estimate total is too large"));
    }

    #[test]
    fn test_worked_example() {
        let items = vec![
            item("Poster Design", 2, 150, GeneralTask::Collaterals),
            item("Infographic Design", 1, 250, GeneralTask::Collaterals),
        ];
        let estimate = Estimate::generate(&items).unwrap();

        assert_eq!(estimate.rows[0].total, Money::from_euros(300));
        assert_eq!(estimate.rows[1].total, Money::from_euros(250));
        assert_eq!(estimate.grand_total, Money::from_euros(550));
        assert_eq!(estimate.headline("EUR"), "Total Estimated Savings: EUR 550.00");
        assert_eq!(
            estimate.task_totals,
            vec![TaskTotal {
                task: GeneralTask::Collaterals,
                total: Money::from_euros(550)
            }]
        );
    }

    #[test]
    fn test_task_totals_sorted_descending_and_sum_to_grand_total() {
        let items = vec![
            item("Leaflet Design", 1, 100, GeneralTask::Collaterals),
            item("Trade Show Booth Design", 1, 2500, GeneralTask::Events),
            item("Social Media Graphics", 3, 200, GeneralTask::Digital),
            item("Webinar Setup & Promotion", 1, 1000, GeneralTask::Events),
        ];
        let estimate = Estimate::generate(&items).unwrap();

        let tasks: Vec<_> = estimate.task_totals.iter().map(|t| t.task).collect();
        assert_eq!(
            tasks,
            vec![GeneralTask::Events, GeneralTask::Digital, GeneralTask::Collaterals]
        );

        let sum = estimate
            .task_totals
            .iter()
            .try_fold(Money::zero(), |acc, t| acc.checked_add(t.total))
            .unwrap();
        assert_eq!(sum, estimate.grand_total);
        assert_eq!(estimate.grand_total, Money::from_euros(4200));
    }

    #[test]
    fn test_ties_keep_label_order() {
        let items = vec![
            item("Market Research Report", 1, 500, GeneralTask::MarketResearch),
            item("Mascot", 1, 500, GeneralTask::Custom),
            item("Poster Design", 1, 500, GeneralTask::Collaterals),
        ];
        let estimate = Estimate::generate(&items).unwrap();

        let labels: Vec<_> = estimate.task_totals.iter().map(|t| t.task.name()).collect();
        assert_eq!(labels, vec!["Collaterals", "Custom", "Market Research"]);
    }

    #[test]
    fn test_grand_total_is_order_independent() {
        let mut items = vec![
            item("A", 3, 19, GeneralTask::Digital),
            item("B", 7, 1200, GeneralTask::Events),
            item("C", 1, 50, GeneralTask::LeadGeneration),
        ];
        let forward = Estimate::generate(&items).unwrap().grand_total;
        items.reverse();
        let backward = Estimate::generate(&items).unwrap().grand_total;
        assert_eq!(forward, backward);
        assert_eq!(forward, Money::from_euros(3 * 19 + 7 * 1200 + 50));
    }

    #[test]
    fn test_rows_keep_insertion_order() {
        let items = vec![
            item("Zeta", 1, 10, GeneralTask::Digital),
            item("Alpha", 1, 20, GeneralTask::Digital),
        ];
        let estimate = Estimate::generate(&items).unwrap();
        assert_eq!(estimate.rows[0].service, "Zeta");
        assert_eq!(estimate.rows[1].service, "Alpha");
    }

    #[test]
    fn test_does_not_mutate_input() {
        let items = vec![item("Poster Design", 2, 150, GeneralTask::Collaterals)];
        let before = items.clone();
        let _ = Estimate::generate(&items).unwrap();
        assert_eq!(items, before);
    }

    #[test]
    fn test_chart_shares() {
        let items = vec![
            item("Trade Show Booth Design", 1, 750, GeneralTask::Events),
            item("Poster Design", 1, 250, GeneralTask::Collaterals),
        ];
        let chart = Estimate::generate(&items).unwrap().chart();
        assert_eq!(chart.len(), 2);
        assert_eq!(chart[0].label, "Events");
        assert!((chart[0].share - 75.0).abs() < 1e-9);
        assert!((chart[1].share - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_terminal() {
        let items = vec![item("Poster Design", 2, 150, GeneralTask::Collaterals)];
        let text = Estimate::generate(&items).unwrap().format_terminal("EUR");
        assert!(text.contains("Total Estimated Savings: EUR 300.00"));
        assert!(text.contains("Collaterals"));
        assert!(text.contains("100%"));
    }
}
