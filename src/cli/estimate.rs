//! Batch estimate command
//!
//! Loads item entries from a CSV, JSON or YAML file, runs each through the
//! line-item builder and prints the resulting estimate. The workbook is
//! written only when an output path is given.

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use tracing::info;

use crate::config::Settings;
use crate::display::format_line_items;
use crate::error::{EstimatorError, EstimatorResult};
use crate::export::{export_estimate_xlsx, XLSX_MIME};
use crate::models::{Country, Department, GeneralTask, ItemRequest, ItemType, Money};
use crate::services::{parse_unit_price, EstimateSession};

/// One entry of an items file
///
/// Department and country fall back to the configured form defaults, the
/// item type to predefined and the quantity to 1.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    pub service: String,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub unit_price: Option<PriceField>,
    #[serde(default, alias = "general_task")]
    pub task: Option<String>,
}

/// Unit price given either as a number or as a money string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceField(pub Money);

impl<'de> Deserialize<'de> for PriceField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PriceVisitor;

        impl<'de> Visitor<'de> for PriceVisitor {
            type Value = PriceField;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a non-negative price as a number or string")
            }

            // Numbers go through the same parser as typed prices so that
            // range and decimal-place checks match the interactive form
            fn visit_u64<E: de::Error>(self, v: u64) -> Result<PriceField, E> {
                self.visit_str(&v.to_string())
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<PriceField, E> {
                self.visit_str(&v.to_string())
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<PriceField, E> {
                self.visit_str(&v.to_string())
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<PriceField, E> {
                parse_unit_price(v).map(PriceField).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(PriceVisitor)
    }
}

impl ItemRecord {
    /// Convert into a builder request, filling defaults from settings
    pub fn to_request(&self, settings: &Settings) -> EstimatorResult<ItemRequest> {
        let department = match self.department.as_deref() {
            Some(d) if !d.trim().is_empty() => {
                d.parse::<Department>().map_err(EstimatorError::Validation)?
            }
            _ => settings.default_department,
        };
        let country = match self.country.as_deref() {
            Some(c) if !c.trim().is_empty() => {
                c.parse::<Country>().map_err(EstimatorError::Validation)?
            }
            _ => settings.default_country,
        };
        let item_type = match self.item_type.as_deref() {
            Some(t) if !t.trim().is_empty() => {
                t.parse::<ItemType>().map_err(EstimatorError::Validation)?
            }
            _ => ItemType::Predefined,
        };
        let task = match self.task.as_deref() {
            Some(t) if !t.trim().is_empty() => {
                Some(t.parse::<GeneralTask>().map_err(EstimatorError::Validation)?)
            }
            _ => None,
        };

        let quantity = self.quantity.unwrap_or(1);
        if quantity == 0 {
            return Err(EstimatorError::Validation(
                "Quantity must be at least 1".into(),
            ));
        }

        Ok(ItemRequest {
            department,
            country,
            item_type,
            service: self.service.clone(),
            quantity,
            manual_price: self.unit_price.map(|p| p.0),
            manual_task: task,
        })
    }
}

/// Read item records, choosing the format from the file extension
pub fn load_item_records(path: &Path) -> EstimatorResult<Vec<ItemRecord>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let open = || {
        File::open(path).map(BufReader::new).map_err(|e| {
            EstimatorError::Io(format!("Failed to open {}: {}", path.display(), e))
        })
    };

    let records: Vec<ItemRecord> = match extension.as_str() {
        "csv" => {
            let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(open()?);
            reader
                .deserialize()
                .collect::<Result<Vec<ItemRecord>, csv::Error>>()?
        }
        "json" => serde_json::from_reader(open()?)?,
        "yaml" | "yml" => serde_yaml::from_reader(open()?)?,
        other => {
            return Err(EstimatorError::Validation(format!(
                "Unsupported items file extension '{}' (expected csv, json, yaml)",
                other
            )))
        }
    };

    Ok(records)
}

/// Build a session from item records; the first bad record aborts
pub fn session_from_records(
    records: &[ItemRecord],
    settings: &Settings,
) -> EstimatorResult<EstimateSession> {
    let mut session = EstimateSession::new();

    for (i, record) in records.iter().enumerate() {
        record
            .to_request(settings)
            .and_then(|request| session.add_item(&request).map(|_| ()))
            .map_err(|e| EstimatorError::Validation(format!("record {}: {}", i + 1, e)))?;
    }

    Ok(session)
}

/// Handle the batch estimate command
pub fn handle_estimate_command(
    settings: &Settings,
    items: PathBuf,
    output: Option<PathBuf>,
) -> EstimatorResult<()> {
    let records = load_item_records(&items)?;
    info!(path = %items.display(), records = records.len(), "items file loaded");

    let session = session_from_records(&records, settings)?;
    let estimate = session.estimate()?;

    println!("The list of services");
    println!("{}", format_line_items(session.items()));
    println!();
    println!("{}", estimate.format_terminal(&settings.currency_code));

    if let Some(path) = output {
        let bytes = export_estimate_xlsx(&estimate)?;
        std::fs::write(&path, &bytes).map_err(|e| {
            EstimatorError::Export(format!("Failed to write {}: {}", path.display(), e))
        })?;
        info!(path = %path.display(), bytes = bytes.len(), "workbook written");
        println!("Saved {} ({} bytes, {})", path.display(), bytes.len(), XLSX_MIME);
    }

    Ok(())
}
