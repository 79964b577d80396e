//! Interactive estimate session
//!
//! A line-oriented shell around [`EstimateSession`]. The `add` command walks
//! through the item form; input errors are reported inline and the session
//! keeps running.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::display::{format_catalog, format_line_items};
use crate::error::{EstimatorError, EstimatorResult};
use crate::export::{export_estimate_xlsx, XLSX_MIME};
use crate::models::{Country, Department, GeneralTask, ItemRequest, ItemType, Money};
use crate::services::{parse_quantity, parse_unit_price, EstimateSession};

const HELP: &str = "\
Commands:
  add            Add an item (predefined or custom service)
  list           Show the list of services
  estimate       Compute the total estimated savings
  export [path]  Write the estimate workbook (default from settings)
  catalog        Show the predefined services and prices
  reset          Clear the list of services
  help           Show this help
  quit           Leave the session";

/// Interactive shell over an estimate session
pub struct SessionShell<'a, R, W> {
    input: R,
    output: W,
    settings: &'a Settings,
    session: EstimateSession,
}

impl<'a, R: BufRead, W: Write> SessionShell<'a, R, W> {
    /// Create a shell with an empty session
    pub fn new(input: R, output: W, settings: &'a Settings) -> Self {
        Self {
            input,
            output,
            settings,
            session: EstimateSession::new(),
        }
    }

    /// The underlying session
    pub fn session(&self) -> &EstimateSession {
        &self.session
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self) -> EstimatorResult<()> {
        writeln!(self.output, "KGS Marketing Efforts Estimation")?;
        writeln!(self.output, "Type 'help' for a list of commands.")?;

        loop {
            write!(self.output, "\nestimator> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };

            let mut parts = line.splitn(2, char::is_whitespace);
            let command = parts.next().unwrap_or("").to_lowercase();
            let argument = parts.next().map(str::trim).filter(|a| !a.is_empty());

            let result = match command.as_str() {
                "" => Ok(()),
                "add" => self.add_item(),
                "list" | "ls" => self.list(),
                "estimate" => self.estimate(),
                "export" | "download" => self.export(argument),
                "catalog" => self.catalog(),
                "reset" => self.reset(),
                "help" | "?" => writeln!(self.output, "{}", HELP).map_err(EstimatorError::from),
                "quit" | "exit" | "q" => break,
                other => Err(EstimatorError::Validation(format!(
                    "Unknown command '{}'. Type 'help' for a list of commands.",
                    other
                ))),
            };

            if let Err(e) = result {
                if e.is_user_input() {
                    warn!(error = %e, "input rejected");
                } else {
                    warn!(error = %e, "action failed");
                }
                writeln!(self.output, "Error: {}", e)?;
            }
        }

        Ok(())
    }

    fn add_item(&mut self) -> EstimatorResult<()> {
        let request = self.item_form()?;
        let item = self.session.add_item(&request)?;
        let summary = item.to_string();
        writeln!(self.output, "Added: {}", summary)?;
        Ok(())
    }

    /// Collect one entry through the form
    fn item_form(&mut self) -> EstimatorResult<ItemRequest> {
        let item_type = self.choose(
            "Item type",
            &[ItemType::Predefined, ItemType::Custom],
            ItemType::Predefined,
        )?;
        let department = self.choose(
            "Department",
            Department::all(),
            self.settings.default_department,
        )?;
        let country = self.choose("Country", Country::all(), self.settings.default_country)?;

        let request = match item_type {
            ItemType::Predefined => {
                let service = self.choose_service()?;
                let quantity = self.prompt_quantity()?;
                ItemRequest::predefined(department, country, service, quantity)
            }
            ItemType::Custom => {
                let service = self.prompt("Service name (e.g., Photography Day Rate): ")?;
                let task = self.choose(
                    "General Task",
                    GeneralTask::selectable(),
                    GeneralTask::CampaignsAndPr,
                )?;
                let quantity = self.prompt_quantity()?;
                let price = self.prompt("Unit Price (EUR) [0.00]: ")?;
                let price = if price.is_empty() {
                    Money::zero()
                } else {
                    parse_unit_price(&price)?
                };
                ItemRequest::custom(department, country, service, quantity, price, task)
            }
        };

        Ok(request)
    }

    fn choose_service(&mut self) -> EstimatorResult<&'static str> {
        writeln!(self.output, "{}", format_catalog(Catalog::entries()))?;
        let answer = self.prompt("Service (number or name) [1]: ")?;

        let entries = Catalog::entries();
        if answer.is_empty() {
            return Ok(entries[0].service);
        }
        if let Ok(n) = answer.parse::<usize>() {
            return entries
                .get(n.wrapping_sub(1))
                .map(|e| e.service)
                .ok_or_else(|| {
                    EstimatorError::Validation(format!("No service number {}", n))
                });
        }
        Catalog::lookup(&answer)
            .map(|e| e.service)
            .ok_or(EstimatorError::UnknownService(answer))
    }

    fn prompt_quantity(&mut self) -> EstimatorResult<u32> {
        let answer = self.prompt("Quantity [1]: ")?;
        if answer.is_empty() {
            Ok(1)
        } else {
            parse_quantity(&answer)
        }
    }

    /// Numbered choice; empty answer picks the default
    fn choose<T: Copy + Display + PartialEq>(
        &mut self,
        label: &str,
        options: &[T],
        default: T,
    ) -> EstimatorResult<T> {
        writeln!(self.output, "{}:", label)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, option)?;
        }

        let default_index = options.iter().position(|o| *o == default).unwrap_or(0) + 1;
        let answer = self.prompt(&format!("Select {} [{}]: ", label, default_index))?;

        if answer.is_empty() {
            return Ok(default);
        }
        if let Ok(n) = answer.parse::<usize>() {
            return options.get(n.wrapping_sub(1)).copied().ok_or_else(|| {
                EstimatorError::Validation(format!("No {} option {}", label, n))
            });
        }
        options
            .iter()
            .copied()
            .find(|o| o.to_string().eq_ignore_ascii_case(&answer))
            .ok_or_else(|| EstimatorError::Validation(format!("Unknown {}: {}", label, answer)))
    }

    fn list(&mut self) -> EstimatorResult<()> {
        writeln!(self.output, "The list of services")?;
        writeln!(self.output, "{}", format_line_items(self.session.items()))?;
        Ok(())
    }

    fn estimate(&mut self) -> EstimatorResult<()> {
        let estimate = self.session.estimate()?;
        writeln!(
            self.output,
            "{}",
            estimate.format_terminal(&self.settings.currency_code)
        )?;
        Ok(())
    }

    fn export(&mut self, path: Option<&str>) -> EstimatorResult<()> {
        let estimate = self.session.estimate()?;
        let bytes = export_estimate_xlsx(&estimate)?;

        let path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| self.settings.output_file.clone());
        std::fs::write(&path, &bytes).map_err(|e| {
            EstimatorError::Export(format!("Failed to write {}: {}", path.display(), e))
        })?;

        info!(path = %path.display(), bytes = bytes.len(), "workbook written");
        writeln!(
            self.output,
            "Saved {} ({} bytes, {})",
            path.display(),
            bytes.len(),
            XLSX_MIME
        )?;
        Ok(())
    }

    fn catalog(&mut self) -> EstimatorResult<()> {
        writeln!(self.output, "{}", format_catalog(Catalog::entries()))?;
        Ok(())
    }

    fn reset(&mut self) -> EstimatorResult<()> {
        self.session.reset();
        writeln!(self.output, "The list of services has been cleared.")?;
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> EstimatorResult<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()?
            .ok_or_else(|| EstimatorError::Io("Unexpected end of input".into()))
    }

    /// Read one trimmed line; `None` at end of input
    fn read_line(&mut self) -> EstimatorResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
