use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use marketing_estimator::cli::{handle_catalog_command, handle_estimate_command, SessionShell};
use marketing_estimator::config::{EstimatorPaths, Settings};
use marketing_estimator::logging;

#[derive(Parser)]
#[command(
    name = "estimator",
    author = "KGS Marketing",
    version,
    about = "Estimate savings for internal marketing services",
    long_about = "Builds a list of marketing services, either from the predefined \
                  catalog or as custom items, totals the estimated savings per \
                  general task and exports the estimate as an Excel workbook."
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive estimate session (default)
    #[command(alias = "shell")]
    Session,

    /// Estimate a list of services read from a CSV, JSON or YAML file
    Estimate {
        /// Path to the items file
        #[arg(short, long)]
        items: PathBuf,
        /// Write the estimate workbook to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the predefined services and prices
    Catalog {
        /// Only show services of this general task
        #[arg(short, long)]
        task: Option<String>,
    },

    /// Write the settings file with its current values
    Init,

    /// Show current configuration and paths
    Config,
}

/// Resolve paths and load settings, for the commands that use them
fn load_settings() -> Result<(EstimatorPaths, Settings)> {
    let paths = EstimatorPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    Ok((paths, settings))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match cli.command {
        Some(Commands::Session) | None => {
            let (_, settings) = load_settings()?;
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut shell = SessionShell::new(stdin.lock(), stdout.lock(), &settings);
            shell.run()?;
        }
        Some(Commands::Estimate { items, output }) => {
            let (_, settings) = load_settings()?;
            handle_estimate_command(&settings, items, output)?;
        }
        Some(Commands::Catalog { task }) => {
            handle_catalog_command(task)?;
        }
        Some(Commands::Init) => {
            let (paths, settings) = load_settings()?;
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            let (paths, settings) = load_settings()?;
            println!("Marketing Estimator Configuration");
            println!("=================================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency code:      {}", settings.currency_code);
            println!("  Output file:        {}", settings.output_file.display());
            println!("  Default department: {}", settings.default_department);
            println!("  Default country:    {}", settings.default_country);
        }
    }

    Ok(())
}
