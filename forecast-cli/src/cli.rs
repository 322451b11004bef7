use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};
use std::path::PathBuf;

use forecast_core::{Config, ForecastClient, ForecastReport};

/// Top-level CLI struct.
///
/// With no subcommand the tool fetches and prints the forecast for the
/// configured location.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Fetch and summarize a weather forecast")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the TOML config file (defaults to the platform config dir).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively create or replace the configuration file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(self.config),
            None => show(self.config).await,
        }
    }
}

/// The success path: load config, one GET, print status, raw body, report.
async fn show(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = Config::load(config_path.as_deref())?;

    let client = ForecastClient::new(config.api_key.clone())?;
    let raw = client
        .fetch(&config.request())
        .await
        .context("Failed to fetch forecast")?;

    println!("HTTP status: {}", raw.status);
    println!("{}", raw.body);
    println!();

    let report = ForecastReport::from_json(&raw.body)
        .context("Failed to interpret forecast response")?;
    print!("{report}");

    Ok(())
}

fn configure(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let api_key = Text::new("API key:")
        .prompt()
        .context("Failed to read API key")?;

    let latitude = CustomType::<f64>::new("Latitude:")
        .with_help_message("e.g. 55.75")
        .prompt()
        .context("Failed to read latitude")?;

    let longitude = CustomType::<f64>::new("Longitude:")
        .with_help_message("e.g. 37.62")
        .prompt()
        .context("Failed to read longitude")?;

    let days = CustomType::<u32>::new("Forecast days:")
        .with_help_message("a positive integer, e.g. 3")
        .prompt()
        .context("Failed to read forecast days")?;

    let config = Config { api_key, latitude, longitude, days };
    let path = config.save(config_path.as_deref())?;

    println!("Saved configuration to {}", path.display());
    Ok(())
}
