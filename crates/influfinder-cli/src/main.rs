mod collabs;
mod offers;
mod output;
mod tiers;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use influfinder_core::{AppConfig, Catalog, TabFilter};
use tracing_subscriber::EnvFilter;

use crate::collabs::CollabCommands;
use crate::offers::OfferCommands;

#[derive(Debug, Parser)]
#[command(name = "influfinder")]
#[command(about = "Influfinder creator marketplace command line interface")]
struct Cli {
    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Catalog file to read (overrides INFLUFINDER_CATALOG_PATH)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every tier with its threshold
    Tiers,
    /// Show a single tier
    Tier {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=5))]
        level: u8,
    },
    /// Show tier progress for a lifetime completed-collaboration count
    Progress {
        #[arg(allow_negative_numbers = true)]
        completed: i64,
    },
    /// Collaboration tabs
    Collabs {
        #[command(subcommand)]
        command: CollabCommands,
    },
    /// Offer feed
    Offers {
        #[command(subcommand)]
        command: OfferCommands,
    },
    /// Show the catalog creator's tier and progress
    Profile,
}

fn parse_tab(raw: &str) -> Result<TabFilter, String> {
    raw.parse::<TabFilter>().map_err(|e| e.to_string())
}

fn load_catalog(cli_path: Option<&Path>, config: &AppConfig) -> anyhow::Result<Catalog> {
    let path = cli_path.unwrap_or(config.catalog_path.as_path());
    influfinder_core::load_catalog(path)
        .with_context(|| format!("loading catalog {}", path.display()))
}

/// Build the log filter from `RUST_LOG`, then the configured level, then `info`.
fn log_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config errors only matter to the catalog-backed commands.
    let config = influfinder_core::load_app_config();
    let log_level = config.as_ref().map_or("info", |c| c.log_level.as_str());
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(log_level))
        .with_writer(std::io::stderr)
        .init();

    match &config {
        Ok(config) => {
            tracing::debug!(env = %config.env, catalog_path = ?config.catalog_path, "starting");
        }
        Err(err) => tracing::debug!(error = %err, "configuration not loaded"),
    }

    let json = cli.json;
    match cli.command {
        Some(Commands::Tiers) => tiers::run_tiers(json)?,
        Some(Commands::Tier { level }) => tiers::run_tier(level, json)?,
        Some(Commands::Progress { completed }) => tiers::run_progress(completed, json)?,
        Some(Commands::Collabs { command }) => {
            let config = config?;
            let catalog = load_catalog(cli.catalog.as_deref(), &config)?;
            let viewer = config.user_type.unwrap_or(catalog.creator.user_type);
            collabs::run(command, &catalog, viewer, json)?;
        }
        Some(Commands::Offers { command }) => {
            let config = config?;
            let catalog = load_catalog(cli.catalog.as_deref(), &config)?;
            offers::run(command, &catalog, json)?;
        }
        Some(Commands::Profile) => {
            let config = config?;
            let catalog = load_catalog(cli.catalog.as_deref(), &config)?;
            tiers::run_profile(&catalog, json)?;
        }
        None => println!("influfinder: run with --help to list commands"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
