//! Direct CLI - command-line interface for the Direct delivery API.
//!
//! Quotes, books, tracks and cancels courier deliveries from the terminal.
//! Useful for scripting, support work and checking a customer account's
//! credentials.

mod commands;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use direct_core::config::{ConfigHandle, DirectConfig};
use direct_core::error::DirectResult;
use direct_core::logging;

/// Direct - on-demand courier deliveries from the command line.
#[derive(Parser)]
#[command(
    name = "direct",
    version,
    about = "Direct delivery API CLI",
    long_about = "A command-line interface for the Direct delivery API.\n\
                   Request quotes, create deliveries and follow them to completion."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Bearer token (overrides config and environment).
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Get a price and ETA for a pickup/dropoff pair.
    Quote(commands::quote::QuoteArgs),
    /// Create, list and manage deliveries.
    Deliveries {
        #[command(subcommand)]
        action: commands::deliveries::DeliveriesAction,
    },
    /// Show or create the configuration file.
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() -> DirectResult<()> {
    let cli = Cli::parse();

    let config_path = match cli.config.as_deref() {
        Some(path) => PathBuf::from(path),
        None => DirectConfig::default_config_path()?,
    };
    let mut config = load_config(&config_path)?;

    // Initialize logging
    let log_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    let log_dir = config
        .effective_log_dir()
        .unwrap_or_else(|_| PathBuf::from("logs"));
    let _guard = logging::init_logging(&log_level, &log_dir, config.logging.json_output)?;

    config.apply_env_overrides();
    if let Some(token) = cli.token {
        config.api.access_token = token;
    }

    let config_handle = ConfigHandle::new(config);

    info!("Direct CLI v{}", direct_core::constants::APP_VERSION);

    // Dispatch to command handlers
    match cli.command {
        Commands::Quote(args) => commands::quote::run(config_handle, args, cli.format).await,
        Commands::Deliveries { action } => {
            commands::deliveries::run(config_handle, action, cli.format).await
        }
        Commands::Config { action } => {
            commands::config::run(config_handle, action, &config_path, cli.format).await
        }
    }
}

/// Load the file at `path`, or defaults when it does not exist yet.
fn load_config(path: &Path) -> DirectResult<DirectConfig> {
    if path.exists() {
        DirectConfig::load_from_file(path)
    } else {
        Ok(DirectConfig::default())
    }
}
