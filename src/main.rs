//! Prefix Index - Main entrypoint.
//!
//! Loads configuration, initializes logging, builds an index from a dataset
//! file and answers prefix queries. Results are written to stdout as JSON
//! lines; logs go to stderr.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use prefix_index_lib::config::{AppConfig, ConfigLoader, LogConfig, ENV_PREFIX};
use prefix_index_lib::dataset;
use prefix_index_lib::error::AppError;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the prefix index.
#[derive(Parser, Debug)]
#[clap(name = "prefix_index", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Load a dataset and print the values matching each prefix
    Search {
        /// JSON-lines dataset of {"key": ..., "value": ...} objects
        #[clap(short, long, value_parser)]
        data: PathBuf,

        /// Prefixes to look up
        #[clap(required = true)]
        prefixes: Vec<String>,
    },

    /// Load a dataset and print index statistics
    Stats {
        /// JSON-lines dataset of {"key": ..., "value": ...} objects
        #[clap(short, long, value_parser)]
        data: PathBuf,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.level.as_str()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    installed
        .map_err(|e| AppError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn search(config: &AppConfig, data: &Path, prefixes: &[String]) -> Result<()> {
    let (index, _) = dataset::load_file(data, config.index.to_index_config())
        .with_context(|| format!("Failed to load dataset {}", data.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for prefix in prefixes {
        let results = index
            .search(prefix)
            .with_context(|| format!("Search failed for prefix {prefix:?}"))?;
        info!(prefix = %prefix, results = results.len(), "Search complete");
        writeln!(out, "{}", json!({ "prefix": prefix, "results": results }))?;
    }
    Ok(())
}

fn stats(config: &AppConfig, data: &Path) -> Result<()> {
    let (index, report) = dataset::load_file(data, config.index.to_index_config())
        .with_context(|| format!("Failed to load dataset {}", data.display()))?;

    let summary = json!({
        "load": report,
        "keys": index.key_count(),
        "values": index.value_count(),
        "nodes": index.node_count(),
    });
    println!("{summary}");
    Ok(())
}

fn gen_config(output: &Path) -> Result<()> {
    info!("Generating default configuration");
    let default_config = AppConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let toml = toml::to_string_pretty(&default_config).context("Failed to serialize config")?;
    std::fs::write(output, toml)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Main entry point for the application.
fn main() -> Result<()> {
    let args = Args::parse();

    if let Command::GenConfig { output } = &args.command {
        init_logging(&LogConfig::default())?;
        return gen_config(output);
    }

    let config = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX)
        .load()
        .context("Failed to load configuration")?;
    init_logging(&config.log)?;

    match &args.command {
        Command::Search { data, prefixes } => search(&config, data, prefixes),
        Command::Stats { data } => stats(&config, data),
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { .. } => Ok(()),
    }
}
