//! searchmarks HTTP API & CLI (Rust)
//!
//! Dual-mode application:
//! - Server Mode (default): HTTP search API over an in-memory trademark dataset
//! - CLI Mode: one-shot `search` / `stats` commands printing JSON
//!
//! The dataset is loaded once, then shared read-only by every query.

mod cli;
mod config;
mod dataset;
mod error;
mod pagination;
mod search;
mod server;
mod tools;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::ServerConfig;
use error::AppError;
use search::SearchEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // No arguments: serve with env/default settings
    let args: Vec<String> = std::env::args().collect();
    let cli = if args.len() > 1 {
        Cli::parse()
    } else {
        Cli::parse_from(["searchmarks", "serve"])
    };

    init_logging(&cli);

    let result = match cli.command {
        Some(Commands::Serve(args)) => run_server(args).await,
        Some(Commands::Search(args)) => execute_search_cli(args),
        Some(Commands::Stats(args)) => execute_stats_cli(args),
        None => {
            eprintln!("Error: No command specified. Use --help for usage information.");
            std::process::exit(1);
        }
    };

    // Handle result and exit with appropriate code
    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Logs go to stderr so stdout carries only JSON output
fn init_logging(cli: &Cli) {
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load the dataset, then serve until interrupted
async fn run_server(args: cli::ServeArgs) -> Result<String, AppError> {
    let config = ServerConfig::from(&args);
    let dataset = dataset::load(&config.data_path)?;

    info!("Starting searchmarks server");
    server::serve(config, dataset).await?;
    Ok(String::new())
}

/// Execute search command in CLI mode
fn execute_search_cli(args: cli::SearchArgs) -> Result<String, AppError> {
    let dataset = dataset::load(&args.data.data)?;
    let engine = SearchEngine::new();

    let page = tools::search::execute_search(&engine, &dataset, &args.params)?;
    Ok(serde_json::to_string_pretty(&page)?)
}

/// Execute stats command in CLI mode
fn execute_stats_cli(args: cli::StatsArgs) -> Result<String, AppError> {
    let dataset = dataset::load(&args.data.data)?;
    Ok(serde_json::to_string_pretty(&dataset::statistics(&dataset))?)
}
