//! CLI mode implementation
//!
//! Provides the command-line interface and the search parameter set
//! shared with the HTTP query string

use crate::config::{DEFAULT_DATA_PATH, DEFAULT_HOST, DEFAULT_PORT};
use clap::{Args, Parser, Subcommand};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

/// searchmarks CLI
#[derive(Parser)]
#[command(name = "searchmarks")]
#[command(about = "Trademark record search API and command-line lookup", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the search API over HTTP
    Serve(ServeArgs),
    /// Run one search and print the result page as JSON
    Search(SearchArgs),
    /// Print per-status record counts as JSON
    Stats(StatsArgs),
}

/// Dataset location
#[derive(Args, Clone, Debug)]
pub struct DataArgs {
    /// Path to the trademark JSON dataset
    #[arg(short = 'd', long = "data", env = "SEARCHMARKS_DATA", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,
}

/// Server arguments
#[derive(Args, Clone, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Address to bind
    #[arg(long, env = "SEARCHMARKS_HOST", default_value = DEFAULT_HOST)]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short = 'p', long, env = "SEARCHMARKS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

/// Search command arguments
#[derive(Args, Clone, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub params: SearchParams,
}

/// Stats command arguments
#[derive(Args, Clone, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

/// Search parameters
///
/// Field names match the HTTP query string. The parenthesised aliases
/// are the labelled parameter names older clients send.
#[derive(Args, JsonSchema, Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Trademark name or English name
    #[arg(short = 'n', long = "product-name")]
    #[serde(rename = "productName", alias = "productName(상표명)", default)]
    #[schemars(description = "Trademark name or English name (case-insensitive)")]
    pub product_name: Option<String>,

    /// Registration status, exact match
    #[arg(short = 's', long)]
    #[serde(alias = "status(등록상태)", default)]
    pub status: Option<String>,

    #[arg(long)]
    #[serde(rename = "applicationNumber", alias = "applicationNumber(출원번호)", default)]
    #[schemars(description = "Application number (substring)")]
    pub application_number: Option<String>,

    #[arg(long)]
    #[serde(rename = "publicationNumber", alias = "publicationNumber(공고번호)", default)]
    #[schemars(description = "Publication number (substring)")]
    pub publication_number: Option<String>,

    #[arg(long)]
    #[serde(rename = "registrationNumber", alias = "registrationNumber(등록번호)", default)]
    #[schemars(description = "Registration number (substring)")]
    pub registration_number: Option<String>,

    #[arg(long)]
    #[serde(
        rename = "internationalRegNumbers",
        alias = "internationalRegNumbers(국제등록번호)",
        default
    )]
    #[schemars(description = "International registration number (substring)")]
    pub international_reg_numbers: Option<String>,

    #[arg(long)]
    #[serde(
        rename = "priorityClaimNumList",
        alias = "priorityClaimNumList(우선권주장번호)",
        default
    )]
    #[schemars(description = "Priority claim number (substring)")]
    pub priority_claim_num_list: Option<String>,

    /// Comma separated main classification codes; "7" also finds "07"
    #[arg(short = 'c', long = "main-codes")]
    #[serde(
        rename = "asignProductMainCodeList",
        alias = "asignProductMainCodeList(상품주분류코드)",
        default
    )]
    pub asign_product_main_code_list: Option<String>,

    #[arg(long = "vienna-code")]
    #[serde(rename = "viennaCodeList", alias = "viennaCodeList(비엔나분류코드)", default)]
    #[schemars(description = "Vienna classification code (substring)")]
    pub vienna_code_list: Option<String>,

    /// Maximum number of results per page (default 10)
    #[arg(short = 'l', long, allow_negative_numbers = true)]
    #[serde(default)]
    pub limit: Option<i64>,

    /// 1-based page number (default 1)
    #[arg(long, allow_negative_numbers = true)]
    #[serde(default)]
    pub page: Option<i64>,

    /// Rank names by similarity instead of substring matching
    #[arg(long = "fuzzy")]
    #[serde(alias = "use_fuzzy_search(유사도검색)", default)]
    pub use_fuzzy_search: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_args() {
        let cli = Cli::parse_from([
            "searchmarks",
            "search",
            "--data",
            "records.json",
            "-n",
            "apple",
            "--main-codes",
            "7,9",
            "--limit",
            "5",
            "--fuzzy",
        ]);

        match cli.command {
            Some(Commands::Search(args)) => {
                assert_eq!(args.data.data, PathBuf::from("records.json"));
                assert_eq!(args.params.product_name.as_deref(), Some("apple"));
                assert_eq!(args.params.asign_product_main_code_list.as_deref(), Some("7,9"));
                assert_eq!(args.params.limit, Some(5));
                assert!(args.params.use_fuzzy_search);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_negative_limit_parses_for_later_rejection() {
        let cli = Cli::parse_from(["searchmarks", "search", "-d", "x.json", "--limit", "-3"]);
        match cli.command {
            Some(Commands::Search(args)) => assert_eq!(args.params.limit, Some(-3)),
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_serve_args() {
        let cli = Cli::parse_from([
            "searchmarks",
            "serve",
            "-d",
            "x.json",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
        ]);
        match cli.command {
            Some(Commands::Serve(args)) => {
                assert_eq!(args.host.to_string(), "0.0.0.0");
                assert_eq!(args.port, 9000);
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_search_params_from_json_aliases() {
        let params: SearchParams = serde_json::from_value(serde_json::json!({
            "productName(상표명)": "사과",
            "asignProductMainCodeList": "7",
            "limit": 3
        }))
        .unwrap();

        assert_eq!(params.product_name.as_deref(), Some("사과"));
        assert_eq!(params.asign_product_main_code_list.as_deref(), Some("7"));
        assert_eq!(params.limit, Some(3));
        assert!(!params.use_fuzzy_search);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
