//! CLI command definitions

use carquote_domain::{DomainError, QuoteField, QuoteRequest};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable "Estimated Price" line
    Text,
    /// JSON object with status and display string
    Json,
}

/// CLI arguments for carquote
#[derive(Parser, Debug)]
#[command(name = "carquote")]
#[command(author, version, about = "Used car price prediction form")]
#[command(long_about = r#"
carquote collects a vehicle's attributes in a terminal form and asks a
prediction service for its estimated price.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./carquote.toml     Project-level config
3. ~/.config/carquote/config.toml   Global config

Example:
  carquote
  carquote --set manufacturer=toyota --set model=corolla
  carquote --once --set year=2015 --set odometer=60000 ... --output json
"#)]
pub struct Cli {
    /// Prediction endpoint URL (overrides config)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Pre-fill a field (repeatable), e.g. --set paint_color=white
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(QuoteField, String)>,

    /// Submit once without the interactive form and print the result
    #[arg(long)]
    pub once: bool,

    /// Output format for --once
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log file for the interactive form (overrides config)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Suppress the progress spinner in --once mode
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Build the initial Quote Request from the `--set` values
    pub fn initial_request(&self) -> QuoteRequest {
        self.set
            .iter()
            .fold(QuoteRequest::new(), |request, (field, value)| {
                request.with(*field, value.clone())
            })
    }
}

/// Parse `key=value` into a field assignment
pub fn parse_assignment(s: &str) -> Result<(QuoteField, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {:?}", s))?;
    let field = key
        .parse::<QuoteField>()
        .map_err(|e: DomainError| e.to_string())?;
    Ok((field, value.to_string()))
}
