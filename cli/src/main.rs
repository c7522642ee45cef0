//! CLI entrypoint for carquote
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use carquote_infrastructure::{ConfigLoader, FileConfig, HttpPricePredictor};
use carquote_presentation::{Cli, ConsoleFormatter, FormApp, OutputFormat, SubmitSpinner};
use carquote_application::SubmitQuoteUseCase;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Log file used by the interactive form when none is configured
const DEFAULT_LOG_FILE: &str = "carquote.log";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        let config = load_config(&cli)?;
        println!();
        println!("{}", config.to_toml()?);
        return Ok(());
    }

    let config = load_config(&cli)?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(&cli, &config)?;

    info!("Starting carquote");

    ConsoleFormatter::set_color(config.output.color);

    let predictor_config = config.predictor_config();

    // === Dependency Injection ===
    let predictor = Arc::new(HttpPricePredictor::new(&predictor_config)?);
    info!("Prediction endpoint: {}", predictor.endpoint());

    let request = cli.initial_request();

    if !cli.once {
        let mut app = FormApp::new(predictor);
        app.run(request).await?;
        return Ok(());
    }

    // One-shot mode: the request must be complete before anything is sent
    request.validate()?;

    let use_case = SubmitQuoteUseCase::new(predictor);
    let spinner = SubmitSpinner::start(!cli.quiet && cli.output == OutputFormat::Text);
    let outcome = use_case.run(&request).await;
    spinner.finish();

    let output = match cli.output {
        OutputFormat::Text => ConsoleFormatter::format(&outcome),
        OutputFormat::Json => ConsoleFormatter::format_json(&outcome),
    };
    println!("{}", output);

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    let config = apply_overrides(cli, config);
    config.validate()?;
    Ok(config)
}

/// Apply CLI flags on top of file configuration
fn apply_overrides(cli: &Cli, mut config: FileConfig) -> FileConfig {
    if let Some(endpoint) = &cli.endpoint {
        config.predictor.endpoint = endpoint.clone();
    }
    if let Some(secs) = cli.timeout {
        config.predictor.timeout_seconds = Some(secs);
    }
    config
}

/// Initialize logging based on verbosity level.
///
/// The interactive form owns the terminal, so its logs go to a file;
/// one-shot mode logs to stderr.
fn init_logging(cli: &Cli, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if cli.once {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let path = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE));

    let (writer, guard) = tracing_appender::non_blocking(log_appender(&path)?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Open the form's log file (appending, never rotated)
fn log_appender(path: &Path) -> Result<RollingFileAppender> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    std::fs::create_dir_all(&directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(&directory)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
