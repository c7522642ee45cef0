//! Presentation layer for carquote
//!
//! This crate contains the CLI definitions, the interactive terminal form,
//! the one-shot output formatter and the progress spinner.

pub mod cli;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat, parse_assignment};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::SubmitSpinner;
pub use tui::FormApp;
