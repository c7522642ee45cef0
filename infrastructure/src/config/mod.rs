//! Configuration file loading for carquote
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./carquote.toml` or `./.carquote.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/carquote/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig, FilePredictorConfig,
};
pub use loader::ConfigLoader;
