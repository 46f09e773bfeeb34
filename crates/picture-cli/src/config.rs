//! Driver configuration.

use clap::ValueEnum;
use picture_core::encode::{SaveOptions, DEFAULT_JPEG_QUALITY};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Everything the driver needs besides the requested operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Output encoding configuration.
    pub output: OutputConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "picture_core=debug,warn").
    /// `RUST_LOG` takes precedence when set.
    pub level: String,

    /// Output format of log lines.
    pub format: LogFormat,
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Output encoding configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// JPEG quality (1-100) for `.jpg`/`.jpeg` destinations.
    pub jpeg_quality: u8,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl OutputConfig {
    pub fn save_options(&self) -> SaveOptions {
        SaveOptions {
            jpeg_quality: self.jpeg_quality,
        }
    }
}

impl CliConfig {
    /// Build the configuration from parsed global flags.
    pub fn from_cli(cli: &Cli) -> Self {
        let level = if cli.verbose { "debug" } else { "info" };
        Self {
            logging: LoggingConfig {
                level: level.to_string(),
                format: cli.log_format,
            },
            output: OutputConfig {
                jpeg_quality: cli.jpeg_quality,
            },
        }
    }
}
