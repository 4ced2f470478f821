//! Walkthrough configuration loaded from environment variables.

use std::str::FromStr;

use crate::error::CliError;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,

    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(CliError::InvalidConfig {
                key: "LOG_FORMAT",
                value: other.to_string(),
            }),
        }
    }
}

/// Walkthrough configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT`: `text` or `json` (default: `text`)
/// - `CART_DEMO_METRICS`: print the Prometheus render on exit (default: `false`)
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: LogFormat,
    pub print_metrics: bool,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };

        let print_metrics = match lookup("CART_DEMO_METRICS") {
            Some(value) => parse_flag("CART_DEMO_METRICS", &value)?,
            None => false,
        };

        Ok(Self {
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            log_format,
            print_metrics,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            print_metrics: false,
        }
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, CliError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(CliError::InvalidConfig {
            key,
            value: other.to_string(),
        }),
    }
}
