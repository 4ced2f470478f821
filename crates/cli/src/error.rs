//! Walkthrough error types.

use domain::CartError;
use metrics_exporter_prometheus::BuildError;
use thiserror::Error;

/// Errors that can stop the walkthrough.
#[derive(Debug, Error)]
pub enum CliError {
    /// An environment variable held a value that could not be parsed.
    #[error("Invalid value for {key}: {value}")]
    InvalidConfig { key: &'static str, value: String },

    /// A cart operation was rejected.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Writing the walkthrough output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// The Prometheus recorder could not be installed.
    #[error("Metrics error: {0}")]
    Metrics(#[from] BuildError),
}
