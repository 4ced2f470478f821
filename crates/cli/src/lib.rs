//! Runnable walkthrough of the cart command ledger.
//!
//! Replays a scripted cart session with undo/redo, with structured logging
//! (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod walkthrough;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::{Config, LogFormat};

/// Installs the global tracing subscriber, writing to stderr.
///
/// An unparsable `log_level` falls back to `info`.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
