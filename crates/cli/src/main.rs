//! Cart walkthrough entry point.

use cli::config::Config;
use cli::error::CliError;
use cli::walkthrough::{self, WALKTHROUGH};
use domain::CartSession;

fn main() -> Result<(), CliError> {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env()?;
    cli::init_tracing(&config);

    // 2. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    // 3. Replay the walkthrough against a fresh session
    let mut session = CartSession::new();
    tracing::info!(cart_id = %session.cart_id(), "starting walkthrough");

    let stdout = std::io::stdout();
    let report = walkthrough::run(&mut session, WALKTHROUGH, &mut stdout.lock())?;

    tracing::info!(
        total = %report.total,
        undo_depth = report.undo_depth,
        redo_depth = report.redo_depth,
        "walkthrough finished"
    );

    if config.print_metrics {
        println!("{}", metrics_handle.render());
    }

    Ok(())
}
