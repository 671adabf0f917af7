//! Dispatch patterns demo.
//!
//! Entry point. Loads configuration, initialises structured logging, runs
//! the scoreboard round and then the ledger script. Takes no arguments;
//! the first unhandled error ends the run with a non-zero exit code.

use anyhow::{Context, Result};
use tracing::info;

use dispatch_patterns::accounts::router::AccountRouter;
use dispatch_patterns::config::{self, AppConfig};
use dispatch_patterns::demo;
use dispatch_patterns::scoreboard::source::FixedScoreSource;

fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    init_logging();

    let cfg = AppConfig::load_or_default(config::DEFAULT_CONFIG_FILE)?;
    info!(
        name = %cfg.demo.name,
        ledger_steps = cfg.ledger.steps.len(),
        "Starting demo"
    );

    // -- Observer: scoreboard --------------------------------------------

    let source = FixedScoreSource::from_config(&cfg.scoreboard)?;
    let report = demo::run_scoreboard(Box::new(source)).context("Scoreboard demo failed")?;
    info!(notified = ?report.notified, "Scoreboard done");

    // -- Strategy: account ledger ----------------------------------------

    let mut router = AccountRouter::with_standard_accounts();
    let receipts = demo::run_ledger(&mut router, &cfg.ledger).context("Ledger demo failed")?;
    info!(transactions = receipts.len(), "Ledger done");

    Ok(())
}

/// Initialise the `tracing` subscriber.
///
/// Logs go to stderr so stdout carries only the rendered demo output.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dispatch_patterns=info"));

    let json_logging = std::env::var("DISPATCH_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
