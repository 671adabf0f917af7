//! The fixed demo script run by the binary.
//!
//! Both halves are independent: the scoreboard round never touches the
//! ledger and vice versa. Any error is returned to the caller untouched.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

use crate::accounts::router::AccountRouter;
use crate::config::LedgerConfig;
use crate::scoreboard::displays::{AverageScoreDisplay, CurrentScoreDisplay};
use crate::scoreboard::{ScorePublisher, ScoreSource};
use crate::types::{DemoError, TransactionReceipt};

/// What the scoreboard demo did, for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreboardReport {
    /// Subscribers notified on each refresh, in order.
    pub notified: Vec<usize>,
}

/// Register both displays, refresh, drop the average display, refresh again.
pub fn run_scoreboard(source: Box<dyn ScoreSource>) -> Result<ScoreboardReport, DemoError> {
    let average = Rc::new(RefCell::new(AverageScoreDisplay::new()));
    let current = Rc::new(RefCell::new(CurrentScoreDisplay::new()));

    let mut publisher = ScorePublisher::new(source);
    publisher.register(&average);
    publisher.register(&current);

    let mut notified = Vec::with_capacity(2);
    notified.push(publisher.refresh_and_notify()?);

    publisher.unregister(&average);
    notified.push(publisher.refresh_and_notify()?);

    info!(refreshes = notified.len(), "Scoreboard demo finished");
    Ok(ScoreboardReport { notified })
}

/// Push every ledger step through `router`, stopping at the first failure.
pub fn run_ledger(
    router: &mut AccountRouter,
    ledger: &LedgerConfig,
) -> Result<Vec<TransactionReceipt>, DemoError> {
    let receipts = ledger
        .steps
        .iter()
        .map(|step| router.apply(step.operation, step.amount))
        .collect::<Result<Vec<_>, _>>()?;

    info!(steps = receipts.len(), "Ledger demo finished");
    Ok(receipts)
}
