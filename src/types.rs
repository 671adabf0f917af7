//! Shared types for the dispatch demos.
//!
//! The scoreboard and the account ledger do not depend on each other;
//! both only depend on the types declared here.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;

// ---------------------------------------------------------------------------
// Score snapshot
// ---------------------------------------------------------------------------

/// Highest number of wickets a side can lose in an innings.
pub const MAX_WICKETS: u8 = 10;

/// One reading of the live score, produced once per refresh cycle.
///
/// Fields are private so a snapshot can only be built through `new`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSnapshot {
    runs: u32,
    wickets: u8,
    overs: f64,
}

impl ScoreSnapshot {
    /// Build a snapshot, rejecting values no scorer could report.
    pub fn new(runs: u32, wickets: u8, overs: f64) -> Result<Self, DemoError> {
        if wickets > MAX_WICKETS {
            return Err(DemoError::InvalidSnapshot(format!(
                "wickets must be 0-{MAX_WICKETS}, got {wickets}"
            )));
        }
        if !overs.is_finite() || overs < 0.0 {
            return Err(DemoError::InvalidSnapshot(format!(
                "overs must be a non-negative number, got {overs}"
            )));
        }
        Ok(Self { runs, wickets, overs })
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn wickets(&self) -> u8 {
        self.wickets
    }

    pub fn overs(&self) -> f64 {
        self.overs
    }
}

impl fmt::Display for ScoreSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({} ov)", self.runs, self.wickets, self.overs)
    }
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

/// The account variants the router can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    CoinJar,
    Bank,
    Vault,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::CoinJar => write!(f, "coin jar"),
            AccountKind::Bank => write!(f, "bank account"),
            AccountKind::Vault => write!(f, "vault"),
        }
    }
}

/// Direction of a routed transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Deposit,
    Withdraw,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Deposit => write!(f, "deposit"),
            Operation::Withdraw => write!(f, "withdraw"),
        }
    }
}

/// Outcome of a deposit or withdrawal that the router applied.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionReceipt {
    pub account: AccountKind,
    pub operation: Operation,
    pub amount: Decimal,
    pub balance_after: Decimal,
    /// The balance line the account rendered after the operation.
    pub rendered: String,
}

impl fmt::Display for TransactionReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised by the scoreboard and the account ledger.
///
/// None of these are retried; the demo binary lets them terminate the run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DemoError {
    #[error("You have insufficient funds in your {account}: requested ${requested}, available ${available}")]
    InsufficientFunds {
        account: AccountKind,
        requested: Decimal,
        available: Decimal,
    },

    #[error("No unique account for amount {amount}: {matches} accounts matched")]
    NoUniqueAccount { amount: Decimal, matches: usize },

    #[error("Run rate undefined with no overs bowled ({runs}/{wickets})")]
    DivisionUndefined { runs: u32, wickets: u8 },

    #[error("Invalid score snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Balance overflow in your {account}: cannot add ${amount} to ${balance}")]
    BalanceOverflow {
        account: AccountKind,
        amount: Decimal,
        balance: Decimal,
    },

    #[error("Invalid transaction amount: {0}")]
    InvalidAmount(Decimal),

    #[error("Configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
