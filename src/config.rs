//! Configuration loading from TOML.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs. The
//! file only supplies demo data (the fixed score feed and the ledger
//! script); when it is missing, the built-in reference script is used.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::types::{DemoError, Operation, ScoreSnapshot};

/// Default config file path, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Top-level application configuration.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub scoreboard: ScoreboardConfig,
    #[serde(default)]
    pub ledger: LedgerConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DemoConfig {
    pub name: String,
}

/// Values reported by the fixed stadium feed.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScoreboardConfig {
    pub runs: u32,
    pub wickets: u8,
    pub overs: f64,
}

/// Ordered deposits and withdrawals to push through the account router.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LedgerConfig {
    pub steps: Vec<LedgerStep>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct LedgerStep {
    pub operation: Operation,
    pub amount: Decimal,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            name: "dispatch-patterns".to_string(),
        }
    }
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            runs: 90,
            wickets: 2,
            overs: 10.2,
        }
    }
}

impl Default for LedgerConfig {
    /// Six deposits across all three accounts, then two coin jar
    /// withdrawals; the second one overdraws.
    fn default() -> Self {
        let deposit = |amount| LedgerStep { operation: Operation::Deposit, amount };
        let withdraw = |amount| LedgerStep { operation: Operation::Withdraw, amount };
        Self {
            steps: vec![
                deposit(dec!(0.5)),
                deposit(dec!(52.45)),
                deposit(dec!(1476.12)),
                deposit(dec!(0.25)),
                deposit(dec!(2451234)),
                deposit(dec!(3151239)),
                withdraw(dec!(0.12)),
                withdraw(dec!(0.8)),
            ],
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to the reference script.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!(path, "No config file found, using built-in demo script");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse and validate TOML content.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject fixtures the demo could never run with.
    pub fn validate(&self) -> Result<(), DemoError> {
        let s = &self.scoreboard;
        ScoreSnapshot::new(s.runs, s.wickets, s.overs)
            .map_err(|e| DemoError::Config(format!("scoreboard: {e}")))?;

        if self.ledger.steps.is_empty() {
            return Err(DemoError::Config("ledger has no steps".to_string()));
        }
        if let Some(step) = self.ledger.steps.iter().find(|s| s.amount.is_sign_negative()) {
            return Err(DemoError::Config(format!(
                "ledger amounts must be non-negative, got {}",
                step.amount
            )));
        }
        Ok(())
    }
}
