//! The three account variants and their amount ranges.
//!
//! | Variant | Handles                  |
//! |---------|--------------------------|
//! | CoinJar | amount <= 1              |
//! | Bank    | 1 <= amount < 1,000,000  |
//! | Vault   | amount >= 1,000,000      |
//!
//! CoinJar and Bank both claim exactly 1, so routing that amount is
//! ambiguous.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::TransactionAccount;
use crate::types::AccountKind;

/// Largest amount a coin jar takes.
pub const COIN_LIMIT: Decimal = dec!(1.0);

/// Smallest amount that goes to the vault.
pub const VAULT_THRESHOLD: Decimal = dec!(1000000);

#[derive(Debug, Default)]
pub struct CoinJar {
    balance: Decimal,
}

impl CoinJar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionAccount for CoinJar {
    fn kind(&self) -> AccountKind {
        AccountKind::CoinJar
    }

    fn can_handle(&self, amount: Decimal) -> bool {
        amount <= COIN_LIMIT
    }

    fn balance(&self) -> Decimal {
        self.balance
    }

    fn balance_mut(&mut self) -> &mut Decimal {
        &mut self.balance
    }

    fn render_balance(&self) -> String {
        format!("Your coin jar has ${} in coins", self.balance)
    }
}

#[derive(Debug, Default)]
pub struct Bank {
    balance: Decimal,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionAccount for Bank {
    fn kind(&self) -> AccountKind {
        AccountKind::Bank
    }

    fn can_handle(&self, amount: Decimal) -> bool {
        amount >= COIN_LIMIT && amount < VAULT_THRESHOLD
    }

    fn balance(&self) -> Decimal {
        self.balance
    }

    fn balance_mut(&mut self) -> &mut Decimal {
        &mut self.balance
    }

    fn render_balance(&self) -> String {
        format!("Your bank account has ${} in cash", self.balance)
    }
}

#[derive(Debug, Default)]
pub struct Vault {
    balance: Decimal,
}

impl Vault {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionAccount for Vault {
    fn kind(&self) -> AccountKind {
        AccountKind::Vault
    }

    fn can_handle(&self, amount: Decimal) -> bool {
        amount >= VAULT_THRESHOLD
    }

    fn balance(&self) -> Decimal {
        self.balance
    }

    fn balance_mut(&mut self) -> &mut Decimal {
        &mut self.balance
    }

    fn render_balance(&self) -> String {
        format!("Your vault has ${} in gold", self.balance)
    }
}
