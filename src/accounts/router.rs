//! Account router.
//!
//! Dispatches each transaction to the single account whose range covers
//! the amount, then prints that account's balance line.

use rust_decimal::Decimal;
use tracing::{info, warn};

use super::variants::{Bank, CoinJar, Vault};
use super::TransactionAccount;
use crate::types::{AccountKind, DemoError, Operation, TransactionReceipt};

pub struct AccountRouter {
    accounts: Vec<Box<dyn TransactionAccount>>,
}

impl AccountRouter {
    /// Build a router over `accounts`, scanned in the given order.
    ///
    /// Ranges are not checked for overlap or gaps here; a bad layout shows
    /// up as `NoUniqueAccount` when an affected amount is routed.
    pub fn new(accounts: Vec<Box<dyn TransactionAccount>>) -> Self {
        Self { accounts }
    }

    /// Coin jar, bank, and vault, all empty.
    pub fn with_standard_accounts() -> Self {
        let accounts: Vec<Box<dyn TransactionAccount>> = vec![
            Box::new(CoinJar::new()),
            Box::new(Bank::new()),
            Box::new(Vault::new()),
        ];
        Self::new(accounts)
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<TransactionReceipt, DemoError> {
        let account = self.select_account(amount)?;
        account.deposit(amount)?;
        Ok(Self::settle(account, Operation::Deposit, amount))
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<TransactionReceipt, DemoError> {
        let account = self.select_account(amount)?;
        account.withdraw(amount)?;
        Ok(Self::settle(account, Operation::Withdraw, amount))
    }

    /// Apply one step of a ledger script.
    pub fn apply(
        &mut self,
        operation: Operation,
        amount: Decimal,
    ) -> Result<TransactionReceipt, DemoError> {
        match operation {
            Operation::Deposit => self.deposit(amount),
            Operation::Withdraw => self.withdraw(amount),
        }
    }

    /// Current balance of every account, in routing order.
    pub fn balances(&self) -> Vec<(AccountKind, Decimal)> {
        self.accounts.iter().map(|a| (a.kind(), a.balance())).collect()
    }

    /// Which account `amount` would be routed to, without touching balances.
    pub fn route(&self, amount: Decimal) -> Result<AccountKind, DemoError> {
        let idx = self.unique_match(amount)?;
        Ok(self.accounts[idx].kind())
    }

    /// The one account whose range covers `amount`.
    fn select_account(
        &mut self,
        amount: Decimal,
    ) -> Result<&mut dyn TransactionAccount, DemoError> {
        let idx = self.unique_match(amount)?;
        Ok(self.accounts[idx].as_mut())
    }

    fn unique_match(&self, amount: Decimal) -> Result<usize, DemoError> {
        Self::validate_amount(amount)?;

        let matching: Vec<usize> = self
            .accounts
            .iter()
            .enumerate()
            .filter(|(_, a)| a.can_handle(amount))
            .map(|(i, _)| i)
            .collect();

        match matching.as_slice() {
            [idx] => Ok(*idx),
            _ => {
                warn!(%amount, matches = matching.len(), "No unique account for amount");
                Err(DemoError::NoUniqueAccount {
                    amount,
                    matches: matching.len(),
                })
            }
        }
    }

    fn validate_amount(amount: Decimal) -> Result<(), DemoError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DemoError::InvalidAmount(amount));
        }
        Ok(())
    }

    fn settle(
        account: &mut dyn TransactionAccount,
        operation: Operation,
        amount: Decimal,
    ) -> TransactionReceipt {
        let rendered = account.render_balance();
        println!("{rendered}");
        info!(
            account = %account.kind(),
            %operation,
            %amount,
            balance = %account.balance(),
            "Transaction applied"
        );

        TransactionReceipt {
            account: account.kind(),
            operation,
            amount,
            balance_after: account.balance(),
            rendered,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
