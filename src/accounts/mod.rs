//! Amount-routed accounts.
//!
//! Each `TransactionAccount` declares the range of amounts it is responsible
//! for. The `AccountRouter` picks the one account whose range covers an
//! amount and applies the deposit or withdrawal there.

pub mod router;
pub mod variants;

use rust_decimal::Decimal;
use tracing::debug;

use crate::types::{AccountKind, DemoError};

/// An account that can take part in amount-based routing.
///
/// Variants supply their range predicate and balance storage; the balance
/// arithmetic is shared.
pub trait TransactionAccount {
    fn kind(&self) -> AccountKind;

    /// Whether this account is responsible for `amount`.
    fn can_handle(&self, amount: Decimal) -> bool;

    fn balance(&self) -> Decimal;

    fn balance_mut(&mut self) -> &mut Decimal;

    /// The human-readable balance line.
    fn render_balance(&self) -> String;

    /// Add `amount`, refusing to overflow the balance.
    fn deposit(&mut self, amount: Decimal) -> Result<(), DemoError> {
        let balance = self.balance();
        let updated = balance
            .checked_add(amount)
            .ok_or(DemoError::BalanceOverflow {
                account: self.kind(),
                amount,
                balance,
            })?;

        *self.balance_mut() = updated;
        debug!(account = %self.kind(), %amount, balance = %updated, "Deposited");
        Ok(())
    }

    /// Take `amount` out, refusing to go below zero.
    fn withdraw(&mut self, amount: Decimal) -> Result<(), DemoError> {
        let available = self.balance();
        if available < amount {
            return Err(DemoError::InsufficientFunds {
                account: self.kind(),
                requested: amount,
                available,
            });
        }

        *self.balance_mut() -= amount;
        debug!(account = %self.kind(), %amount, balance = %self.balance(), "Withdrew");
        Ok(())
    }
}
