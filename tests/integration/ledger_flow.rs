//! Ledger flow: the reference deposit/withdraw script through the router.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use dispatch_patterns::accounts::router::AccountRouter;
use dispatch_patterns::config::{AppConfig, LedgerConfig, LedgerStep};
use dispatch_patterns::demo;
use dispatch_patterns::types::{AccountKind, DemoError, Operation};

#[test]
fn test_reference_script_fails_on_overdraw() {
    let mut router = AccountRouter::with_standard_accounts();
    let err = demo::run_ledger(&mut router, &LedgerConfig::default()).unwrap_err();

    assert_eq!(
        err,
        DemoError::InsufficientFunds {
            account: AccountKind::CoinJar,
            requested: dec!(0.8),
            available: dec!(0.63),
        }
    );
    assert_eq!(
        router.balances(),
        vec![
            (AccountKind::CoinJar, dec!(0.63)),
            (AccountKind::Bank, dec!(1528.57)),
            (AccountKind::Vault, dec!(5602473)),
        ]
    );
}

#[test]
fn test_reference_script_routing() {
    let mut router = AccountRouter::with_standard_accounts();
    let expected = [
        (dec!(0.5), AccountKind::CoinJar, "Your coin jar has $0.5 in coins"),
        (dec!(52.45), AccountKind::Bank, "Your bank account has $52.45 in cash"),
        (dec!(1476.12), AccountKind::Bank, "Your bank account has $1528.57 in cash"),
        (dec!(0.25), AccountKind::CoinJar, "Your coin jar has $0.75 in coins"),
        (dec!(2451234), AccountKind::Vault, "Your vault has $2451234 in gold"),
        (dec!(3151239), AccountKind::Vault, "Your vault has $5602473 in gold"),
    ];

    for (amount, kind, line) in expected {
        let receipt = router.deposit(amount).unwrap();
        assert_eq!(receipt.account, kind);
        assert_eq!(receipt.rendered, line);
    }

    let receipt = router.withdraw(dec!(0.12)).unwrap();
    assert_eq!(receipt.operation, Operation::Withdraw);
    assert_eq!(receipt.rendered, "Your coin jar has $0.63 in coins");
}

#[test]
fn test_vault_overflow_stops_script() {
    let ledger = LedgerConfig {
        steps: vec![
            LedgerStep { operation: Operation::Deposit, amount: Decimal::MAX },
            LedgerStep { operation: Operation::Deposit, amount: Decimal::MAX },
            LedgerStep { operation: Operation::Deposit, amount: dec!(0.5) },
        ],
    };
    let mut router = AccountRouter::with_standard_accounts();

    let err = demo::run_ledger(&mut router, &ledger).unwrap_err();
    assert!(matches!(err, DemoError::BalanceOverflow { account: AccountKind::Vault, .. }));
    assert_eq!(router.balances()[0], (AccountKind::CoinJar, Decimal::ZERO));
    assert_eq!(router.balances()[2], (AccountKind::Vault, Decimal::MAX));
}

#[test]
fn test_boundary_amounts() {
    let router = AccountRouter::with_standard_accounts();
    assert_eq!(router.route(dec!(0.99)).unwrap(), AccountKind::CoinJar);
    assert_eq!(router.route(dec!(1.01)).unwrap(), AccountKind::Bank);
    assert_eq!(router.route(dec!(1000000)).unwrap(), AccountKind::Vault);
    assert_eq!(
        router.route(dec!(1)).unwrap_err(),
        DemoError::NoUniqueAccount { amount: dec!(1), matches: 2 }
    );
}

#[test]
fn test_config_script_matches_default() {
    let toml = r#"
[[ledger.steps]]
operation = "deposit"
amount = 0.5

[[ledger.steps]]
operation = "deposit"
amount = 2451234
"#;
    let cfg = AppConfig::from_toml(toml).unwrap();
    let mut router = AccountRouter::with_standard_accounts();
    let receipts = demo::run_ledger(&mut router, &cfg.ledger).unwrap();

    assert_eq!(receipts[0].account, AccountKind::CoinJar);
    assert_eq!(receipts[1].account, AccountKind::Vault);
    assert_eq!(receipts[1].balance_after, dec!(2451234));
    assert_eq!(router.balances()[1], (AccountKind::Bank, Decimal::ZERO));
}
