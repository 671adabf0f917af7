//! Dispatch patterns: a cricket scoreboard (observer) and an amount-routed
//! account ledger (strategy).
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod scoreboard;
pub mod accounts;
pub mod demo;
