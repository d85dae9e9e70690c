//! Core domain types and logic.

pub mod security;
pub mod catalog;
pub mod trade;
pub mod ledger;
pub mod metrics;
pub mod market;
pub mod error;
