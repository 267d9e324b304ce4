//! Core business logic for Navalha.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `ledger` - Payable/receivable obligations and their state machines
//! - `settlement` - Bank settlement (D+) timing and fee math
//! - `register` - Daily cash-register sessions with divergence tolerance
//! - `cashflow` - Daily cash-flow rollups
//! - `statement` - Monthly income-statement rollups
//! - `reconciliation` - Gateway-vs-ledger record matching

pub mod cashflow;
pub mod ledger;
pub mod reconciliation;
pub mod register;
pub mod settlement;
pub mod statement;
