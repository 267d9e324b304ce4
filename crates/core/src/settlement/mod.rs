//! Bank settlement (D+) timing and fee math.
//!
//! Card acquirers and payment gateways make funds available D+n business
//! days after the transaction. This module computes the settlement date,
//! derives the net amount after fees, and tracks the settlement lifecycle.

pub mod calendar;
pub mod error;
pub mod types;

#[cfg(test)]
mod calendar_props;

pub use calendar::{add_business_days, is_business_day};
pub use error::SettlementError;
pub use types::{BankSettlement, CreateSettlementInput, SettlementStatus};
