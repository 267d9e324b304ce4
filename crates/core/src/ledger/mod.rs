//! Payable/receivable obligations and their state machines.
//!
//! This module implements the accounts ledger:
//! - Payables (obligations to pay a supplier by a due date)
//! - Receivables (rights to collect, with partial-payment accumulation)
//! - Automatic overdue derivation from an injected "today"
//! - Period summaries consumed by dashboards and the aggregators
//! - Error types for ledger operations

pub mod error;
pub mod payable;
pub mod receivable;
pub mod service;
pub mod types;

#[cfg(test)]
mod receivable_props;

pub use error::LedgerError;
pub use payable::Payable;
pub use receivable::Receivable;
pub use service::LedgerService;
pub use types::{
    CreatePayableInput, CreateReceivableInput, PayableCategory, PayableStatus, PayableSummary,
    ReceivableOrigin, ReceivableStatus, ReceivableSummary, StatusTotals,
};
