//! Gateway-vs-ledger record reconciliation.
//!
//! The matcher compares the read-only feed of external payment-gateway
//! records for a period against the internal ledger view of the same
//! period, classifies every record, auto-fixes the safe gaps, and leaves
//! everything ambiguous for human review.

pub mod matcher;
pub mod types;


pub use matcher::ReconciliationService;
pub use types::{
    GatewayRecord, GatewayStatus, LedgerRecord, LedgerRecordStatus, MatchOutcome,
    ReconciliationAction, ReconciliationReport, ReconciliationRun, RecordDetail, Resolution,
};
