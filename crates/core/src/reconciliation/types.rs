//! Reconciliation domain types.

use chrono::{DateTime, NaiveDate, Utc};
use navalha_shared::types::{Money, ReceivableId, RunId, TenantId};
use serde::{Deserialize, Serialize};

/// Status reported by the gateway for an external payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayStatus {
    /// Authorized but not captured yet.
    Pending,
    /// Captured and charged to the customer.
    Paid,
    /// Funds transferred to the merchant.
    Settled,
    /// Charge refused by the issuer.
    Refused,
    /// Charge refunded to the customer.
    Refunded,
}

impl GatewayStatus {
    /// Returns true if the payment represents money the merchant will keep.
    #[must_use]
    pub fn is_collectable(&self) -> bool {
        matches!(self, Self::Paid | Self::Settled)
    }
}

/// One record from the read-only gateway feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayRecord {
    /// The gateway's own payment identifier.
    pub external_id: String,
    /// Gross amount of the payment.
    pub amount: Money,
    /// Status reported by the gateway.
    pub status: GatewayStatus,
    /// Date of the payment.
    pub transaction_date: NaiveDate,
    /// Date funds were (or will be) transferred.
    pub settlement_date: Option<NaiveDate>,
    /// Customer or card descriptor, when the gateway exposes one.
    pub counterparty: Option<String>,
}

/// Internal ledger status of a gateway-originated receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerRecordStatus {
    /// Still awaiting receipt.
    Open,
    /// Fully received.
    Settled,
    /// Canceled internally.
    Canceled,
}

/// The ledger's view of one record in the reconciled period.
///
/// The persistence collaborator flattens receivables into this shape for
/// the matcher; `created_at` drives the deterministic tie-break when
/// several records share a composite key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// The underlying receivable.
    pub id: ReceivableId,
    /// Gateway payment identifier, when the record came from the gateway.
    pub external_ref: Option<String>,
    /// Recorded amount.
    pub amount: Money,
    /// Recorded date.
    pub date: NaiveDate,
    /// Customer descriptor, when known.
    pub counterparty: Option<String>,
    /// Internal status.
    pub status: LedgerRecordStatus,
    /// Creation timestamp, used for earliest-created-first tie-breaks.
    pub created_at: DateTime<Utc>,
}

/// Classification of one reconciled record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Present on both sides with agreeing amount and status.
    Matched,
    /// Present in the gateway feed only.
    MissingInLedger,
    /// Present in the ledger only.
    MissingInGateway,
    /// Present on both sides with mismatched amount or status, or with an
    /// ambiguous candidate set.
    Divergent,
}

/// How a non-matched record was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Nothing to resolve (the record matched).
    NotRequired,
    /// A safe equivalent ledger entry was derived automatically.
    AutoFixed,
    /// Left for human review.
    PendingReview,
}

/// Audit detail for one reconciled record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDetail {
    /// Gateway payment identifier, when the record exists on that side.
    pub external_id: Option<String>,
    /// Ledger record identifier, when the record exists on that side.
    pub ledger_id: Option<ReceivableId>,
    /// Amount reported by the gateway.
    pub gateway_amount: Option<Money>,
    /// Amount recorded in the ledger.
    pub ledger_amount: Option<Money>,
    /// Classification.
    pub outcome: MatchOutcome,
    /// Resolution applied.
    pub resolution: Resolution,
    /// Human-readable context for review.
    pub note: Option<String>,
}

/// A fix the persistence collaborator must apply in its transaction.
///
/// The matcher never touches storage; auto-fixes travel as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum ReconciliationAction {
    /// Create the ledger equivalent of a gateway payment that has none.
    CreateReceivable {
        /// Tenant to create the record for.
        tenant_id: TenantId,
        /// Gateway payment identifier to link the new record to.
        external_ref: String,
        /// Amount of the payment.
        amount: Money,
        /// Date of the payment.
        date: NaiveDate,
        /// Description for the new record.
        description: String,
    },
}

/// Summary of one reconciliation run, persisted for audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationRun {
    /// Unique identifier.
    pub id: RunId,
    /// Tenant the run belongs to.
    pub tenant_id: TenantId,
    /// First day of the reconciled period.
    pub period_start: NaiveDate,
    /// Last day of the reconciled period.
    pub period_end: NaiveDate,
    /// Number of gateway records examined.
    pub total_gateway: usize,
    /// Number of ledger records examined.
    pub total_ledger: usize,
    /// Number of records that did not match cleanly.
    pub divergences: usize,
    /// Number of divergences fixed automatically.
    pub auto_fixed: usize,
    /// Number of divergences left for review.
    pub pending_review: usize,
    /// Per-record audit details.
    pub details: Vec<RecordDetail>,
    /// When the run executed.
    pub created_at: DateTime<Utc>,
}

/// Result of a reconciliation run: the audit summary plus the fixes the
/// caller must apply.
#[derive(Debug, Clone)]
pub struct ReconciliationReport {
    /// Audit summary.
    pub run: ReconciliationRun,
    /// Fixes to apply inside the caller's transaction.
    pub actions: Vec<ReconciliationAction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_status_collectable() {
        assert!(GatewayStatus::Paid.is_collectable());
        assert!(GatewayStatus::Settled.is_collectable());
        assert!(!GatewayStatus::Pending.is_collectable());
        assert!(!GatewayStatus::Refused.is_collectable());
        assert!(!GatewayStatus::Refunded.is_collectable());
    }
}
