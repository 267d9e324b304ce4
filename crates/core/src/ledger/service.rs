//! Ledger service for overdue sweeps and period summaries.
//!
//! The service contains pure logic over caller-supplied slices; listing and
//! persistence belong to the storage collaborator.

use chrono::NaiveDate;

use super::payable::Payable;
use super::receivable::Receivable;
use super::types::{PayableStatus, PayableSummary, ReceivableStatus, ReceivableSummary};

/// Stateless ledger operations over caller-supplied records.
pub struct LedgerService;

impl LedgerService {
    /// Re-derives the OVERDUE status across a batch of payables.
    ///
    /// Returns how many records flipped to OVERDUE.
    pub fn refresh_payables_overdue(payables: &mut [Payable], today: NaiveDate) -> usize {
        let mut flipped = 0;
        for payable in payables.iter_mut() {
            let before = payable.status;
            payable.check_overdue(today);
            if before != payable.status {
                flipped += 1;
            }
        }
        flipped
    }

    /// Re-derives the OVERDUE status across a batch of receivables.
    ///
    /// Returns how many records flipped to OVERDUE.
    pub fn refresh_receivables_overdue(receivables: &mut [Receivable], today: NaiveDate) -> usize {
        let mut flipped = 0;
        for receivable in receivables.iter_mut() {
            let before = receivable.status;
            receivable.check_overdue(today);
            if before != receivable.status {
                flipped += 1;
            }
        }
        flipped
    }

    /// Rolls a batch of payables up into per-status totals.
    #[must_use]
    pub fn summarize_payables(payables: &[Payable]) -> PayableSummary {
        let mut summary = PayableSummary::default();
        for payable in payables {
            match payable.status {
                PayableStatus::Pending => summary.pending.add(payable.amount),
                PayableStatus::Overdue => summary.overdue.add(payable.amount),
                PayableStatus::Paid => summary.paid.add(payable.amount),
                PayableStatus::Canceled => summary.canceled.add(payable.amount),
            }
        }
        summary.total_open = summary.pending.amount + summary.overdue.amount;
        summary
    }

    /// Rolls a batch of receivables up into per-status totals.
    ///
    /// Open buckets count what is still collectible (`amount_open`); the
    /// received bucket counts what actually came in (`amount_paid`).
    #[must_use]
    pub fn summarize_receivables(receivables: &[Receivable]) -> ReceivableSummary {
        let mut summary = ReceivableSummary::default();
        for receivable in receivables {
            match receivable.status {
                ReceivableStatus::Pending => summary.pending.add(receivable.amount_open),
                ReceivableStatus::Overdue => summary.overdue.add(receivable.amount_open),
                ReceivableStatus::Received => summary.received.add(receivable.amount_paid),
                ReceivableStatus::Canceled => summary.canceled.add(receivable.amount),
            }
        }
        summary.total_open = summary.pending.amount + summary.overdue.amount;
        summary
    }
}
