//! Accounts receivable entity and its state machine.

use chrono::{DateTime, NaiveDate, Utc};
use navalha_shared::types::{Money, ReceivableId, TenantId};
use serde::{Deserialize, Serialize};

use super::error::LedgerError;
use super::types::{CreateReceivableInput, ReceivableOrigin, ReceivableStatus};

/// A right to collect a monetary amount by a due date.
///
/// Receipt may arrive in one full payment or as repeated partial payments
/// that accumulate in `amount_paid`. The invariant
/// `amount_paid + amount_open == amount` holds at all times; an overshoot
/// clamps `amount_open` to zero and flips the status to RECEIVED.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receivable {
    /// Unique identifier.
    pub id: ReceivableId,
    /// Tenant the receivable belongs to.
    pub tenant_id: TenantId,
    /// Business origin.
    pub origin: ReceivableOrigin,
    /// Description of the right to collect.
    pub description: String,
    /// Total amount to collect.
    pub amount: Money,
    /// Amount received so far.
    pub amount_paid: Money,
    /// Amount still open.
    pub amount_open: Money,
    /// When receipt is due.
    pub due_date: NaiveDate,
    /// When the amount was fully received.
    pub receipt_date: Option<NaiveDate>,
    /// Current lifecycle status.
    pub status: ReceivableStatus,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Receivable {
    /// Creates a new pending receivable.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty description, a non-positive
    /// amount, or a missing due date.
    pub fn create(input: CreateReceivableInput, now: DateTime<Utc>) -> Result<Self, LedgerError> {
        if input.description.trim().is_empty() {
            return Err(LedgerError::EmptyDescription);
        }
        if !input.amount.is_positive() {
            return Err(LedgerError::AmountNotPositive);
        }
        let due_date = input.due_date.ok_or(LedgerError::MissingDueDate)?;

        Ok(Self {
            id: ReceivableId::new(),
            tenant_id: input.tenant_id,
            origin: input.origin,
            description: input.description,
            amount: input.amount,
            amount_paid: Money::ZERO,
            amount_open: input.amount,
            due_date,
            receipt_date: None,
            status: ReceivableStatus::Pending,
            notes: input.notes,
            created_at: now,
        })
    }

    /// Marks the receivable as fully received in one step.
    ///
    /// # Errors
    ///
    /// Returns a state error when already received or canceled.
    pub fn mark_received(&mut self, receipt_date: NaiveDate) -> Result<(), LedgerError> {
        self.ensure_open()?;

        self.amount_paid = self.amount;
        self.amount_open = Money::ZERO;
        self.receipt_date = Some(receipt_date);
        self.status = ReceivableStatus::Received;
        Ok(())
    }

    /// Registers a partial payment.
    ///
    /// Accumulates into `amount_paid`; when the open amount reaches zero
    /// (or would go below it), it clamps to zero and the receivable flips
    /// to RECEIVED with the given date as the receipt date.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive amount and a state
    /// error when the receivable is already fully settled or canceled.
    pub fn register_partial_payment(
        &mut self,
        amount: Money,
        payment_date: NaiveDate,
    ) -> Result<(), LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::AmountNotPositive);
        }
        self.ensure_open()?;

        let remaining = self.amount_open - amount;
        if remaining.is_positive() {
            self.amount_paid += amount;
            self.amount_open = remaining;
        } else {
            // Overshoot clamps: we never record more than the face amount.
            self.amount_paid = self.amount;
            self.amount_open = Money::ZERO;
            self.receipt_date = Some(payment_date);
            self.status = ReceivableStatus::Received;
        }
        Ok(())
    }

    /// Cancels the receivable. Blocked once fully received.
    ///
    /// # Errors
    ///
    /// Returns a state error when already received or canceled.
    pub fn cancel(&mut self) -> Result<(), LedgerError> {
        self.ensure_open()?;
        self.status = ReceivableStatus::Canceled;
        Ok(())
    }

    /// Re-derives the OVERDUE status from the injected "today".
    ///
    /// Idempotent and a no-op unless the receivable is still PENDING.
    pub fn check_overdue(&mut self, today: NaiveDate) {
        if self.status == ReceivableStatus::Pending && today > self.due_date {
            self.status = ReceivableStatus::Overdue;
        }
    }

    fn ensure_open(&self) -> Result<(), LedgerError> {
        match self.status {
            ReceivableStatus::Received => Err(LedgerError::AlreadyReceived),
            ReceivableStatus::Canceled => Err(LedgerError::AlreadyCanceled),
            ReceivableStatus::Pending | ReceivableStatus::Overdue => Ok(()),
        }
    }
}
