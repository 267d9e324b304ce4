//! Accounts payable entity and its state machine.

use chrono::{DateTime, NaiveDate, Utc};
use navalha_shared::types::{Money, PayableId, TenantId};
use serde::{Deserialize, Serialize};

use super::error::LedgerError;
use super::types::{CreatePayableInput, PayableCategory, PayableStatus};

/// An obligation to pay a supplier by a due date.
///
/// Transitions: PENDING -> PAID, {PENDING, OVERDUE} -> CANCELED, and the
/// automatic PENDING -> OVERDUE derivation in [`Payable::check_overdue`].
/// PAID and CANCELED are terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payable {
    /// Unique identifier.
    pub id: PayableId,
    /// Tenant the payable belongs to.
    pub tenant_id: TenantId,
    /// What the obligation is for.
    pub description: String,
    /// Expense category.
    pub category: PayableCategory,
    /// Supplier or beneficiary name.
    pub supplier: String,
    /// Amount owed.
    pub amount: Money,
    /// When payment is due.
    pub due_date: NaiveDate,
    /// When payment actually happened.
    pub payment_date: Option<NaiveDate>,
    /// Current lifecycle status.
    pub status: PayableStatus,
    /// Link to the payment receipt, once paid.
    pub receipt_url: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Payable {
    /// Creates a new pending payable.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty description, a non-positive
    /// amount, or a missing due date.
    pub fn create(input: CreatePayableInput, now: DateTime<Utc>) -> Result<Self, LedgerError> {
        if input.description.trim().is_empty() {
            return Err(LedgerError::EmptyDescription);
        }
        if !input.amount.is_positive() {
            return Err(LedgerError::AmountNotPositive);
        }
        let due_date = input.due_date.ok_or(LedgerError::MissingDueDate)?;

        Ok(Self {
            id: PayableId::new(),
            tenant_id: input.tenant_id,
            description: input.description,
            category: input.category,
            supplier: input.supplier,
            amount: input.amount,
            due_date,
            payment_date: None,
            status: PayableStatus::Pending,
            receipt_url: None,
            notes: input.notes,
            created_at: now,
        })
    }

    /// Marks the payable as paid.
    ///
    /// Allowed from PENDING and OVERDUE.
    ///
    /// # Errors
    ///
    /// Returns a state error when the payable is already paid or canceled.
    pub fn mark_paid(
        &mut self,
        payment_date: NaiveDate,
        receipt_url: Option<String>,
    ) -> Result<(), LedgerError> {
        match self.status {
            PayableStatus::Paid => return Err(LedgerError::AlreadyPaid),
            PayableStatus::Canceled => return Err(LedgerError::AlreadyCanceled),
            PayableStatus::Pending | PayableStatus::Overdue => {}
        }

        self.payment_date = Some(payment_date);
        self.receipt_url = receipt_url;
        self.status = PayableStatus::Paid;
        Ok(())
    }

    /// Cancels the payable.
    ///
    /// Allowed from PENDING and OVERDUE.
    ///
    /// # Errors
    ///
    /// Returns a state error when the payable is already paid or canceled.
    pub fn cancel(&mut self) -> Result<(), LedgerError> {
        match self.status {
            PayableStatus::Paid => Err(LedgerError::AlreadyPaid),
            PayableStatus::Canceled => Err(LedgerError::AlreadyCanceled),
            PayableStatus::Pending | PayableStatus::Overdue => {
                self.status = PayableStatus::Canceled;
                Ok(())
            }
        }
    }

    /// Re-derives the OVERDUE status from the injected "today".
    ///
    /// Idempotent and a no-op unless the payable is still PENDING.
    pub fn check_overdue(&mut self, today: NaiveDate) {
        if self.status == PayableStatus::Pending && today > self.due_date {
            self.status = PayableStatus::Overdue;
        }
    }
}
