//! Error types for ledger operations.

use navalha_shared::AppError;
use thiserror::Error;

/// Errors that can occur during payable/receivable operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Description cannot be empty.
    #[error("Description cannot be empty")]
    EmptyDescription,

    /// Amount must be strictly positive.
    #[error("Amount must be positive")]
    AmountNotPositive,

    /// A due date is required.
    #[error("Due date is required")]
    MissingDueDate,

    /// Payment date precedes the record's creation date.
    #[error("Payment date cannot precede the issue date")]
    PaymentBeforeIssue,

    // ========== State Errors ==========
    /// Payable is already paid; no further transition is allowed.
    #[error("Payable is already paid")]
    AlreadyPaid,

    /// Receivable is already fully received; no further transition is allowed.
    #[error("Receivable is already fully received")]
    AlreadyReceived,

    /// Record is canceled; no further transition is allowed.
    #[error("Record is canceled")]
    AlreadyCanceled,
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyDescription => "EMPTY_DESCRIPTION",
            Self::AmountNotPositive => "AMOUNT_NOT_POSITIVE",
            Self::MissingDueDate => "MISSING_DUE_DATE",
            Self::PaymentBeforeIssue => "PAYMENT_BEFORE_ISSUE",
            Self::AlreadyPaid => "ALREADY_PAID",
            Self::AlreadyReceived => "ALREADY_RECEIVED",
            Self::AlreadyCanceled => "ALREADY_CANCELED",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - validation errors
            Self::EmptyDescription
            | Self::AmountNotPositive
            | Self::MissingDueDate
            | Self::PaymentBeforeIssue => 400,

            // 409 Conflict - transition refused from current status
            Self::AlreadyPaid | Self::AlreadyReceived | Self::AlreadyCanceled => 409,
        }
    }

    /// Returns true if the error is a state conflict rather than bad input.
    ///
    /// Callers use this to decide between an idempotent no-op and a hard
    /// failure.
    #[must_use]
    pub fn is_state_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadyPaid | Self::AlreadyReceived | Self::AlreadyCanceled
        )
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        if err.is_state_conflict() {
            Self::Conflict(err.to_string())
        } else {
            Self::Validation(err.to_string())
        }
    }
}
