//! Error types for cash-register operations.

use navalha_shared::types::Money;
use navalha_shared::AppError;
use thiserror::Error;

/// Minimum description length for withdrawals and reinforcements.
pub const MIN_MOVEMENT_DESCRIPTION: usize = 5;

/// Errors that can occur during cash-register operations.
#[derive(Debug, Error)]
pub enum RegisterError {
    // ========== Validation Errors ==========
    /// Operation amount must be strictly positive.
    #[error("Operation amount must be positive")]
    AmountNotPositive,

    /// Initial balance cannot be negative.
    #[error("Initial balance cannot be negative")]
    NegativeInitialBalance,

    /// Description cannot be empty.
    #[error("Description cannot be empty")]
    EmptyDescription,

    /// Withdrawals and reinforcements need a meaningful description.
    #[error("Description must have at least {} characters", MIN_MOVEMENT_DESCRIPTION)]
    DescriptionTooShort,

    // ========== State Errors ==========
    /// The session is closed; no further operations are accepted.
    #[error("Session is closed")]
    SessionClosed,

    // ========== Tolerance Errors ==========
    /// Closing divergence exceeds the tolerance and needs a justification.
    #[error("Divergence {divergence} exceeds tolerance {tolerance}; justification required")]
    JustificationRequired {
        /// The signed divergence (real minus expected).
        divergence: Money,
        /// The configured tolerance.
        tolerance: Money,
    },
}

impl RegisterError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AmountNotPositive => "AMOUNT_NOT_POSITIVE",
            Self::NegativeInitialBalance => "NEGATIVE_INITIAL_BALANCE",
            Self::EmptyDescription => "EMPTY_DESCRIPTION",
            Self::DescriptionTooShort => "DESCRIPTION_TOO_SHORT",
            Self::SessionClosed => "SESSION_CLOSED",
            Self::JustificationRequired { .. } => "JUSTIFICATION_REQUIRED",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::AmountNotPositive
            | Self::NegativeInitialBalance
            | Self::EmptyDescription
            | Self::DescriptionTooShort => 400,
            Self::SessionClosed => 409,
            Self::JustificationRequired { .. } => 422,
        }
    }
}

impl From<RegisterError> for AppError {
    fn from(err: RegisterError) -> Self {
        match err {
            RegisterError::SessionClosed => Self::Conflict(err.to_string()),
            RegisterError::JustificationRequired { .. } => Self::BusinessRule(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
