//! Error types for bank-settlement operations.

use chrono::NaiveDate;
use navalha_shared::types::Money;
use navalha_shared::AppError;
use thiserror::Error;

/// Errors that can occur during settlement operations.
#[derive(Debug, Error)]
pub enum SettlementError {
    // ========== Validation Errors ==========
    /// Gross amount must be strictly positive.
    #[error("Gross amount must be positive")]
    GrossNotPositive,

    /// Fixed fee cannot be negative.
    #[error("Fixed fee cannot be negative")]
    NegativeFixedFee,

    /// Combined fees exceed the gross amount.
    #[error("Fees {fees} exceed gross amount {gross}")]
    FeesExceedGross {
        /// The gross transaction amount.
        gross: Money,
        /// The combined percentage and fixed fees.
        fees: Money,
    },

    /// Settled date precedes the transaction date.
    #[error("Settled date {settled} precedes transaction date {transaction}")]
    SettledBeforeTransaction {
        /// The date funds were reported available.
        settled: NaiveDate,
        /// The original transaction date.
        transaction: NaiveDate,
    },

    // ========== State Errors ==========
    /// Settlement has already been settled.
    #[error("Settlement is already settled")]
    AlreadySettled,

    /// Settlement has been canceled.
    #[error("Settlement is canceled")]
    AlreadyCanceled,
}

impl SettlementError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::GrossNotPositive => "GROSS_NOT_POSITIVE",
            Self::NegativeFixedFee => "NEGATIVE_FIXED_FEE",
            Self::FeesExceedGross { .. } => "FEES_EXCEED_GROSS",
            Self::SettledBeforeTransaction { .. } => "SETTLED_BEFORE_TRANSACTION",
            Self::AlreadySettled => "ALREADY_SETTLED",
            Self::AlreadyCanceled => "ALREADY_CANCELED",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::GrossNotPositive
            | Self::NegativeFixedFee
            | Self::FeesExceedGross { .. }
            | Self::SettledBeforeTransaction { .. } => 400,
            Self::AlreadySettled | Self::AlreadyCanceled => 409,
        }
    }
}

impl From<SettlementError> for AppError {
    fn from(err: SettlementError) -> Self {
        match err {
            SettlementError::AlreadySettled | SettlementError::AlreadyCanceled => {
                Self::Conflict(err.to_string())
            }
            _ => Self::Validation(err.to_string()),
        }
    }
}
