//! Settlement domain types.

use chrono::NaiveDate;
use navalha_shared::types::{Money, Percentage, RevenueId, SettlementId, TenantId};
use serde::{Deserialize, Serialize};

use super::calendar::add_business_days;
use super::error::SettlementError;

/// Settlement lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementStatus {
    /// Funds are expected but not yet available.
    Pending,
    /// Funds were made available by the bank (immutable).
    Settled,
    /// Settlement was canceled, e.g. after a refund (immutable).
    Canceled,
}

impl SettlementStatus {
    /// Returns true if no further transition is allowed.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Settled | Self::Canceled)
    }
}

/// Input for creating a new bank settlement.
#[derive(Debug, Clone)]
pub struct CreateSettlementInput {
    /// Tenant the settlement belongs to.
    pub tenant_id: TenantId,
    /// The revenue record that produced this settlement.
    pub revenue_ref: RevenueId,
    /// Date of the card/gateway transaction.
    pub transaction_date: NaiveDate,
    /// Gross amount charged to the customer.
    pub gross_amount: Money,
    /// Acquirer percentage fee.
    pub fee_percent: Percentage,
    /// Acquirer fixed fee per transaction.
    pub fee_fixed: Money,
    /// D+ business-day offset until funds are available.
    pub offset_days: u32,
}

/// An expected transfer of funds from an acquirer/gateway.
///
/// `settlement_date` is derived from the transaction date and the D+ offset
/// at creation time and never recomputed afterwards; `settled_date` records
/// when the bank actually made the funds available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankSettlement {
    /// Unique identifier.
    pub id: SettlementId,
    /// Tenant the settlement belongs to.
    pub tenant_id: TenantId,
    /// The revenue record that produced this settlement.
    pub revenue_ref: RevenueId,
    /// Date of the card/gateway transaction.
    pub transaction_date: NaiveDate,
    /// Expected availability date (transaction date + D+ offset).
    pub settlement_date: NaiveDate,
    /// Actual availability date, once settled.
    pub settled_date: Option<NaiveDate>,
    /// Gross amount charged to the customer.
    pub gross_amount: Money,
    /// Acquirer percentage fee.
    pub fee_percent: Percentage,
    /// Acquirer fixed fee per transaction.
    pub fee_fixed: Money,
    /// Gross minus percentage and fixed fees.
    pub net_amount: Money,
    /// D+ business-day offset used to derive `settlement_date`.
    pub offset_days: u32,
    /// Current lifecycle status.
    pub status: SettlementStatus,
}

impl BankSettlement {
    /// Creates a settlement, deriving the settlement date and net amount.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the gross amount is not positive,
    /// the fixed fee is negative, or the combined fees exceed the gross.
    pub fn create(input: CreateSettlementInput) -> Result<Self, SettlementError> {
        if !input.gross_amount.is_positive() {
            return Err(SettlementError::GrossNotPositive);
        }
        if input.fee_fixed.is_negative() {
            return Err(SettlementError::NegativeFixedFee);
        }

        let percent_fee = input.gross_amount.percentage_of(input.fee_percent);
        let fees = percent_fee + input.fee_fixed;
        let net_amount = input.gross_amount - fees;
        if net_amount.is_negative() {
            return Err(SettlementError::FeesExceedGross {
                gross: input.gross_amount,
                fees,
            });
        }

        let settlement_date = add_business_days(input.transaction_date, input.offset_days);

        Ok(Self {
            id: SettlementId::new(),
            tenant_id: input.tenant_id,
            revenue_ref: input.revenue_ref,
            transaction_date: input.transaction_date,
            settlement_date,
            settled_date: None,
            gross_amount: input.gross_amount,
            fee_percent: input.fee_percent,
            fee_fixed: input.fee_fixed,
            net_amount,
            offset_days: input.offset_days,
            status: SettlementStatus::Pending,
        })
    }

    /// Marks the settlement as settled on the given date.
    ///
    /// # Errors
    ///
    /// Returns a state error when the settlement is already settled or
    /// canceled, and a validation error when the date precedes the
    /// transaction date.
    pub fn mark_settled(&mut self, settled_date: NaiveDate) -> Result<(), SettlementError> {
        match self.status {
            SettlementStatus::Settled => return Err(SettlementError::AlreadySettled),
            SettlementStatus::Canceled => return Err(SettlementError::AlreadyCanceled),
            SettlementStatus::Pending => {}
        }
        if settled_date < self.transaction_date {
            return Err(SettlementError::SettledBeforeTransaction {
                settled: settled_date,
                transaction: self.transaction_date,
            });
        }

        self.settled_date = Some(settled_date);
        self.status = SettlementStatus::Settled;
        Ok(())
    }

    /// Cancels a pending settlement.
    ///
    /// # Errors
    ///
    /// Returns a state error when the settlement is already terminal.
    pub fn cancel(&mut self) -> Result<(), SettlementError> {
        match self.status {
            SettlementStatus::Settled => Err(SettlementError::AlreadySettled),
            SettlementStatus::Canceled => Err(SettlementError::AlreadyCanceled),
            SettlementStatus::Pending => {
                self.status = SettlementStatus::Canceled;
                Ok(())
            }
        }
    }

    /// Returns true if funds are expected but not yet available on `date`.
    #[must_use]
    pub fn is_projected_for(&self, date: NaiveDate) -> bool {
        self.status == SettlementStatus::Pending && self.settlement_date == date
    }
}
