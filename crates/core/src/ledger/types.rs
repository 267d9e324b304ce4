//! Ledger domain types.

use chrono::NaiveDate;
use navalha_shared::types::{Money, TenantId};
use serde::{Deserialize, Serialize};

/// Payable lifecycle status.
///
/// PENDING and OVERDUE are live states; PAID and CANCELED are terminal and
/// refuse any further transition. OVERDUE is re-derived whenever the record
/// is read, never stored as a user decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayableStatus {
    /// Awaiting payment, due date not yet passed.
    Pending,
    /// Awaiting payment, past the due date.
    Overdue,
    /// Paid (immutable).
    Paid,
    /// Canceled (immutable).
    Canceled,
}

impl PayableStatus {
    /// Returns true if no further transition is allowed.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid | Self::Canceled)
    }

    /// Returns true if the obligation still awaits payment.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::Overdue)
    }
}

/// Receivable lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceivableStatus {
    /// Awaiting receipt, due date not yet passed.
    Pending,
    /// Awaiting receipt, past the due date.
    Overdue,
    /// Fully received (immutable).
    Received,
    /// Canceled (immutable; blocked once received).
    Canceled,
}

impl ReceivableStatus {
    /// Returns true if no further transition is allowed.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Received | Self::Canceled)
    }

    /// Returns true if the right to collect is still open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::Overdue)
    }
}

/// Expense category of a payable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayableCategory {
    /// Shop rent.
    Rent,
    /// Consumables and product restocking.
    Supplies,
    /// Fixed staff salaries.
    Salaries,
    /// Barber commissions over services rendered.
    Commissions,
    /// Water, electricity, internet.
    Utilities,
    /// Advertising and promotions.
    Marketing,
    /// Chairs, clippers, furniture.
    Equipment,
    /// Taxes and government fees.
    Taxes,
    /// Anything else.
    Other,
}

impl PayableCategory {
    /// Returns true for categories that scale with revenue rather than time.
    ///
    /// These land in the variable-cost section of the income statement;
    /// everything else is a fixed expense.
    #[must_use]
    pub fn is_variable_cost(&self) -> bool {
        matches!(self, Self::Commissions | Self::Supplies)
    }
}

/// Business origin of a receivable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceivableOrigin {
    /// A haircut or other service sale.
    ServiceSale,
    /// Retail product sale.
    ProductSale,
    /// Prepaid package of services.
    PackageSale,
    /// Net transfer expected from the payment gateway.
    GatewaySettlement,
    /// Anything else.
    Other,
}

/// Input for creating a new payable.
#[derive(Debug, Clone)]
pub struct CreatePayableInput {
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
    /// When payment is due. Required; surfaced as a validation error when
    /// the upstream DTO left it unset.
    pub due_date: Option<NaiveDate>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Input for creating a new receivable.
#[derive(Debug, Clone)]
pub struct CreateReceivableInput {
    /// Tenant the receivable belongs to.
    pub tenant_id: TenantId,
    /// Business origin.
    pub origin: ReceivableOrigin,
    /// Description of the right to collect.
    pub description: String,
    /// Total amount to collect.
    pub amount: Money,
    /// When receipt is due.
    pub due_date: Option<NaiveDate>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Count and amount rolled up for one status bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTotals {
    /// Number of records in the bucket.
    pub count: usize,
    /// Sum of the relevant amounts.
    pub amount: Money,
}

impl StatusTotals {
    pub(crate) fn add(&mut self, amount: Money) {
        self.count += 1;
        self.amount += amount;
    }
}

/// Period rollup of payables by status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayableSummary {
    /// Pending obligations.
    pub pending: StatusTotals,
    /// Overdue obligations.
    pub overdue: StatusTotals,
    /// Paid obligations.
    pub paid: StatusTotals,
    /// Canceled obligations.
    pub canceled: StatusTotals,
    /// Total still owed (pending + overdue).
    pub total_open: Money,
}

/// Period rollup of receivables by status.
///
/// Open buckets roll up `amount_open` (what is still collectible), while
/// the received bucket rolls up what actually came in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReceivableSummary {
    /// Pending rights to collect (by open amount).
    pub pending: StatusTotals,
    /// Overdue rights to collect (by open amount).
    pub overdue: StatusTotals,
    /// Fully received (by paid amount).
    pub received: StatusTotals,
    /// Canceled (by original amount).
    pub canceled: StatusTotals,
    /// Total still collectible (pending + overdue open amounts).
    pub total_open: Money,
}
