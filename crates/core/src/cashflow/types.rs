//! Cash-flow domain types.

use chrono::{DateTime, NaiveDate, Utc};
use navalha_shared::types::{Money, TenantId};
use serde::{Deserialize, Serialize};

/// One day of confirmed and projected cash movements.
///
/// `closing_balance` is derived, never written directly:
///
/// `closing = opening + confirmed_in + projected_in - paid_out - projected_out`
///
/// Every mutator triggers a full recompute of the derived field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyCashFlow {
    /// Tenant the row belongs to.
    pub tenant_id: TenantId,
    /// Calendar day being rolled up.
    pub date: NaiveDate,
    /// Prior day's closing balance.
    pub opening_balance: Money,
    /// Receipts confirmed on this day.
    pub confirmed_in: Money,
    /// Receipts still expected for this day.
    pub projected_in: Money,
    /// Payments made on this day.
    pub paid_out: Money,
    /// Payments still due on this day.
    pub projected_out: Money,
    /// Derived closing balance.
    pub closing_balance: Money,
    /// When this row was computed.
    pub processed_at: DateTime<Utc>,
}

impl DailyCashFlow {
    /// Creates an empty row for a day, carrying the opening balance.
    #[must_use]
    pub fn new(
        tenant_id: TenantId,
        date: NaiveDate,
        opening_balance: Money,
        processed_at: DateTime<Utc>,
    ) -> Self {
        let mut row = Self {
            tenant_id,
            date,
            opening_balance,
            confirmed_in: Money::ZERO,
            projected_in: Money::ZERO,
            paid_out: Money::ZERO,
            projected_out: Money::ZERO,
            closing_balance: Money::ZERO,
            processed_at,
        };
        row.recompute();
        row
    }

    /// Adds a confirmed receipt and recomputes.
    pub fn add_confirmed_in(&mut self, amount: Money) {
        self.confirmed_in += amount;
        self.recompute();
    }

    /// Adds a projected receipt and recomputes.
    pub fn add_projected_in(&mut self, amount: Money) {
        self.projected_in += amount;
        self.recompute();
    }

    /// Adds a confirmed payment and recomputes.
    pub fn add_paid_out(&mut self, amount: Money) {
        self.paid_out += amount;
        self.recompute();
    }

    /// Adds a projected payment and recomputes.
    pub fn add_projected_out(&mut self, amount: Money) {
        self.projected_out += amount;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.closing_balance = self.opening_balance + self.confirmed_in + self.projected_in
            - self.paid_out
            - self.projected_out;
    }
}
