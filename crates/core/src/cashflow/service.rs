//! Cash-flow projection service.

use chrono::{DateTime, NaiveDate, Utc};
use navalha_shared::types::{Money, TenantId};

use super::types::DailyCashFlow;
use crate::ledger::{Payable, Receivable};

/// Derives daily cash-flow rows from ledger snapshots.
///
/// Pure aggregation over caller-supplied listings; the storage collaborator
/// deduplicates rows by (tenant, date) on save.
pub struct CashFlowService;

impl CashFlowService {
    /// Builds the cash-flow row for one day.
    ///
    /// - confirmed receipts: receivables fully received on `date`
    /// - projected receipts: open receivables due on `date`, by open amount
    /// - confirmed payments: payables paid on `date`
    /// - projected payments: open payables due on `date`
    ///
    /// The opening balance comes from `prior_day`'s closing balance, or
    /// zero for the first row of a tenant's history.
    #[must_use]
    pub fn project_day(
        tenant_id: TenantId,
        date: NaiveDate,
        receivables: &[Receivable],
        payables: &[Payable],
        prior_day: Option<&DailyCashFlow>,
        processed_at: DateTime<Utc>,
    ) -> DailyCashFlow {
        let opening = prior_day.map_or(Money::ZERO, |prior| prior.closing_balance);
        let mut row = DailyCashFlow::new(tenant_id, date, opening, processed_at);

        for receivable in receivables {
            if receivable.receipt_date == Some(date) {
                row.add_confirmed_in(receivable.amount_paid);
            } else if receivable.status.is_open() && receivable.due_date == date {
                row.add_projected_in(receivable.amount_open);
            }
        }

        for payable in payables {
            if payable.payment_date == Some(date) {
                row.add_paid_out(payable.amount);
            } else if payable.status.is_open() && payable.due_date == date {
                row.add_projected_out(payable.amount);
            }
        }

        tracing::debug!(
            tenant = %tenant_id,
            %date,
            closing = %row.closing_balance,
            "daily cash flow projected"
        );
        row
    }

    /// Rebuilds a contiguous range of days, chaining each opening balance
    /// to the previous closing balance.
    #[must_use]
    pub fn project_range(
        tenant_id: TenantId,
        start: NaiveDate,
        end: NaiveDate,
        receivables: &[Receivable],
        payables: &[Payable],
        prior_day: Option<&DailyCashFlow>,
        processed_at: DateTime<Utc>,
    ) -> Vec<DailyCashFlow> {
        let mut rows: Vec<DailyCashFlow> = Vec::new();
        let mut date = start;
        while date <= end {
            let prior = rows.last().or(prior_day);
            let row = Self::project_day(
                tenant_id,
                date,
                receivables,
                payables,
                prior,
                processed_at,
            );
            rows.push(row);
            let Some(next) = date.succ_opt() else { break };
            date = next;
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::ledger::types::{
        CreatePayableInput, CreateReceivableInput, PayableCategory, ReceivableOrigin,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> DateTime<Utc> {
        date(2025, 3, 10).and_hms_opt(23, 0, 0).unwrap().and_utc()
    }

    fn make_receivable(amount: Money, due: NaiveDate) -> Receivable {
        Receivable::create(
            CreateReceivableInput {
                tenant_id: TenantId::new(),
                origin: ReceivableOrigin::ServiceSale,
                description: "Servico".to_string(),
                amount,
                due_date: Some(due),
                notes: None,
            },
            now(),
        )
        .unwrap()
    }

    fn make_payable(amount: Money, due: NaiveDate) -> Payable {
        Payable::create(
            CreatePayableInput {
                tenant_id: TenantId::new(),
                description: "Fornecedor".to_string(),
                category: PayableCategory::Supplies,
                supplier: "Distribuidora".to_string(),
                amount,
                due_date: Some(due),
                notes: None,
            },
            now(),
        )
        .unwrap()
    }

    #[test]
    fn test_project_day_buckets() {
        let tenant = TenantId::new();
        let day = date(2025, 3, 10);

        let mut received = make_receivable(Money::new(dec!(120.00)), day);
        received.mark_received(day).unwrap();
        let due_today = make_receivable(Money::new(dec!(45.00)), day);
        let due_later = make_receivable(Money::new(dec!(300.00)), date(2025, 3, 20));

        let mut paid = make_payable(Money::new(dec!(80.00)), day);
        paid.mark_paid(day, None).unwrap();
        let owed_today = make_payable(Money::new(dec!(25.00)), day);

        let row = CashFlowService::project_day(
            tenant,
            day,
            &[received, due_today, due_later],
            &[paid, owed_today],
            None,
            now(),
        );

        assert_eq!(row.opening_balance, Money::ZERO);
        assert_eq!(row.confirmed_in, Money::new(dec!(120.00)));
        assert_eq!(row.projected_in, Money::new(dec!(45.00)));
        assert_eq!(row.paid_out, Money::new(dec!(80.00)));
        assert_eq!(row.projected_out, Money::new(dec!(25.00)));
        // 0 + 120 + 45 - 80 - 25
        assert_eq!(row.closing_balance, Money::new(dec!(60.00)));
    }

    #[test]
    fn test_opening_carried_from_prior_day() {
        let tenant = TenantId::new();
        let prior = {
            let mut row = DailyCashFlow::new(
                tenant,
                date(2025, 3, 9),
                Money::new(dec!(10.00)),
                now(),
            );
            row.add_confirmed_in(Money::new(dec!(40.00)));
            row
        };

        let row = CashFlowService::project_day(
            tenant,
            date(2025, 3, 10),
            &[],
            &[],
            Some(&prior),
            now(),
        );
        assert_eq!(row.opening_balance, Money::new(dec!(50.00)));
        assert_eq!(row.closing_balance, Money::new(dec!(50.00)));
    }

    #[test]
    fn test_canceled_records_are_ignored() {
        let tenant = TenantId::new();
        let day = date(2025, 3, 10);

        let mut canceled_receivable = make_receivable(Money::new(dec!(45.00)), day);
        canceled_receivable.cancel().unwrap();
        let mut canceled_payable = make_payable(Money::new(dec!(25.00)), day);
        canceled_payable.cancel().unwrap();

        let row = CashFlowService::project_day(
            tenant,
            day,
            &[canceled_receivable],
            &[canceled_payable],
            None,
            now(),
        );
        assert_eq!(row.closing_balance, Money::ZERO);
    }

    #[test]
    fn test_project_range_chains_closing_balances() {
        let tenant = TenantId::new();
        let mut received = make_receivable(Money::new(dec!(100.00)), date(2025, 3, 10));
        received.mark_received(date(2025, 3, 10)).unwrap();
        let owed = make_payable(Money::new(dec!(30.00)), date(2025, 3, 11));

        let rows = CashFlowService::project_range(
            tenant,
            date(2025, 3, 10),
            date(2025, 3, 12),
            &[received],
            &[owed],
            None,
            now(),
        );

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].closing_balance, Money::new(dec!(100.00)));
        assert_eq!(rows[1].opening_balance, Money::new(dec!(100.00)));
        assert_eq!(rows[1].closing_balance, Money::new(dec!(70.00)));
        assert_eq!(rows[2].opening_balance, Money::new(dec!(70.00)));
        assert_eq!(rows[2].closing_balance, Money::new(dec!(70.00)));
    }

    #[test]
    fn test_overdue_receivable_projects_on_due_date() {
        let tenant = TenantId::new();
        let day = date(2025, 3, 10);
        let mut overdue = make_receivable(Money::new(dec!(50.00)), day);
        overdue.check_overdue(date(2025, 3, 12));

        let row = CashFlowService::project_day(tenant, day, &[overdue], &[], None, now());
        assert_eq!(row.projected_in, Money::new(dec!(50.00)));
    }
}
