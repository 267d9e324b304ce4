//! Income-statement build service.

use chrono::{DateTime, Utc};
use navalha_shared::types::TenantId;

use super::types::{
    ExpenseCategory, MonthlyIncomeStatement, RevenueCategory, StatementMonth, VariableCostCategory,
};
use crate::ledger::types::{PayableCategory, ReceivableOrigin};
use crate::ledger::{Payable, Receivable};
use crate::settlement::{BankSettlement, SettlementStatus};

/// Derives monthly income statements from ledger snapshots.
///
/// Pure aggregation over caller-supplied listings; the storage collaborator
/// deduplicates statements by (tenant, month) on save.
pub struct StatementService;

impl StatementService {
    /// Builds the income statement for one month.
    ///
    /// Revenue comes from receivables fully received in the month; costs
    /// and expenses from payables paid in the month; card fees from
    /// settlements settled in the month (gross minus net).
    #[must_use]
    pub fn build_month(
        tenant_id: TenantId,
        month: StatementMonth,
        receivables: &[Receivable],
        payables: &[Payable],
        settlements: &[BankSettlement],
        processed_at: DateTime<Utc>,
    ) -> MonthlyIncomeStatement {
        let mut statement = MonthlyIncomeStatement::new(tenant_id, month, processed_at);

        for receivable in receivables {
            let received_in_month = receivable
                .receipt_date
                .is_some_and(|receipt| month.contains(receipt));
            if received_in_month {
                statement.add_revenue(
                    Self::revenue_category(receivable.origin),
                    receivable.amount_paid,
                );
            }
        }

        for payable in payables {
            let paid_in_month = payable
                .payment_date
                .is_some_and(|payment| month.contains(payment));
            if !paid_in_month {
                continue;
            }
            if payable.category.is_variable_cost() {
                statement
                    .add_variable_cost(Self::variable_cost_category(payable.category), payable.amount);
            } else {
                statement.add_expense(Self::expense_category(payable.category), payable.amount);
            }
        }

        for settlement in settlements {
            let settled_in_month = settlement.status == SettlementStatus::Settled
                && settlement
                    .settled_date
                    .is_some_and(|settled| month.contains(settled));
            if settled_in_month {
                let fees = settlement.gross_amount - settlement.net_amount;
                if fees.is_positive() {
                    statement.add_variable_cost(VariableCostCategory::CardFees, fees);
                }
            }
        }

        tracing::debug!(
            tenant = %tenant_id,
            year = month.year,
            month = month.month,
            revenue = %statement.revenue.total,
            net_profit = %statement.net_profit,
            "monthly income statement built"
        );
        statement
    }

    fn revenue_category(origin: ReceivableOrigin) -> RevenueCategory {
        match origin {
            ReceivableOrigin::ServiceSale => RevenueCategory::Services,
            ReceivableOrigin::ProductSale => RevenueCategory::Products,
            ReceivableOrigin::PackageSale => RevenueCategory::Packages,
            ReceivableOrigin::GatewaySettlement | ReceivableOrigin::Other => RevenueCategory::Other,
        }
    }

    fn variable_cost_category(category: PayableCategory) -> VariableCostCategory {
        match category {
            PayableCategory::Commissions => VariableCostCategory::Commissions,
            PayableCategory::Supplies => VariableCostCategory::ProductCosts,
            // Only variable-cost categories reach this mapping
            _ => VariableCostCategory::Other,
        }
    }

    fn expense_category(category: PayableCategory) -> ExpenseCategory {
        match category {
            PayableCategory::Rent => ExpenseCategory::Rent,
            PayableCategory::Utilities => ExpenseCategory::Utilities,
            PayableCategory::Salaries => ExpenseCategory::Salaries,
            PayableCategory::Marketing => ExpenseCategory::Marketing,
            PayableCategory::Equipment => ExpenseCategory::Maintenance,
            PayableCategory::Taxes
            | PayableCategory::Other
            | PayableCategory::Commissions
            | PayableCategory::Supplies => ExpenseCategory::Other,
        }
    }
}
