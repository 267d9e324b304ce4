//! Property-based tests for income-statement identities.

use chrono::NaiveDate;
use navalha_shared::types::{Money, TenantId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::types::{
    ExpenseCategory, MonthlyIncomeStatement, RevenueCategory, StatementMonth, VariableCostCategory,
};

fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_revenue_category() -> impl Strategy<Value = RevenueCategory> {
    prop_oneof![
        Just(RevenueCategory::Services),
        Just(RevenueCategory::Products),
        Just(RevenueCategory::Packages),
        Just(RevenueCategory::Other),
    ]
}

fn arb_variable_cost_category() -> impl Strategy<Value = VariableCostCategory> {
    prop_oneof![
        Just(VariableCostCategory::Commissions),
        Just(VariableCostCategory::CardFees),
        Just(VariableCostCategory::ProductCosts),
        Just(VariableCostCategory::Other),
    ]
}

fn arb_expense_category() -> impl Strategy<Value = ExpenseCategory> {
    prop_oneof![
        Just(ExpenseCategory::Rent),
        Just(ExpenseCategory::Utilities),
        Just(ExpenseCategory::Salaries),
        Just(ExpenseCategory::Marketing),
        Just(ExpenseCategory::Maintenance),
        Just(ExpenseCategory::Other),
    ]
}

fn empty_statement() -> MonthlyIncomeStatement {
    MonthlyIncomeStatement::new(
        TenantId::new(),
        StatementMonth {
            year: 2025,
            month: 3,
        },
        NaiveDate::from_ymd_opt(2025, 4, 1)
            .unwrap()
            .and_hms_opt(2, 0, 0)
            .unwrap()
            .and_utc(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// `operating_result == gross_result - expense_total` and
    /// `net_profit == operating_result` for arbitrary non-negative inputs,
    /// and the sections always total their lines.
    #[test]
    fn prop_statement_identities(
        revenue in prop::collection::vec((arb_revenue_category(), arb_amount()), 0..10),
        costs in prop::collection::vec((arb_variable_cost_category(), arb_amount()), 0..10),
        expenses in prop::collection::vec((arb_expense_category(), arb_amount()), 0..10)
    ) {
        let mut statement = empty_statement();

        for (category, amount) in revenue {
            statement.add_revenue(category, Money::new(amount));
        }
        for (category, amount) in costs {
            statement.add_variable_cost(category, Money::new(amount));
        }
        for (category, amount) in expenses {
            statement.add_expense(category, Money::new(amount));
        }

        prop_assert_eq!(
            statement.gross_result,
            statement.revenue.total - statement.variable_costs.total
        );
        prop_assert_eq!(
            statement.operating_result,
            statement.gross_result - statement.expenses.total
        );
        prop_assert_eq!(statement.net_profit, statement.operating_result);

        let line_sum: Money = statement.revenue.lines.iter().map(|line| line.amount).sum();
        prop_assert_eq!(line_sum, statement.revenue.total);
    }

    /// Margins are set iff revenue is positive, and equal
    /// result / revenue * 100 when set.
    #[test]
    fn prop_margin_gating(
        revenue in arb_amount(),
        expense in arb_amount()
    ) {
        let mut statement = empty_statement();
        statement.add_revenue(RevenueCategory::Services, Money::new(revenue));
        statement.add_expense(ExpenseCategory::Rent, Money::new(expense));

        if revenue.is_zero() {
            prop_assert!(statement.operating_margin.is_none());
        } else {
            let margin = statement.operating_margin.unwrap();
            let expected = ((revenue - expense) / revenue * Decimal::ONE_HUNDRED).round_dp(2);
            prop_assert_eq!(margin.value(), expected);
        }
    }

    /// Recomputation is total: the same lines in any insertion order yield
    /// the same results.
    #[test]
    fn prop_order_independent(
        amounts in prop::collection::vec(arb_amount(), 2..8)
    ) {
        let mut forward = empty_statement();
        for amount in &amounts {
            forward.add_revenue(RevenueCategory::Services, Money::new(*amount));
        }

        let mut backward = empty_statement();
        for amount in amounts.iter().rev() {
            backward.add_revenue(RevenueCategory::Services, Money::new(*amount));
        }

        prop_assert_eq!(forward.revenue.total, backward.revenue.total);
        prop_assert_eq!(forward.net_profit, backward.net_profit);
    }
}
