//! Income-statement domain types.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use navalha_shared::types::{Money, Percentage, TenantId};
use serde::{Deserialize, Serialize};

/// Revenue category of the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueCategory {
    /// Haircuts and other services.
    Services,
    /// Retail product sales.
    Products,
    /// Prepaid service packages.
    Packages,
    /// Anything else.
    Other,
}

/// Variable-cost category: costs that scale with revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableCostCategory {
    /// Barber commissions.
    Commissions,
    /// Card acquirer and gateway fees.
    CardFees,
    /// Cost of products sold.
    ProductCosts,
    /// Anything else.
    Other,
}

/// Fixed-expense category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    /// Shop rent.
    Rent,
    /// Water, electricity, internet.
    Utilities,
    /// Fixed staff salaries.
    Salaries,
    /// Advertising and promotions.
    Marketing,
    /// Equipment maintenance and repairs.
    Maintenance,
    /// Anything else.
    Other,
}

/// A calendar month being rolled up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementMonth {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
}

impl StatementMonth {
    /// Creates a statement month from a date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns true if `date` falls inside this month.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// One category line within a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLine<C> {
    /// The category this line rolls up.
    pub category: C,
    /// Accumulated amount.
    pub amount: Money,
}

/// A statement section: category lines plus their total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section<C> {
    /// Per-category lines.
    pub lines: Vec<SectionLine<C>>,
    /// Sum of all lines.
    pub total: Money,
}

impl<C> Default for Section<C> {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            total: Money::ZERO,
        }
    }
}

impl<C: Copy + PartialEq> Section<C> {
    /// Merges an amount into the category's line and updates the total.
    pub fn add(&mut self, category: C, amount: Money) {
        match self.lines.iter_mut().find(|line| line.category == category) {
            Some(line) => line.amount += amount,
            None => self.lines.push(SectionLine { category, amount }),
        }
        self.total += amount;
    }

    /// Returns the amount accumulated for a category.
    #[must_use]
    pub fn amount_for(&self, category: C) -> Money {
        self.lines
            .iter()
            .find(|line| line.category == category)
            .map_or(Money::ZERO, |line| line.amount)
    }
}

/// The monthly income statement of a tenant.
///
/// All derived fields come from [`MonthlyIncomeStatement::calculate`],
/// a pure, total re-derivation over the section lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyIncomeStatement {
    /// Tenant the statement belongs to.
    pub tenant_id: TenantId,
    /// Month being rolled up.
    pub month: StatementMonth,
    /// Revenue by category.
    pub revenue: Section<RevenueCategory>,
    /// Variable costs by category.
    pub variable_costs: Section<VariableCostCategory>,
    /// Fixed expenses by category.
    pub expenses: Section<ExpenseCategory>,
    /// Revenue minus variable costs.
    pub gross_result: Money,
    /// Gross result minus expenses.
    pub operating_result: Money,
    /// Bottom line; equals the operating result (no tax engine here).
    pub net_profit: Money,
    /// Gross result over revenue, unset when there is no revenue.
    pub gross_margin: Option<Percentage>,
    /// Operating result over revenue, unset when there is no revenue.
    pub operating_margin: Option<Percentage>,
    /// Net profit over revenue, unset when there is no revenue.
    pub net_margin: Option<Percentage>,
    /// When this statement was computed.
    pub processed_at: DateTime<Utc>,
}

impl MonthlyIncomeStatement {
    /// Creates an empty statement for a month.
    #[must_use]
    pub fn new(tenant_id: TenantId, month: StatementMonth, processed_at: DateTime<Utc>) -> Self {
        let mut statement = Self {
            tenant_id,
            month,
            revenue: Section::default(),
            variable_costs: Section::default(),
            expenses: Section::default(),
            gross_result: Money::ZERO,
            operating_result: Money::ZERO,
            net_profit: Money::ZERO,
            gross_margin: None,
            operating_margin: None,
            net_margin: None,
            processed_at,
        };
        statement.calculate();
        statement
    }

    /// Adds revenue to a category and re-derives everything.
    pub fn add_revenue(&mut self, category: RevenueCategory, amount: Money) {
        self.revenue.add(category, amount);
        self.calculate();
    }

    /// Adds a variable cost to a category and re-derives everything.
    pub fn add_variable_cost(&mut self, category: VariableCostCategory, amount: Money) {
        self.variable_costs.add(category, amount);
        self.calculate();
    }

    /// Adds an expense to a category and re-derives everything.
    pub fn add_expense(&mut self, category: ExpenseCategory, amount: Money) {
        self.expenses.add(category, amount);
        self.calculate();
    }

    /// Re-derives results and margins from the section lines.
    ///
    /// Margins are left unset when there is no positive revenue; a ratio
    /// over nothing carries no information.
    pub fn calculate(&mut self) {
        self.gross_result = self.revenue.total - self.variable_costs.total;
        self.operating_result = self.gross_result - self.expenses.total;
        self.net_profit = self.operating_result;

        if self.revenue.total.is_positive() {
            self.gross_margin = Some(self.gross_result.ratio_of(self.revenue.total));
            self.operating_margin = Some(self.operating_result.ratio_of(self.revenue.total));
            self.net_margin = Some(self.net_profit.ratio_of(self.revenue.total));
        } else {
            self.gross_margin = None;
            self.operating_margin = None;
            self.net_margin = None;
        }
    }
}
