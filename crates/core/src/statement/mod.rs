//! Monthly income-statement rollups.
//!
//! Revenue, variable costs, and expenses are rolled up into sections;
//! results and margins are derived in a single pure pass. Rows are always
//! recomputed in full, never field-patched.

pub mod service;
pub mod types;

#[cfg(test)]
mod statement_props;

pub use service::StatementService;
pub use types::{
    ExpenseCategory, MonthlyIncomeStatement, RevenueCategory, Section, SectionLine,
    StatementMonth, VariableCostCategory,
};
