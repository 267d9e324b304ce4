//! Cash-register domain types.

use chrono::{DateTime, Utc};
use navalha_shared::types::{Money, OperationId, SessionId, StaffId};
use serde::{Deserialize, Serialize};

/// Session lifecycle status. OPEN -> CLOSED, one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Drawer is open and accepting operations.
    Open,
    /// Drawer was counted and closed (immutable).
    Closed,
}

/// Where a cash withdrawal goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithdrawalDestination {
    /// Bank deposit.
    Deposit,
    /// Direct payment of an expense.
    Payment,
    /// Shop safe.
    Safe,
    /// Anything else.
    Other,
}

/// Where reinforcement cash comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReinforcementOrigin {
    /// Change brought in to break large bills.
    Change,
    /// Working capital injected by the owner.
    WorkingCapital,
    /// Transfer from another register or unit.
    Transfer,
    /// Anything else.
    Other,
}

/// What a cash operation did to the drawer.
///
/// Withdrawals carry their destination and reinforcements their origin, so
/// an operation can never be stored with the wrong qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum OperationKind {
    /// Cash received for a sale.
    Sale,
    /// Cash taken out of the drawer.
    Withdrawal(WithdrawalDestination),
    /// Cash added to the drawer.
    Reinforcement(ReinforcementOrigin),
    /// Small expense paid straight from the drawer.
    Expense,
}

/// One movement in the drawer's audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashOperation {
    /// Unique identifier.
    pub id: OperationId,
    /// The session this operation belongs to.
    pub session_id: SessionId,
    /// What the operation did.
    pub kind: OperationKind,
    /// Amount moved (always positive; the kind carries the direction).
    pub amount: Money,
    /// What the movement was for.
    pub description: String,
    /// Staff member who performed the operation.
    pub actor: StaffId,
    /// When the operation happened.
    pub at: DateTime<Utc>,
}
