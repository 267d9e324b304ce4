//! Cash-register session aggregate.

use chrono::{DateTime, Utc};
use navalha_shared::types::{Money, OperationId, SessionId, StaffId, TenantId};
use serde::{Deserialize, Serialize};

use super::error::{RegisterError, MIN_MOVEMENT_DESCRIPTION};
use super::types::{
    CashOperation, OperationKind, ReinforcementOrigin, SessionStatus, WithdrawalDestination,
};

/// A daily cash-drawer session between opening and closing.
///
/// The session owns its operation trail. After every mutating operation the
/// expected balance is recomputed from scratch:
///
/// `expected = initial + entries - withdrawals + reinforcements`
///
/// Expense operations are recorded in the trail and in `total_exits` but do
/// not participate in the expected-balance formula: the drawer count at
/// closing is reconciled against cash movements only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashRegisterSession {
    /// Unique identifier.
    pub id: SessionId,
    /// Tenant the session belongs to.
    pub tenant_id: TenantId,
    /// Staff member who opened the drawer.
    pub opener: StaffId,
    /// Opening timestamp.
    pub opened_at: DateTime<Utc>,
    /// Closing timestamp, once closed.
    pub closed_at: Option<DateTime<Utc>>,
    /// Cash in the drawer at opening.
    pub initial_balance: Money,
    /// Sum of sale entries.
    pub total_entries: Money,
    /// Sum of everything that left the drawer (withdrawals + expenses).
    pub total_exits: Money,
    /// Sum of withdrawals.
    pub total_withdrawals: Money,
    /// Sum of reinforcements.
    pub total_reinforcements: Money,
    /// Computed balance the drawer should hold.
    pub expected_balance: Money,
    /// Counted balance supplied at closing.
    pub real_balance: Option<Money>,
    /// Signed difference real - expected, set at closing.
    pub divergence: Option<Money>,
    /// Mandatory explanation when the divergence exceeds tolerance.
    pub justification: Option<String>,
    /// Current lifecycle status.
    pub status: SessionStatus,
    /// Ordered trail of drawer movements.
    pub operations: Vec<CashOperation>,
}

impl CashRegisterSession {
    /// Opens a new session.
    ///
    /// The caller must have verified with the storage layer that no other
    /// session is OPEN for this tenant.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the initial balance is negative.
    pub fn open(
        tenant_id: TenantId,
        opener: StaffId,
        initial_balance: Money,
        now: DateTime<Utc>,
    ) -> Result<Self, RegisterError> {
        if initial_balance.is_negative() {
            return Err(RegisterError::NegativeInitialBalance);
        }

        Ok(Self {
            id: SessionId::new(),
            tenant_id,
            opener,
            opened_at: now,
            closed_at: None,
            initial_balance,
            total_entries: Money::ZERO,
            total_exits: Money::ZERO,
            total_withdrawals: Money::ZERO,
            total_reinforcements: Money::ZERO,
            expected_balance: initial_balance,
            real_balance: None,
            divergence: None,
            justification: None,
            status: SessionStatus::Open,
            operations: Vec::new(),
        })
    }

    /// Records a cash sale entry.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive amount or an empty
    /// description, and a state error when the session is not open.
    pub fn sale(
        &mut self,
        amount: Money,
        description: String,
        actor: StaffId,
        now: DateTime<Utc>,
    ) -> Result<(), RegisterError> {
        self.ensure_open()?;
        Self::validate_amount(amount)?;
        if description.trim().is_empty() {
            return Err(RegisterError::EmptyDescription);
        }

        self.total_entries += amount;
        self.push_operation(OperationKind::Sale, amount, description, actor, now);
        self.recompute_expected();
        Ok(())
    }

    /// Records a small expense paid straight from the drawer.
    ///
    /// # Errors
    ///
    /// Same validation as [`CashRegisterSession::sale`].
    pub fn record_expense(
        &mut self,
        amount: Money,
        description: String,
        actor: StaffId,
        now: DateTime<Utc>,
    ) -> Result<(), RegisterError> {
        self.ensure_open()?;
        Self::validate_amount(amount)?;
        if description.trim().is_empty() {
            return Err(RegisterError::EmptyDescription);
        }

        self.total_exits += amount;
        self.push_operation(OperationKind::Expense, amount, description, actor, now);
        self.recompute_expected();
        Ok(())
    }

    /// Withdraws cash from the drawer.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive amount or a
    /// description under the minimum length, and a state error when the
    /// session is not open.
    pub fn withdraw(
        &mut self,
        amount: Money,
        description: String,
        destination: WithdrawalDestination,
        actor: StaffId,
        now: DateTime<Utc>,
    ) -> Result<(), RegisterError> {
        self.ensure_open()?;
        Self::validate_amount(amount)?;
        Self::validate_movement_description(&description)?;

        self.total_withdrawals += amount;
        self.total_exits += amount;
        self.push_operation(
            OperationKind::Withdrawal(destination),
            amount,
            description,
            actor,
            now,
        );
        self.recompute_expected();
        Ok(())
    }

    /// Adds reinforcement cash to the drawer.
    ///
    /// # Errors
    ///
    /// Same validation as [`CashRegisterSession::withdraw`].
    pub fn reinforce(
        &mut self,
        amount: Money,
        description: String,
        origin: ReinforcementOrigin,
        actor: StaffId,
        now: DateTime<Utc>,
    ) -> Result<(), RegisterError> {
        self.ensure_open()?;
        Self::validate_amount(amount)?;
        Self::validate_movement_description(&description)?;

        self.total_reinforcements += amount;
        self.push_operation(
            OperationKind::Reinforcement(origin),
            amount,
            description,
            actor,
            now,
        );
        self.recompute_expected();
        Ok(())
    }

    /// Closes the session against the counted drawer balance.
    ///
    /// The divergence is `real - expected`. When its absolute value exceeds
    /// `tolerance`, a non-empty justification is mandatory; within
    /// tolerance (boundary included) the justification is optional. After a
    /// successful close the session is immutable.
    ///
    /// # Errors
    ///
    /// Returns a state error when the session is already closed and a
    /// tolerance error when the divergence needs an absent justification.
    pub fn close(
        &mut self,
        real_balance: Money,
        justification: Option<String>,
        tolerance: Money,
        now: DateTime<Utc>,
    ) -> Result<(), RegisterError> {
        self.ensure_open()?;

        let divergence = real_balance - self.expected_balance;
        let justification = justification.filter(|j| !j.trim().is_empty());

        if divergence.abs() > tolerance && justification.is_none() {
            return Err(RegisterError::JustificationRequired {
                divergence,
                tolerance,
            });
        }

        self.real_balance = Some(real_balance);
        self.divergence = Some(divergence);
        self.justification = justification;
        self.closed_at = Some(now);
        self.status = SessionStatus::Closed;

        tracing::info!(
            session = %self.id,
            tenant = %self.tenant_id,
            divergence = %divergence,
            "cash register session closed"
        );
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), RegisterError> {
        match self.status {
            SessionStatus::Open => Ok(()),
            SessionStatus::Closed => Err(RegisterError::SessionClosed),
        }
    }

    fn validate_amount(amount: Money) -> Result<(), RegisterError> {
        if amount.is_positive() {
            Ok(())
        } else {
            Err(RegisterError::AmountNotPositive)
        }
    }

    fn validate_movement_description(description: &str) -> Result<(), RegisterError> {
        if description.trim().chars().count() < MIN_MOVEMENT_DESCRIPTION {
            return Err(RegisterError::DescriptionTooShort);
        }
        Ok(())
    }

    fn push_operation(
        &mut self,
        kind: OperationKind,
        amount: Money,
        description: String,
        actor: StaffId,
        now: DateTime<Utc>,
    ) {
        self.operations.push(CashOperation {
            id: OperationId::new(),
            session_id: self.id,
            kind,
            amount,
            description,
            actor,
            at: now,
        });
    }

    fn recompute_expected(&mut self) {
        self.expected_balance = self.initial_balance + self.total_entries
            - self.total_withdrawals
            + self.total_reinforcements;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn now() -> DateTime<Utc> {
        chrono::NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
            .and_utc()
    }

    fn tolerance() -> Money {
        Money::new(dec!(5.00))
    }

    fn open_session(initial: Money) -> CashRegisterSession {
        CashRegisterSession::open(TenantId::new(), StaffId::new(), initial, now()).unwrap()
    }

    #[test]
    fn test_open_starts_at_initial_balance() {
        let session = open_session(Money::new(dec!(100.00)));
        assert_eq!(session.status, SessionStatus::Open);
        assert_eq!(session.expected_balance, Money::new(dec!(100.00)));
        assert!(session.operations.is_empty());
    }

    #[test]
    fn test_open_rejects_negative_initial() {
        let result =
            CashRegisterSession::open(TenantId::new(), StaffId::new(), Money::new(dec!(-1)), now());
        assert!(matches!(result, Err(RegisterError::NegativeInitialBalance)));
    }

    #[test]
    fn test_expected_balance_after_operations() {
        // open 100.00; sale 50.00; withdrawal 30.00 to the safe -> expected 120.00
        let mut session = open_session(Money::new(dec!(100.00)));
        let actor = StaffId::new();

        session
            .sale(Money::new(dec!(50.00)), "Corte e barba".to_string(), actor, now())
            .unwrap();
        session
            .withdraw(
                Money::new(dec!(30.00)),
                "Sangria para cofre".to_string(),
                WithdrawalDestination::Safe,
                actor,
                now(),
            )
            .unwrap();

        assert_eq!(session.expected_balance, Money::new(dec!(120.00)));
        assert_eq!(session.total_exits, Money::new(dec!(30.00)));
        assert_eq!(session.operations.len(), 2);
    }

    #[test]
    fn test_expense_does_not_change_expected_balance() {
        let mut session = open_session(Money::new(dec!(100.00)));
        session
            .record_expense(
                Money::new(dec!(12.00)),
                "Agua mineral".to_string(),
                StaffId::new(),
                now(),
            )
            .unwrap();

        assert_eq!(session.expected_balance, Money::new(dec!(100.00)));
        assert_eq!(session.total_exits, Money::new(dec!(12.00)));
        assert_eq!(session.operations.len(), 1);
    }

    #[test]
    fn test_reinforce_increases_expected() {
        let mut session = open_session(Money::new(dec!(50.00)));
        session
            .reinforce(
                Money::new(dec!(20.00)),
                "Troco da gerencia".to_string(),
                ReinforcementOrigin::Change,
                StaffId::new(),
                now(),
            )
            .unwrap();
        assert_eq!(session.expected_balance, Money::new(dec!(70.00)));
    }

    #[test]
    fn test_sale_validation() {
        let mut session = open_session(Money::new(dec!(100.00)));
        let actor = StaffId::new();

        assert!(matches!(
            session.sale(Money::ZERO, "Corte".to_string(), actor, now()),
            Err(RegisterError::AmountNotPositive)
        ));
        assert!(matches!(
            session.sale(Money::new(dec!(10)), "  ".to_string(), actor, now()),
            Err(RegisterError::EmptyDescription)
        ));
    }

    #[test]
    fn test_movement_description_minimum_length() {
        let mut session = open_session(Money::new(dec!(100.00)));
        let actor = StaffId::new();

        assert!(matches!(
            session.withdraw(
                Money::new(dec!(10)),
                "dep".to_string(),
                WithdrawalDestination::Deposit,
                actor,
                now(),
            ),
            Err(RegisterError::DescriptionTooShort)
        ));
        assert!(matches!(
            session.reinforce(
                Money::new(dec!(10)),
                "tro ".to_string(),
                ReinforcementOrigin::Change,
                actor,
                now(),
            ),
            Err(RegisterError::DescriptionTooShort)
        ));
    }

    #[test]
    fn test_close_at_tolerance_boundary_without_justification() {
        // expected 120.00, counted 115.00 -> divergence -5.00, exactly at
        // the boundary, which is within tolerance
        let mut session = open_session(Money::new(dec!(100.00)));
        let actor = StaffId::new();
        session
            .sale(Money::new(dec!(50.00)), "Corte".to_string(), actor, now())
            .unwrap();
        session
            .withdraw(
                Money::new(dec!(30.00)),
                "Sangria cofre".to_string(),
                WithdrawalDestination::Safe,
                actor,
                now(),
            )
            .unwrap();

        session
            .close(Money::new(dec!(115.00)), None, tolerance(), now())
            .unwrap();

        assert_eq!(session.status, SessionStatus::Closed);
        assert_eq!(session.divergence, Some(Money::new(dec!(-5.00))));
        assert!(session.justification.is_none());
    }

    #[test]
    fn test_close_beyond_tolerance_requires_justification() {
        let mut session = open_session(Money::new(dec!(100.00)));

        let err = session
            .close(Money::new(dec!(94.99)), None, tolerance(), now())
            .unwrap_err();
        assert!(matches!(err, RegisterError::JustificationRequired { .. }));
        assert_eq!(session.status, SessionStatus::Open);

        // Blank justification does not count
        let err = session
            .close(
                Money::new(dec!(94.99)),
                Some("   ".to_string()),
                tolerance(),
                now(),
            )
            .unwrap_err();
        assert!(matches!(err, RegisterError::JustificationRequired { .. }));

        session
            .close(
                Money::new(dec!(94.99)),
                Some("Nota de 5 rasgada no troco".to_string()),
                tolerance(),
                now(),
            )
            .unwrap();
        assert_eq!(session.divergence, Some(Money::new(dec!(-5.01))));
        assert!(session.justification.is_some());
    }

    #[test]
    fn test_closed_session_rejects_everything() {
        let mut session = open_session(Money::new(dec!(100.00)));
        let actor = StaffId::new();
        session
            .close(Money::new(dec!(100.00)), None, tolerance(), now())
            .unwrap();

        assert!(matches!(
            session.sale(Money::new(dec!(10)), "Corte".to_string(), actor, now()),
            Err(RegisterError::SessionClosed)
        ));
        assert!(matches!(
            session.withdraw(
                Money::new(dec!(10)),
                "Sangria cofre".to_string(),
                WithdrawalDestination::Safe,
                actor,
                now(),
            ),
            Err(RegisterError::SessionClosed)
        ));
        assert!(matches!(
            session.reinforce(
                Money::new(dec!(10)),
                "Troco extra".to_string(),
                ReinforcementOrigin::Change,
                actor,
                now(),
            ),
            Err(RegisterError::SessionClosed)
        ));
        assert!(matches!(
            session.close(Money::new(dec!(100.00)), None, tolerance(), now()),
            Err(RegisterError::SessionClosed)
        ));
    }

    #[test]
    fn test_positive_divergence_also_gated() {
        let mut session = open_session(Money::new(dec!(100.00)));
        let err = session
            .close(Money::new(dec!(106.00)), None, tolerance(), now())
            .unwrap_err();
        assert!(matches!(
            err,
            RegisterError::JustificationRequired { divergence, .. }
                if divergence == Money::new(dec!(6.00))
        ));
    }
}
