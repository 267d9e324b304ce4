//! Property-based tests for the cash-register session.

use chrono::{DateTime, Utc};
use navalha_shared::types::{Money, StaffId, TenantId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::RegisterError;
use super::session::CashRegisterSession;
use super::types::{ReinforcementOrigin, SessionStatus, WithdrawalDestination};

/// One drawer movement for the interleaving property.
#[derive(Debug, Clone)]
enum Movement {
    Sale(Decimal),
    Withdraw(Decimal),
    Reinforce(Decimal),
    Expense(Decimal),
}

fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_movement() -> impl Strategy<Value = Movement> {
    prop_oneof![
        arb_amount().prop_map(Movement::Sale),
        arb_amount().prop_map(Movement::Withdraw),
        arb_amount().prop_map(Movement::Reinforce),
        arb_amount().prop_map(Movement::Expense),
    ]
}

fn fixed_now() -> DateTime<Utc> {
    chrono::NaiveDate::from_ymd_opt(2025, 3, 10)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
        .and_utc()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(150))]

    /// After any interleaving of operations, the expected balance equals
    /// `initial + sales - withdrawals + reinforcements`; expenses never
    /// participate.
    #[test]
    fn prop_expected_balance_formula(
        initial in 0i64..100_000i64,
        movements in prop::collection::vec(arb_movement(), 0..25)
    ) {
        let initial = Money::new(Decimal::new(initial, 2));
        let actor = StaffId::new();
        let mut session =
            CashRegisterSession::open(TenantId::new(), actor, initial, fixed_now()).unwrap();

        let mut sales = Money::ZERO;
        let mut withdrawals = Money::ZERO;
        let mut reinforcements = Money::ZERO;

        for movement in movements {
            match movement {
                Movement::Sale(amount) => {
                    session
                        .sale(Money::new(amount), "Venda balcao".to_string(), actor, fixed_now())
                        .unwrap();
                    sales += Money::new(amount);
                }
                Movement::Withdraw(amount) => {
                    session
                        .withdraw(
                            Money::new(amount),
                            "Sangria diaria".to_string(),
                            WithdrawalDestination::Deposit,
                            actor,
                            fixed_now(),
                        )
                        .unwrap();
                    withdrawals += Money::new(amount);
                }
                Movement::Reinforce(amount) => {
                    session
                        .reinforce(
                            Money::new(amount),
                            "Reforco de troco".to_string(),
                            ReinforcementOrigin::WorkingCapital,
                            actor,
                            fixed_now(),
                        )
                        .unwrap();
                    reinforcements += Money::new(amount);
                }
                Movement::Expense(amount) => {
                    session
                        .record_expense(
                            Money::new(amount),
                            "Despesa miuda".to_string(),
                            actor,
                            fixed_now(),
                        )
                        .unwrap();
                }
            }

            prop_assert_eq!(
                session.expected_balance,
                initial + sales - withdrawals + reinforcements
            );
        }

        prop_assert_eq!(session.total_entries, sales);
        prop_assert_eq!(session.total_withdrawals, withdrawals);
        prop_assert_eq!(session.total_reinforcements, reinforcements);
    }

    /// Closing exactly at the counted expected balance always succeeds
    /// without justification, and the session refuses mutations afterwards.
    #[test]
    fn prop_close_at_expected_then_immutable(
        initial in 0i64..100_000i64,
        sale in 1i64..100_000i64
    ) {
        let actor = StaffId::new();
        let mut session = CashRegisterSession::open(
            TenantId::new(),
            actor,
            Money::new(Decimal::new(initial, 2)),
            fixed_now(),
        )
        .unwrap();
        session
            .sale(
                Money::new(Decimal::new(sale, 2)),
                "Venda balcao".to_string(),
                actor,
                fixed_now(),
            )
            .unwrap();

        let counted = session.expected_balance;
        session
            .close(counted, None, Money::new(Decimal::new(500, 2)), fixed_now())
            .unwrap();

        prop_assert_eq!(session.status, SessionStatus::Closed);
        prop_assert_eq!(session.divergence, Some(Money::ZERO));

        let result = session.sale(
            Money::new(Decimal::ONE),
            "Venda tardia".to_string(),
            actor,
            fixed_now(),
        );
        prop_assert!(matches!(result, Err(RegisterError::SessionClosed)));
    }

    /// Justification is required exactly when |divergence| > tolerance.
    #[test]
    fn prop_tolerance_gating(
        expected_cents in 0i64..100_000i64,
        delta_cents in -2_000i64..2_000i64
    ) {
        let actor = StaffId::new();
        let initial = Money::new(Decimal::new(expected_cents, 2));
        let mut session =
            CashRegisterSession::open(TenantId::new(), actor, initial, fixed_now()).unwrap();

        let tolerance = Money::new(Decimal::new(500, 2));
        let counted = initial + Money::new(Decimal::new(delta_cents, 2));
        let result = session.close(counted, None, tolerance, fixed_now());

        if Decimal::new(delta_cents, 2).abs() > tolerance.amount() {
            prop_assert!(
                matches!(result, Err(RegisterError::JustificationRequired { .. })),
                "expected JustificationRequired error"
            );
            prop_assert_eq!(session.status, SessionStatus::Open);
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(session.status, SessionStatus::Closed);
        }
    }
}
