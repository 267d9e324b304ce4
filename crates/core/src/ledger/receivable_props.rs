//! Property-based tests for the receivable state machine.

use chrono::{DateTime, NaiveDate, Utc};
use navalha_shared::types::{Money, TenantId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::ledger::error::LedgerError;
use crate::ledger::receivable::Receivable;
use crate::ledger::types::{CreateReceivableInput, ReceivableOrigin, ReceivableStatus};

fn fixed_now() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
        .and_utc()
}

fn make_receivable(amount: Decimal) -> Receivable {
    Receivable::create(
        CreateReceivableInput {
            tenant_id: TenantId::new(),
            origin: ReceivableOrigin::ServiceSale,
            description: "Prop receivable".to_string(),
            amount: Money::new(amount),
            due_date: NaiveDate::from_ymd_opt(2025, 3, 15),
            notes: None,
        },
        fixed_now(),
    )
    .unwrap()
}

/// Strategy for positive cent-denominated amounts.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For any sequence of partial payments, `amount_paid` never exceeds
    /// the face amount and `amount_paid + amount_open == amount` holds
    /// after every accepted registration.
    #[test]
    fn prop_partial_payments_never_exceed_face_amount(
        face in arb_amount(),
        payments in prop::collection::vec(arb_amount(), 1..12)
    ) {
        let mut receivable = make_receivable(face);
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();

        for payment in payments {
            match receivable.register_partial_payment(Money::new(payment), date) {
                Ok(()) => {}
                Err(LedgerError::AlreadyReceived) => {
                    prop_assert_eq!(receivable.status, ReceivableStatus::Received);
                }
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }

            prop_assert!(receivable.amount_paid <= receivable.amount);
            prop_assert!(!receivable.amount_open.is_negative());
            prop_assert_eq!(
                receivable.amount_paid + receivable.amount_open,
                receivable.amount
            );
        }
    }

    /// Overshoot clamps the open amount to zero and flips to RECEIVED.
    #[test]
    fn prop_overshoot_flips_to_received(
        face in arb_amount(),
        excess in arb_amount()
    ) {
        let mut receivable = make_receivable(face);
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();

        receivable
            .register_partial_payment(Money::new(face + excess), date)
            .unwrap();

        prop_assert_eq!(receivable.status, ReceivableStatus::Received);
        prop_assert_eq!(receivable.amount_open, Money::ZERO);
        prop_assert_eq!(receivable.amount_paid, receivable.amount);
    }

    /// Once RECEIVED, every further transition fails with a state conflict.
    #[test]
    fn prop_received_is_terminal(face in arb_amount()) {
        let mut receivable = make_receivable(face);
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        receivable.mark_received(date).unwrap();

        let partial = receivable.register_partial_payment(Money::new(face), date);
        prop_assert!(matches!(partial, Err(LedgerError::AlreadyReceived)));

        let again = receivable.mark_received(date);
        prop_assert!(matches!(again, Err(LedgerError::AlreadyReceived)));

        let cancel = receivable.cancel();
        prop_assert!(matches!(cancel, Err(LedgerError::AlreadyReceived)));
    }

    /// Once CANCELED, every further transition fails with a state conflict.
    #[test]
    fn prop_canceled_is_terminal(face in arb_amount()) {
        let mut receivable = make_receivable(face);
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        receivable.cancel().unwrap();

        let partial = receivable.register_partial_payment(Money::new(face), date);
        prop_assert!(matches!(partial, Err(LedgerError::AlreadyCanceled)));

        let received = receivable.mark_received(date);
        prop_assert!(matches!(received, Err(LedgerError::AlreadyCanceled)));

        let cancel = receivable.cancel();
        prop_assert!(matches!(cancel, Err(LedgerError::AlreadyCanceled)));
    }
}
