//! Property tests for money, orders and the account ledger.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use athenaeum::domain::entities::{
    AccountHistory, BankAccount, Customer, Order, Product, TransactionKind,
};
use athenaeum::domain::services::orders::{order_discount, order_total, qualifies_for_discount};
use athenaeum::domain::value_objects::Money;

fn product() -> impl Strategy<Value = Product> {
    (0u64..50_000, 0u32..10).prop_map(|(cents, qty)| Product::new("item", Money::from_cents(cents), qty))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the discount is zero below the threshold and never more
    /// than a tenth of the total.
    #[test]
    fn property_discount_bounds(products in proptest::collection::vec(product(), 0..6)) {
        let customer = Customer::new("Pat", "pat@shop.com", 30).unwrap();
        let order = Order::new("O1", customer, products);
        let total = order_total(&order);
        let discount = order_discount(&order);

        if qualifies_for_discount(&order) {
            prop_assert!(total > Money::from_cents(10_000));
            prop_assert!(discount.cents() * 10 <= total.cents());
            prop_assert!(total.cents() - discount.cents() * 10 < 10);
        } else {
            prop_assert_eq!(discount, Money::ZERO);
        }
    }

    /// PROPERTY: the balance equals deposits minus accepted withdrawals, and
    /// every accepted operation is recorded exactly once.
    #[test]
    fn property_ledger_balances(ops in proptest::collection::vec((any::<bool>(), 1u64..10_000), 0..24)) {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut history = AccountHistory::new(BankAccount::new("A1", "Pat", Money::ZERO).unwrap());
        let mut expected: u64 = 0;

        for (deposit, cents) in ops {
            let amount = Money::from_cents(cents);
            if deposit {
                history = history.deposit(amount, at).unwrap();
                expected += cents;
            } else {
                match history.withdraw(amount, at) {
                    Ok(next) => {
                        history = next;
                        expected -= cents;
                    }
                    Err(_) => prop_assert!(cents > expected),
                }
            }
        }

        prop_assert_eq!(history.account().balance(), Money::from_cents(expected));
        let replayed: i128 = history
            .transactions()
            .iter()
            .map(|t| match t.kind {
                TransactionKind::Deposit => i128::from(t.amount.cents()),
                TransactionKind::Withdrawal => -i128::from(t.amount.cents()),
            })
            .sum();
        prop_assert_eq!(replayed, i128::from(expected));
    }
}
