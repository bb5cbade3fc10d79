//! Scenario: A customer's account pays for a discounted order
//!
//! Steps:
//! 1. Open an account and deposit wages
//! 2. Build an order above the discount threshold
//! 3. Withdraw the discounted total; a second withdrawal bounces

use chrono::Duration;

use crate::common::start;

use athenaeum::domain::entities::{
    AccountHistory, BankAccount, Customer, Order, Product, TransactionKind,
};
use athenaeum::domain::services::orders::{
    order_discount, order_item_count, order_total, qualifies_for_discount,
};
use athenaeum::domain::value_objects::Money;
use athenaeum::LibraryError;

#[test]
fn scenario_pay_for_discounted_order() {
    // Step 1
    let account = BankAccount::new("ACC-1", "Dana Buyer", Money::ZERO).unwrap();
    let history = AccountHistory::new(account)
        .deposit(Money::new(250, 0), start())
        .unwrap();

    // Step 2
    let customer = Customer::new("Dana Buyer", "dana@shop.com", 34).unwrap();
    let order = Order::new(
        "ORD-1",
        customer,
        vec![
            Product::new("Keyboard", Money::new(89, 99), 1),
            Product::new("Cable", Money::new(5, 50), 4),
        ],
    );
    assert_eq!(order_item_count(&order), 5);
    assert_eq!(order_total(&order), Money::new(111, 99));
    assert!(qualifies_for_discount(&order));
    assert_eq!(order_discount(&order), Money::new(11, 19));

    // Step 3
    let to_pay = order_total(&order).checked_sub(order_discount(&order)).unwrap();
    let history = history
        .withdraw(to_pay, start() + Duration::hours(1))
        .unwrap();
    assert_eq!(history.account().balance(), Money::new(149, 20));
    let kinds: Vec<_> = history.transactions().iter().map(|t| t.kind).collect();
    assert_eq!(kinds, [TransactionKind::Deposit, TransactionKind::Withdrawal]);

    let err = history
        .withdraw(Money::new(200, 0), start() + Duration::hours(2))
        .unwrap_err();
    assert!(matches!(err, LibraryError::InsufficientFunds { .. }));
    assert_eq!(history.transactions().len(), 2);
}
