//! Order calculations

use crate::domain::entities::Order;
use crate::domain::value_objects::Money;

/// Orders strictly above this total get a discount
pub const DISCOUNT_THRESHOLD: Money = Money::from_cents(10_000);

pub const DISCOUNT_PERCENT: u64 = 10;

pub fn order_total(order: &Order) -> Money {
    order.products().iter().map(|p| p.line_total()).sum()
}

pub fn order_item_count(order: &Order) -> u64 {
    order
        .products()
        .iter()
        .map(|p| u64::from(p.quantity))
        .sum()
}

pub fn qualifies_for_discount(order: &Order) -> bool {
    order_total(order) > DISCOUNT_THRESHOLD
}

pub fn order_discount(order: &Order) -> Money {
    if qualifies_for_discount(order) {
        order_total(order).percent(DISCOUNT_PERCENT)
    } else {
        Money::ZERO
    }
}
