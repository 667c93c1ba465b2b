//! Common test utilities and fixtures

#![allow(dead_code)]

use delivery_quote::{Modifier, Order, OrderItem};
use rust_decimal_macros::dec;

/// Single laptop order: 2.5kg, declared at 1050, 150km away
pub fn laptop_order() -> Order {
    Order::new(
        vec![OrderItem::new("Laptop", dec!(2.5)).with_price(dec!(1000))],
        dec!(1050),
        dec!(150),
    )
}

/// Laptop plus mouse, declared value derived from item prices
pub fn laptop_and_mouse_order() -> Order {
    Order::from_items(
        vec![
            OrderItem::new("Laptop", dec!(2.5)).with_price(dec!(1000)),
            OrderItem::new("Mouse", dec!(0.2)).with_price(dec!(50)),
        ],
        dec!(150),
    )
}

/// Phone order used for the manager-style scenarios
pub fn phone_order() -> Order {
    Order::from_items(
        vec![OrderItem::new("Phone", dec!(0.3)).with_price(dec!(500))],
        dec!(80),
    )
}

/// Every modifier once, in canonical order
pub fn all_modifiers(declared_value: rust_decimal::Decimal) -> Vec<Modifier> {
    vec![
        Modifier::Express,
        Modifier::insurance(declared_value).expect("declared value is non-negative"),
        Modifier::Weekend,
    ]
}

/// All orderings of `items`
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head.clone());
            out.push(tail);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutations_count() {
        assert_eq!(permutations(&[1, 2, 3]).len(), 6);
        assert_eq!(permutations::<u8>(&[]).len(), 1);
    }

    #[test]
    fn test_fixture_weights() {
        assert_eq!(laptop_order().weight(), dec!(2.5));
        assert_eq!(laptop_and_mouse_order().weight(), dec!(2.7));
        assert_eq!(phone_order().declared_total_value, dec!(500));
    }
}
