//! Tests for the cart aggregation core
//!
//! These exercise the pure `compute_cart_totals` function directly:
//! effective-price selection, exact decimal accumulation, and the
//! collect-and-continue validation policy.

use rust_decimal::Decimal;
use serde_json::{json, Value};
use travel_booking_rust::cart::helpers::{compute_cart_totals, effective_unit_price};
use travel_booking_rust::cart::models::{CartLineItem, ItemType, RejectReason};

/// Builds a line with the given price snapshots and quantity
fn line(
    item_type: ItemType,
    name: &str,
    price: Option<Decimal>,
    discounted: Option<Decimal>,
    quantity: i64,
) -> CartLineItem {
    CartLineItem {
        item_type,
        item_id: 42,
        item_name: name.into(),
        quantity,
        adults: 2,
        children: 1,
        infants: 0,
        price_at_add: price,
        discounted_price_at_add: discounted,
        configuration: Value::Null,
    }
}

#[test]
fn discounted_line_totals() {
    let items = vec![line(
        ItemType::Hotel,
        "Grand Plaza",
        Some(Decimal::from(100)),
        Some(Decimal::from(80)),
        2,
    )];

    let computation = compute_cart_totals(&items);

    assert_eq!(computation.totals.subtotal, Decimal::from(160));
    assert_eq!(computation.totals.discount_total, Decimal::from(40));
    assert_eq!(computation.totals.item_count, 2);
    assert!(computation.rejected.is_empty());

    let view = &computation.lines[0];
    assert_eq!(view.unit_price, Decimal::from(80));
    assert_eq!(view.line_total, Decimal::from(160));
    assert!(view.discount_applied);
}

#[test]
fn discount_at_or_above_list_price_is_ignored() {
    let items = vec![
        line(
            ItemType::Tour,
            "Desert Safari",
            Some(Decimal::from(50)),
            Some(Decimal::from(50)),
            1,
        ),
        line(
            ItemType::Tour,
            "City Walk",
            Some(Decimal::from(30)),
            Some(Decimal::from(45)),
            1,
        ),
    ];

    let computation = compute_cart_totals(&items);

    assert_eq!(computation.totals.subtotal, Decimal::from(80));
    assert_eq!(computation.totals.discount_total, Decimal::ZERO);
    assert!(computation.lines.iter().all(|l| !l.discount_applied));
}

#[test]
fn negative_price_is_rejected_not_coerced() {
    let items = vec![line(
        ItemType::Visa,
        "Tourist Visa",
        Some(Decimal::from(-5)),
        None,
        1,
    )];

    let computation = compute_cart_totals(&items);

    assert_eq!(computation.totals.subtotal, Decimal::ZERO);
    assert_eq!(computation.totals.item_count, 0);
    assert_eq!(computation.rejected.len(), 1);
    assert_eq!(computation.rejected[0].reason, RejectReason::InvalidPrice);
}

#[test]
fn missing_price_is_rejected() {
    let items = vec![line(ItemType::Flight, "DXB-CAI", None, None, 1)];

    let computation = compute_cart_totals(&items);

    assert_eq!(computation.rejected.len(), 1);
    assert_eq!(computation.rejected[0].reason, RejectReason::InvalidPrice);
}

#[test]
fn negative_discounted_price_is_rejected() {
    let items = vec![line(
        ItemType::Room,
        "Deluxe Room",
        Some(Decimal::from(90)),
        Some(Decimal::from(-1)),
        1,
    )];

    let computation = compute_cart_totals(&items);

    assert_eq!(computation.rejected.len(), 1);
    assert_eq!(computation.rejected[0].reason, RejectReason::InvalidPrice);
}

#[test]
fn non_positive_quantity_is_rejected() {
    let items = vec![
        line(
            ItemType::Package,
            "Honeymoon Package",
            Some(Decimal::from(500)),
            None,
            0,
        ),
        line(
            ItemType::Package,
            "Family Package",
            Some(Decimal::from(400)),
            None,
            -2,
        ),
    ];

    let computation = compute_cart_totals(&items);

    assert!(computation.lines.is_empty());
    assert_eq!(computation.rejected.len(), 2);
    assert!(computation
        .rejected
        .iter()
        .all(|r| r.reason == RejectReason::InvalidQuantity));
}

#[test]
fn valid_lines_accumulate_despite_rejections() {
    let items = vec![
        line(
            ItemType::Hotel,
            "Grand Plaza",
            Some(Decimal::from(100)),
            Some(Decimal::from(80)),
            2,
        ),
        line(ItemType::Visa, "Tourist Visa", Some(Decimal::from(-5)), None, 1),
        line(
            ItemType::Transportation,
            "Airport Transfer",
            Some(Decimal::from(25)),
            None,
            4,
        ),
    ];

    let computation = compute_cart_totals(&items);

    assert_eq!(computation.lines.len(), 2);
    assert_eq!(computation.rejected.len(), 1);
    assert_eq!(computation.totals.subtotal, Decimal::from(260));
    assert_eq!(computation.totals.discount_total, Decimal::from(40));
    // Rejected quantities never reach the badge count.
    assert_eq!(computation.totals.item_count, 6);
}

#[test]
fn fractional_prices_accumulate_exactly() {
    // Ten lines at 0.10 each must sum to exactly 1.00.
    let items: Vec<CartLineItem> = (0..10)
        .map(|_| {
            line(
                ItemType::Transportation,
                "Metro Ticket",
                Some(Decimal::new(10, 2)),
                None,
                1,
            )
        })
        .collect();

    let computation = compute_cart_totals(&items);

    assert_eq!(computation.totals.subtotal, Decimal::from(1));
    assert_eq!(computation.totals.item_count, 10);
}

#[test]
fn empty_cart_yields_zero_totals() {
    let computation = compute_cart_totals(&[]);

    assert!(computation.lines.is_empty());
    assert!(computation.rejected.is_empty());
    assert_eq!(computation.totals.subtotal, Decimal::ZERO);
    assert_eq!(computation.totals.discount_total, Decimal::ZERO);
    assert_eq!(computation.totals.item_count, 0);
}

#[test]
fn effective_price_prefers_lower_discount() {
    let discounted = line(
        ItemType::Hotel,
        "Grand Plaza",
        Some(Decimal::new(9999, 2)),
        Some(Decimal::new(7999, 2)),
        1,
    );
    assert_eq!(
        effective_unit_price(&discounted).unwrap(),
        Decimal::new(7999, 2)
    );

    let undiscounted = line(
        ItemType::Hotel,
        "Grand Plaza",
        Some(Decimal::new(9999, 2)),
        None,
        1,
    );
    assert_eq!(
        effective_unit_price(&undiscounted).unwrap(),
        Decimal::new(9999, 2)
    );
}

#[test]
fn line_items_deserialize_with_defaults() {
    let item: CartLineItem = serde_json::from_value(json!({
        "itemType": "tour",
        "itemId": 7,
        "itemName": "Desert Safari",
        "priceAtAdd": 150,
        "configuration": { "date": "2026-09-01", "slug": "desert-safari" }
    }))
    .unwrap();

    assert_eq!(item.item_type, ItemType::Tour);
    assert_eq!(item.quantity, 1);
    assert_eq!(item.adults, 0);
    assert_eq!(item.price_at_add, Some(Decimal::from(150)));
    assert_eq!(item.discounted_price_at_add, None);
    assert_eq!(item.configuration["slug"], "desert-safari");
}
