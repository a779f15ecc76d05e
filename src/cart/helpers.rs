//! Shopping Cart Business Logic Helpers
//!
//! This module contains the pure cart-aggregation core plus small helper
//! functions for session resolution and formatting.

use super::models::{
    CartComputation, CartLineItem, CartLineView, CartTotals, RejectReason, RejectedLine,
};
use axum::http::{header, HeaderMap};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Cookie carrying the session identifier that names the default cart
pub const SESSION_COOKIE: &str = "cart_session";

/// Computes display totals and per-line effective prices for a cart.
///
/// # Behaviour
///
/// * Lines are validated independently: a bad line lands in `rejected` with
///   its reason and contributes nothing to any total, while the remaining
///   lines still accumulate. The computation never aborts on a bad line.
/// * `item_count` sums the quantities of the valid lines only.
/// * All arithmetic is exact decimal; no floating-point accumulation.
///
/// Pure function of its input; an empty cart yields zero totals.
pub fn compute_cart_totals(items: &[CartLineItem]) -> CartComputation {
    let mut computation = CartComputation::default();

    for item in items {
        if item.quantity <= 0 {
            computation.rejected.push(RejectedLine {
                item: item.clone(),
                reason: RejectReason::InvalidQuantity,
            });
            continue;
        }

        let unit_price = match effective_unit_price(item) {
            Ok(price) => price,
            Err(reason) => {
                computation.rejected.push(RejectedLine {
                    item: item.clone(),
                    reason,
                });
                continue;
            }
        };

        let quantity = Decimal::from(item.quantity);
        let line_total = unit_price * quantity;

        // effective_unit_price already guaranteed the list price exists
        let list_price = item.price_at_add.unwrap_or(unit_price);
        let discount_applied = unit_price < list_price;
        if discount_applied {
            computation.totals.discount_total += (list_price - unit_price) * quantity;
        }

        computation.totals.subtotal += line_total;
        computation.totals.item_count += item.quantity;
        computation.lines.push(CartLineView {
            item_type: item.item_type,
            item_id: item.item_id,
            item_name: item.item_name.clone(),
            quantity: item.quantity,
            unit_price,
            line_total,
            discount_applied,
        });
    }

    computation
}

/// Returns the unit price a line is billed at: the discounted snapshot when
/// it is present and strictly below the list price, else the list price.
///
/// A missing or negative list price, or a negative discounted price, is an
/// `InvalidPrice` failure rather than a silent zero.
pub fn effective_unit_price(item: &CartLineItem) -> Result<Decimal, RejectReason> {
    let list_price = item.price_at_add.ok_or(RejectReason::InvalidPrice)?;
    if list_price < Decimal::ZERO {
        return Err(RejectReason::InvalidPrice);
    }

    match item.discounted_price_at_add {
        Some(discounted) if discounted < Decimal::ZERO => Err(RejectReason::InvalidPrice),
        Some(discounted) if discounted < list_price => Ok(discounted),
        _ => Ok(list_price),
    }
}

/// Resolves the session identifier from the request cookies.
///
/// Returns the identifier plus a flag telling the caller whether it was
/// freshly minted (and therefore needs a `Set-Cookie` on the response).
pub fn resolve_session_id(headers: &HeaderMap) -> (String, bool) {
    if let Some(cookies) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) {
        for pair in cookies.split(';') {
            if let Some((name, value)) = pair.trim().split_once('=') {
                if name == SESSION_COOKIE && !value.is_empty() {
                    return (value.to_string(), false);
                }
            }
        }
    }

    (Uuid::new_v4().simple().to_string(), true)
}

/// Returns the explicitly requested `cart_id`, falling back to the cart
/// named by the session.
///
/// This guarantees that every cart operation works with a non-empty
/// identifier.
pub fn get_or_default_cart_id(cart_id: Option<String>, session_id: &str) -> String {
    cart_id.unwrap_or_else(|| session_id.to_string())
}

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Grand Plaza Hotel (hotel), 1x Desert Safari (tour)"`.
pub fn format_item_summary(items: &[CartLineItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {} ({})", i.quantity, i.item_name, i.item_type))
        .collect::<Vec<_>>()
        .join(", ")
}
