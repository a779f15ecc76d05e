//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the travel-booking
//! cart domain: line items with their price snapshots, derived totals, and
//! the request/response shapes of the cart endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for cart line items
fn default_quantity() -> i64 {
    1
}

/// Kind of bookable product a cart line refers to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Flight,
    Hotel,
    Room,
    Tour,
    Package,
    Visa,
    Transportation,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemType::Flight => "flight",
            ItemType::Hotel => "hotel",
            ItemType::Room => "room",
            ItemType::Tour => "tour",
            ItemType::Package => "package",
            ItemType::Visa => "visa",
            ItemType::Transportation => "transportation",
        };
        f.write_str(name)
    }
}

/// One priced, quantified entry in a shopping cart.
///
/// The two price fields are snapshots captured at the moment the item was
/// added; later catalog price changes never alter a stored cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Which kind of product this line books
    pub item_type: ItemType,

    /// Catalog identifier of the product
    pub item_id: i64,

    /// Display label of the product
    pub item_name: String,

    /// Quantity of this line (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: i64,

    /// Adult traveller count (hotel/tour/flight lines; 0 elsewhere)
    #[serde(default)]
    pub adults: u32,

    /// Child traveller count
    #[serde(default)]
    pub children: u32,

    /// Infant traveller count
    #[serde(default)]
    pub infants: u32,

    /// List price snapshot; a missing or negative value rejects the line
    pub price_at_add: Option<Decimal>,

    /// Discounted price snapshot, applied only when below the list price
    pub discounted_price_at_add: Option<Decimal>,

    /// Opaque per-type metadata (dates, slugs); never interpreted here
    #[serde(default)]
    pub configuration: Value,
}

/// Why a cart line was excluded from the totals
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Error)]
#[serde(rename_all = "camelCase")]
pub enum RejectReason {
    /// Price snapshot is missing or negative
    #[error("price snapshot is missing or negative")]
    InvalidPrice,

    /// Quantity is zero or negative
    #[error("quantity must be a positive integer")]
    InvalidQuantity,
}

/// A line that failed validation, paired with the reason
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RejectedLine {
    /// The offending line, echoed back untouched
    pub item: CartLineItem,

    /// Why it was excluded
    pub reason: RejectReason,
}

/// Cart-wide totals derived from the valid lines.
///
/// Computed fresh on every read; never persisted or cached.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of all line totals at the effective unit price
    pub subtotal: Decimal,

    /// Sum of `(list - discounted) * quantity` over discounted lines
    pub discount_total: Decimal,

    /// Sum of quantities across valid lines (cart badge count)
    pub item_count: i64,
}

/// Normalized display model for one valid cart line
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub item_type: ItemType,
    pub item_id: i64,
    pub item_name: String,
    pub quantity: i64,

    /// Effective unit price (the lesser of list and discounted price)
    pub unit_price: Decimal,

    /// `unit_price * quantity`, exact decimal
    pub line_total: Decimal,

    /// Whether the discounted snapshot undercut the list price
    pub discount_applied: bool,
}

/// Full result of aggregating a cart: display lines, totals, and the lines
/// that failed validation
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CartComputation {
    pub lines: Vec<CartLineView>,
    pub totals: CartTotals,
    pub rejected: Vec<RejectedLine>,
}

// =============================================================================
// Endpoint Inputs / Responses
// =============================================================================

/// Input for the sync_cart endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncCartInput {
    /// Full cart contents as known by the frontend
    pub items: Vec<CartLineItem>,

    /// Optional cart identifier (falls back to the session cart)
    pub cart_id: Option<String>,
}

/// Input for the checkout endpoint
#[derive(Debug, Deserialize)]
pub struct CheckoutInput {
    /// Optional cart identifier
    #[serde(rename = "cartId")]
    pub cart_id: Option<String>,
}

/// Query parameters for the cart_totals endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartQuery {
    /// Optional cart identifier
    pub cart_id: Option<String>,
}

/// Response for cart synchronization operations
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponse {
    /// Status of the operation
    pub status: String,

    /// Cart identifier
    pub cart_id: String,

    /// Totals over the synced items
    pub totals: CartTotals,
}

/// Response for the cart_totals endpoint
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotalsResponse {
    /// Cart identifier
    pub cart_id: String,

    /// Normalized display lines for the valid items
    pub lines: Vec<CartLineView>,

    /// Derived totals
    pub totals: CartTotals,

    /// Lines excluded from the totals, with reasons
    pub rejected: Vec<RejectedLine>,
}

/// Response for the checkout endpoint
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    /// Status of the operation
    pub status: String,

    /// Cart identifier
    pub cart_id: String,

    /// Final totals of the cart that was checked out
    pub totals: CartTotals,
}
