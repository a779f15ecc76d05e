//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartLineItem, totals, inputs, responses)
//! - The pure aggregation core (totals, effective prices, rejections)
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used items for convenience
pub use handlers::routes;
pub use helpers::{compute_cart_totals, effective_unit_price};
pub use models::{CartComputation, CartLineItem, CartTotals, ItemType, RejectReason};
