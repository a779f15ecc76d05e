//! REST API handlers for shopping cart operations
//!
//! This module implements HTTP endpoints for cart synchronization, totals
//! computation, and checkout.

use super::{helpers::*, models::*};
use crate::state::SharedState;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/sync_cart", post(sync_cart))
        .route("/cart_totals", get(cart_totals))
        .route("/checkout", post(checkout))
}

/// Endpoint: POST /sync_cart
/// Updates the backend state to match the frontend cart exactly.
async fn sync_cart(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<SyncCartInput>,
) -> impl IntoResponse {
    let (session_id, is_new_session) = resolve_session_id(&headers);
    let cart_id = get_or_default_cart_id(payload.cart_id, &session_id);

    let computation = compute_cart_totals(&payload.items);
    for rejected in &computation.rejected {
        warn!(
            cart = %cart_id,
            item = %rejected.item.item_name,
            reason = %rejected.reason,
            "rejected cart line during sync"
        );
    }

    state.carts.insert(cart_id.clone(), payload.items);

    let mut response = Json(SyncResponse {
        status: "updated".to_string(),
        cart_id,
        totals: computation.totals,
    })
    .into_response();

    if is_new_session {
        append_session_cookie(&mut response, &session_id);
    }

    response
}

/// Endpoint: GET /cart_totals
/// Computes totals and the normalized display lines for a stored cart.
/// An unknown cart id yields empty zero totals rather than an error.
async fn cart_totals(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<CartQuery>,
) -> impl IntoResponse {
    let (session_id, _) = resolve_session_id(&headers);
    let cart_id = get_or_default_cart_id(query.cart_id, &session_id);

    let items = state
        .carts
        .get(&cart_id)
        .map(|entry| entry.value().clone())
        .unwrap_or_default();

    let CartComputation {
        lines,
        totals,
        rejected,
    } = compute_cart_totals(&items);

    Json(CartTotalsResponse {
        cart_id,
        lines,
        totals,
        rejected,
    })
}

/// Endpoint: POST /checkout
/// Processes checkout from the cart
async fn checkout(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<CheckoutInput>,
) -> impl IntoResponse {
    let (session_id, is_new_session) = resolve_session_id(&headers);
    let cart_id = get_or_default_cart_id(payload.cart_id, &session_id);

    let totals = match state.carts.remove(&cart_id) {
        Some((_, items)) => {
            let computation = compute_cart_totals(&items);
            info!(
                cart = %cart_id,
                subtotal = %computation.totals.subtotal,
                "checkout: {}",
                format_item_summary(&items)
            );
            computation.totals
        }
        None => CartTotals::default(),
    };

    let mut response = Json(CheckoutResponse {
        status: "checked_out".to_string(),
        cart_id,
        totals,
    })
    .into_response();

    if is_new_session {
        append_session_cookie(&mut response, &session_id);
    }

    response
}

/// Attaches the session cookie to a response for freshly minted sessions
fn append_session_cookie(response: &mut axum::response::Response, session_id: &str) {
    let cookie_val = format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, session_id);
    if let Ok(value) = cookie_val.parse() {
        response
            .headers_mut()
            .insert(axum::http::header::SET_COOKIE, value);
    }
}
