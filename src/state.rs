//! Application State Management
//!
//! This module manages the shared in-memory state: per-session carts and
//! the flat navigation-menu record list.

use crate::cart::models::CartLineItem;
use crate::menu::models::MenuItem;
use dashmap::DashMap;
use std::sync::{Arc, RwLock};

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing carts and menu records
pub struct AppState {
    /// In-memory storage for carts, keyed by cart_id.
    /// DashMap allows concurrent access without external Mutexes.
    pub carts: DashMap<String, Vec<CartLineItem>>,

    /// The single flat menu record list, replaced wholesale on sync.
    pub menu_items: RwLock<Vec<MenuItem>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new AppState with no carts and an empty menu
    pub fn new() -> Self {
        Self {
            carts: DashMap::new(),
            menu_items: RwLock::new(Vec::new()),
        }
    }
}
