//! Navigation Menu Domain Module
//!
//! This module contains the menu-assembly logic, including:
//! - Domain models (MenuItem, MenuTreeNode, inputs, responses)
//! - The pure tree-builder core
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used items for convenience
pub use handlers::routes;
pub use helpers::build_menu_tree;
pub use models::{MenuItem, MenuTreeNode};
