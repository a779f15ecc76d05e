//! Travel Booking Storefront Library
//!
//! This library provides the core functionality for a travel-booking
//! storefront backend: shopping-cart aggregation and navigation-menu
//! assembly, exposed over a JSON/HTTP API.

// Domain modules
pub mod cart;
pub mod menu;

// Infrastructure
pub mod config;
pub mod router;
pub mod state;
