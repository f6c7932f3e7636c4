//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Home page (featured products)
//! GET  /health            - Health check
//!
//! # Products
//! GET  /products/{handle} - Product detail
//!
//! # Checkout
//! POST /checkout          - Create a cart and redirect to checkout
//! ```

pub mod checkout;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/products/{handle}", get(products::show))
        .route("/checkout", post(checkout::checkout))
}
