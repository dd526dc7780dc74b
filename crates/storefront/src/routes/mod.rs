//! HTTP route handlers for the storefront.
//!
//! Displays respond with JSON documents and mutations follow the
//! create-then-redirect pattern. There is no template layer.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home greeting
//! GET  /usuario/{nombre}       - Personalized greeting
//! GET  /health                 - Health check (in main.rs)
//!
//! # Products
//! GET  /productos              - Product list
//! POST /productos              - Create product
//! GET  /productos/{id}         - Product detail
//! POST /productos/{id}         - Update product
//! POST /productos/{id}/delete  - Delete product
//!
//! # Categories
//! GET  /categorias             - Category list
//! POST /categorias             - Create category
//! GET  /categorias/{id}        - Category detail
//! POST /categorias/{id}        - Update category
//! POST /categorias/{id}/delete - Delete category
//!
//! # Sales
//! GET  /ventas                 - Sales ledger
//! POST /ventas                 - Record a sale
//!
//! # Auth
//! POST /registro               - Register
//! POST /login                  - Login
//! POST /logout                 - Logout
//! GET  /dashboard              - Current user (requires auth)
//! ```

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod home;
pub mod products;
pub mod sales;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/registro", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/dashboard", get(dashboard::show))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/{id}", get(products::show).post(products::update))
        .route("/{id}/delete", post(products::delete))
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index).post(categories::create))
        .route("/{id}", get(categories::show).post(categories::update))
        .route("/{id}/delete", post(categories::delete))
}

/// Create the sales routes router.
pub fn sale_routes() -> Router<AppState> {
    Router::new().route("/", get(sales::index).post(sales::create))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home + greeting
        .route("/", get(home::home))
        .route("/usuario/{nombre}", get(home::greet))
        // Product routes
        .nest("/productos", product_routes())
        // Category routes
        .nest("/categorias", category_routes())
        // Sales ledger routes
        .nest("/ventas", sale_routes())
        // Auth routes
        .merge(auth_routes())
}
