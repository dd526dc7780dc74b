//! Integration tests for Tiendita.
//!
//! These tests drive a running storefront server over HTTP and are
//! ignored by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the server
//! TIENDITA_DATABASE_URL=sqlite://tiendita-test.db \
//! TIENDITA_SESSION_SECRET=$(openssl rand -base64 32) \
//! cargo run -p tiendita-storefront
//!
//! # Run integration tests against it
//! cargo test -p tiendita-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `storefront_auth` - Registration/login/logout flow
//! - `storefront_products` - Product and category CRUD
//! - `storefront_sales` - Sales ledger

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("TIENDITA_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// Create an HTTP client that keeps session cookies and follows no redirects.
///
/// Redirect following is disabled so tests can assert on the
/// create-then-redirect pattern directly.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}
