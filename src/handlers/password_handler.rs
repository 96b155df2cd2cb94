//! Password endpoint handlers.

use axum::{routing::get, Router};

use crate::generator;

/// Create password routes.
pub fn password_routes() -> Router {
    Router::new().route("/", get(generate_password))
}

/// Generate a fresh password and return it as plain text.
///
/// The password is created per request and never stored.
async fn generate_password() -> String {
    format!("Randomly Generated Password: {}\n", generator::generate())
}
