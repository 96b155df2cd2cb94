//! Route configuration.

use axum::Router;

use crate::handlers::password_routes;

/// Create the main router with all routes.
pub fn create_router() -> Router {
    Router::new().merge(password_routes())
}
