//! HTTP request handlers.

mod password_handler;

pub use password_handler::password_routes;
