// --- File: crates/tripholiday_auth/src/routes.rs ---

use crate::handlers::{
    admin_login_handler, admin_verify_handler, register_handler, user_login_handler,
    user_verify_handler,
};
use crate::middleware::AuthState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Creates a router containing the admin and storefront login routes.
pub fn routes(state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/auth/login", post(admin_login_handler))
        .route("/auth/verify", get(admin_verify_handler))
        .route("/user/auth/register", post(register_handler))
        .route("/user/auth/login", post(user_login_handler))
        .route("/user/auth/verify", get(user_verify_handler))
        .with_state(state)
}
