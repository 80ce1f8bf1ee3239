// --- File: crates/tripholiday_users/src/routes.rs ---

use crate::handlers::{
    add_favorite_handler, change_password_handler, get_profile_handler, list_favorites_handler,
    remove_favorite_handler, update_profile_handler,
};
use crate::logic::UsersState;
use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tripholiday_auth::{require_user, AuthState};

/// Creates the signed-in customer routes. All of them sit behind the user guard.
pub fn routes(state: Arc<UsersState>, auth: Arc<AuthState>) -> Router {
    Router::new()
        .route(
            "/user/profile",
            get(get_profile_handler).put(update_profile_handler),
        )
        .route("/user/profile/password", put(change_password_handler))
        .route("/user/favorites", get(list_favorites_handler))
        .route(
            "/user/favorites/{package_id}",
            post(add_favorite_handler).delete(remove_favorite_handler),
        )
        .with_state(state)
        .layer(from_fn_with_state(auth, require_user))
}
