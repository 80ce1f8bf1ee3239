// --- File: crates/tripholiday_catalog/src/routes.rs ---

use crate::handlers::{
    admin_get_package_handler, admin_list_packages_handler, create_package_handler,
    delete_package_handler, filter_packages_handler, get_package_handler, list_packages_handler,
    stats_handler, toggle_package_handler, update_package_handler,
};
use crate::logic::CatalogState;
use axum::{
    handler::Handler,
    middleware::from_fn_with_state,
    routing::{get, patch},
    Router,
};
use std::sync::Arc;
use tripholiday_auth::{require_admin, require_role, AuthState, RoleGuard};
use tripholiday_common::models::AdminRole;

/// Public catalog routes.
pub fn routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route("/packages", get(list_packages_handler))
        .route("/packages/{id}", get(get_package_handler))
        .route(
            "/packages/filter/{filter_type}/{value}",
            get(filter_packages_handler),
        )
        .with_state(state)
}

/// Package management for the admin panel. Every route needs an admin token;
/// deleting needs a superadmin.
pub fn admin_routes(state: Arc<CatalogState>, auth: Arc<AuthState>) -> Router {
    let superadmin_only = RoleGuard::new(&[AdminRole::Superadmin]);

    Router::new()
        .route(
            "/admin/packages",
            get(admin_list_packages_handler).post(create_package_handler),
        )
        .route(
            "/admin/packages/{id}",
            get(admin_get_package_handler)
                .put(update_package_handler)
                .delete(
                    delete_package_handler.layer(from_fn_with_state(superadmin_only, require_role)),
                ),
        )
        .route("/admin/packages/{id}/toggle", patch(toggle_package_handler))
        .route("/admin/stats", get(stats_handler))
        .with_state(state)
        .layer(from_fn_with_state(auth, require_admin))
}
