// --- File: crates/services/tripholiday_backend/src/app.rs ---
//! Router assembly: every feature router under `/api`, the banner and the
//! endpoint catalog, static directories, CORS and request tracing.
use axum::{routing::get, Json, Router};
use http::{header, HeaderValue, Method};
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tripholiday_common::{not_found, TripError};
use tripholiday_config::CorsConfig;

use crate::app_state::AppState;

pub const API_VERSION: &str = "1.0.0";

/// One row of `GET /api/docs`.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    pub auth: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

fn endpoint(
    method: &'static str,
    path: &'static str,
    description: &'static str,
    auth: bool,
) -> EndpointDoc {
    EndpointDoc {
        method,
        path,
        description,
        auth,
        body: None,
    }
}

/// The endpoint catalog served at `GET /api/docs`.
pub fn endpoint_catalog() -> Vec<EndpointDoc> {
    let with_body = |doc: EndpointDoc, body: Value| EndpointDoc {
        body: Some(body),
        ..doc
    };

    vec![
        endpoint("GET", "/api/packages", "Get all active packages", false),
        endpoint("GET", "/api/packages/:id", "Get single package by ID", false),
        endpoint(
            "GET",
            "/api/packages/filter/:filterType/:value",
            "Filter active packages by type, destination or travel style",
            false,
        ),
        with_body(
            endpoint("POST", "/api/auth/login", "Admin login", false),
            json!({ "username": "string", "password": "string" }),
        ),
        endpoint("GET", "/api/auth/verify", "Verify admin token", true),
        endpoint(
            "GET",
            "/api/admin/packages",
            "Get all packages (including inactive)",
            true,
        ),
        endpoint("POST", "/api/admin/packages", "Create new package", true),
        endpoint("PUT", "/api/admin/packages/:id", "Update package", true),
        endpoint("DELETE", "/api/admin/packages/:id", "Delete package", true),
        endpoint(
            "PATCH",
            "/api/admin/packages/:id/toggle",
            "Toggle package active status",
            true,
        ),
        endpoint("GET", "/api/admin/stats", "Package statistics", true),
        with_body(
            endpoint("POST", "/api/user/auth/register", "User registration", false),
            json!({ "name": "string", "email": "string", "password": "string" }),
        ),
        with_body(
            endpoint("POST", "/api/user/auth/login", "User login", false),
            json!({ "email": "string", "password": "string" }),
        ),
        endpoint("GET", "/api/user/auth/verify", "Verify user token", true),
        endpoint("GET", "/api/user/profile", "Get user profile", true),
        endpoint("PUT", "/api/user/profile", "Update user profile", true),
        endpoint("PUT", "/api/user/profile/password", "Change user password", true),
        endpoint(
            "POST",
            "/api/user/favorites/:packageId",
            "Add package to favorites",
            true,
        ),
        endpoint(
            "DELETE",
            "/api/user/favorites/:packageId",
            "Remove package from favorites",
            true,
        ),
        endpoint("GET", "/api/user/favorites", "Get all favorite packages", true),
        endpoint("POST", "/api/bookings/create", "Create a booking", false),
        endpoint(
            "POST",
            "/api/bookings/create-razorpay-order",
            "Create a Razorpay order for a booking",
            false,
        ),
        endpoint(
            "POST",
            "/api/bookings/verify-payment",
            "Verify a Razorpay payment and record it",
            false,
        ),
        endpoint("GET", "/api/bookings/:bookingId", "Get a booking", false),
        endpoint(
            "GET",
            "/api/bookings/user/:email",
            "Get all bookings for a guest email",
            false,
        ),
        endpoint(
            "POST",
            "/api/bookings/send-reminder/:bookingId",
            "Send a pending payment reminder",
            false,
        ),
        endpoint(
            "PATCH",
            "/api/bookings/:bookingId/status",
            "Update booking status",
            false,
        ),
        endpoint("POST", "/api/bookings/:bookingId/cancel", "Cancel a booking", false),
    ]
}

async fn banner() -> Json<Value> {
    Json(json!({
        "message": "Trip Holiday API Server",
        "version": API_VERSION,
        "endpoints": {
            "packages": "/api/packages",
            "admin": "/admin",
            "adminAuth": "/api/auth/login",
            "userAuth": "/api/user/auth/login",
            "userRegister": "/api/user/auth/register",
            "bookings": "/api/bookings/create",
            "docs": "/api/docs"
        }
    }))
}

async fn api_docs() -> Json<Value> {
    Json(json!({
        "title": "Trip Holiday API Documentation",
        "version": API_VERSION,
        "endpoints": endpoint_catalog(),
    }))
}

async fn route_not_found() -> TripError {
    not_found("Route not found")
}

/// `*` allows any origin without credentials. Otherwise `origin` is a comma
/// separated allow-list and credentials are allowed.
pub fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origin = cors.origin.trim();
    if origin.is_empty() || origin == "*" {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = origin
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin `{}`", o);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

/// Builds the complete application router.
pub fn build_router(state: &AppState) -> Router {
    let api = Router::new()
        .route("/docs", get(api_docs))
        .merge(tripholiday_auth::routes(state.auth.clone()))
        .merge(tripholiday_catalog::routes(state.catalog_state()))
        .merge(tripholiday_catalog::admin_routes(
            state.catalog_state(),
            state.auth.clone(),
        ))
        .merge(tripholiday_users::routes(state.users_state(), state.auth.clone()))
        .merge(tripholiday_bookings::routes(state.bookings_state()));

    let mut app = Router::new()
        .route("/", get(banner))
        .nest("/api", api);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use tripholiday_auth::doc::{AuthApiDoc, BearerAuth};
        use tripholiday_bookings::doc::BookingsApiDoc;
        use tripholiday_catalog::doc::CatalogApiDoc;
        use tripholiday_users::doc::UsersApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Trip Holiday API",
                version = "1.0.0",
                description = "Travel packages, accounts and bookings"
            ),
            modifiers(&BearerAuth),
            servers((url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(AuthApiDoc::openapi());
        openapi_doc.merge(CatalogApiDoc::openapi());
        openapi_doc.merge(UsersApiDoc::openapi());
        openapi_doc.merge(BookingsApiDoc::openapi());
        info!("Adding Swagger UI at /api/swagger-ui");

        let swagger_ui = SwaggerUi::new("/api/swagger-ui").url("/api/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    if let Some(dir) = &state.config.server.admin_dir {
        info!("Serving admin panel from {}", dir);
        app = app.nest_service("/admin", ServeDir::new(dir));
    }
    if let Some(dir) = &state.config.server.uploads_dir {
        info!("Serving uploads from {}", dir);
        app = app.nest_service("/uploads", ServeDir::new(dir));
    }

    app.fallback(route_not_found)
        .layer(cors_layer(&state.config.cors))
        .layer(TraceLayer::new_for_http())
}
