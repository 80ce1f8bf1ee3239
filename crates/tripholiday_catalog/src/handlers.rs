// --- File: crates/tripholiday_catalog/src/handlers.rs ---
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use tripholiday_auth::AuthenticatedAdmin;
use tripholiday_common::models::{Package, PackageInput, PackageSummary, PackageUpdate};
use tripholiday_common::{not_found, validation_error, ApiMessage, JsonBody, TripError};
use tripholiday_db::DbError;

use crate::logic::{
    parse_filter, toggle_message, CatalogState, PackageDetailResponse, PackageListResponse,
    PackageResponse, PackagesResponse, StatsResponse,
};

const PACKAGE_NOT_FOUND: &str = "Package not found";
const DUPLICATE_PACKAGE: &str = "Package with this ID already exists";

fn package_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// --- Public catalog ---

/// Lists every active package, popular ones first, then by price.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/packages",
    responses((status = 200, description = "Active packages with their itineraries", body = PackageListResponse)),
    tag = "Catalog"
))]
pub async fn list_packages_handler(
    State(state): State<Arc<CatalogState>>,
) -> Result<Json<PackageListResponse>, TripError> {
    let packages = state.packages.list_active().await?;
    Ok(Json(PackageListResponse::from(packages)))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/packages/{id}",
    params(("id" = String, Path, description = "Package slug, e.g. `dubai`")),
    responses(
        (status = 200, description = "Package card and itinerary", body = PackageDetailResponse),
        (status = 404, description = "Package not found")
    ),
    tag = "Catalog"
))]
pub async fn get_package_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
) -> Result<Json<PackageDetailResponse>, TripError> {
    let package = state
        .packages
        .find_by_id(&package_key(&id))
        .await?
        .filter(|p| p.active)
        .ok_or_else(|| not_found(PACKAGE_NOT_FOUND))?;

    Ok(Json(PackageDetailResponse {
        success: true,
        package: PackageSummary::from(&package),
        itinerary: package.itinerary,
    }))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/packages/filter/{filterType}/{value}",
    params(
        ("filterType" = String, Path, description = "`type`, `destination` or `travel`"),
        ("value" = String, Path, description = "Value to match, e.g. `luxury`")
    ),
    responses(
        (status = 200, description = "Matching active packages", body = PackagesResponse),
        (status = 400, description = "Invalid filter type")
    ),
    tag = "Catalog"
))]
pub async fn filter_packages_handler(
    State(state): State<Arc<CatalogState>>,
    Path((filter_type, value)): Path<(String, String)>,
) -> Result<Json<PackagesResponse>, TripError> {
    let packages = match parse_filter(&filter_type, &value)? {
        Some(filter) => state.packages.list_active_by(filter).await?,
        None => Vec::new(),
    };
    Ok(Json(PackagesResponse::from(packages)))
}

// --- Admin package management ---

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/admin/packages",
    responses(
        (status = 200, description = "All packages, newest first", body = PackagesResponse),
        (status = 401, description = "Not authorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog Admin"
))]
pub async fn admin_list_packages_handler(
    State(state): State<Arc<CatalogState>>,
) -> Result<Json<PackagesResponse>, TripError> {
    let packages = state.packages.list_all().await?;
    Ok(Json(PackagesResponse::from(packages)))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/admin/packages/{id}",
    params(("id" = String, Path, description = "Package slug")),
    responses(
        (status = 200, description = "The stored package", body = PackageResponse),
        (status = 404, description = "Package not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog Admin"
))]
pub async fn admin_get_package_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
) -> Result<Json<PackageResponse>, TripError> {
    let package = state
        .packages
        .find_by_id(&package_key(&id))
        .await?
        .ok_or_else(|| not_found(PACKAGE_NOT_FOUND))?;
    Ok(Json(PackageResponse::new(package)))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/admin/packages",
    request_body = PackageInput,
    responses(
        (status = 201, description = "Package created", body = PackageResponse),
        (status = 400, description = "Invalid package or duplicate id")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog Admin"
))]
pub async fn create_package_handler(
    State(state): State<Arc<CatalogState>>,
    Extension(AuthenticatedAdmin(admin)): Extension<AuthenticatedAdmin>,
    JsonBody(input): JsonBody<PackageInput>,
) -> Result<impl IntoResponse, TripError> {
    let package = Package::from_input(input, Utc::now())?;

    if state.packages.find_by_id(&package.id).await?.is_some() {
        return Err(validation_error(DUPLICATE_PACKAGE));
    }
    match state.packages.insert(&package).await {
        Ok(()) => {}
        Err(DbError::Duplicate(_)) => return Err(validation_error(DUPLICATE_PACKAGE)),
        Err(err) => return Err(err.into()),
    }

    info!(package = %package.id, admin = %admin.username, "Package created");
    Ok((
        StatusCode::CREATED,
        Json(PackageResponse::with_message(
            package,
            "Package created successfully",
        )),
    ))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    put,
    path = "/admin/packages/{id}",
    params(("id" = String, Path, description = "Package slug")),
    request_body = PackageUpdate,
    responses(
        (status = 200, description = "Package updated", body = PackageResponse),
        (status = 400, description = "Update leaves the package invalid"),
        (status = 404, description = "Package not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog Admin"
))]
pub async fn update_package_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
    JsonBody(update): JsonBody<PackageUpdate>,
) -> Result<Json<PackageResponse>, TripError> {
    let mut package = state
        .packages
        .find_by_id(&package_key(&id))
        .await?
        .ok_or_else(|| not_found(PACKAGE_NOT_FOUND))?;

    package.apply_update(update, Utc::now())?;
    if !state.packages.update(&package).await? {
        return Err(not_found(PACKAGE_NOT_FOUND));
    }

    Ok(Json(PackageResponse::with_message(
        package,
        "Package updated successfully",
    )))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/admin/packages/{id}",
    params(("id" = String, Path, description = "Package slug")),
    responses(
        (status = 200, description = "Package deleted", body = ApiMessage),
        (status = 403, description = "Only a superadmin may delete packages"),
        (status = 404, description = "Package not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog Admin"
))]
pub async fn delete_package_handler(
    State(state): State<Arc<CatalogState>>,
    Extension(AuthenticatedAdmin(admin)): Extension<AuthenticatedAdmin>,
    Path(id): Path<String>,
) -> Result<Json<ApiMessage>, TripError> {
    let id = package_key(&id);
    if !state.packages.delete(&id).await? {
        return Err(not_found(PACKAGE_NOT_FOUND));
    }
    info!(package = %id, admin = %admin.username, "Package deleted");
    Ok(Json(ApiMessage::ok("Package deleted successfully")))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    patch,
    path = "/admin/packages/{id}/toggle",
    params(("id" = String, Path, description = "Package slug")),
    responses(
        (status = 200, description = "Active flag flipped", body = PackageResponse),
        (status = 404, description = "Package not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog Admin"
))]
pub async fn toggle_package_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
) -> Result<Json<PackageResponse>, TripError> {
    let mut package = state
        .packages
        .find_by_id(&package_key(&id))
        .await?
        .ok_or_else(|| not_found(PACKAGE_NOT_FOUND))?;

    package.active = !package.active;
    package.updated_at = Utc::now();
    if !state.packages.update(&package).await? {
        return Err(not_found(PACKAGE_NOT_FOUND));
    }

    let message = toggle_message(package.active);
    Ok(Json(PackageResponse::with_message(package, message)))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/admin/stats",
    responses((status = 200, description = "Dashboard counters", body = StatsResponse)),
    security(("bearer_auth" = [])),
    tag = "Catalog Admin"
))]
pub async fn stats_handler(
    State(state): State<Arc<CatalogState>>,
) -> Result<Json<StatsResponse>, TripError> {
    let stats = state.packages.stats().await?;
    Ok(Json(StatsResponse {
        success: true,
        stats: stats.into(),
    }))
}
