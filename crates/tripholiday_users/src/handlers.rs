// --- File: crates/tripholiday_users/src/handlers.rs ---
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use tripholiday_auth::{
    hash_password_async, verify_password_async, AuthenticatedUser, MIN_PASSWORD_LEN,
};
use tripholiday_common::models::{non_blank, User, UserProfile};
use tripholiday_common::{auth_error, not_found, validation_error, ApiMessage, JsonBody, TripError};

use crate::logic::{
    add_favorite, apply_profile_update, remove_favorite, FavoritePackagesResponse,
    FavoritesResponse, PasswordChange, ProfileResponse, ProfileUpdate, UsersState,
};

async fn save(state: &UsersState, user: &User) -> Result<(), TripError> {
    if state.users.update(user).await? {
        Ok(())
    } else {
        Err(not_found("User not found"))
    }
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/user/profile",
    responses(
        (status = 200, description = "The signed-in user", body = ProfileResponse),
        (status = 401, description = "Not authorized")
    ),
    security(("bearer_auth" = [])),
    tag = "User Profile"
))]
pub async fn get_profile_handler(
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        success: true,
        message: None,
        user: UserProfile::from(&user),
    })
}

#[cfg_attr(feature = "openapi", utoipa::path(
    put,
    path = "/user/profile",
    request_body = ProfileUpdate,
    responses((status = 200, description = "Profile updated", body = ProfileResponse)),
    security(("bearer_auth" = [])),
    tag = "User Profile"
))]
pub async fn update_profile_handler(
    State(state): State<Arc<UsersState>>,
    Extension(AuthenticatedUser(mut user)): Extension<AuthenticatedUser>,
    JsonBody(update): JsonBody<ProfileUpdate>,
) -> Result<Json<ProfileResponse>, TripError> {
    apply_profile_update(&mut user, update, Utc::now());
    save(&state, &user).await?;

    Ok(Json(ProfileResponse {
        success: true,
        message: Some("Profile updated successfully".to_string()),
        user: UserProfile::from(&user),
    }))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    put,
    path = "/user/profile/password",
    request_body = PasswordChange,
    responses(
        (status = 200, description = "Password changed", body = ApiMessage),
        (status = 400, description = "Missing fields or new password too short"),
        (status = 401, description = "Current password is incorrect")
    ),
    security(("bearer_auth" = [])),
    tag = "User Profile"
))]
pub async fn change_password_handler(
    State(state): State<Arc<UsersState>>,
    Extension(AuthenticatedUser(mut user)): Extension<AuthenticatedUser>,
    JsonBody(change): JsonBody<PasswordChange>,
) -> Result<Json<ApiMessage>, TripError> {
    let (Some(current), Some(new)) = (
        change.current_password.filter(|p| !p.is_empty()),
        change.new_password.filter(|p| !p.is_empty()),
    ) else {
        return Err(validation_error(
            "Please provide current password and new password",
        ));
    };
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err(validation_error(format!(
            "New password must be at least {} characters long",
            MIN_PASSWORD_LEN
        )));
    }
    if !verify_password_async(current, user.password_hash.clone()).await {
        return Err(auth_error("Current password is incorrect"));
    }

    user.password_hash = hash_password_async(new).await?;
    user.updated_at = Utc::now();
    save(&state, &user).await?;
    info!(user_id = %user.id, "Password changed");

    Ok(Json(ApiMessage::ok("Password changed successfully")))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/user/favorites/{packageId}",
    params(("packageId" = String, Path, description = "Package slug")),
    responses(
        (status = 200, description = "Favorite added", body = FavoritesResponse),
        (status = 400, description = "Already a favorite or the list is full"),
        (status = 404, description = "Package not found or is inactive")
    ),
    security(("bearer_auth" = [])),
    tag = "User Favorites"
))]
pub async fn add_favorite_handler(
    State(state): State<Arc<UsersState>>,
    Extension(AuthenticatedUser(mut user)): Extension<AuthenticatedUser>,
    Path(package_id): Path<String>,
) -> Result<Json<FavoritesResponse>, TripError> {
    let package_id = package_id.trim().to_lowercase();
    state
        .packages
        .find_by_id(&package_id)
        .await?
        .filter(|p| p.active)
        .ok_or_else(|| not_found("Package not found or is inactive"))?;

    add_favorite(&mut user, &package_id)?;
    user.updated_at = Utc::now();
    save(&state, &user).await?;

    Ok(Json(FavoritesResponse {
        success: true,
        message: "Package added to favorites".to_string(),
        favorites: user.favorites,
    }))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/user/favorites/{packageId}",
    params(("packageId" = String, Path, description = "Package slug")),
    responses((status = 200, description = "Favorite removed", body = FavoritesResponse)),
    security(("bearer_auth" = [])),
    tag = "User Favorites"
))]
pub async fn remove_favorite_handler(
    State(state): State<Arc<UsersState>>,
    Extension(AuthenticatedUser(mut user)): Extension<AuthenticatedUser>,
    Path(package_id): Path<String>,
) -> Result<Json<FavoritesResponse>, TripError> {
    remove_favorite(&mut user, package_id.trim());
    user.updated_at = Utc::now();
    save(&state, &user).await?;

    Ok(Json(FavoritesResponse {
        success: true,
        message: "Package removed from favorites".to_string(),
        favorites: user.favorites,
    }))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/user/favorites",
    responses((status = 200, description = "Active favorite packages", body = FavoritePackagesResponse)),
    security(("bearer_auth" = [])),
    tag = "User Favorites"
))]
pub async fn list_favorites_handler(
    State(state): State<Arc<UsersState>>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
) -> Result<Json<FavoritePackagesResponse>, TripError> {
    let packages = state.packages.list_active_by_ids(&user.favorites).await?;
    Ok(Json(FavoritePackagesResponse {
        success: true,
        count: packages.len(),
        packages,
    }))
}
