// --- File: crates/tripholiday_users/src/logic.rs ---
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tripholiday_common::models::{non_blank, Package, User, UserProfile, MAX_FAVORITES};
use tripholiday_common::{validation_error, TripError};
use tripholiday_db::{PackageRepository, UserRepository};

#[derive(Clone)]
pub struct UsersState {
    pub users: Arc<dyn UserRepository>,
    pub packages: Arc<dyn PackageRepository>,
}

/// Body of `PUT /api/user/profile`. Anything else in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PasswordChange {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProfileResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FavoritesResponse {
    pub success: bool,
    pub message: String,
    /// Package ids, oldest first.
    pub favorites: Vec<String>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FavoritePackagesResponse {
    pub success: bool,
    pub count: usize,
    pub packages: Vec<Package>,
}

/// `name` only when non-blank, `phone` trimmed (blank clears it), `address` when given.
pub fn apply_profile_update(user: &mut User, update: ProfileUpdate, now: DateTime<Utc>) {
    if let Some(name) = non_blank(update.name) {
        user.name = name;
    }
    if let Some(phone) = update.phone {
        user.phone = non_blank(Some(phone));
    }
    if let Some(address) = non_blank(update.address) {
        user.address = Some(address);
    }
    user.updated_at = now;
}

/// Appends `package_id`, keeping the list free of duplicates and bounded.
pub fn add_favorite(user: &mut User, package_id: &str) -> Result<(), TripError> {
    if user.favorites.iter().any(|id| id == package_id) {
        return Err(validation_error("Package is already in favorites"));
    }
    if user.favorites.len() >= MAX_FAVORITES {
        return Err(validation_error(format!(
            "You have reached the maximum number of favorites ({})",
            MAX_FAVORITES
        )));
    }
    user.favorites.push(package_id.to_string());
    Ok(())
}

/// Removing an id that isn't there is not an error.
pub fn remove_favorite(user: &mut User, package_id: &str) {
    user.favorites.retain(|id| id != package_id);
}
