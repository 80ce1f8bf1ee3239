// --- File: crates/tripholiday_users/src/doc.rs ---
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    FavoritePackagesResponse, FavoritesResponse, PasswordChange, ProfileResponse, ProfileUpdate,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::get_profile_handler,
        crate::handlers::update_profile_handler,
        crate::handlers::change_password_handler,
        crate::handlers::add_favorite_handler,
        crate::handlers::remove_favorite_handler,
        crate::handlers::list_favorites_handler
    ),
    components(
        schemas(
            ProfileUpdate, PasswordChange, ProfileResponse, FavoritesResponse,
            FavoritePackagesResponse, tripholiday_common::models::UserProfile
        )
    ),
    modifiers(&tripholiday_auth::doc::BearerAuth),
    tags(
        (name = "User Profile", description = "The signed-in customer's account"),
        (name = "User Favorites", description = "Saved packages")
    )
)]
pub struct UsersApiDoc;
