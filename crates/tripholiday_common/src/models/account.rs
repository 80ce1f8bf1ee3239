// --- File: crates/tripholiday_common/src/models/account.rs ---
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

string_enum! {
    AdminRole, "admin role" {
        Admin => "admin",
        Superadmin => "superadmin",
    }
}

/// An admin panel account. `password_hash` is a PHC string and never
/// serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: AdminRole,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What the API reveals about an admin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AdminProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub name: String,
    pub role: AdminRole,
}

impl From<&Admin> for AdminProfile {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id.clone(),
            username: admin.username.clone(),
            email: admin.email.clone(),
            name: admin.name.clone(),
            role: admin.role,
        }
    }
}

/// A storefront customer account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Package ids, oldest first.
    pub favorites: Vec<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Upper bound on `User::favorites`.
pub const MAX_FAVORITES: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub favorites: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
            favorites: user.favorites.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
