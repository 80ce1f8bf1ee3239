// --- File: crates/tripholiday_auth/src/lib.rs ---
//! Authentication for the Trip Holiday backend.
//!
//! Argon2 password hashes, HS256 session tokens, the admin and storefront
//! login routes, and the `require_admin` / `require_user` / `require_role`
//! middleware other crates layer onto their routers.

pub mod doc;
pub mod error;
pub mod handlers;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod routes;

#[cfg(test)]
mod handlers_test;

pub use error::AuthError;
pub use jwt::{Claims, JwtKeys, USER_ROLE};
pub use middleware::{
    require_admin, require_role, require_user, AuthState, AuthenticatedAdmin, AuthenticatedUser,
    RoleGuard,
};
pub use password::{
    hash_password, hash_password_async, verify_password, verify_password_async, MIN_PASSWORD_LEN,
};
pub use routes::routes;
