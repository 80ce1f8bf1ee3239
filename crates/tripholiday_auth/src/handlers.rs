// --- File: crates/tripholiday_auth/src/handlers.rs ---
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use tripholiday_common::models::{non_blank, AdminProfile, User, UserProfile};
use tripholiday_common::{JsonBody, TripError};
use tripholiday_db::DbError;
use uuid::Uuid;

use crate::error::AuthError;
use crate::jwt::USER_ROLE;
use crate::middleware::{token_from_headers, AuthState};
use crate::password::{hash_password_async, verify_password_async, MIN_PASSWORD_LEN};

const DUPLICATE_EMAIL: &str = "User already exists with this email";

#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AdminLoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AdminLoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub admin: AdminProfile,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AdminVerifyResponse {
    pub success: bool,
    pub admin: AdminProfile,
}

#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserLoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserAuthResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserVerifyResponse {
    pub success: bool,
    pub user: UserProfile,
}

/// Very loose shape check; deliverability is the mail server's problem.
pub(crate) fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && domain.contains('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Admin panel login.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/auth/login",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AdminLoginResponse),
        (status = 400, description = "Username or password missing"),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Account has been deactivated")
    ),
    tag = "Auth"
))]
pub async fn admin_login_handler(
    State(state): State<Arc<AuthState>>,
    JsonBody(payload): JsonBody<AdminLoginRequest>,
) -> Result<Json<AdminLoginResponse>, TripError> {
    let (Some(username), Some(password)) = (
        non_blank(payload.username),
        payload.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(AuthError::BadRequest("Please provide username and password".into()).into());
    };

    let admin = state
        .admins
        .find_by_username(&username.to_lowercase())
        .await
        .map_err(AuthError::from)?
        .ok_or(AuthError::InvalidCredentials)?;

    if !admin.active {
        return Err(AuthError::Deactivated.into());
    }
    if !verify_password_async(password, admin.password_hash.clone()).await {
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = state
        .keys
        .issue(&admin.id, &admin.username, admin.role.as_str())?;
    info!(admin = %admin.username, "Admin logged in");

    Ok(Json(AdminLoginResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
        admin: AdminProfile::from(&admin),
    }))
}

/// Checks an admin token without going through the guard, so the panel can
/// tell "no token" from "bad token".
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/auth/verify",
    responses(
        (status = 200, description = "Token is valid", body = AdminVerifyResponse),
        (status = 401, description = "No token provided, invalid or expired token")
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
))]
pub async fn admin_verify_handler(
    State(state): State<Arc<AuthState>>,
    headers: HeaderMap,
) -> Result<Json<AdminVerifyResponse>, TripError> {
    let token = token_from_headers(&headers)
        .ok_or_else(|| AuthError::Unauthorized("No token provided".into()))?;
    let claims = state
        .keys
        .verify(token)
        .map_err(|_| AuthError::Unauthorized("Invalid or expired token".into()))?;
    if claims.role == USER_ROLE {
        return Err(AuthError::Unauthorized("Invalid token".into()).into());
    }

    match state.admins.find_by_id(&claims.id).await.map_err(AuthError::from)? {
        Some(admin) if admin.active => Ok(Json(AdminVerifyResponse {
            success: true,
            admin: AdminProfile::from(&admin),
        })),
        _ => Err(AuthError::Unauthorized("Invalid token".into()).into()),
    }
}

/// Storefront sign-up. Logs the new user straight in.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/user/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = UserAuthResponse),
        (status = 400, description = "Missing fields, short password or email already registered")
    ),
    tag = "User Auth"
))]
pub async fn register_handler(
    State(state): State<Arc<AuthState>>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> Result<impl IntoResponse, TripError> {
    let (Some(name), Some(email), Some(password)) = (
        non_blank(payload.name),
        non_blank(payload.email),
        payload.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(AuthError::BadRequest("Please provide name, email and password".into()).into());
    };

    let email = email.to_lowercase();
    if !looks_like_email(&email) {
        return Err(AuthError::BadRequest("Please provide a valid email address".into()).into());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::BadRequest(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LEN
        ))
        .into());
    }

    if state
        .users
        .find_by_email(&email)
        .await
        .map_err(AuthError::from)?
        .is_some()
    {
        return Err(AuthError::BadRequest(DUPLICATE_EMAIL.into()).into());
    }

    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4().simple().to_string(),
        name,
        email,
        password_hash: hash_password_async(password).await?,
        phone: non_blank(payload.phone),
        address: None,
        favorites: Vec::new(),
        active: true,
        created_at: now,
        updated_at: now,
    };

    // A concurrent sign-up can still win the unique index.
    match state.users.insert(&user).await {
        Ok(()) => {}
        Err(DbError::Duplicate(_)) => {
            return Err(AuthError::BadRequest(DUPLICATE_EMAIL.into()).into());
        }
        Err(err) => return Err(AuthError::from(err).into()),
    }

    let token = state.keys.issue(&user.id, &user.email, USER_ROLE)?;
    info!(user_id = %user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(UserAuthResponse {
            success: true,
            message: "User registered successfully".to_string(),
            token,
            user: UserProfile::from(&user),
        }),
    ))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/user/auth/login",
    request_body = UserLoginRequest,
    responses(
        (status = 200, description = "Logged in", body = UserAuthResponse),
        (status = 400, description = "Email or password missing"),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Account has been deactivated")
    ),
    tag = "User Auth"
))]
pub async fn user_login_handler(
    State(state): State<Arc<AuthState>>,
    JsonBody(payload): JsonBody<UserLoginRequest>,
) -> Result<Json<UserAuthResponse>, TripError> {
    let (Some(email), Some(password)) = (
        non_blank(payload.email),
        payload.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(AuthError::BadRequest("Please provide email and password".into()).into());
    };

    let user = state
        .users
        .find_by_email(&email.to_lowercase())
        .await
        .map_err(AuthError::from)?
        .ok_or(AuthError::InvalidCredentials)?;

    if !user.active {
        return Err(AuthError::Deactivated.into());
    }
    if !verify_password_async(password, user.password_hash.clone()).await {
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = state.keys.issue(&user.id, &user.email, USER_ROLE)?;

    Ok(Json(UserAuthResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
        user: UserProfile::from(&user),
    }))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/user/auth/verify",
    responses(
        (status = 200, description = "Token is valid", body = UserVerifyResponse),
        (status = 401, description = "No token provided, invalid or expired token")
    ),
    security(("bearer_auth" = [])),
    tag = "User Auth"
))]
pub async fn user_verify_handler(
    State(state): State<Arc<AuthState>>,
    headers: HeaderMap,
) -> Result<Json<UserVerifyResponse>, TripError> {
    let token = token_from_headers(&headers)
        .ok_or_else(|| AuthError::Unauthorized("No token provided".into()))?;
    let claims = state
        .keys
        .verify(token)
        .map_err(|_| AuthError::Unauthorized("Invalid or expired token".into()))?;
    if claims.role != USER_ROLE {
        return Err(AuthError::Unauthorized("Invalid token".into()).into());
    }

    match state.users.find_by_id(&claims.id).await.map_err(AuthError::from)? {
        Some(user) if user.active => Ok(Json(UserVerifyResponse {
            success: true,
            user: UserProfile::from(&user),
        })),
        _ => Err(AuthError::Unauthorized("Invalid token".into()).into()),
    }
}
