// --- File: crates/tripholiday_auth/src/middleware.rs ---

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, warn};
use tripholiday_common::models::{Admin, AdminRole, User};
use tripholiday_common::TripError;
use tripholiday_db::{AdminRepository, UserRepository};

use crate::error::{AuthError, NOT_AUTHORIZED};
use crate::jwt::{bearer_token, Claims, JwtKeys, USER_ROLE};

/// Shared by the login handlers and the guards.
#[derive(Clone)]
pub struct AuthState {
    pub keys: Arc<JwtKeys>,
    pub admins: Arc<dyn AdminRepository>,
    pub users: Arc<dyn UserRepository>,
}

/// Inserted into request extensions by [`require_admin`].
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin(pub Admin);

/// Inserted into request extensions by [`require_user`].
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

pub(crate) fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    bearer_token(headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()))
}

fn decode_claims(state: &AuthState, headers: &HeaderMap) -> Result<Claims, AuthError> {
    let token = token_from_headers(headers)
        .ok_or_else(|| AuthError::Unauthorized(NOT_AUTHORIZED.to_string()))?;
    state.keys.verify(token).map_err(|e| {
        debug!("Rejected bearer token: {}", e);
        AuthError::Unauthorized(NOT_AUTHORIZED.to_string())
    })
}

async fn authenticate_admin(state: &AuthState, headers: &HeaderMap) -> Result<Admin, AuthError> {
    let claims = decode_claims(state, headers)?;
    if claims.role == USER_ROLE {
        return Err(AuthError::Unauthorized(NOT_AUTHORIZED.to_string()));
    }
    match state.admins.find_by_id(&claims.id).await? {
        Some(admin) if admin.active => Ok(admin),
        _ => Err(AuthError::Unauthorized(
            "Admin not found or inactive".to_string(),
        )),
    }
}

async fn authenticate_user(state: &AuthState, headers: &HeaderMap) -> Result<User, AuthError> {
    let claims = decode_claims(state, headers)?;
    if claims.role != USER_ROLE {
        return Err(AuthError::Unauthorized(NOT_AUTHORIZED.to_string()));
    }
    match state.users.find_by_id(&claims.id).await? {
        Some(user) if user.active => Ok(user),
        _ => Err(AuthError::Unauthorized(
            "User not found or inactive".to_string(),
        )),
    }
}

/// Axum middleware for the admin API.
///
/// Accepts `Authorization: Bearer <token>` signed for an active admin and
/// makes the account available to handlers as `Extension<AuthenticatedAdmin>`.
pub async fn require_admin(
    State(state): State<Arc<AuthState>>,
    mut req: Request,
    next: Next,
) -> Response {
    match authenticate_admin(&state, req.headers()).await {
        Ok(admin) => {
            debug!(admin = %admin.username, "Admin request authenticated");
            req.extensions_mut().insert(AuthenticatedAdmin(admin));
            next.run(req).await
        }
        Err(err) => TripError::from(err).into_response(),
    }
}

/// Axum middleware for the customer account API.
pub async fn require_user(
    State(state): State<Arc<AuthState>>,
    mut req: Request,
    next: Next,
) -> Response {
    match authenticate_user(&state, req.headers()).await {
        Ok(user) => {
            req.extensions_mut().insert(AuthenticatedUser(user));
            next.run(req).await
        }
        Err(err) => TripError::from(err).into_response(),
    }
}

/// The admin roles a route is open to. Must run after [`require_admin`].
#[derive(Debug, Clone)]
pub struct RoleGuard {
    roles: Vec<AdminRole>,
}

impl RoleGuard {
    pub fn new(roles: &[AdminRole]) -> Arc<Self> {
        Arc::new(Self {
            roles: roles.to_vec(),
        })
    }

    pub fn allows(&self, role: AdminRole) -> bool {
        self.roles.contains(&role)
    }
}

pub async fn require_role(
    State(guard): State<Arc<RoleGuard>>,
    req: Request,
    next: Next,
) -> Response {
    let role = match req.extensions().get::<AuthenticatedAdmin>() {
        Some(AuthenticatedAdmin(admin)) => admin.role,
        None => {
            warn!("Role guard reached without an authenticated admin");
            return TripError::from(AuthError::Unauthorized(NOT_AUTHORIZED.to_string()))
                .into_response();
        }
    };

    if !guard.allows(role) {
        return TripError::from(AuthError::RoleNotAllowed(role.to_string())).into_response();
    }
    next.run(req).await
}
