// --- File: crates/tripholiday_auth/src/doc.rs ---
#![cfg(feature = "openapi")]
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handlers::{
    AdminLoginRequest, AdminLoginResponse, AdminVerifyResponse, RegisterRequest,
    UserAuthResponse, UserLoginRequest, UserVerifyResponse,
};

/// Registers the `bearer_auth` scheme the guarded routes refer to.
pub struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::admin_login_handler,
        crate::handlers::admin_verify_handler,
        crate::handlers::register_handler,
        crate::handlers::user_login_handler,
        crate::handlers::user_verify_handler
    ),
    components(
        schemas(
            AdminLoginRequest, AdminLoginResponse, AdminVerifyResponse,
            RegisterRequest, UserLoginRequest, UserAuthResponse, UserVerifyResponse,
            tripholiday_common::models::AdminProfile,
            tripholiday_common::models::UserProfile
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "Auth", description = "Admin panel login"),
        (name = "User Auth", description = "Storefront customer accounts")
    )
)]
pub struct AuthApiDoc;
