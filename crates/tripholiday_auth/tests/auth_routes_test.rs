use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    middleware::from_fn_with_state,
    routing::get,
    Extension, Router,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use tripholiday_auth::{
    hash_password, require_admin, require_role, require_user, routes, AuthState,
    AuthenticatedAdmin, AuthenticatedUser, JwtKeys, RoleGuard,
};
use tripholiday_common::models::{Admin, AdminRole};
use tripholiday_db::{DbClient, Repositories};

async fn auth_state() -> Arc<AuthState> {
    let path = std::env::temp_dir().join(format!(
        "tripholiday-auth-{}.db",
        uuid::Uuid::new_v4().simple()
    ));
    let client = DbClient::from_url(&format!("sqlite://{}", path.display()))
        .await
        .expect("sqlite pool");
    let repositories = Repositories::sql(client);
    repositories.init_schema().await.expect("schema");

    Arc::new(AuthState {
        keys: Arc::new(JwtKeys::new("test-secret", Duration::hours(1))),
        admins: repositories.admins.clone(),
        users: repositories.users.clone(),
    })
}

async fn seed_admin(state: &AuthState, username: &str, role: AdminRole, active: bool) -> Admin {
    let now = Utc::now();
    let admin = Admin {
        id: uuid::Uuid::new_v4().simple().to_string(),
        username: username.to_string(),
        email: format!("{}@tripholiday.com", username),
        password_hash: hash_password("Admin@123").unwrap(),
        name: "Admin User".to_string(),
        role,
        active,
        created_at: now,
        updated_at: now,
    };
    state.admins.insert(&admin).await.unwrap();
    admin
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_with_token(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_admin_login_flow() {
    let state = auth_state().await;
    seed_admin(&state, "admin", AdminRole::Superadmin, true).await;
    let app = routes(state.clone());

    let (status, body) = send(
        app.clone(),
        post_json("/auth/login", json!({"username": "ADMIN", "password": "Admin@123"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["admin"]["role"], "superadmin");
    assert!(body["admin"].get("passwordHash").is_none());
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(app.clone(), get_with_token("/auth/verify", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["admin"]["username"], "admin");

    let (status, body) = send(
        app.clone(),
        post_json("/auth/login", json!({"username": "admin", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");

    let (status, body) = send(app.clone(), post_json("/auth/login", json!({"username": "admin"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please provide username and password");

    let (status, body) = send(app.clone(), get_with_token("/auth/verify", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "No token provided");

    let (status, body) = send(app, get_with_token("/auth/verify", Some("garbage"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_deactivated_admin_cannot_log_in() {
    let state = auth_state().await;
    seed_admin(&state, "retired", AdminRole::Admin, false).await;

    let (status, body) = send(
        routes(state),
        post_json("/auth/login", json!({"username": "retired", "password": "Admin@123"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Account has been deactivated");
}

#[tokio::test]
async fn test_user_register_login_and_verify() {
    let state = auth_state().await;
    let app = routes(state);

    let (status, body) = send(
        app.clone(),
        post_json(
            "/user/auth/register",
            json!({"name": " Asha ", "email": "Asha@Example.com", "password": "secret1", "phone": "9876543210"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["email"], "asha@example.com");
    assert_eq!(body["user"]["name"], "Asha");
    assert_eq!(body["user"]["favorites"], json!([]));

    let (status, body) = send(
        app.clone(),
        post_json(
            "/user/auth/register",
            json!({"name": "Asha", "email": "asha@example.com", "password": "secret1"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User already exists with this email");

    let (status, body) = send(
        app.clone(),
        post_json(
            "/user/auth/register",
            json!({"name": "Ravi", "email": "ravi@example.com", "password": "123"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Password must be at least 6 characters long");

    let (status, body) = send(
        app.clone(),
        post_json("/user/auth/login", json!({"email": "ASHA@example.com", "password": "secret1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(app.clone(), get_with_token("/user/auth/verify", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "asha@example.com");

    // A user token is not an admin token.
    let (status, _) = send(app, get_with_token("/auth/verify", Some(&token))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

fn guarded_admin_app(state: Arc<AuthState>) -> Router {
    let superadmin_only = RoleGuard::new(&[AdminRole::Superadmin]);
    Router::new()
        .route(
            "/whoami",
            get(|Extension(AuthenticatedAdmin(admin)): Extension<AuthenticatedAdmin>| async move {
                admin.username
            }),
        )
        .route(
            "/danger",
            get(|| async { "ok" }).layer(from_fn_with_state(superadmin_only, require_role)),
        )
        .layer(from_fn_with_state(state, require_admin))
}

#[tokio::test]
async fn test_admin_guard_and_role_guard() {
    let state = auth_state().await;
    let boss = seed_admin(&state, "boss", AdminRole::Superadmin, true).await;
    let staff = seed_admin(&state, "staff", AdminRole::Admin, true).await;
    let app = guarded_admin_app(state.clone());

    let (status, body) = send(app.clone(), get_with_token("/whoami", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Not authorized to access this route");

    let (status, body) = send(app.clone(), get_with_token("/whoami", Some("not.a.jwt"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Not authorized to access this route");

    let staff_token = state.keys.issue(&staff.id, &staff.username, "admin").unwrap();
    let response = app
        .clone()
        .oneshot(get_with_token("/whoami", Some(&staff_token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"staff");

    let (status, body) = send(app.clone(), get_with_token("/danger", Some(&staff_token))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Role admin is not authorized to access this route");

    let boss_token = state.keys.issue(&boss.id, &boss.username, "superadmin").unwrap();
    let response = app
        .clone()
        .oneshot(get_with_token("/danger", Some(&boss_token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let ghost_token = state.keys.issue("missing", "ghost", "admin").unwrap();
    let (status, body) = send(app, get_with_token("/whoami", Some(&ghost_token))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Admin not found or inactive");
}

#[tokio::test]
async fn test_user_guard() {
    let state = auth_state().await;
    let app = routes(state.clone());
    let (_, body) = send(
        app,
        post_json(
            "/user/auth/register",
            json!({"name": "Meera", "email": "meera@example.com", "password": "secret1"}),
        ),
    )
    .await;
    let token = body["token"].as_str().unwrap().to_string();

    let guarded = Router::new()
        .route(
            "/me",
            get(|Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>| async move {
                user.email
            }),
        )
        .layer(from_fn_with_state(state.clone(), require_user));

    let response = guarded
        .clone()
        .oneshot(get_with_token("/me", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let ghost = state.keys.issue("nobody", "nobody@example.com", "user").unwrap();
    let (status, body) = send(guarded.clone(), get_with_token("/me", Some(&ghost))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "User not found or inactive");

    let admin_token = state.keys.issue("x", "admin", "superadmin").unwrap();
    let (status, _) = send(guarded, get_with_token("/me", Some(&admin_token))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
