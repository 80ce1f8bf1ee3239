use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use tripholiday_auth::{hash_password, AuthState, JwtKeys, USER_ROLE};
use tripholiday_common::models::{Package, PackageInput, User};
use tripholiday_db::{DbClient, Repositories};
use tripholiday_users::{routes, UsersState};

struct TestApp {
    router: Router,
    token: String,
}

fn package(id: &str, active: bool) -> Package {
    let input: PackageInput = serde_json::from_value(json!({
        "id": id,
        "title": format!("{} holiday", id),
        "description": "Stays and sightseeing",
        "image": format!("images/{}.jpg", id),
        "price": 15999,
        "duration": 3,
        "type": "budget",
        "destination": "india",
        "travel": "couple",
        "active": active,
        "itinerary": {"title": "Plan", "subtitle": "Three days", "days": []}
    }))
    .unwrap();
    Package::from_input(input, Utc::now()).unwrap()
}

async fn test_app() -> TestApp {
    let path = std::env::temp_dir().join(format!(
        "tripholiday-users-{}.db",
        uuid::Uuid::new_v4().simple()
    ));
    let client = DbClient::from_url(&format!("sqlite://{}", path.display()))
        .await
        .expect("sqlite pool");
    let repositories = Repositories::sql(client);
    repositories.init_schema().await.expect("schema");

    for (id, active) in [("dubai", true), ("goa", true), ("ladakh", false)] {
        repositories.packages.insert(&package(id, active)).await.unwrap();
    }

    let now = Utc::now();
    let user = User {
        id: "user-1".into(),
        name: "Asha".into(),
        email: "asha@example.com".into(),
        password_hash: hash_password("secret1").unwrap(),
        phone: None,
        address: None,
        favorites: Vec::new(),
        active: true,
        created_at: now,
        updated_at: now,
    };
    repositories.users.insert(&user).await.unwrap();

    let auth = Arc::new(AuthState {
        keys: Arc::new(JwtKeys::new("users-secret", Duration::hours(1))),
        admins: repositories.admins.clone(),
        users: repositories.users.clone(),
    });
    let token = auth.keys.issue(&user.id, &user.email, USER_ROLE).unwrap();

    let state = Arc::new(UsersState {
        users: repositories.users.clone(),
        packages: repositories.packages.clone(),
    });

    TestApp {
        router: routes(state, auth),
        token,
    }
}

async fn call(app: &TestApp, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", app.token));
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_requires_user_token() {
    let app = test_app().await;
    let request = Request::builder()
        .uri("/user/profile")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_read_and_update() {
    let app = test_app().await;

    let (status, body) = call(&app, Method::GET, "/user/profile", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "asha@example.com");
    assert!(body["user"].get("passwordHash").is_none());

    let (status, body) = call(
        &app,
        Method::PUT,
        "/user/profile",
        Some(json!({"name": "Asha Rao", "phone": " 9876543210 ", "email": "hijack@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Profile updated successfully");
    assert_eq!(body["user"]["name"], "Asha Rao");
    assert_eq!(body["user"]["phone"], "9876543210");
    assert_eq!(body["user"]["email"], "asha@example.com");

    let (_, body) = call(&app, Method::GET, "/user/profile", None).await;
    assert_eq!(body["user"]["name"], "Asha Rao");
}

#[tokio::test]
async fn test_password_change() {
    let app = test_app().await;

    let (status, body) = call(
        &app,
        Method::PUT,
        "/user/profile/password",
        Some(json!({"currentPassword": "secret1"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please provide current password and new password");

    let (status, body) = call(
        &app,
        Method::PUT,
        "/user/profile/password",
        Some(json!({"currentPassword": "secret1", "newPassword": "abc"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "New password must be at least 6 characters long");

    let (status, body) = call(
        &app,
        Method::PUT,
        "/user/profile/password",
        Some(json!({"currentPassword": "wrong-one", "newPassword": "secret2"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Current password is incorrect");

    let (status, body) = call(
        &app,
        Method::PUT,
        "/user/profile/password",
        Some(json!({"currentPassword": "secret1", "newPassword": "secret2"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Password changed successfully");

    let (status, _) = call(
        &app,
        Method::PUT,
        "/user/profile/password",
        Some(json!({"currentPassword": "secret1", "newPassword": "secret3"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_favorites() {
    let app = test_app().await;

    let (status, body) = call(&app, Method::POST, "/user/favorites/dubai", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Package added to favorites");
    assert_eq!(body["favorites"], json!(["dubai"]));

    let (status, body) = call(&app, Method::POST, "/user/favorites/dubai", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Package is already in favorites");

    let (status, body) = call(&app, Method::POST, "/user/favorites/ladakh", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Package not found or is inactive");

    call(&app, Method::POST, "/user/favorites/goa", None).await;

    let (status, body) = call(&app, Method::GET, "/user/favorites", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);

    let (status, body) = call(&app, Method::DELETE, "/user/favorites/dubai", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Package removed from favorites");
    assert_eq!(body["favorites"], json!(["goa"]));
}
