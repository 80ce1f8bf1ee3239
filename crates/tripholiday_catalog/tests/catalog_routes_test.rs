use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use tripholiday_auth::{hash_password, AuthState, JwtKeys};
use tripholiday_catalog::{admin_routes, routes, CatalogState};
use tripholiday_common::models::{Admin, AdminRole};
use tripholiday_db::{DbClient, Repositories};

struct TestApp {
    router: Router,
    superadmin_token: String,
    admin_token: String,
}

async fn test_app() -> TestApp {
    let path = std::env::temp_dir().join(format!(
        "tripholiday-catalog-{}.db",
        uuid::Uuid::new_v4().simple()
    ));
    let client = DbClient::from_url(&format!("sqlite://{}", path.display()))
        .await
        .expect("sqlite pool");
    let repositories = Repositories::sql(client);
    repositories.init_schema().await.expect("schema");

    let auth = Arc::new(AuthState {
        keys: Arc::new(JwtKeys::new("catalog-secret", Duration::hours(1))),
        admins: repositories.admins.clone(),
        users: repositories.users.clone(),
    });

    let mut tokens = Vec::new();
    for (username, role) in [("boss", AdminRole::Superadmin), ("staff", AdminRole::Admin)] {
        let now = Utc::now();
        let admin = Admin {
            id: format!("{}-id", username),
            username: username.to_string(),
            email: format!("{}@tripholiday.com", username),
            password_hash: hash_password("Admin@123").unwrap(),
            name: username.to_string(),
            role,
            active: true,
            created_at: now,
            updated_at: now,
        };
        repositories.admins.insert(&admin).await.unwrap();
        tokens.push(auth.keys.issue(&admin.id, username, role.as_str()).unwrap());
    }

    let state = Arc::new(CatalogState {
        packages: repositories.packages.clone(),
    });
    let router = routes(state.clone()).merge(admin_routes(state, auth));

    TestApp {
        router,
        superadmin_token: tokens.remove(0),
        admin_token: tokens.remove(0),
    }
}

async fn call(
    app: &TestApp,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
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

fn package_body(id: &str, price: f64, package_type: &str, popular: bool) -> Value {
    json!({
        "id": id,
        "title": format!("{} trip", id),
        "description": "Hand-picked stays and transfers",
        "image": format!("images/{}.jpg", id),
        "price": price,
        "duration": 5,
        "type": package_type,
        "destination": "international",
        "travel": "family",
        "popular": popular,
        "tags": ["Visa", "Transfers"],
        "itinerary": {
            "title": format!("{} itinerary", id),
            "subtitle": "Day by day",
            "days": [{"day": 1, "title": "Arrival", "description": "Airport pickup", "highlights": []}]
        }
    })
}

#[tokio::test]
async fn test_admin_routes_need_a_token() {
    let app = test_app().await;
    let (status, body) = call(&app, Method::GET, "/admin/packages", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Not authorized to access this route");
}

#[tokio::test]
async fn test_package_lifecycle() {
    let app = test_app().await;
    let boss = app.superadmin_token.clone();

    let (status, body) = call(
        &app,
        Method::POST,
        "/admin/packages",
        Some(&boss),
        Some(package_body("Dubai", 45999.0, "luxury", true)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Package created successfully");
    assert_eq!(body["package"]["id"], "dubai");
    assert_eq!(body["package"]["durationText"], "5 Days / 4 Nights");

    let (status, body) = call(
        &app,
        Method::POST,
        "/admin/packages",
        Some(&boss),
        Some(package_body("dubai", 1.0, "budget", false)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Package with this ID already exists");

    call(
        &app,
        Method::POST,
        "/admin/packages",
        Some(&boss),
        Some(package_body("bali", 29999.0, "premium", false)),
    )
    .await;
    call(
        &app,
        Method::POST,
        "/admin/packages",
        Some(&boss),
        Some(package_body("goa", 12999.0, "budget", false)),
    )
    .await;

    // Popular first, then cheapest.
    let (status, body) = call(&app, Method::GET, "/packages", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    let ids: Vec<&str> = body["packages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["dubai", "goa", "bali"]);
    assert_eq!(body["itineraries"]["bali"]["title"], "bali itinerary");

    let (status, body) = call(
        &app,
        Method::PUT,
        "/admin/packages/goa",
        Some(&app.admin_token),
        Some(json!({"id": "renamed", "price": 9999, "popular": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["package"]["id"], "goa");
    assert_eq!(body["package"]["price"], 9999.0);

    let (status, body) = call(
        &app,
        Method::PUT,
        "/admin/packages/goa",
        Some(&boss),
        Some(json!({"title": "   "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, body) = call(&app, Method::PATCH, "/admin/packages/bali/toggle", Some(&boss), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Package deactivated successfully");

    let (status, body) = call(&app, Method::GET, "/packages/bali", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Package not found");

    let (status, body) = call(&app, Method::GET, "/admin/packages/bali", Some(&boss), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["package"]["active"], false);

    let (status, body) = call(&app, Method::GET, "/packages/filter/type/luxury", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["packages"][0]["id"], "dubai");

    let (status, body) = call(&app, Method::GET, "/packages/filter/price/100", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid filter type");

    let (status, body) = call(&app, Method::GET, "/admin/stats", Some(&boss), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stats"]["totalPackages"], 3);
    assert_eq!(body["stats"]["activePackages"], 2);
    assert_eq!(body["stats"]["inactivePackages"], 1);
    assert_eq!(body["stats"]["popularPackages"], 2);
}

#[tokio::test]
async fn test_only_superadmin_deletes() {
    let app = test_app().await;
    call(
        &app,
        Method::POST,
        "/admin/packages",
        Some(&app.superadmin_token),
        Some(package_body("kerala", 21999.0, "premium", false)),
    )
    .await;

    let (status, body) = call(&app, Method::DELETE, "/admin/packages/kerala", Some(&app.admin_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Role admin is not authorized to access this route");

    let (status, body) = call(&app, Method::DELETE, "/admin/packages/kerala", Some(&app.superadmin_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Package deleted successfully");

    let (status, _) = call(&app, Method::DELETE, "/admin/packages/kerala", Some(&app.superadmin_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
