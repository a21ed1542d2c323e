#![allow(dead_code)]

use std::sync::{Arc, OnceLock};

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use burnerhub_db::models::product::Product;
use burnerhub_db::store::{MemoryProductStore, ProductStore};
use chrono::{Duration, TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use burnerhub_api::auth::credentials::AdminCredentials;
use burnerhub_api::auth::jwt::JwtConfig;
use burnerhub_api::auth::password::hash_password;
use burnerhub_api::config::{ServerConfig, StoreBackend};
use burnerhub_api::router::build_app_router;
use burnerhub_api::state::AppState;

pub const ADMIN_EMAIL: &str = "owner@burnerhub.test";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";
pub const WHATSAPP_NUMBER: &str = "918788649590";

/// Argon2 is slow in debug builds; hash once per test binary.
fn admin_password_hash() -> &'static str {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| hash_password(ADMIN_PASSWORD).expect("hashing should succeed"))
}

/// Build a test `ServerConfig` with safe defaults and a known admin account.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_mins: 60,
        },
        admin: AdminCredentials {
            email: ADMIN_EMAIL.to_string(),
            password_hash: admin_password_hash().to_string(),
        },
        whatsapp_number: Some(WHATSAPP_NUMBER.to_string()),
        seed_sample_products: false,
        store_backend: StoreBackend::Memory,
    }
}

/// Build the full application router over an in-memory store holding `products`.
///
/// Both the public and admin handles point at the returned store, so tests
/// can inspect it directly.
pub fn build_test_app_with(
    config: ServerConfig,
    products: Vec<Product>,
) -> (Router, Arc<MemoryProductStore>) {
    let store = Arc::new(MemoryProductStore::with_products(products));
    let handle: Arc<dyn ProductStore> = store.clone();
    let state = AppState::new(Arc::clone(&handle), handle, config.clone());
    (build_app_router(state, &config), store)
}

pub fn build_test_app(products: Vec<Product>) -> (Router, Arc<MemoryProductStore>) {
    build_test_app_with(test_config(), products)
}

/// A product row created `age_days` ago.
pub fn product(name: &str, price: f64, category: &str, age_days: i64) -> Product {
    let created = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap() - Duration::days(age_days);
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: format!("{name} gas burner"),
        price,
        image_url: format!("https://img.example.com/{}.jpg", name.to_lowercase()),
        category: category.to_string(),
        features: vec!["Auto ignition".to_string()],
        created_at: created,
        updated_at: created,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should succeed")
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, empty_request(Method::GET, uri, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, empty_request(Method::GET, uri, Some(token))).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, None, body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::POST, uri, Some(token), body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, empty_request(Method::POST, uri, Some(token))).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, None, body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, Some(token), body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, empty_request(Method::DELETE, uri, None)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, empty_request(Method::DELETE, uri, Some(token))).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Log in as the configured admin and return the access token.
pub async fn login(app: Router) -> String {
    let body = serde_json::json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD });
    let response = post_json(app, "/api/admin/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["access_token"].as_str().unwrap().to_string()
}

/// Names of the products in a JSON array, in order.
pub fn names(products: &serde_json::Value) -> Vec<String> {
    products
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}
