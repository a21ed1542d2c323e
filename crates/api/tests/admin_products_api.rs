//! HTTP-level integration tests for `/api/admin/products`.

mod common;

use axum::http::StatusCode;
use burnerhub_core::catalog::ProductQuery;
use burnerhub_db::store::ProductStore;
use common::{
    body_json, build_test_app, delete, delete_auth, get, get_auth, login, names, post_json,
    post_json_auth, product, put_json, put_json_auth,
};

fn new_product_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Premium Gas Burner Pro",
        "description": "High-efficiency 4-burner gas stove",
        "price": "15999",
        "image_url": "https://img.example.com/pro.jpg",
        "category": "4-burner",
        "features": ["Auto ignition", "", "   ", "Safety valve"]
    })
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mutations_without_token_are_401() {
    let existing = product("Pro", 15999.0, "4-burner", 1);
    let id = existing.id;
    let (app, store) = build_test_app(vec![existing]);

    let response = post_json(app.clone(), "/api/admin/products", new_product_body()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = put_json(
        app.clone(),
        "/api/admin/products",
        serde_json::json!({ "id": id, "name": "Hacked" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = delete(app.clone(), &format!("/api/admin/products?id={id}")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get(app, "/api/admin/products").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");

    let remaining = store.list(&ProductQuery::default()).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Pro");
}

#[tokio::test]
async fn garbage_token_is_401() {
    let (app, _) = build_test_app(vec![]);
    let response = get_auth(app, "/api/admin/products", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// List / create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_returns_newest_first_in_data_envelope() {
    let (app, _) = build_test_app(vec![
        product("Old", 1.0, "2-burner", 9),
        product("New", 1.0, "2-burner", 0),
    ]);
    let token = login(app.clone()).await;

    let response = get_auth(app, "/api/admin/products", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(names(&body_json(response).await["data"]), vec!["New", "Old"]);
}

#[tokio::test]
async fn create_parses_price_and_drops_blank_features() {
    let (app, store) = build_test_app(vec![]);
    let token = login(app.clone()).await;

    let response = post_json_auth(app, "/api/admin/products", new_product_body(), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let created = &json["data"][0];
    assert_eq!(created["price"], 15999.0);
    assert_eq!(
        created["features"],
        serde_json::json!(["Auto ignition", "Safety valve"])
    );
    assert!(created["id"].is_string());
    assert_eq!(created["created_at"], created["updated_at"]);

    let stored = store.list(&ProductQuery::default()).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].features, vec!["Auto ignition", "Safety valve"]);
}

#[tokio::test]
async fn create_rejects_invalid_payloads() {
    let (app, store) = build_test_app(vec![]);
    let token = login(app.clone()).await;

    let mut negative = new_product_body();
    negative["price"] = serde_json::json!(-10);
    let response = post_json_auth(app.clone(), "/api/admin/products", negative, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let mut unparsable = new_product_body();
    unparsable["price"] = serde_json::json!("fifteen");
    let response = post_json_auth(app.clone(), "/api/admin/products", unparsable, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut blank_name = new_product_body();
    blank_name["name"] = serde_json::json!("  ");
    let response = post_json_auth(app, "/api/admin/products", blank_name, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(store.count().await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_without_id_is_rejected_and_nothing_changes() {
    let existing = product("Pro", 15999.0, "4-burner", 1);
    let (app, store) = build_test_app(vec![existing.clone()]);
    let token = login(app.clone()).await;

    let response = put_json_auth(
        app,
        "/api/admin/products",
        serde_json::json!({ "name": "Renamed" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Product ID is required");

    let stored = store.find_by_id(existing.id).await.unwrap().unwrap();
    assert_eq!(stored, existing);
}

#[tokio::test]
async fn update_applies_present_fields_only() {
    let existing = product("Pro", 15999.0, "4-burner", 1);
    let (app, store) = build_test_app(vec![existing.clone()]);
    let token = login(app.clone()).await;

    let response = put_json_auth(
        app,
        "/api/admin/products",
        serde_json::json!({
            "id": existing.id,
            "name": "Pro Max",
            "features": ["Brass burners", ""]
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["name"], "Pro Max");

    let stored = store.find_by_id(existing.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Pro Max");
    assert_eq!(stored.price, existing.price);
    assert_eq!(stored.features, vec!["Brass burners"]);
    assert_eq!(stored.created_at, existing.created_at);
    assert!(stored.updated_at > existing.updated_at);
}

#[tokio::test]
async fn update_with_bad_or_unknown_id() {
    let (app, _) = build_test_app(vec![product("Pro", 15999.0, "4-burner", 1)]);
    let token = login(app.clone()).await;

    let response = put_json_auth(
        app.clone(),
        "/api/admin/products",
        serde_json::json!({ "id": "17", "name": "X" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json_auth(
        app,
        "/api/admin/products",
        serde_json::json!({ "id": uuid::Uuid::new_v4(), "name": "X" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_without_id_is_rejected_and_nothing_is_removed() {
    let (app, store) = build_test_app(vec![product("Pro", 15999.0, "4-burner", 1)]);
    let token = login(app.clone()).await;

    let response = delete_auth(app.clone(), "/api/admin/products", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = delete_auth(app, "/api/admin/products?id=", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn delete_removes_the_product() {
    let keep = product("Mini", 8999.0, "2-burner", 2);
    let doomed = product("Pro", 15999.0, "4-burner", 1);
    let doomed_id = doomed.id;
    let (app, store) = build_test_app(vec![keep.clone(), doomed]);
    let token = login(app.clone()).await;

    let response = delete_auth(
        app.clone(),
        &format!("/api/admin/products?id={doomed_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Product deleted successfully"
    );

    let remaining = store.list(&ProductQuery::default()).await.unwrap();
    assert_eq!(remaining, vec![keep]);

    let response = delete_auth(app, &format!("/api/admin/products?id={doomed_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Malformed payloads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_with_missing_field_is_400_json() {
    let (app, store) = build_test_app(vec![]);
    let token = login(app.clone()).await;

    let mut body = new_product_body();
    body.as_object_mut().unwrap().remove("name");
    let response = post_json_auth(app, "/api/admin/products", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("name"));
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn update_with_numeric_id_is_400_json() {
    let existing = product("Pro", 15999.0, "4-burner", 1);
    let (app, store) = build_test_app(vec![existing.clone()]);
    let token = login(app.clone()).await;

    let response = put_json_auth(
        app,
        "/api/admin/products",
        serde_json::json!({ "id": 5, "name": "Renamed" }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(store.find_by_id(existing.id).await.unwrap(), Some(existing));
}
