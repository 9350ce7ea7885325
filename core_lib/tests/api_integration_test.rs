use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use core_lib::config::DatabaseConfig;
use core_lib::{create_app, get_database_pool, run_migrations, AppState, DocumentStore};
use serde_json::{json, Value};
use tempfile::NamedTempFile;
use tower::ServiceExt;

async fn setup_app() -> (Router, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let config = DatabaseConfig {
        url: format!("sqlite:{}", temp_file.path().display()),
        ..DatabaseConfig::default()
    };

    let pool = get_database_pool(&config).await.unwrap();
    run_migrations(pool.clone()).await.unwrap();

    let state = AppState::new(DocumentStore::new(pool));
    (create_app(state), temp_file)
}

fn post_json(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_root_returns_service_banner() {
    let (app, _guard) = setup_app().await;

    let response = app.oneshot(get("/api/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Lead Capture API");
}

#[tokio::test]
async fn test_create_lead_end_to_end() {
    let (app, _guard) = setup_app().await;

    let payload = json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "0423456789",
        "suburb": "Melbourne",
        "message": "Selling"
    });

    let before = Utc::now();
    let response = app
        .clone()
        .oneshot(post_json("/api/leads", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_eq!(created["suburb"], "Melbourne");
    assert_eq!(created["message"], "Selling");

    let created_at: DateTime<Utc> = created["created_at"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!((created_at - before).num_seconds().abs() < 5);

    let response = app.oneshot(get("/api/leads")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listed = body_json(response).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], id);
    assert_eq!(listed[0]["suburb"], "Melbourne");

    // Round-trip to at least second precision.
    let listed_at: DateTime<Utc> = listed[0]["created_at"].as_str().unwrap().parse().unwrap();
    assert_eq!(listed_at.timestamp(), created_at.timestamp());
}

#[tokio::test]
async fn test_generated_ids_are_unique() {
    let (app, _guard) = setup_app().await;

    let mut ids = Vec::new();
    for i in 0..3 {
        let payload = json!({
            "name": format!("User {}", i),
            "email": format!("user{}@example.com", i),
            "phone": "0400000000",
            "suburb": "Carlton"
        });
        let response = app
            .clone()
            .oneshot(post_json("/api/leads", payload))
            .await
            .unwrap();
        let body = body_json(response).await;
        ids.push(body["id"].as_str().unwrap().to_string());
    }

    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn test_missing_fields_rejected_and_nothing_persisted() {
    let (app, _guard) = setup_app().await;

    let payload = json!({
        "name": "Test User",
        "email": "test@example.com"
    });

    let response = app
        .clone()
        .oneshot(post_json("/api/leads", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert!(body["errors"].get("phone").is_some());
    assert!(body["errors"].get("suburb").is_some());

    let response = app.oneshot(get("/api/leads")).await.unwrap();
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_invalid_email_rejected() {
    let (app, _guard) = setup_app().await;

    let payload = json!({
        "name": "Jane Doe",
        "email": "invalid-email",
        "phone": "0423456789",
        "suburb": "Melbourne"
    });

    let response = app
        .clone()
        .oneshot(post_json("/api/leads", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert!(body["errors"].get("email").is_some());
}

#[tokio::test]
async fn test_omitted_message_defaults_to_empty_string() {
    let (app, _guard) = setup_app().await;

    let payload = json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "0423456789",
        "suburb": "Melbourne"
    });

    let response = app
        .clone()
        .oneshot(post_json("/api/leads", payload))
        .await
        .unwrap();
    let created = body_json(response).await;
    assert_eq!(created["message"], "");

    let response = app.oneshot(get("/api/leads")).await.unwrap();
    let listed = body_json(response).await;
    assert_eq!(listed[0]["message"], "");
}

#[tokio::test]
async fn test_unknown_fields_are_discarded() {
    let (app, _guard) = setup_app().await;

    let payload = json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "0423456789",
        "suburb": "Melbourne",
        "admin": true
    });

    let response = app
        .clone()
        .oneshot(post_json("/api/leads", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let created = body_json(response).await;
    assert!(created.get("admin").is_none());

    let response = app.oneshot(get("/api/leads")).await.unwrap();
    let listed = body_json(response).await;
    assert!(listed[0].get("admin").is_none());
}

#[tokio::test]
async fn test_list_is_idempotent() {
    let (app, _guard) = setup_app().await;

    for i in 0..3 {
        let payload = json!({
            "name": format!("User {}", i),
            "email": format!("user{}@example.com", i),
            "phone": "0400000000",
            "suburb": "Brunswick"
        });
        app.clone()
            .oneshot(post_json("/api/leads", payload))
            .await
            .unwrap();
    }

    let first = body_json(app.clone().oneshot(get("/api/leads")).await.unwrap()).await;
    let second = body_json(app.oneshot(get("/api/leads")).await.unwrap()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_status_check_end_to_end() {
    let (app, _guard) = setup_app().await;

    let response = app
        .clone()
        .oneshot(post_json("/api/status", json!({"client_name": "probe-1"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let created = body_json(response).await;
    assert!(!created["id"].as_str().unwrap().is_empty());
    assert!(created["timestamp"].is_string());
    assert_eq!(created["client_name"], "probe-1");

    let response = app.oneshot(get("/api/status")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listed = body_json(response).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], created["id"]);
}

#[tokio::test]
async fn test_missing_client_name_rejected() {
    let (app, _guard) = setup_app().await;

    let response = app
        .oneshot(post_json("/api/status", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert!(body["errors"].get("client_name").is_some());
}

#[tokio::test]
async fn test_malformed_json_returns_bad_request() {
    let (app, _guard) = setup_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/leads")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_type_mismatch_returns_unprocessable() {
    let (app, _guard) = setup_app().await;

    let payload = json!({
        "name": 42,
        "email": "jane@example.com",
        "phone": "0423456789",
        "suburb": "Melbourne"
    });

    let response = app
        .oneshot(post_json("/api/leads", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_health_reports_store_status() {
    let (app, _guard) = setup_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}
