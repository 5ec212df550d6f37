// directory-server/tests/api_employees.rs
// End-to-end tests against the assembled router (in-memory SQLite)

use axum::Router;
use axum::body::Body;
use directory_server::db::repository::employee;
use directory_server::{Config, DbService, ServerState, build_app};
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shared::{Employee, ErrorBody};
use tower::ServiceExt;

async fn test_app() -> (Router, ServerState) {
    let db = DbService::open_in_memory().await.unwrap();
    let state = ServerState::new(Config::with_overrides(":memory:", 0), db);
    (build_app().with_state(state.clone()), state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn error_of(bytes: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(bytes).unwrap().error
}

async fn create(app: &Router, name: &str, email: &str, position: &str) -> Employee {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/employees",
        Some(json!({ "name": name, "email": email, "position": position })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", String::from_utf8_lossy(&body));
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_create_returns_201_with_row() {
    let (app, _) = test_app().await;
    let emp = create(&app, "John Doe", "john.doe@company.com", "Software Engineer").await;
    assert!(emp.id > 0);
    assert_eq!(emp.email, "john.doe@company.com");

    let (_, body) = send(&app, Method::GET, &format!("/api/employees/{}", emp.id), None).await;
    let raw: Value = serde_json::from_slice(&body).unwrap();
    assert!(raw["createdAt"].is_string());
}

#[tokio::test]
async fn test_duplicate_email_is_400_and_count_unchanged() {
    let (app, state) = test_app().await;
    create(&app, "John Doe", "john.doe@company.com", "Software Engineer").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({ "name": "Other John", "email": "john.doe@company.com", "position": "QA" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_of(&body), "Email already exists");
    assert_eq!(employee::count(&state.db.pool).await.unwrap(), 1);
}

#[tokio::test]
async fn test_invalid_email_is_400() {
    let (app, _) = test_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({ "name": "Bad", "email": "not-an-email", "position": "QA" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_of(&body), "Invalid email format");
}

#[tokio::test]
async fn test_missing_fields_is_400() {
    let (app, _) = test_app().await;
    for body in [
        json!({ "email": "a@b.co", "position": "QA" }),
        json!({ "name": "", "email": "a@b.co", "position": "QA" }),
        json!({ "name": "A", "email": "a@b.co", "position": null }),
        json!({ "name": 123, "email": "a@b.co", "position": "QA" }),
        json!({ "name": "A", "email": false, "position": "QA" }),
        json!({}),
    ] {
        let (status, resp) = send(&app, Method::POST, "/api/employees", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_of(&resp), "Name, email, and position are required");
    }
}

#[tokio::test]
async fn test_long_fields_are_accepted() {
    let (app, _) = test_app().await;
    let long = "A".repeat(500);
    let emp = create(&app, &long, "long@company.com", &long).await;
    assert_eq!(emp.name.len(), 500);
    assert_eq!(emp.position.len(), 500);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/employees/{}", emp.id),
        Some(json!({ "name": "B".repeat(600) })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated: Employee = serde_json::from_slice(&body).unwrap();
    assert_eq!(updated.name.len(), 600);
}

#[tokio::test]
async fn test_malformed_json_is_400_with_error_body() {
    let (app, _) = test_app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/employees")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(!error_of(&bytes).is_empty());
}

#[tokio::test]
async fn test_list_search_and_order() {
    let (app, _) = test_app().await;
    create(&app, "John Doe", "john.doe@company.com", "Software Engineer").await;
    create(&app, "Jane Smith", "jane.smith@company.com", "Product Manager").await;
    create(&app, "Mike Johnson", "mike.johnson@company.com", "Designer").await;

    let (status, body) = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    let all: Vec<Employee> = serde_json::from_slice(&body).unwrap();
    let names: Vec<_> = all.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Mike Johnson", "Jane Smith", "John Doe"]);

    let (_, body) = send(&app, Method::GET, "/api/employees?search=Jane", None).await;
    let janes: Vec<Employee> = serde_json::from_slice(&body).unwrap();
    assert_eq!(janes.len(), 1);
    assert_eq!(janes[0].name, "Jane Smith");

    let (status, body) = send(&app, Method::GET, "/api/employees?search=Zed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"[]");
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let (app, state) = test_app().await;
    let emp = create(&app, "John Doe", "john.doe@company.com", "Software Engineer").await;
    create(&app, "Jane Smith", "jane.smith@company.com", "Product Manager").await;

    let (status, body) = send(&app, Method::DELETE, "/api/employees/99999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_of(&body), "Employee not found");

    let (status, body) = send(&app, Method::DELETE, &format!("/api/employees/{}", emp.id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    assert_eq!(employee::count(&state.db.pool).await.unwrap(), 1);

    let (status, _) = send(&app, Method::GET, &format!("/api/employees/{}", emp.id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_is_404() {
    let (app, _) = test_app().await;
    let (status, body) = send(&app, Method::DELETE, "/api/employees/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_of(&body), "Employee not found");
}

#[tokio::test]
async fn test_update_position_only_merges() {
    let (app, _) = test_app().await;
    let emp = create(&app, "John Doe", "john.doe@company.com", "Software Engineer").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/employees/{}", emp.id),
        Some(json!({ "position": "Engineering Manager" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated: Employee = serde_json::from_slice(&body).unwrap();
    assert_eq!(updated.id, emp.id);
    assert_eq!(updated.name, "John Doe");
    assert_eq!(updated.email, "john.doe@company.com");
    assert_eq!(updated.position, "Engineering Manager");
    assert_eq!(updated.created_at, emp.created_at);
}

#[tokio::test]
async fn test_update_errors() {
    let (app, _) = test_app().await;
    let john = create(&app, "John Doe", "john.doe@company.com", "Software Engineer").await;
    create(&app, "Jane Smith", "jane.smith@company.com", "Product Manager").await;
    let uri = format!("/api/employees/{}", john.id);

    let (status, body) = send(&app, Method::PUT, "/api/employees/99999", Some(json!({ "name": "X" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_of(&body), "Employee not found");

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "email": "jane.smith@company.com" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_of(&body), "Email already exists");

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "email": "broken" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_of(&body), "Invalid email format");
}

#[tokio::test]
async fn test_health_endpoints() {
    let (app, _) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "OK");
    assert_eq!(health["message"], "Employee API is running");
    assert!(health["timestamp"].is_string());

    let (status, body) = send(&app, Method::GET, "/health/detailed", None).await;
    assert_eq!(status, StatusCode::OK);
    let detailed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(detailed["status"], "OK");
    assert_eq!(detailed["checks"]["database"]["status"], "ok");

    let (status, body) = send(&app, Method::GET, "/test", None).await;
    assert_eq!(status, StatusCode::OK);
    let index: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(index["message"], "Backend is working!");
}

#[tokio::test]
async fn test_responses_carry_request_id_and_cors() {
    let (app, _) = test_app().await;
    let request = Request::builder()
        .uri("/health")
        .header(http::header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(
        response.headers()[http::header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
