//! Tests del router sin base de datos: la puerta de autenticación se sustituye
//! por una falsa y el pool nunca llega a conectar.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;

use autoims_backend::models::employee::{Employee, WorkingStatus};
use autoims_backend::routes::create_app;
use autoims_backend::services::auth_service::AuthGate;
use autoims_backend::state::AppState;
use autoims_backend::utils::errors::{AppError, AppResult};

use common::{lazy_pool, test_config};

const GOOD_TOKEN: &str = "good-token";

struct StaticGate;

#[async_trait]
impl AuthGate for StaticGate {
    async fn resolve_bearer(&self, token: &str) -> AppResult<Employee> {
        if token != GOOD_TOKEN {
            return Err(AppError::Unauthorized("Invalid token".to_string()));
        }

        Ok(Employee {
            id: 7,
            name: "Front Desk".to_string(),
            username: "frontdesk".to_string(),
            email: "desk@example.test".to_string(),
            password_hash: String::new(),
            position: "Receptionist".to_string(),
            working_status: WorkingStatus::Working,
            rating: 0.0,
            jobs_done: 0,
            created_at: Utc::now(),
        })
    }
}

fn app() -> Router {
    let state = AppState::new(lazy_pool(), test_config()).with_auth_gate(Arc::new(StaticGate));
    create_app(state)
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health_check_is_public() {
    let (status, body) = send(Request::get("/api/health").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_api_info_lists_endpoints() {
    let (status, body) = send(Request::get("/").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "AutoIMS Backend API");
    assert_eq!(body["endpoints"]["billing"], "/api/billing");
}

#[tokio::test]
async fn test_protected_route_without_token_is_unauthorized() {
    let (status, body) = send(Request::get("/api/jobs").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_protected_route_with_bad_token_is_unauthorized() {
    let request = Request::get("/api/billing")
        .header(header::AUTHORIZATION, "Bearer forged")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_me_returns_authenticated_employee() {
    let request = Request::get("/api/me")
        .header(header::AUTHORIZATION, format!("Bearer {}", GOOD_TOKEN))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["username"], "frontdesk");
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_invalid_body_is_rejected_before_storage() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/customers")
        .header(header::AUTHORIZATION, format!("Bearer {}", GOOD_TOKEN))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"R","phone":"nope"}"#))
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_negative_labor_charge_is_rejected() {
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/jobs/1/labor")
        .header(header::AUTHORIZATION, format!("Bearer {}", GOOD_TOKEN))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"labor_charge":-5}"#))
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_route_returns_json_not_found() {
    let (status, body) = send(Request::get("/api/nope").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

fn authed_json(method: Method, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", GOOD_TOKEN))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_unknown_job_status_is_a_validation_error() {
    let request = authed_json(Method::PUT, "/api/jobs/1/status", r#"{"status":"Done"}"#);
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["details"]["reason"].as_str().unwrap().contains("Done"));
}

#[tokio::test]
async fn test_wrong_typed_quantity_is_a_validation_error() {
    let request = authed_json(
        Method::POST,
        "/api/job-parts",
        r#"{"job_id":1,"item_id":1,"quantity_used":"three"}"#,
    );
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_stock_delta_is_a_validation_error() {
    let request = authed_json(Method::PUT, "/api/inventory/1/stock", "{}");
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["details"]["reason"].as_str().unwrap().contains("delta"));
}

#[tokio::test]
async fn test_non_numeric_path_id_is_a_validation_error() {
    let request = Request::get("/api/jobs/abc")
        .header(header::AUTHORIZATION, format!("Bearer {}", GOOD_TOKEN))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_dashboard_stats_degrade_to_zeros_without_database() {
    let request = Request::get("/api/dashboard")
        .header(header::AUTHORIZATION, format!("Bearer {}", GOOD_TOKEN))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Statistics unavailable");
    assert_eq!(body["data"]["customers_count"], 0);
    assert_eq!(body["data"]["active_jobs"], 0);
    assert_eq!(body["data"]["top_employees"], serde_json::json!([]));
}
