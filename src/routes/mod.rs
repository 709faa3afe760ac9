pub mod auth_routes;
pub mod billing_routes;
pub mod customer_routes;
pub mod dashboard_routes;
pub mod employee_routes;
pub mod inventory_routes;
pub mod job_part_routes;
pub mod service_job_routes;
pub mod service_request_routes;
pub mod vehicle_routes;

use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::{auth_middleware, cors_middleware_with_origins};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Router completo de la API
pub fn create_app(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(api_info))
        .route("/api/health", get(health_check))
        .nest("/api", auth_routes::create_auth_router());

    let protected = Router::new()
        .nest("/api", auth_routes::create_session_router())
        .nest("/api/dashboard", dashboard_routes::create_dashboard_router())
        .nest("/api/employees", employee_routes::create_employee_router())
        .nest("/api/customers", customer_routes::create_customer_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest(
            "/api/service-requests",
            service_request_routes::create_service_request_router(),
        )
        .nest("/api/jobs", service_job_routes::create_service_job_router())
        .nest("/api/inventory", inventory_routes::create_inventory_router())
        .nest("/api/job-parts", job_part_routes::create_job_part_router())
        .nest("/api/billing", billing_routes::create_billing_router())
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    let cors = cors_middleware_with_origins(&state.config.cors_origins);

    Router::new()
        .merge(public)
        .merge(protected)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Backend is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn api_info() -> Json<Value> {
    Json(json!({
        "name": "AutoIMS Backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "message": "Backend API is running. Frontend is served separately.",
        "endpoints": {
            "health": "/api/health",
            "auth": {
                "signup": "POST /api/signup",
                "login": "POST /api/login",
                "me": "GET /api/me"
            },
            "dashboard": "GET /api/dashboard",
            "customers": "/api/customers",
            "vehicles": "/api/vehicles",
            "service_requests": "/api/service-requests",
            "employees": "/api/employees",
            "jobs": "/api/jobs",
            "inventory": "/api/inventory",
            "job_parts": "/api/job-parts",
            "billing": "/api/billing"
        }
    }))
}

async fn not_found() -> AppError {
    AppError::NotFound("Resource not found".to_string())
}
