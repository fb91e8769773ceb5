//! API layer - routes, handlers, and middleware

pub mod handlers;
pub mod routes;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::Utc;
use serde_json::json;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let max_body_size = state.config.server.max_request_body_size;
    let cors = cors_layer(&state.config.server.cors_origins);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // API index
        .route("/api", get(api_index))
        // Student routes
        .nest("/api/students", routes::student_routes())
        // Natural-language search routes
        .nest("/api/search", routes::search_routes())
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        // Limit request body size to prevent oversized payloads
        .layer(DefaultBodyLimit::max(max_body_size))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

async fn api_index() -> impl IntoResponse {
    Json(json!({
        "name": "Registrar API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "students": "/api/students",
            "search": "/api/search/students",
            "health": "/health"
        }
    }))
}

async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not found",
            "message": format!("Route {} {} not found", method, uri.path())
        })),
    )
}
