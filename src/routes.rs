use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::cors::cors_layer;
use crate::handlers::{method_not_allowed, translate};
use crate::state::AppState;
use crate::translate::SUPPORTED_LANGUAGES;

pub const SERVICE_NAME: &str = "healthcare-translator";

/// Build the full application router, CORS included
pub fn create_routes(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root).fallback(method_not_allowed))
        .route("/health", get(health_check).fallback(method_not_allowed))
        .route("/ready", get(readiness_check).fallback(method_not_allowed))
        .route("/translate", post(translate).fallback(method_not_allowed))
        .route(
            "/languages",
            get(get_supported_languages).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(cors_layer(allowed_origins)),
        )
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Healthcare Translator API",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let config = state.current_config().await;
    if !config.has_api_key() {
        return Json(json!({
            "status": "unhealthy",
            "error": "GROQ_API_KEY not configured"
        }));
    }

    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn readiness_check() -> Json<Value> {
    Json(json!({
        "status": "ready",
        "service": SERVICE_NAME
    }))
}

async fn get_supported_languages() -> Json<Value> {
    Json(json!({ "languages": SUPPORTED_LANGUAGES }))
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
