use crate::config::{Config, ALLOWED_ORIGIN};
use crate::ghl_client::GhlClient;
use crate::lead_handler;
use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client for the GHL contacts API.
    pub ghl: GhlClient,
}

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "annuityhelp-lead-api",
            "version": "0.1.0"
        })),
    )
}

/// Builds the application router with all middleware layers.
///
/// Kept separate from `main` so integration tests can drive the exact
/// production stack with `tower::ServiceExt::oneshot`.
pub fn router(state: Arc<AppState>) -> Router {
    // Browser callers come from exactly one origin; the layer is outermost
    // so error responses carry the CORS headers too.
    let cors = CorsLayer::new()
        .allow_origin(ALLOWED_ORIGIN.parse::<HeaderValue>().expect("static origin"))
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/lead",
            post(lead_handler::submit_lead)
                .options(lead_handler::preflight)
                .fallback(lead_handler::method_not_allowed),
        )
        .layer(
            ServiceBuilder::new()
                // Lead submissions are tiny; cap the body well below the
                // platform limit.
                .layer(RequestBodyLimitLayer::new(64 * 1024)),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
