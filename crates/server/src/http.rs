//! HTTP Endpoints
//!
//! REST API for leads, the sales team, buckets and reporting.

use std::time::Duration;

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::metrics::{metrics_handler, track_requests};
use crate::state::AppState;
use crate::{buckets, leads, reporting, team};

const FALLBACK_ORIGIN: &str = "http://localhost:3000";

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let config = state.get_config();
    let cors_layer = build_cors_layer(&config.server.cors_origins, config.server.cors_enabled);
    let timeout = Duration::from_secs(config.server.timeout_seconds);
    drop(config);

    Router::new()
        // Leads
        .route(
            "/api/leads",
            get(leads::list_leads)
                .post(leads::create_lead)
                .put(leads::lead_action)
                .delete(leads::clear_leads),
        )
        .route("/api/leads/score", post(leads::preview_score))
        .route("/api/leads/:id", get(leads::get_lead))
        // Team
        .route(
            "/api/team",
            get(team::list_team)
                .post(team::create_member)
                .put(team::team_action),
        )
        // Buckets
        .route(
            "/api/buckets",
            get(buckets::list_buckets)
                .post(buckets::create_bucket)
                .put(buckets::bucket_action),
        )
        // Reporting
        .route("/api/stats", get(reporting::stats))
        .route("/api/scoring/rules", get(reporting::scoring_rules))
        .route("/api/scoring/tiers", get(reporting::scoring_tiers))
        // Operations
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_requests))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer)
                .layer(TimeoutLayer::new(timeout)),
        )
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns permissive layer (for dev)
/// - If cors_origins is empty, defaults to localhost:3000
/// - Otherwise, uses the configured origins
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        if origins.is_empty() {
            tracing::info!("No CORS origins configured, defaulting to {}", FALLBACK_ORIGIN);
        } else {
            tracing::error!("All configured CORS origins are invalid, falling back to localhost");
        }
        return CorsLayer::new()
            .allow_origin(HeaderValue::from_static(FALLBACK_ORIGIN))
            .allow_methods(allowed_methods())
            .allow_headers(Any);
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods(allowed_methods())
        .allow_headers(Any)
}

fn allowed_methods() -> [Method; 5] {
    [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ]
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
