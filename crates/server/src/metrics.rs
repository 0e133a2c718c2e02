//! Prometheus metrics
//!
//! Engine crates record through the `metrics` facade; this module installs
//! the exporter and serves `/metrics`.

use axum::extract::{MatchedPath, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::state::AppState;
use crate::ServerError;

/// Install the global Prometheus recorder
///
/// Only one recorder can exist per process; a second call logs and
/// returns `None`.
pub fn init_metrics() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            describe_metrics();
            Some(handle)
        },
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install Prometheus recorder");
            None
        },
    }
}

fn describe_metrics() {
    ::metrics::describe_counter!("lead_router_leads_scored_total", "Leads scored or rescored");
    ::metrics::describe_counter!(
        "lead_router_leads_routed_total",
        "Routing decisions, labelled by outcome"
    );
    ::metrics::describe_counter!("lead_router_leads_imported_total", "Leads imported");
    ::metrics::describe_counter!(
        "lead_router_http_requests_total",
        "HTTP requests, labelled by route and method"
    );
}

/// Count requests per matched route
pub async fn track_requests(req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let method = req.method().to_string();

    let response = next.run(req).await;

    ::metrics::counter!(
        "lead_router_http_requests_total",
        "route" => route,
        "method" => method
    )
    .increment(1);

    response
}

/// Prometheus text exposition
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => ServerError::NotFound("Metrics are disabled".to_string()).into_response(),
    }
}
