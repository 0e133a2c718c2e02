//! Lead Router Server
//!
//! HTTP API over the scoring and routing engine.

pub mod buckets;
pub mod http;
pub mod leads;
pub mod metrics;
pub mod reporting;
pub mod state;
pub mod team;

pub use http::create_router;
pub use crate::metrics::{init_metrics, metrics_handler};
pub use state::AppState;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lead_router_persistence::PersistenceError;
use thiserror::Error;

/// Server errors
///
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ServerError>;

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServerError> for StatusCode {
    fn from(err: ServerError) -> Self {
        err.status()
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<lead_router_core::Error> for ServerError {
    fn from(err: lead_router_core::Error) -> Self {
        use lead_router_core::Error;
        match err {
            Error::NotFound { .. } => ServerError::NotFound(err.to_string()),
            Error::InvalidInput(_) | Error::Import(_) => ServerError::InvalidRequest(err.to_string()),
            Error::Storage(_) => ServerError::Internal(err.to_string()),
        }
    }
}

impl From<PersistenceError> for ServerError {
    fn from(err: PersistenceError) -> Self {
        lead_router_core::Error::from(err).into()
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::InvalidRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        ServerError::InvalidRequest(format!("Invalid query: {}", rejection.body_text()))
    }
}
