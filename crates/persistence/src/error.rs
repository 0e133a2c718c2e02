//! Persistence errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl From<PersistenceError> for lead_router_core::Error {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::NotFound { kind, id } => lead_router_core::Error::NotFound { kind, id },
            other => lead_router_core::Error::Storage(other.to_string()),
        }
    }
}
