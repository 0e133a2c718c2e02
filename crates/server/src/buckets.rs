//! Lead bucket endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use lead_router_core::{merge_patch, BucketDraft, LeadBucket, DEFAULT_BUCKET_ID};

use crate::state::AppState;
use crate::{ApiResult, ServerError};

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum BucketAction {
    Update { bucket: Value },
    Delete { bucket_id: String },
}

pub async fn list_buckets(State(state): State<AppState>) -> ApiResult<Json<Vec<LeadBucket>>> {
    Ok(Json(state.buckets.list().await?))
}

pub async fn create_bucket(
    State(state): State<AppState>,
    payload: Result<Json<BucketDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<LeadBucket>)> {
    let Json(draft) = payload?;
    let bucket = draft.into_bucket(&state.get_config().buckets.default_color);
    state.buckets.put(bucket.clone()).await?;
    tracing::info!(bucket_id = %bucket.id, name = %bucket.name, "Created bucket");
    Ok((StatusCode::CREATED, Json(bucket)))
}

pub async fn bucket_action(
    State(state): State<AppState>,
    payload: Result<Json<BucketAction>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(action) = payload?;
    match action {
        BucketAction::Update { bucket } => {
            let id = bucket
                .get("id")
                .and_then(Value::as_str)
                .ok_or_else(|| ServerError::InvalidRequest("bucket.id is required".to_string()))?;
            let stored = state.buckets.require(id).await?;
            let updated: LeadBucket = merge_patch(&stored, &bucket)?;
            state.buckets.put(updated).await?;
        },
        BucketAction::Delete { bucket_id } => {
            if bucket_id == DEFAULT_BUCKET_ID {
                return Err(ServerError::InvalidRequest(
                    "Cannot delete default bucket".to_string(),
                ));
            }
            state.buckets.delete_many(&[bucket_id]).await?;
        },
    }
    Ok(Json(json!({ "success": true })))
}
