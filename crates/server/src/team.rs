//! Sales team endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use lead_router_core::{merge_patch, TeamMember, TeamMemberDraft};

use crate::state::AppState;
use crate::{ApiResult, ServerError};

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum TeamAction {
    SetTeam { team_members: Vec<TeamMember> },
    /// Restore the configured seed roster
    Reset,
    UpdateMember { member: Value },
    DeleteMember { member_id: String },
}

pub async fn list_team(State(state): State<AppState>) -> ApiResult<Json<Vec<TeamMember>>> {
    Ok(Json(state.team.list().await?))
}

/// Add a member with no assignments
pub async fn create_member(
    State(state): State<AppState>,
    payload: Result<Json<TeamMemberDraft>, JsonRejection>,
) -> ApiResult<Json<TeamMember>> {
    let Json(draft) = payload?;
    let member = {
        let config = state.get_config();
        draft.into_member(config.team.default_capacity, config.team.default_weekly_limit)
    };
    state.team.put(member.clone()).await?;
    tracing::info!(member_id = %member.id, role = %member.role, "Added team member");
    Ok(Json(member))
}

pub async fn team_action(
    State(state): State<AppState>,
    payload: Result<Json<TeamAction>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(action) = payload?;
    match action {
        TeamAction::SetTeam { team_members } => {
            state.team.replace_all(team_members).await?;
        },
        TeamAction::Reset => {
            let roster = state.seed_team();
            tracing::info!(members = roster.len(), "Reset team to seed roster");
            state.team.replace_all(roster).await?;
        },
        TeamAction::UpdateMember { member } => {
            let id = member
                .get("id")
                .and_then(Value::as_str)
                .ok_or_else(|| ServerError::InvalidRequest("member.id is required".to_string()))?;
            let stored = state.team.require(id).await?;
            let updated: TeamMember = merge_patch(&stored, &member)?;
            state.team.put(updated).await?;
        },
        TeamAction::DeleteMember { member_id } => {
            state.team.delete_many(&[member_id]).await?;
        },
    }
    Ok(Json(json!({ "success": true })))
}
