//! Lead endpoints
//!
//! `PUT /api/leads` multiplexes bulk operations on an `action` tag. Bulk
//! operations read the whole collection, run the engine and write it back.

use std::collections::{HashMap, HashSet};

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use lead_router_core::{merge_patch, Lead, LeadDraft};
use lead_router_engine::{
    calculate_score, enrich_leads, import_csv, import_leads, normalize_draft, rescore_all,
    route_all_leads, score_lead, score_tier, tier_info, FieldMappings, LeadFilter,
};

use crate::state::AppState;
use crate::{ApiResult, ServerError};

/// Bulk operations on the lead collection
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum LeadAction {
    BulkImport {
        leads: Vec<LeadDraft>,
    },
    ImportCsv {
        csv: String,
        #[serde(default)]
        mappings: Option<FieldMappings>,
    },
    Rescore,
    Reroute,
    SetLeads {
        leads: Vec<Lead>,
    },
    /// Partial lead; `id` selects the stored record
    UpdateLead {
        lead: Value,
    },
    DeleteLead {
        lead_id: String,
    },
    DeleteLeads {
        lead_ids: Vec<String>,
    },
    BulkMoveBucket {
        lead_ids: Vec<String>,
        bucket_id: String,
    },
    EnrichLeads {
        lead_ids: Vec<String>,
        field: String,
        #[serde(default)]
        results: HashMap<String, String>,
    },
}

/// List leads, optionally filtered by query parameters
pub async fn list_leads(
    State(state): State<AppState>,
    query: Result<Query<LeadFilter>, QueryRejection>,
) -> ApiResult<Json<Vec<Lead>>> {
    let Query(filter) = query?;
    let leads = state.leads.list().await?;
    if filter.is_empty() {
        return Ok(Json(leads));
    }
    Ok(Json(filter.apply(&leads)))
}

pub async fn get_lead(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Lead>> {
    Ok(Json(state.leads.require(&id).await?))
}

/// Create a single scored lead
pub async fn create_lead(
    State(state): State<AppState>,
    payload: Result<Json<LeadDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Lead>)> {
    let Json(draft) = payload?;
    let lead = normalize_draft(draft);
    state.leads.put(lead.clone()).await?;
    tracing::info!(lead_id = %lead.id, score = lead.score, tier = ?lead.tier, "Created lead");
    Ok((StatusCode::CREATED, Json(lead)))
}

/// Remove every lead
pub async fn clear_leads(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    state.leads.clear().await?;
    tracing::info!("Cleared all leads");
    Ok(Json(json!({ "success": true })))
}

/// Score a lead-shaped body without storing it
pub async fn preview_score(
    payload: Result<Json<LeadDraft>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(draft) = payload?;
    let lead = Lead::from_draft(draft);
    let breakdown = calculate_score(&lead.attributes);
    Ok(Json(json!({
        "breakdown": breakdown,
        "tierInfo": tier_info(breakdown.total),
        "scoreTier": score_tier(breakdown.total),
    })))
}

pub async fn lead_action(
    State(state): State<AppState>,
    payload: Result<Json<LeadAction>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(action) = payload?;
    match action {
        LeadAction::BulkImport { leads } => {
            let imported = state.leads.put_many(import_leads(leads)).await?;
            Ok(Json(json!({ "imported": imported })))
        },
        LeadAction::ImportCsv { csv, mappings } => {
            let leads = import_csv(&csv, mappings)?;
            let imported = state.leads.put_many(leads).await?;
            Ok(Json(json!({ "imported": imported })))
        },
        LeadAction::Rescore => {
            let mut leads = state.leads.list().await?;
            let rescored = rescore_all(&mut leads);
            state.leads.replace_all(leads).await?;
            Ok(Json(json!({ "rescored": rescored })))
        },
        LeadAction::Reroute => reroute(&state).await,
        LeadAction::SetLeads { leads } => {
            state.leads.replace_all(leads).await?;
            Ok(Json(json!({ "success": true })))
        },
        LeadAction::UpdateLead { lead } => {
            let id = lead
                .get("id")
                .and_then(Value::as_str)
                .ok_or_else(|| ServerError::InvalidRequest("lead.id is required".to_string()))?;
            let stored = state.leads.require(id).await?;
            let mut updated: Lead = merge_patch(&stored, &lead)?;
            score_lead(&mut updated);
            state.leads.put(updated.clone()).await?;
            Ok(Json(json!({ "success": true, "lead": updated })))
        },
        LeadAction::DeleteLead { lead_id } => {
            state.leads.delete(&lead_id).await?;
            Ok(Json(json!({ "success": true })))
        },
        LeadAction::DeleteLeads { lead_ids } => {
            let lead_ids = unique_ids(lead_ids);
            let removed = state.leads.delete_many(&lead_ids).await?;
            tracing::debug!(requested = lead_ids.len(), removed, "Deleted leads");
            Ok(Json(json!({ "success": true, "deleted": lead_ids.len() })))
        },
        LeadAction::BulkMoveBucket {
            lead_ids,
            bucket_id,
        } => {
            let lead_ids = unique_ids(lead_ids);
            let mut leads = state.leads.list().await?;
            let mut matched = 0usize;
            for lead in leads.iter_mut().filter(|l| lead_ids.contains(&l.id)) {
                lead.bucket = Some(bucket_id.clone());
                matched += 1;
            }
            state.leads.replace_all(leads).await?;
            tracing::debug!(requested = lead_ids.len(), matched, bucket = %bucket_id, "Moved leads");
            Ok(Json(json!({ "success": true, "moved": lead_ids.len() })))
        },
        LeadAction::EnrichLeads {
            lead_ids,
            field,
            results,
        } => {
            let mut leads = state.leads.list().await?;
            let enriched = enrich_leads(&mut leads, &lead_ids, &field, &results);
            state.leads.replace_all(leads).await?;
            Ok(Json(json!({ "success": true, "enriched": enriched })))
        },
    }
}

/// Drop repeated ids, keeping first-seen order
///
/// Bulk actions report how many distinct ids were requested, matched or not.
fn unique_ids(ids: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}

/// Route every lead over the full roster and store both results
async fn reroute(state: &AppState) -> ApiResult<Json<Value>> {
    let leads = state.leads.list().await?;
    let team = state.team.list().await?;

    let outcome = route_all_leads(&leads, &team);
    let assigned = outcome.assigned_count();
    let unassigned = outcome.unassigned_count();

    state.leads.replace_all(outcome.leads).await?;
    state.team.replace_all(outcome.team_members).await?;

    Ok(Json(json!({ "assigned": assigned, "unassigned": unassigned })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_tags_are_kebab_case() {
        let action: LeadAction = serde_json::from_value(json!({
            "action": "bulk-move-bucket",
            "leadIds": ["a", "b"],
            "bucketId": "hot",
        }))
        .unwrap();
        match action {
            LeadAction::BulkMoveBucket {
                lead_ids,
                bucket_id,
            } => {
                assert_eq!(lead_ids, vec!["a", "b"]);
                assert_eq!(bucket_id, "hot");
            },
            other => panic!("unexpected action {:?}", other),
        }

        let action: LeadAction = serde_json::from_value(json!({ "action": "reroute" })).unwrap();
        assert!(matches!(action, LeadAction::Reroute));
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let result = serde_json::from_value::<LeadAction>(json!({ "action": "explode" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_bulk_import_accepts_lenient_budget() {
        let action: LeadAction = serde_json::from_value(json!({
            "action": "bulk-import",
            "leads": [{ "name": "A", "budget": "75000", "industry": "Tech" }],
        }))
        .unwrap();
        match action {
            LeadAction::BulkImport { leads } => {
                assert_eq!(leads.len(), 1);
                assert_eq!(leads[0].attributes.budget, 75000.0);
            },
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_unique_ids_keeps_first_occurrence() {
        let ids = unique_ids(vec!["b".into(), "a".into(), "b".into(), "a".into(), "c".into()]);
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert!(unique_ids(Vec::new()).is_empty());
    }
}
