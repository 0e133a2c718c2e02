//! Dashboard statistics and scoring documentation

use axum::{extract::State, Json};

use lead_router_engine::{routing_tiers, DashboardStats, RoutingTierDoc, ScoringRule};

use crate::state::AppState;
use crate::ApiResult;

pub async fn stats(State(state): State<AppState>) -> ApiResult<Json<DashboardStats>> {
    let leads = state.leads.list().await?;
    let buckets = state.buckets.list().await?;
    Ok(Json(DashboardStats::compute(&leads, &buckets)))
}

pub async fn scoring_rules() -> Json<Vec<ScoringRule>> {
    Json(lead_router_engine::scoring_rules())
}

pub async fn scoring_tiers() -> Json<Vec<RoutingTierDoc>> {
    Json(routing_tiers())
}
