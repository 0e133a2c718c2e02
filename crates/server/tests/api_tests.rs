//! Integration tests for the lead router HTTP API
//!
//! Tests cover:
//! - Lead create/list/filter/update/delete flows
//! - Bulk actions: CSV import, rescore, reroute, bucket moves, enrichment
//! - Team roster management and reset
//! - Bucket default protection
//! - Reporting and operational endpoints

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

use lead_router_config::Settings;
use lead_router_server::{create_router, AppState};

/// Test helper: app over fresh in-memory state seeded from default settings
fn setup_app() -> Router {
    create_router(AppState::new(Settings::default()))
}

/// Test helper: send a request and decode the JSON response
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Should parse JSON")
    };
    (status, json)
}

fn portugal_referral() -> Value {
    json!({
        "name": "Ana Costa",
        "email": "ana@example.com",
        "company": "Acme",
        "budget": 150000,
        "industry": "Tech",
        "location": "Portugal",
        "source": "Referral",
        "isFirstContact": false,
    })
}

// =============================================================================
// Operations
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app();
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_metrics_disabled_without_recorder() {
    let app = setup_app();
    let (status, body) = send(&app, "GET", "/metrics", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Metrics are disabled");
}

// =============================================================================
// Leads
// =============================================================================

#[tokio::test]
async fn test_create_lead_scores_and_tiers() {
    let app = setup_app();
    let (status, lead) = send(&app, "POST", "/api/leads", Some(portugal_referral())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(lead["score"], 145);
    assert_eq!(lead["tier"], "HIGH VALUE");
    assert_eq!(lead["priority"], "HIGH");
    assert_eq!(lead["responseTime"], "<24 hours");
    assert_eq!(lead["sla"], 24);
    assert!(lead["assignedTo"].is_null());

    let id = lead["id"].as_str().unwrap();
    let (status, fetched) = send(&app, "GET", &format!("/api/leads/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], id);
}

#[tokio::test]
async fn test_create_lead_defaults_first_contact() {
    let app = setup_app();
    let mut body = portugal_referral();
    body.as_object_mut().unwrap().remove("isFirstContact");

    let (status, lead) = send(&app, "POST", "/api/leads", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(lead["isFirstContact"], true);
    assert_eq!(lead["score"], 160);
}

#[tokio::test]
async fn test_get_missing_lead_is_404() {
    let app = setup_app();
    let (status, body) = send(&app, "GET", "/api/leads/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Lead not found: nope");
}

#[tokio::test]
async fn test_list_leads_with_filters() {
    let app = setup_app();
    send(&app, "POST", "/api/leads", Some(portugal_referral())).await;
    send(
        &app,
        "POST",
        "/api/leads",
        Some(json!({ "name": "Low", "industry": "Other", "location": "Mars", "source": "Unknown" })),
    )
    .await;

    let (_, all) = send(&app, "GET", "/api/leads", None).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (status, high) = send(&app, "GET", "/api/leads?tier=HIGH%20VALUE", None).await;
    assert_eq!(status, StatusCode::OK);
    let high = high.as_array().unwrap();
    assert_eq!(high.len(), 1);
    assert_eq!(high[0]["name"], "Ana Costa");

    let (_, tagged) = send(&app, "GET", "/api/leads?score=high&industry=all", None).await;
    assert_eq!(tagged.as_array().unwrap().len(), 1);

    let (_, rich) = send(&app, "GET", "/api/leads?minBudget=100000", None).await;
    assert_eq!(rich.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, "GET", "/api/leads?minBudget=lots", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_update_lead_merges_and_rescores() {
    let app = setup_app();
    let (_, lead) = send(&app, "POST", "/api/leads", Some(portugal_referral())).await;
    let id = lead["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "PUT",
        "/api/leads",
        Some(json!({ "action": "update-lead", "lead": { "id": id, "budget": 0 } })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["lead"]["score"], 100);
    assert_eq!(body["lead"]["tier"], "QUALIFIED");
    assert_eq!(body["lead"]["name"], "Ana Costa");

    let (status, _) = send(
        &app,
        "PUT",
        "/api/leads",
        Some(json!({ "action": "update-lead", "lead": { "id": "ghost", "budget": 1 } })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_lead_flows() {
    let app = setup_app();
    let mut ids = Vec::new();
    for _ in 0..3 {
        let (_, lead) = send(&app, "POST", "/api/leads", Some(portugal_referral())).await;
        ids.push(lead["id"].as_str().unwrap().to_string());
    }

    let (status, _) = send(
        &app,
        "PUT",
        "/api/leads",
        Some(json!({ "action": "delete-lead", "leadId": ids[0] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "PUT",
        "/api/leads",
        Some(json!({ "action": "delete-lead", "leadId": ids[0] })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(
        &app,
        "PUT",
        "/api/leads",
        Some(json!({ "action": "delete-leads", "leadIds": [ids[1], "ghost", ids[1]] })),
    )
    .await;
    assert_eq!(body["deleted"], 2);

    let (_, remaining) = send(&app, "GET", "/api/leads", None).await;
    assert_eq!(remaining.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, "DELETE", "/api/leads", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, remaining) = send(&app, "GET", "/api/leads", None).await;
    assert!(remaining.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_action_is_400() {
    let app = setup_app();
    let (status, body) = send(
        &app,
        "PUT",
        "/api/leads",
        Some(json!({ "action": "explode" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("explode"));

    let (status, _) = send(&app, "PUT", "/api/team", Some(json!({ "nope": true }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_import_csv_and_stats() {
    let app = setup_app();
    let csv = "Name,Email,Company,Budget,Industry,Location,Source\n\
               Ana,ana@example.com,Acme,$150000,Tech,Portugal,Referral\n\
               Bo,bo@example.com,\"Beta, Inc\",,,,\n";

    let (status, body) = send(
        &app,
        "PUT",
        "/api/leads",
        Some(json!({ "action": "import-csv", "csv": csv })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["imported"], 2);

    let (_, leads) = send(&app, "GET", "/api/leads", None).await;
    let leads = leads.as_array().unwrap();
    assert_eq!(leads[0]["score"], 160);
    assert_eq!(leads[1]["company"], "Beta, Inc");
    assert_eq!(leads[1]["industry"], "Other");
    assert_eq!(leads[1]["location"], "Unknown");
    assert_eq!(leads[1]["source"], "Import");

    let (status, stats) = send(&app, "GET", "/api/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["totalLeads"], 2);
    assert_eq!(stats["unassigned"], 2);
    assert_eq!(stats["byBucket"]["all"], 2);
    assert_eq!(stats["maxBudget"], 500000.0);

    let (status, body) = send(
        &app,
        "PUT",
        "/api/leads",
        Some(json!({ "action": "import-csv", "csv": "Name,Email" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("header row"));
}

#[tokio::test]
async fn test_bulk_import_and_rescore() {
    let app = setup_app();
    let (_, body) = send(
        &app,
        "PUT",
        "/api/leads",
        Some(json!({
            "action": "bulk-import",
            "leads": [portugal_referral(), { "name": "Bare", "budget": "not a number" }],
        })),
    )
    .await;
    assert_eq!(body["imported"], 2);

    let (_, leads) = send(&app, "GET", "/api/leads", None).await;
    assert_eq!(leads[1]["budget"], 0.0);

    let (_, body) = send(&app, "PUT", "/api/leads", Some(json!({ "action": "rescore" }))).await;
    assert_eq!(body["rescored"], 2);
}

#[tokio::test]
async fn test_loosely_typed_fields_are_accepted() {
    let app = setup_app();
    let (status, body) = send(
        &app,
        "PUT",
        "/api/leads",
        Some(json!({
            "action": "bulk-import",
            "leads": [
                portugal_referral(),
                { "name": "Loose", "instagramFollowers": 1200.5, "status": "on hold" },
            ],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["imported"], 2);

    let (_, leads) = send(&app, "GET", "/api/leads", None).await;
    assert_eq!(leads[1]["instagramFollowers"], 1200);
    assert!(leads[1]["status"].is_null());

    let (status, lead) = send(
        &app,
        "POST",
        "/api/leads",
        Some(json!({ "name": "Rated", "rating": "4.8", "lastContactedDaysAgo": "3" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(lead["rating"], 4.8);
    assert_eq!(lead["lastContactedDaysAgo"], 3.0);
}

#[tokio::test]
async fn test_reroute_respects_capacity() {
    let app = setup_app();
    send(
        &app,
        "PUT",
        "/api/team",
        Some(json!({
            "action": "set-team",
            "teamMembers": [
                { "id": "ent", "name": "Ent", "role": "Enterprise Sales", "capacity": 1, "weeklyLimit": 5 },
                { "id": "bot", "name": "Bot", "role": "Marketing Automation", "capacity": 5, "weeklyLimit": 50 },
            ],
        })),
    )
    .await;
    send(
        &app,
        "PUT",
        "/api/leads",
        Some(json!({
            "action": "set-leads",
            "leads": [
                { "id": "low", "score": 20 },
                { "id": "top", "score": 200 },
                { "id": "mid", "score": 100 },
            ],
        })),
    )
    .await;

    let (status, body) = send(&app, "PUT", "/api/leads", Some(json!({ "action": "reroute" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["assigned"], 3);
    assert_eq!(body["unassigned"], 0);

    let (_, leads) = send(&app, "GET", "/api/leads", None).await;
    let leads = leads.as_array().unwrap();
    let order: Vec<&str> = leads.iter().map(|l| l["id"].as_str().unwrap()).collect();
    assert_eq!(order, vec!["top", "mid", "low"]);
    assert_eq!(leads[0]["assignedTo"], "ent");
    assert_eq!(leads[1]["assignedTo"], "bot");
    assert_eq!(leads[2]["assignedTo"], "bot");

    let (_, team) = send(&app, "GET", "/api/team", None).await;
    assert_eq!(team[0]["assignedLeads"], 1);
    assert_eq!(team[1]["assignedLeads"], 2);

    let (_, filtered) = send(&app, "GET", "/api/leads?rep=bot", None).await;
    assert_eq!(filtered.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_reroute_with_empty_team_leaves_leads_unassigned() {
    let app = setup_app();
    send(&app, "PUT", "/api/team", Some(json!({ "action": "set-team", "teamMembers": [] }))).await;
    send(&app, "POST", "/api/leads", Some(portugal_referral())).await;

    let (status, body) = send(&app, "PUT", "/api/leads", Some(json!({ "action": "reroute" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["assigned"], 0);
    assert_eq!(body["unassigned"], 1);
}

#[tokio::test]
async fn test_bulk_move_and_enrich() {
    let app = setup_app();
    let (_, lead) = send(&app, "POST", "/api/leads", Some(portugal_referral())).await;
    let id = lead["id"].as_str().unwrap().to_string();

    let (_, body) = send(
        &app,
        "PUT",
        "/api/leads",
        Some(json!({
            "action": "bulk-move-bucket",
            "leadIds": [id, "ghost", id],
            "bucketId": "hot",
        })),
    )
    .await;
    assert_eq!(body["moved"], 2);

    let (_, body) = send(
        &app,
        "PUT",
        "/api/leads",
        Some(json!({
            "action": "enrich-leads",
            "leadIds": [id],
            "field": "rating",
            "results": { id.clone(): "9.5 stars" },
        })),
    )
    .await;
    assert_eq!(body["success"], true);
    assert_eq!(body["enriched"], 1);

    let (_, stored) = send(&app, "GET", &format!("/api/leads/{}", id), None).await;
    assert_eq!(stored["bucket"], "hot");
    assert_eq!(stored["rating"], 5.0);

    let (_, in_bucket) = send(&app, "GET", "/api/leads?bucket=hot", None).await;
    assert_eq!(in_bucket.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_score_preview_does_not_store() {
    let app = setup_app();
    let mut body = portugal_referral();
    body["isFirstContact"] = json!(null);

    let (status, preview) = send(&app, "POST", "/api/leads/score", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(preview["breakdown"]["budget"], 50);
    assert_eq!(preview["breakdown"]["total"], 160);
    assert_eq!(preview["tierInfo"]["tier"], "HIGH VALUE");
    assert_eq!(preview["tierInfo"]["repType"], "Senior Sales Rep");
    assert_eq!(preview["scoreTier"], "high");

    let (_, leads) = send(&app, "GET", "/api/leads", None).await;
    assert!(leads.as_array().unwrap().is_empty());
}

// =============================================================================
// Team
// =============================================================================

#[tokio::test]
async fn test_team_create_update_and_reset() {
    let app = setup_app();
    let (_, seeded) = send(&app, "GET", "/api/team", None).await;
    assert_eq!(seeded.as_array().unwrap().len(), 5);

    let (status, member) = send(
        &app,
        "POST",
        "/api/team",
        Some(json!({ "name": "Lee", "role": "Junior Rep / SDR", "capacity": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(member["capacity"], 10);
    assert_eq!(member["weeklyLimit"], 50);
    assert_eq!(member["assignedLeads"], 0);
    let id = member["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "PUT",
        "/api/team",
        Some(json!({ "action": "update-member", "member": { "id": id, "capacity": 3 } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, team) = send(&app, "GET", "/api/team", None).await;
    let updated = team
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["id"] == id.as_str())
        .unwrap();
    assert_eq!(updated["capacity"], 3);
    assert_eq!(updated["name"], "Lee");

    let (status, _) = send(
        &app,
        "PUT",
        "/api/team",
        Some(json!({ "action": "update-member", "member": { "id": "ghost" } })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    send(&app, "PUT", "/api/team", Some(json!({ "action": "delete-member", "memberId": "rep-1" }))).await;
    let (_, team) = send(&app, "GET", "/api/team", None).await;
    assert_eq!(team.as_array().unwrap().len(), 5);

    send(&app, "PUT", "/api/team", Some(json!({ "action": "reset" }))).await;
    let (_, team) = send(&app, "GET", "/api/team", None).await;
    let team = team.as_array().unwrap();
    assert_eq!(team.len(), 5);
    assert_eq!(team[0]["id"], "rep-1");
}

// =============================================================================
// Buckets
// =============================================================================

#[tokio::test]
async fn test_bucket_lifecycle_and_default_protection() {
    let app = setup_app();

    let (status, bucket) = send(&app, "POST", "/api/buckets", Some(json!({ "name": "Hot" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(bucket["color"], "blue");
    let id = bucket["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "PUT",
        "/api/buckets",
        Some(json!({ "action": "update", "bucket": { "id": id, "color": "red" } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, buckets) = send(&app, "GET", "/api/buckets", None).await;
    assert_eq!(buckets[1]["color"], "red");
    assert_eq!(buckets[1]["name"], "Hot");

    let (status, body) = send(
        &app,
        "PUT",
        "/api/buckets",
        Some(json!({ "action": "delete", "bucketId": "all" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cannot delete default bucket");

    let (status, _) = send(
        &app,
        "PUT",
        "/api/buckets",
        Some(json!({ "action": "update", "bucket": { "id": "ghost", "name": "x" } })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    send(&app, "PUT", "/api/buckets", Some(json!({ "action": "delete", "bucketId": id }))).await;
    let (_, buckets) = send(&app, "GET", "/api/buckets", None).await;
    let buckets = buckets.as_array().unwrap();
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0]["id"], "all");
}

// =============================================================================
// Scoring documentation
// =============================================================================

#[tokio::test]
async fn test_scoring_documentation() {
    let app = setup_app();

    let (status, rules) = send(&app, "GET", "/api/scoring/rules", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rules.as_array().unwrap().len(), 8);

    let (status, tiers) = send(&app, "GET", "/api/scoring/tiers", None).await;
    assert_eq!(status, StatusCode::OK);
    let tiers = tiers.as_array().unwrap();
    assert_eq!(tiers.len(), 5);
    assert_eq!(tiers[0]["tier"], "ENTERPRISE");
}
