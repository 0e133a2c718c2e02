//! Lead scoring and routing engine
//!
//! Features:
//! - Eight-dimension point scoring over lead attributes
//! - Tier classification (tier, target role, priority, SLA)
//! - Capacity-aware least-loaded routing with a role fallback hierarchy
//! - CSV import, field enrichment, dashboard filtering and statistics
//!
//! Everything here is synchronous and operates on plain collections. Callers
//! own persistence and replace their stored collections with the results.

pub mod enrichment;
pub mod filter;
pub mod import;
pub mod routing;
pub mod rules;
pub mod scoring;
pub mod stats;
pub mod tier;

pub use enrichment::{enrich_leads, EnrichmentField};
pub use filter::LeadFilter;
pub use import::{
    auto_detect_mappings, format_rows, import_csv, import_leads, normalize_draft, parse_budget,
    parse_csv, CsvTable, FieldMappings,
};
pub use routing::{route_all_leads, route_lead, RoutingOutcome};
pub use rules::{routing_tiers, scoring_rules, RoutingTierDoc, RuleTier, ScoringRule};
pub use scoring::{calculate_score, rescore_all, score_lead};
pub use stats::DashboardStats;
pub use tier::{score_tier, tier_for_score, tier_info};
