//! Lead score calculator
//!
//! Scores a lead across eight independently capped dimensions:
//! budget, industry, location, source, company size, quality signals,
//! engagement recency and buying velocity.
//!
//! Table lookups match on the trimmed, case-insensitive value. Absent or
//! unrecognised values fall back to the dimension's "other" score, so
//! scoring never fails.
//!
//! Where a dimension has stacked thresholds (Instagram followers, rating,
//! contact recency) only the highest threshold met applies.

use lead_router_core::{
    BuyingStage, CompanySize, Lead, LeadAttributes, ScoreBreakdown, MAX_TOTAL_SCORE,
};

use crate::tier::tier_info;

const INDUSTRY_SCORES: &[(&str, u32)] = &[
    ("Tech", 35),
    ("SaaS", 35),
    ("FinTech", 33),
    ("Finance", 33),
    ("Healthcare", 32),
    ("Pharma", 32),
    ("Scientific Research", 30),
    ("E-commerce", 28),
    ("Retail", 28),
    ("Automotive", 27),
    ("Manufacturing", 27),
    ("Real Estate", 26),
    ("Construction", 26),
    ("Education", 25),
    ("Logistics", 24),
    ("Supply Chain", 24),
    ("Media", 23),
    ("Entertainment", 23),
];
const INDUSTRY_OTHER: u32 = 10;

const LOCATION_SCORES: &[(&str, u32)] = &[
    ("PT", 25),
    ("Portugal", 25),
    ("UK", 24),
    ("Ireland", 24),
    ("United Kingdom", 24),
    ("Germany", 23),
    ("France", 23),
    ("Benelux", 23),
    ("Netherlands", 23),
    ("Belgium", 23),
    ("Luxembourg", 23),
    ("Spain", 22),
    ("Italy", 22),
    ("Scandinavia", 21),
    ("Denmark", 21),
    ("Sweden", 21),
    ("Norway", 21),
    ("Finland", 21),
    ("US", 20),
    ("USA", 20),
    ("United States", 20),
    ("CA", 20),
    ("Canada", 20),
    ("North America", 20),
    ("Australia", 18),
    ("NZ", 18),
    ("New Zealand", 18),
    ("Singapore", 17),
    ("Japan", 17),
    ("India", 17),
    ("APAC", 17),
    ("Asia", 17),
    ("Brazil", 16),
    ("LATAM", 16),
    ("Mexico", 16),
    ("South America", 16),
];
const LOCATION_OTHER: u32 = 8;

const SOURCE_SCORES: &[(&str, u32)] = &[
    ("Referral", 30),
    ("Warm Intro", 30),
    ("Partnership", 28),
    ("Channel", 28),
    ("Inbound", 25),
    ("Website", 25),
    ("Website Form", 25),
    ("Event", 25),
    ("Conference", 25),
    ("Trade Show", 24),
    ("LinkedIn DM", 22),
    ("LinkedIn", 22),
    ("Press", 20),
    ("Media", 20),
    ("Social Media", 18),
    ("Instagram", 18),
    ("Cold Email", 12),
    ("Cold Call", 12),
];
const SOURCE_OTHER: u32 = 8;

const QUALITY_MAX: u32 = 30;
const ENGAGEMENT_MAX: u32 = 25;

fn lookup(table: &[(&str, u32)], value: &str, other: u32) -> u32 {
    let value = value.trim();
    table
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(value))
        .map(|(_, points)| *points)
        .unwrap_or(other)
}

fn budget_score(budget: f64) -> u32 {
    if budget > 100_000.0 {
        50
    } else if budget > 50_000.0 {
        40
    } else if budget > 25_000.0 {
        30
    } else if budget > 10_000.0 {
        20
    } else if budget > 5_000.0 {
        10
    } else {
        5
    }
}

fn company_size_score(size: Option<CompanySize>) -> u32 {
    match size {
        Some(CompanySize::Enterprise) => 28,
        Some(CompanySize::MidMarket) => 25,
        Some(CompanySize::Smb) => 20,
        Some(CompanySize::Startup) => 18,
        Some(CompanySize::Solopreneur) | Some(CompanySize::Freelance) => 10,
        Some(CompanySize::Unknown) | None => 5,
    }
}

fn quality_score(attrs: &LeadAttributes) -> u32 {
    let mut score = 0u32;

    let has_website = attrs.website.as_deref().is_some_and(|w| !w.is_empty());
    if has_website && attrs.has_active_on_social == Some(true) {
        score += 15;
    } else if has_website {
        score += 8;
    }

    let followers = attrs.instagram_followers.unwrap_or(0);
    if followers > 5_000 {
        score += 12;
    } else if followers > 1_000 {
        score += 8;
    }

    let rating = attrs.rating.unwrap_or(0.0);
    if rating > 4.5 {
        score += 10;
    } else if rating > 4.0 {
        score += 7;
    }

    if attrs.linkedin_verified == Some(true) {
        score += 8;
    }
    if attrs.has_engagement_history == Some(true) {
        score += 10;
    }

    score.min(QUALITY_MAX)
}

fn engagement_score(attrs: &LeadAttributes) -> u32 {
    let mut score = 0u32;

    // Recency wins over the first-contact bonus whenever it is known
    if let Some(days) = attrs.last_contacted_days_ago {
        if days < 3.0 {
            score += 15;
        } else if days < 7.0 {
            score += 10;
        } else if days < 28.0 {
            score += 5;
        }
    } else if attrs.is_first_contact == Some(true) {
        score += 15;
    }

    if attrs.is_reengagement_opportunity == Some(true) {
        score += 8;
    }

    score.min(ENGAGEMENT_MAX)
}

fn velocity_score(stage: Option<BuyingStage>) -> u32 {
    match stage {
        Some(BuyingStage::BudgetApproved) => 20,
        Some(BuyingStage::ActiveBuyingCycle) => 18,
        Some(BuyingStage::Planning) => 12,
        Some(BuyingStage::EarlyAwareness) => 5,
        Some(BuyingStage::Unknown) | None => 0,
    }
}

/// Compute the full score breakdown for a set of lead attributes
pub fn calculate_score(attrs: &LeadAttributes) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown {
        budget: budget_score(attrs.budget),
        industry: lookup(INDUSTRY_SCORES, &attrs.industry, INDUSTRY_OTHER),
        location: lookup(LOCATION_SCORES, &attrs.location, LOCATION_OTHER),
        source: lookup(SOURCE_SCORES, &attrs.source, SOURCE_OTHER),
        company_size: company_size_score(attrs.company_size),
        quality: quality_score(attrs),
        engagement: engagement_score(attrs),
        velocity: velocity_score(attrs.buying_stage),
        total: 0,
    };
    breakdown.total = breakdown.factor_sum().min(MAX_TOTAL_SCORE);
    breakdown
}

/// Rescore a lead in place and refresh its tier fields
///
/// Assignment is left untouched; only routing sets `assigned_to`.
pub fn score_lead(lead: &mut Lead) -> ScoreBreakdown {
    let breakdown = calculate_score(&lead.attributes);
    lead.score = breakdown.total;
    lead.apply_tier(&tier_info(breakdown.total));

    tracing::trace!(lead_id = %lead.id, score = lead.score, "Scored lead");
    metrics::counter!("lead_router_leads_scored_total").increment(1);

    breakdown
}

/// Rescore every lead, returning how many were processed
pub fn rescore_all(leads: &mut [Lead]) -> usize {
    for lead in leads.iter_mut() {
        score_lead(lead);
    }
    tracing::info!(count = leads.len(), "Rescored leads");
    leads.len()
}
