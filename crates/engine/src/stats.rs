//! Dashboard summary statistics

use std::collections::BTreeMap;

use serde::Serialize;

use lead_router_core::{Lead, LeadBucket, LeadTier, DEFAULT_BUCKET_ID};

use crate::tier::tier_info;

/// Floor for the budget slider's upper bound
const MIN_MAX_BUDGET: f64 = 500_000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_leads: usize,
    /// Mean score rounded to the nearest point, 0 with no leads
    pub average_score: u32,
    pub assigned: usize,
    pub unassigned: usize,
    /// Lead count per tier label, every tier present
    pub by_tier: BTreeMap<String, usize>,
    /// Lead count per bucket id; `all` counts every lead
    pub by_bucket: BTreeMap<String, usize>,
    /// Distinct non-empty sources in first-seen order
    pub sources: Vec<String>,
    /// Distinct non-empty industries, sorted
    pub industries: Vec<String>,
    pub max_budget: f64,
}

impl DashboardStats {
    pub fn compute(leads: &[Lead], buckets: &[LeadBucket]) -> Self {
        let total_leads = leads.len();
        let assigned = leads.iter().filter(|l| l.is_assigned()).count();

        let average_score = if total_leads == 0 {
            0
        } else {
            let sum: u64 = leads.iter().map(|l| u64::from(l.score)).sum();
            (sum as f64 / total_leads as f64).round() as u32
        };

        let mut by_tier: BTreeMap<String, usize> = LeadTier::ALL
            .iter()
            .map(|t| (t.label().to_string(), 0))
            .collect();
        for lead in leads {
            let tier = lead.tier.unwrap_or_else(|| tier_info(lead.score).tier);
            *by_tier.entry(tier.label().to_string()).or_default() += 1;
        }

        let mut by_bucket = BTreeMap::new();
        by_bucket.insert(DEFAULT_BUCKET_ID.to_string(), total_leads);
        for bucket in buckets.iter().filter(|b| !b.is_default()) {
            let count = leads
                .iter()
                .filter(|l| l.bucket.as_deref() == Some(bucket.id.as_str()))
                .count();
            by_bucket.insert(bucket.id.clone(), count);
        }

        let mut sources: Vec<String> = Vec::new();
        for lead in leads {
            let source = &lead.attributes.source;
            if !source.is_empty() && !sources.contains(source) {
                sources.push(source.clone());
            }
        }

        let mut industries: Vec<String> = leads
            .iter()
            .map(|l| l.attributes.industry.clone())
            .filter(|i| !i.is_empty())
            .collect();
        industries.sort();
        industries.dedup();

        let max_budget = leads
            .iter()
            .map(|l| l.attributes.budget)
            .fold(MIN_MAX_BUDGET, f64::max);

        Self {
            total_leads,
            average_score,
            assigned,
            unassigned: total_leads - assigned,
            by_tier,
            by_bucket,
            sources,
            industries,
            max_budget,
        }
    }
}
