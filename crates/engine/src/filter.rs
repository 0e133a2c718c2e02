//! Dashboard lead filters

use serde::Deserialize;

use lead_router_core::{Lead, ScoreTag, DEFAULT_BUCKET_ID};

use crate::tier::{score_tier, tier_info};

const ALL: &str = "all";
const UNASSIGNED: &str = "unassigned";

/// Query-string filters for listing leads
///
/// Every filter is optional; a missing value or the literal `all` disables it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadFilter {
    pub bucket: Option<String>,
    /// Legacy score tag (`enterprise`, `high`, `qualified`, `warm`, `nurture`)
    pub score: Option<String>,
    /// Tier label, e.g. `HIGH VALUE`
    pub tier: Option<String>,
    /// Priority label, e.g. `URGENT`
    pub priority: Option<String>,
    pub industry: Option<String>,
    pub source: Option<String>,
    /// Member id, or `unassigned`
    pub rep: Option<String>,
    pub min_budget: Option<f64>,
    pub max_budget: Option<f64>,
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty() && *v != ALL)
}

impl LeadFilter {
    pub fn is_empty(&self) -> bool {
        active(&self.bucket).is_none()
            && active(&self.score).is_none()
            && active(&self.tier).is_none()
            && active(&self.priority).is_none()
            && active(&self.industry).is_none()
            && active(&self.source).is_none()
            && active(&self.rep).is_none()
            && self.min_budget.is_none()
            && self.max_budget.is_none()
    }

    /// Whether a lead passes every active filter
    ///
    /// Tier and priority fall back to the values implied by the score when a
    /// lead has not been tiered yet.
    pub fn matches(&self, lead: &Lead) -> bool {
        if let Some(bucket) = active(&self.bucket) {
            if bucket != DEFAULT_BUCKET_ID && lead.bucket.as_deref() != Some(bucket) {
                return false;
            }
        }

        if let Some(tag) = active(&self.score) {
            match ScoreTag::parse(tag) {
                Some(tag) if score_tier(lead.score) == tag => {}
                _ => return false,
            }
        }

        if let Some(tier) = active(&self.tier) {
            let lead_tier = lead.tier.unwrap_or_else(|| tier_info(lead.score).tier);
            if lead_tier.label() != tier {
                return false;
            }
        }

        if let Some(priority) = active(&self.priority) {
            let lead_priority = lead
                .priority
                .unwrap_or_else(|| tier_info(lead.score).priority);
            if lead_priority.as_str() != priority {
                return false;
            }
        }

        if let Some(industry) = active(&self.industry) {
            if lead.attributes.industry != industry {
                return false;
            }
        }

        if let Some(source) = active(&self.source) {
            if lead.attributes.source != source {
                return false;
            }
        }

        match active(&self.rep) {
            Some(UNASSIGNED) if lead.assigned_to.is_some() => return false,
            Some(UNASSIGNED) | None => {}
            Some(rep) if lead.assigned_to.as_deref() != Some(rep) => return false,
            Some(_) => {}
        }

        if self.min_budget.is_some_and(|min| lead.attributes.budget < min) {
            return false;
        }
        if self.max_budget.is_some_and(|max| lead.attributes.budget > max) {
            return false;
        }

        true
    }

    /// Leads passing the filter, in their original order
    pub fn apply<'a>(&self, leads: impl IntoIterator<Item = &'a Lead>) -> Vec<Lead> {
        leads
            .into_iter()
            .filter(|l| self.matches(l))
            .cloned()
            .collect()
    }
}
