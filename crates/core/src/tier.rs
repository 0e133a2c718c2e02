//! Lead tiers, priorities and the tier lookup record

use serde::{Deserialize, Serialize};

use crate::team::RepType;

/// Lead tier derived from the total score
///
/// Variants are declared from the highest tier down. `LeadTier::ALL`
/// preserves that order, which is the order tier lookup walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadTier {
    #[serde(rename = "ENTERPRISE")]
    Enterprise,
    #[serde(rename = "HIGH VALUE")]
    HighValue,
    #[serde(rename = "QUALIFIED")]
    Qualified,
    #[serde(rename = "WARM LEAD")]
    WarmLead,
    #[serde(rename = "NURTURE")]
    Nurture,
}

impl LeadTier {
    /// All tiers, highest first
    pub const ALL: [LeadTier; 5] = [
        LeadTier::Enterprise,
        LeadTier::HighValue,
        LeadTier::Qualified,
        LeadTier::WarmLead,
        LeadTier::Nurture,
    ];

    /// Inclusive lower bound of the tier's score range
    pub fn min_score(&self) -> u32 {
        match self {
            LeadTier::Enterprise => 170,
            LeadTier::HighValue => 130,
            LeadTier::Qualified => 90,
            LeadTier::WarmLead => 50,
            LeadTier::Nurture => 0,
        }
    }

    /// Display label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            LeadTier::Enterprise => "ENTERPRISE",
            LeadTier::HighValue => "HIGH VALUE",
            LeadTier::Qualified => "QUALIFIED",
            LeadTier::WarmLead => "WARM LEAD",
            LeadTier::Nurture => "NURTURE",
        }
    }

    /// Human-readable score range, e.g. `130–169`
    pub fn score_range(&self) -> &'static str {
        match self {
            LeadTier::Enterprise => "170+",
            LeadTier::HighValue => "130–169",
            LeadTier::Qualified => "90–129",
            LeadTier::WarmLead => "50–89",
            LeadTier::Nurture => "0–49",
        }
    }

    /// Rep role that should own leads of this tier
    pub fn rep_type(&self) -> RepType {
        match self {
            LeadTier::Enterprise => RepType::EnterpriseSales,
            LeadTier::HighValue => RepType::SeniorSalesRep,
            LeadTier::Qualified => RepType::MidLevelRep,
            LeadTier::WarmLead => RepType::JuniorRep,
            LeadTier::Nurture => RepType::MarketingAutomation,
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            LeadTier::Enterprise => Priority::Urgent,
            LeadTier::HighValue => Priority::High,
            LeadTier::Qualified => Priority::Medium,
            LeadTier::WarmLead => Priority::Normal,
            LeadTier::Nurture => Priority::Low,
        }
    }

    pub fn response_time(&self) -> &'static str {
        match self {
            LeadTier::Enterprise => "Same day",
            LeadTier::HighValue => "<24 hours",
            LeadTier::Qualified => "<48 hours",
            LeadTier::WarmLead => "<72 hours",
            LeadTier::Nurture => "Automated",
        }
    }

    /// SLA in hours; nurture leads are handled by automation and have none
    pub fn sla_hours(&self) -> Option<u32> {
        match self {
            LeadTier::Enterprise => Some(0),
            LeadTier::HighValue => Some(24),
            LeadTier::Qualified => Some(48),
            LeadTier::WarmLead => Some(72),
            LeadTier::Nurture => None,
        }
    }

    /// Full lookup record for this tier
    pub fn info(&self) -> TierInfo {
        TierInfo {
            tier: *self,
            rep_type: self.rep_type(),
            priority: self.priority(),
            response_time: self.response_time(),
            sla: self.sla_hours(),
        }
    }
}

/// Follow-up priority attached to a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Normal,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "URGENT",
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Normal => "NORMAL",
            Priority::Low => "LOW",
        }
    }
}

/// Immutable per-tier lookup record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierInfo {
    pub tier: LeadTier,
    pub rep_type: RepType,
    pub priority: Priority,
    pub response_time: &'static str,
    /// Hours to first response, `None` for automated handling
    pub sla: Option<u32>,
}

/// Legacy lowercase score tag used by the dashboard "score" filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTag {
    Enterprise,
    High,
    Qualified,
    Warm,
    Nurture,
}

impl ScoreTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreTag::Enterprise => "enterprise",
            ScoreTag::High => "high",
            ScoreTag::Qualified => "qualified",
            ScoreTag::Warm => "warm",
            ScoreTag::Nurture => "nurture",
        }
    }

    /// Parse a tag as sent in query strings; unknown tags yield `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "enterprise" => Some(ScoreTag::Enterprise),
            "high" => Some(ScoreTag::High),
            "qualified" => Some(ScoreTag::Qualified),
            "warm" => Some(ScoreTag::Warm),
            "nurture" => Some(ScoreTag::Nurture),
            _ => None,
        }
    }
}

impl From<LeadTier> for ScoreTag {
    fn from(tier: LeadTier) -> Self {
        match tier {
            LeadTier::Enterprise => ScoreTag::Enterprise,
            LeadTier::HighValue => ScoreTag::High,
            LeadTier::Qualified => ScoreTag::Qualified,
            LeadTier::WarmLead => ScoreTag::Warm,
            LeadTier::Nurture => ScoreTag::Nurture,
        }
    }
}
