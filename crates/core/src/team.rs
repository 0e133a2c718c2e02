//! Team members and rep roles

use serde::{Deserialize, Serialize};

/// Rep role a team member holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepType {
    #[serde(rename = "Enterprise Sales")]
    EnterpriseSales,
    #[serde(rename = "Senior Sales Rep")]
    SeniorSalesRep,
    #[serde(rename = "Mid-level Rep")]
    MidLevelRep,
    #[serde(rename = "Junior Rep / SDR")]
    JuniorRep,
    #[serde(rename = "Marketing Automation")]
    MarketingAutomation,
}

impl RepType {
    /// Fallback order used when no member of the tier's own role has capacity
    pub const HIERARCHY: [RepType; 5] = [
        RepType::EnterpriseSales,
        RepType::SeniorSalesRep,
        RepType::MidLevelRep,
        RepType::JuniorRep,
        RepType::MarketingAutomation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RepType::EnterpriseSales => "Enterprise Sales",
            RepType::SeniorSalesRep => "Senior Sales Rep",
            RepType::MidLevelRep => "Mid-level Rep",
            RepType::JuniorRep => "Junior Rep / SDR",
            RepType::MarketingAutomation => "Marketing Automation",
        }
    }
}

impl std::fmt::Display for RepType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A member of the sales team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub role: RepType,
    /// Maximum number of concurrently assigned leads
    #[serde(default)]
    pub capacity: u32,
    /// Current assignment count. Only authoritative right after a routing pass.
    #[serde(default)]
    pub assigned_leads: u32,
    /// Informational; routing does not enforce it
    #[serde(default)]
    pub weekly_limit: u32,
}

impl TeamMember {
    /// Create a member with a fresh id and no assignments
    pub fn new(name: impl Into<String>, role: RepType, capacity: u32, weekly_limit: u32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            role,
            capacity,
            assigned_leads: 0,
            weekly_limit,
        }
    }

    /// Whether the member can take another lead
    pub fn has_capacity(&self) -> bool {
        self.assigned_leads < self.capacity
    }
}

/// Request body for adding a team member
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberDraft {
    #[serde(default)]
    pub name: String,
    pub role: RepType,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub weekly_limit: Option<u32>,
}

impl TeamMemberDraft {
    /// Build a member, substituting defaults for missing or zero limits
    pub fn into_member(self, default_capacity: u32, default_weekly_limit: u32) -> TeamMember {
        let capacity = self.capacity.filter(|c| *c > 0).unwrap_or(default_capacity);
        let weekly_limit = self
            .weekly_limit
            .filter(|w| *w > 0)
            .unwrap_or(default_weekly_limit);
        TeamMember::new(self.name, self.role, capacity, weekly_limit)
    }
}
