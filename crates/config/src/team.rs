//! Team defaults and the seed roster

use serde::{Deserialize, Serialize};

use lead_router_core::{RepType, TeamMember};

/// Team configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamConfig {
    /// Capacity given to members created without one
    #[serde(default = "default_capacity")]
    pub default_capacity: u32,

    /// Weekly limit given to members created without one
    #[serde(default = "default_weekly_limit")]
    pub default_weekly_limit: u32,

    /// Roster loaded at startup and restored by a team reset
    #[serde(default = "default_roster")]
    pub roster: Vec<SeedMember>,
}

/// A configured team member
///
/// Unlike a live [`TeamMember`] the id is fixed so a reset restores the same
/// identities, and limits may be omitted to inherit the team defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedMember {
    pub id: String,
    pub name: String,
    pub role: RepType,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub weekly_limit: Option<u32>,
}

fn default_capacity() -> u32 {
    10
}
fn default_weekly_limit() -> u32 {
    50
}

fn seed(id: &str, name: &str, role: RepType, capacity: u32, weekly_limit: u32) -> SeedMember {
    SeedMember {
        id: id.to_string(),
        name: name.to_string(),
        role,
        capacity: Some(capacity),
        weekly_limit: Some(weekly_limit),
    }
}

/// One member per rep role
pub fn default_roster() -> Vec<SeedMember> {
    vec![
        seed("rep-1", "Sarah Chen", RepType::EnterpriseSales, 5, 15),
        seed("rep-2", "Marcus Johnson", RepType::SeniorSalesRep, 8, 25),
        seed("rep-3", "Emily Rodriguez", RepType::MidLevelRep, 12, 40),
        seed("rep-4", "David Kim", RepType::JuniorRep, 15, 50),
        seed("rep-5", "Nurture Bot", RepType::MarketingAutomation, 100, 500),
    ]
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            default_capacity: default_capacity(),
            default_weekly_limit: default_weekly_limit(),
            roster: default_roster(),
        }
    }
}

impl TeamConfig {
    /// Materialize the seed roster with zero assignments
    pub fn seed_members(&self) -> Vec<TeamMember> {
        self.roster
            .iter()
            .map(|s| TeamMember {
                id: s.id.clone(),
                name: s.name.clone(),
                role: s.role,
                capacity: s.capacity.unwrap_or(self.default_capacity),
                assigned_leads: 0,
                weekly_limit: s.weekly_limit.unwrap_or(self.default_weekly_limit),
            })
            .collect()
    }
}
