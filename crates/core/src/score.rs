//! Score breakdown

use serde::{Deserialize, Serialize};

/// Upper bound on a lead's total score
///
/// Applied after summing the factors. The strongest leads can exceed it
/// (the factor maxima sum to 243), in which case the total saturates here.
pub const MAX_TOTAL_SCORE: u32 = 213;

/// Per-factor contribution to a lead's score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub budget: u32,
    pub industry: u32,
    pub location: u32,
    pub source: u32,
    pub company_size: u32,
    pub quality: u32,
    pub engagement: u32,
    pub velocity: u32,
    pub total: u32,
}

impl ScoreBreakdown {
    /// Sum of the individual factors, before the total cap is applied
    pub fn factor_sum(&self) -> u32 {
        self.budget
            + self.industry
            + self.location
            + self.source
            + self.company_size
            + self.quality
            + self.engagement
            + self.velocity
    }
}
