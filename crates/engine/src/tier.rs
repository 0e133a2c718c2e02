//! Tier classification

use lead_router_core::{LeadTier, ScoreTag, TierInfo};

/// Classify a total score
///
/// Tiers are walked highest first and the first whose lower bound the score
/// meets wins, so the ranges partition `[0, ∞)` with no gaps.
pub fn tier_for_score(score: u32) -> LeadTier {
    LeadTier::ALL
        .into_iter()
        .find(|tier| score >= tier.min_score())
        .unwrap_or(LeadTier::Nurture)
}

/// Tier lookup record for a total score
pub fn tier_info(score: u32) -> TierInfo {
    tier_for_score(score).info()
}

/// Legacy lowercase tag for a score, over the same thresholds as [`tier_info`]
pub fn score_tier(score: u32) -> ScoreTag {
    ScoreTag::from(tier_for_score(score))
}
