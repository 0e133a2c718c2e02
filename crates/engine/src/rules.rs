//! Human-readable scoring and routing documentation
//!
//! Served to clients so the dashboard can explain a score without
//! duplicating the tables.

use serde::Serialize;

use lead_router_core::{LeadTier, Priority, RepType};

#[derive(Debug, Clone, Serialize)]
pub struct RuleTier {
    pub label: &'static str,
    pub points: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringRule {
    /// Breakdown field this rule documents
    pub key: &'static str,
    pub name: &'static str,
    pub max_points: u32,
    pub tiers: Vec<RuleTier>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingTierDoc {
    pub tier: LeadTier,
    pub score_range: &'static str,
    pub rep_type: RepType,
    pub priority: Priority,
    pub response_time: &'static str,
}

fn rule(
    key: &'static str,
    name: &'static str,
    max_points: u32,
    tiers: &[(&'static str, u32)],
) -> ScoringRule {
    ScoringRule {
        key,
        name,
        max_points,
        tiers: tiers
            .iter()
            .map(|&(label, points)| RuleTier { label, points })
            .collect(),
    }
}

/// Per-dimension documentation, in breakdown order
pub fn scoring_rules() -> Vec<ScoringRule> {
    vec![
        rule(
            "budget",
            "Budget",
            50,
            &[
                ("$100k+", 50),
                ("$50–100k", 40),
                ("$25–50k", 30),
                ("$10–25k", 20),
                ("$5–10k", 10),
                ("<$5k", 5),
            ],
        ),
        rule(
            "industry",
            "Industry",
            35,
            &[
                ("Tech/SaaS", 35),
                ("FinTech/Finance", 33),
                ("Healthcare/Pharma", 32),
                ("Scientific Research", 30),
                ("E-commerce/Retail", 28),
                ("Automotive/Manufacturing", 27),
                ("Real Estate/Construction", 26),
                ("Education", 25),
                ("Logistics/Supply Chain", 24),
                ("Media/Entertainment", 23),
                ("Other", 10),
            ],
        ),
        rule(
            "location",
            "Location",
            25,
            &[
                ("Portugal", 25),
                ("UK/Ireland", 24),
                ("Germany/France/Benelux", 23),
                ("Spain/Italy", 22),
                ("Scandinavia", 21),
                ("North America", 20),
                ("Australia/NZ", 18),
                ("APAC", 17),
                ("Brazil/LATAM", 16),
                ("Other", 8),
            ],
        ),
        rule(
            "source",
            "Source",
            30,
            &[
                ("Referral/Warm Intro", 30),
                ("Partnership/Channel", 28),
                ("Inbound/Website", 25),
                ("Event/Conference", 25),
                ("Trade Show", 24),
                ("LinkedIn DM", 22),
                ("Press/Media", 20),
                ("Social Media", 18),
                ("Cold Email", 12),
                ("Other", 8),
            ],
        ),
        rule(
            "companySize",
            "Company Size",
            28,
            &[
                ("Enterprise", 28),
                ("Mid-Market", 25),
                ("SMB", 20),
                ("Startup", 18),
                ("Solopreneur/Freelance", 10),
                ("Unknown", 5),
            ],
        ),
        rule(
            "quality",
            "Lead Quality",
            30,
            &[
                ("Website + Active Social", 15),
                ("Website only", 8),
                ("Instagram >5k followers", 12),
                ("Instagram 1–5k", 8),
                ("Rating >4.5", 10),
                ("Rating 4.0–4.5", 7),
                ("LinkedIn verified", 8),
                ("Engagement history", 10),
            ],
        ),
        rule(
            "engagement",
            "Engagement Level",
            25,
            &[
                ("Last contacted <3 days", 15),
                ("Last contacted <7 days", 10),
                ("Last contacted 1–4 weeks", 5),
                ("Fresh/First contact", 15),
                ("Re-engagement opportunity", 8),
            ],
        ),
        rule(
            "velocity",
            "Decision Velocity",
            20,
            &[
                ("Budget approved", 20),
                ("Active buying cycle", 18),
                ("Planning stage", 12),
                ("Early awareness", 5),
            ],
        ),
    ]
}

/// Routing table, highest tier first
pub fn routing_tiers() -> Vec<RoutingTierDoc> {
    LeadTier::ALL
        .iter()
        .map(|tier| RoutingTierDoc {
            tier: *tier,
            score_range: tier.score_range(),
            rep_type: tier.rep_type(),
            priority: tier.priority(),
            response_time: tier.response_time(),
        })
        .collect()
}
