//! Lead records and scoring attributes
//!
//! A [`Lead`] carries contact fields that scoring never reads, the
//! [`LeadAttributes`] that feed the score, and the derived fields written
//! back by scoring and routing (`score`, `tier`, `priority`, `responseTime`,
//! `sla`, `assignedTo`).
//!
//! Deserialization is permissive: absent scoring fields fall back to the
//! lowest-scoring bucket, budgets may arrive as numeric strings, and
//! unrecognised company-size or buying-stage labels become `Unknown`.

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::tier::{LeadTier, Priority, TierInfo};

/// Company size bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompanySize {
    Enterprise,
    MidMarket,
    Smb,
    Startup,
    Solopreneur,
    Freelance,
    Unknown,
}

impl CompanySize {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Enterprise => "Enterprise",
            CompanySize::MidMarket => "Mid-Market",
            CompanySize::Smb => "SMB",
            CompanySize::Startup => "Startup",
            CompanySize::Solopreneur => "Solopreneur",
            CompanySize::Freelance => "Freelance",
            CompanySize::Unknown => "Unknown",
        }
    }
}

impl From<String> for CompanySize {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Enterprise" => CompanySize::Enterprise,
            "Mid-Market" => CompanySize::MidMarket,
            "SMB" => CompanySize::Smb,
            "Startup" => CompanySize::Startup,
            "Solopreneur" => CompanySize::Solopreneur,
            "Freelance" => CompanySize::Freelance,
            "Unknown" => CompanySize::Unknown,
            other => {
                tracing::debug!(label = %other, "Unrecognised company size, treating as Unknown");
                CompanySize::Unknown
            }
        }
    }
}

impl From<CompanySize> for String {
    fn from(size: CompanySize) -> Self {
        size.as_str().to_string()
    }
}

/// How far along the buying process the lead is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BuyingStage {
    BudgetApproved,
    ActiveBuyingCycle,
    Planning,
    EarlyAwareness,
    Unknown,
}

impl BuyingStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuyingStage::BudgetApproved => "Budget Approved",
            BuyingStage::ActiveBuyingCycle => "Active Buying Cycle",
            BuyingStage::Planning => "Planning",
            BuyingStage::EarlyAwareness => "Early Awareness",
            BuyingStage::Unknown => "Unknown",
        }
    }
}

impl From<String> for BuyingStage {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Budget Approved" => BuyingStage::BudgetApproved,
            "Active Buying Cycle" => BuyingStage::ActiveBuyingCycle,
            "Planning" => BuyingStage::Planning,
            "Early Awareness" => BuyingStage::EarlyAwareness,
            "Unknown" => BuyingStage::Unknown,
            other => {
                tracing::debug!(label = %other, "Unrecognised buying stage, treating as Unknown");
                BuyingStage::Unknown
            }
        }
    }
}

impl From<BuyingStage> for String {
    fn from(stage: BuyingStage) -> Self {
        stage.as_str().to_string()
    }
}

/// Pipeline status set by the sales team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    #[serde(rename = "contacted")]
    Contacted,
    #[serde(rename = "rejected")]
    Rejected,
    #[serde(rename = "bad timing")]
    BadTiming,
    #[serde(rename = "ghosted")]
    Ghosted,
    #[serde(rename = "discovery call")]
    DiscoveryCall,
    #[serde(rename = "proposal sent")]
    ProposalSent,
    #[serde(rename = "closed")]
    Closed,
}

/// Everything the score calculator reads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadAttributes {
    #[serde(default, deserialize_with = "lenient_number")]
    pub budget: f64,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<CompanySize>,

    // Quality signals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_active_on_social: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub instagram_followers: Option<u64>,
    #[serde(
        default,
        deserialize_with = "lenient_float",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<f64>,
    #[serde(
        default,
        rename = "linkedInVerified",
        skip_serializing_if = "Option::is_none"
    )]
    pub linkedin_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_engagement_history: Option<bool>,

    // Engagement signals
    #[serde(
        default,
        deserialize_with = "lenient_float",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_contacted_days_ago: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_first_contact: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_reengagement_opportunity: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buying_stage: Option<BuyingStage>,
}

/// Lead-shaped request body: everything a caller may supply on create/import
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<LeadStatus>,
    #[serde(default)]
    pub bucket: Option<String>,
    #[serde(flatten)]
    pub attributes: LeadAttributes,
}

/// A stored lead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<LeadStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(flatten)]
    pub attributes: LeadAttributes,

    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<LeadTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<String>,
    #[serde(default)]
    pub sla: Option<u32>,
}

impl Lead {
    /// Materialize a draft as a new, unscored and unassigned lead
    ///
    /// `isFirstContact` defaults to true when the caller did not say otherwise.
    pub fn from_draft(draft: LeadDraft) -> Self {
        let mut attributes = draft.attributes;
        attributes.is_first_contact.get_or_insert(true);

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: draft.name,
            email: draft.email,
            company: draft.company,
            phone: draft.phone,
            instagram: draft.instagram,
            status: draft.status,
            bucket: draft.bucket,
            attributes,
            score: 0,
            assigned_to: None,
            created_at: Utc::now(),
            tier: None,
            priority: None,
            response_time: None,
            sla: None,
        }
    }

    /// Copy the tier lookup record onto the lead's derived fields
    pub fn apply_tier(&mut self, info: &TierInfo) {
        self.tier = Some(info.tier);
        self.priority = Some(info.priority);
        self.response_time = Some(info.response_time.to_string());
        self.sla = info.sla;
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_to.is_some()
    }
}

/// Loosely typed numeric input: a JSON number or a numeric string
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl RawNumber {
    fn value(self) -> Option<f64> {
        match self {
            RawNumber::Number(n) => Some(n),
            RawNumber::Text(s) => s.trim().parse::<f64>().ok(),
            RawNumber::Other(_) => None,
        }
        .filter(|n| n.is_finite())
    }
}

/// Accept a number, a numeric string, or null; anything else reads as 0
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawNumber>::deserialize(deserializer)?
        .and_then(RawNumber::value)
        .unwrap_or(0.0))
}

/// Optional float; unparsable input reads as absent
fn lenient_float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawNumber>::deserialize(deserializer)?.and_then(RawNumber::value))
}

/// Optional count: fractions are floored and negatives clamp to 0
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawNumber>::deserialize(deserializer)?
        .and_then(RawNumber::value)
        .map(|n| n.max(0.0).floor() as u64))
}

/// Unrecognised status labels are dropped rather than rejecting the lead
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<LeadStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Known(LeadStatus),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Known(status)) => Some(status),
        Some(Raw::Text(label)) => {
            tracing::debug!(label = %label, "Unrecognised lead status, leaving unset");
            None
        },
        Some(Raw::Other(_)) | None => None,
    })
}
