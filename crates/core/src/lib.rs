//! Core types for the lead router
//!
//! This crate provides the foundational types shared by every other crate:
//! - Lead records and the attributes that feed scoring
//! - Team members and the fixed rep roles used for routing
//! - Lead buckets (user-defined groupings)
//! - Tier, priority and score breakdown types
//! - Error types
//!
//! Nothing here computes a score or performs routing. That lives in
//! `lead-router-engine`, which keeps these types free of policy.

pub mod bucket;
pub mod error;
pub mod lead;
pub mod patch;
pub mod score;
pub mod team;
pub mod tier;

pub use bucket::{BucketDraft, LeadBucket, DEFAULT_BUCKET_ID};
pub use error::{Error, Result};
pub use lead::{BuyingStage, CompanySize, Lead, LeadAttributes, LeadDraft, LeadStatus};
pub use patch::merge_patch;
pub use score::{ScoreBreakdown, MAX_TOTAL_SCORE};
pub use team::{RepType, TeamMember, TeamMemberDraft};
pub use tier::{LeadTier, Priority, ScoreTag, TierInfo};
