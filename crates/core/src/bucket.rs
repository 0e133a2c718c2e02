//! Lead buckets
//!
//! Buckets are user-defined folders for leads. The built-in "all" bucket
//! always exists and cannot be deleted.

use serde::{Deserialize, Serialize};

/// Id of the built-in bucket every lead implicitly belongs to
pub const DEFAULT_BUCKET_ID: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadBucket {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: String,
}

impl LeadBucket {
    /// The undeletable "All Leads" bucket
    pub fn default_bucket() -> Self {
        Self {
            id: DEFAULT_BUCKET_ID.to_string(),
            name: "All Leads".to_string(),
            color: "gray".to_string(),
        }
    }

    pub fn is_default(&self) -> bool {
        self.id == DEFAULT_BUCKET_ID
    }
}

/// Request body for creating a bucket
#[derive(Debug, Clone, Deserialize)]
pub struct BucketDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl BucketDraft {
    pub fn into_bucket(self, default_color: &str) -> LeadBucket {
        LeadBucket {
            id: uuid::Uuid::new_v4().to_string(),
            name: self.name,
            color: self
                .color
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| default_color.to_string()),
        }
    }
}
