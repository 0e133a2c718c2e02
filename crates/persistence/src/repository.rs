//! Repository abstraction
//!
//! The HTTP layer talks to storage only through [`Repository`], so scoring
//! and routing stay testable without a backing store and the in-memory
//! implementation can be swapped for a database-backed one.

use async_trait::async_trait;

use lead_router_core::{Lead, LeadBucket, TeamMember};

use crate::PersistenceError;

/// A stored record with a stable string id
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable kind, used in not-found errors
    const KIND: &'static str;

    fn id(&self) -> &str;
}

impl Entity for Lead {
    const KIND: &'static str = "Lead";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for TeamMember {
    const KIND: &'static str = "Team member";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for LeadBucket {
    const KIND: &'static str = "Bucket";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Ordered collection storage
///
/// Implementations preserve insertion order in `list`. Bulk operations that
/// recompute a whole collection (rescore, reroute) read with `list` and write
/// back with `replace_all`, which must swap the collection in one step.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// All records in insertion order
    async fn list(&self) -> Result<Vec<T>, PersistenceError>;

    async fn get(&self, id: &str) -> Result<Option<T>, PersistenceError>;

    /// Insert, or replace in place when the id already exists
    async fn put(&self, item: T) -> Result<(), PersistenceError>;

    /// Append many records
    async fn put_many(&self, items: Vec<T>) -> Result<usize, PersistenceError>;

    /// Swap the whole collection
    async fn replace_all(&self, items: Vec<T>) -> Result<(), PersistenceError>;

    /// Remove one record; missing ids are an error
    async fn delete(&self, id: &str) -> Result<(), PersistenceError>;

    /// Remove every record whose id is listed, returning how many existed
    async fn delete_many(&self, ids: &[String]) -> Result<usize, PersistenceError>;

    async fn clear(&self) -> Result<(), PersistenceError>;

    async fn count(&self) -> Result<usize, PersistenceError> {
        Ok(self.list().await?.len())
    }

    /// Fetch a record or fail with `NotFound`
    async fn require(&self, id: &str) -> Result<T, PersistenceError> {
        self.get(id).await?.ok_or_else(|| PersistenceError::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        })
    }
}
