//! In-memory repository
//!
//! Records live in a `Vec` behind a `parking_lot::RwLock`. Nothing survives a
//! restart.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::repository::{Entity, Repository};
use crate::PersistenceError;

pub struct InMemoryRepository<T> {
    items: RwLock<Vec<T>>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a seeded collection
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>, PersistenceError> {
        Ok(self.items.read().clone())
    }

    async fn get(&self, id: &str) -> Result<Option<T>, PersistenceError> {
        Ok(self.items.read().iter().find(|i| i.id() == id).cloned())
    }

    async fn put(&self, item: T) -> Result<(), PersistenceError> {
        let mut items = self.items.write();
        match items.iter_mut().find(|i| i.id() == item.id()) {
            Some(existing) => *existing = item,
            None => items.push(item),
        }
        Ok(())
    }

    async fn put_many(&self, new_items: Vec<T>) -> Result<usize, PersistenceError> {
        let count = new_items.len();
        self.items.write().extend(new_items);
        tracing::debug!(kind = T::KIND, count, "Appended records");
        Ok(count)
    }

    async fn replace_all(&self, new_items: Vec<T>) -> Result<(), PersistenceError> {
        let count = new_items.len();
        *self.items.write() = new_items;
        tracing::debug!(kind = T::KIND, count, "Replaced collection");
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), PersistenceError> {
        let mut items = self.items.write();
        match items.iter().position(|i| i.id() == id) {
            Some(idx) => {
                items.remove(idx);
                Ok(())
            }
            None => Err(PersistenceError::NotFound {
                kind: T::KIND,
                id: id.to_string(),
            }),
        }
    }

    async fn delete_many(&self, ids: &[String]) -> Result<usize, PersistenceError> {
        let mut items = self.items.write();
        let before = items.len();
        items.retain(|i| !ids.iter().any(|id| id == i.id()));
        Ok(before - items.len())
    }

    async fn clear(&self) -> Result<(), PersistenceError> {
        self.items.write().clear();
        Ok(())
    }

    async fn count(&self) -> Result<usize, PersistenceError> {
        Ok(self.items.read().len())
    }
}
