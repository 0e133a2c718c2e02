//! Persistence layer for the lead router
//!
//! Provides storage for:
//! - Leads
//! - Team members
//! - Lead buckets
//!
//! Every collection sits behind the generic [`Repository`] trait. The only
//! backend shipped is [`InMemoryRepository`].

pub mod error;
pub mod memory;
pub mod repository;

pub use error::PersistenceError;
pub use memory::InMemoryRepository;
pub use repository::{Entity, Repository};
