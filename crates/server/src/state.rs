//! Application State

use std::sync::Arc;

use lead_router_config::Settings;
use lead_router_core::{Lead, LeadBucket, TeamMember};
use lead_router_persistence::{InMemoryRepository, Repository};
use metrics_exporter_prometheus::PrometheusHandle;
use parking_lot::RwLock;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Configuration
    pub config: Arc<RwLock<Settings>>,
    pub leads: Arc<dyn Repository<Lead>>,
    pub team: Arc<dyn Repository<TeamMember>>,
    pub buckets: Arc<dyn Repository<LeadBucket>>,
    /// Prometheus handle; `/metrics` is disabled when absent
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// In-memory state seeded with the configured roster and the default bucket
    pub fn new(config: Settings) -> Self {
        let roster = config.team.seed_members();
        tracing::debug!(members = roster.len(), "Seeding in-memory team");
        Self::with_repositories(
            config,
            Arc::new(InMemoryRepository::<Lead>::new()),
            Arc::new(InMemoryRepository::with_items(roster)),
            Arc::new(InMemoryRepository::with_items(vec![LeadBucket::default_bucket()])),
        )
    }

    /// Create application state over custom stores
    pub fn with_repositories(
        config: Settings,
        leads: Arc<dyn Repository<Lead>>,
        team: Arc<dyn Repository<TeamMember>>,
        buckets: Arc<dyn Repository<LeadBucket>>,
    ) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            leads,
            team,
            buckets,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: Option<PrometheusHandle>) -> Self {
        self.metrics = handle;
        self
    }

    /// Get a read guard to the current configuration
    pub fn get_config(&self) -> parking_lot::RwLockReadGuard<'_, Settings> {
        self.config.read()
    }

    /// Fresh copy of the configured seed roster
    pub fn seed_team(&self) -> Vec<TeamMember> {
        self.config.read().team.seed_members()
    }
}
