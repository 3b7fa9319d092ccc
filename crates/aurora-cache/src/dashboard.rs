//! Per-actor dashboard data caching under the dashboard tag.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::cache_key;
use crate::config::CacheConfig;
use crate::error::CacheResult;
use crate::paths::DASHBOARD_CACHE_TAG;
use crate::policy::CachePolicy;
use crate::store::{CacheStatus, MemoryCache};

/// Identity the dashboard data is computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Actor {
    pub email: String,
    pub name: String,
}

impl Actor {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new("rep@aurora.local", "Default Rep")
    }
}

/// Read-through cache for dashboard data.
///
/// Entries are keyed per actor and tagged with [`DASHBOARD_CACHE_TAG`], so
/// [`revalidate_dashboard_views`](crate::revalidate_dashboard_views) on the
/// same store forces the next read to reload.
#[derive(Debug, Clone)]
pub struct DashboardCache {
    store: Arc<MemoryCache>,
    config: CacheConfig,
}

impl DashboardCache {
    pub fn new(store: Arc<MemoryCache>, config: CacheConfig) -> Self {
        Self { store, config }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<MemoryCache> {
        &self.store
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Cache key for an actor.
    ///
    /// The actor is JSON-encoded so separators inside the email or name
    /// cannot make two actors share a key.
    pub fn key_for(&self, actor: &Actor) -> CacheResult<String> {
        let identity = serde_json::to_string(&[&actor.email, &actor.name])?;
        Ok(cache_key!(&self.config.key_prefix, identity))
    }

    /// Get dashboard data for `actor` (or the configured default actor),
    /// calling `load` on a miss.
    pub fn get_cached<T, F, E>(
        &self,
        actor: Option<&Actor>,
        route: &str,
        load: F,
    ) -> CacheResult<(T, CacheStatus)>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&Actor) -> Result<T, E>,
        E: fmt::Display,
    {
        let actor = actor.unwrap_or(&self.config.default_actor);
        let key = self.key_for(actor)?;
        let policy = CachePolicy::new(self.config.ttl()).with_tag(DASHBOARD_CACHE_TAG);

        let started = Instant::now();
        let result = self.store.get_or_compute(&key, &policy, || load(actor));
        let duration_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok((_, status)) => tracing::debug!(
                route,
                phase = "dashboard_data",
                cache_ttl_s = self.config.ttl_secs,
                %status,
                duration_ms,
                "route phase complete"
            ),
            Err(err) => tracing::error!(
                route,
                phase = "dashboard_data",
                duration_ms,
                error = %err,
                "route phase failed"
            ),
        }

        result
    }
}
