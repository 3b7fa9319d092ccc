//! Cache configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::dashboard::Actor;

/// Environment variable overriding the default actor email.
pub const ENV_ACTOR_EMAIL: &str = "APP_ACTOR_EMAIL";
/// Environment variable overriding the default actor name.
pub const ENV_ACTOR_NAME: &str = "APP_ACTOR_NAME";
/// Environment variable overriding the dashboard data TTL.
pub const ENV_TTL_SECS: &str = "AURORA_CACHE_TTL_SECS";

/// Dashboard cache configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Time-to-live for cached dashboard data, in seconds.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Versioned prefix for per-actor cache keys.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Actor used when a request carries no identity.
    #[serde(default)]
    pub default_actor: Actor,
}

fn default_ttl_secs() -> u64 {
    30
}

fn default_key_prefix() -> String {
    "dashboard-data-by-actor-v1".to_string()
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            key_prefix: default_key_prefix(),
            default_actor: Actor::default(),
        }
    }
}

impl CacheConfig {
    /// Load config from a TOML file, or JSON when the extension is `.json`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            Self::from_toml(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Parse config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(email) = lookup(ENV_ACTOR_EMAIL) {
            self.default_actor.email = email;
        }
        if let Some(name) = lookup(ENV_ACTOR_NAME) {
            self.default_actor.name = name;
        }
        if let Some(ttl) = lookup(ENV_TTL_SECS) {
            self.ttl_secs = ttl
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {}", ENV_TTL_SECS, ttl))?;
        }
        Ok(self)
    }

    /// TTL as a duration.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}
