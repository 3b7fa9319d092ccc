//! Per-entry cache policy.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How a single cached entry is stored and invalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachePolicy {
    /// Whether caching is enabled for this entry.
    pub enabled: bool,
    /// Time-to-live for the cached value.
    pub ttl: Duration,
    /// Tags the entry can be revalidated by.
    pub tags: Vec<String>,
    /// Route path whose rendering this entry backs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            ttl: Duration::from_secs(0),
            tags: Vec::new(),
            path: None,
        }
    }
}

impl CachePolicy {
    /// Create an enabled policy with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            enabled: true,
            ttl,
            ..Default::default()
        }
    }

    /// Create a disabled policy (always recompute).
    pub fn none() -> Self {
        Self::default()
    }

    /// Add a cache tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Bind the entry to a route path.
    pub fn for_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Check whether the policy carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
