//! In-process cache store with tag and path revalidation.

use std::collections::HashMap;
use std::fmt;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{CacheError, CacheResult};
use crate::policy::CachePolicy;
use crate::revalidate::Revalidator;

/// Status of a cache read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheStatus {
    /// Fresh cache hit.
    Hit,
    /// Value was (re)computed.
    Miss,
    /// Recompute failed, a stale value was served.
    Stale,
    /// Caching disabled for this read.
    Bypass,
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => write!(f, "HIT"),
            Self::Miss => write!(f, "MISS"),
            Self::Stale => write!(f, "STALE"),
            Self::Bypass => write!(f, "BYPASS"),
        }
    }
}

/// A cached value with its invalidation metadata.
#[derive(Debug, Clone)]
pub struct CachedEntry {
    /// The cached value as JSON.
    pub value: serde_json::Value,
    /// When the entry was stored.
    pub created_at: Instant,
    /// Time-to-live.
    pub ttl: Duration,
    /// Tags for revalidation.
    pub tags: Vec<String>,
    /// Route path for revalidation.
    pub path: Option<String>,
    /// Set once the entry has been revalidated by tag or path.
    pub stale: bool,
}

impl CachedEntry {
    fn new(value: serde_json::Value, policy: &CachePolicy) -> Self {
        Self {
            value,
            created_at: Instant::now(),
            ttl: policy.ttl,
            tags: policy.tags.clone(),
            path: policy.path.clone(),
            stale: false,
        }
    }

    /// Check if the TTL has elapsed.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }

    /// Check if the entry can be served without recomputing.
    pub fn is_fresh(&self) -> bool {
        !self.stale && !self.is_expired()
    }

    /// Age of the entry.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    fn decode<T: DeserializeOwned>(&self) -> CacheResult<T> {
        Ok(serde_json::from_value(self.value.clone())?)
    }
}

/// Shared in-memory cache.
///
/// Every revalidation primitive takes the write lock once, so a single tag or
/// path revalidation is atomic with respect to concurrent reads.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CachedEntry>>,
}

impl MemoryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> CacheResult<RwLockReadGuard<'_, HashMap<String, CachedEntry>>> {
        self.entries
            .read()
            .map_err(|_| CacheError::Storage("cache lock poisoned".to_string()))
    }

    fn write(&self) -> CacheResult<RwLockWriteGuard<'_, HashMap<String, CachedEntry>>> {
        self.entries
            .write()
            .map_err(|_| CacheError::Storage("cache lock poisoned".to_string()))
    }

    /// Get a fresh value. Stale and expired entries read as `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> CacheResult<Option<T>> {
        match self.read()?.get(key) {
            Some(entry) if entry.is_fresh() => entry.decode().map(Some),
            _ => Ok(None),
        }
    }

    /// Get the raw entry regardless of freshness.
    pub fn entry(&self, key: &str) -> CacheResult<Option<CachedEntry>> {
        Ok(self.read()?.get(key).cloned())
    }

    /// Store a value. Disabled policies store nothing.
    pub fn set<T: Serialize>(&self, key: &str, value: &T, policy: &CachePolicy) -> CacheResult<()> {
        if !policy.enabled {
            return Ok(());
        }
        let entry = CachedEntry::new(serde_json::to_value(value)?, policy);
        self.write()?.insert(key.to_string(), entry);
        Ok(())
    }

    /// Delete an entry.
    pub fn delete(&self, key: &str) -> CacheResult<()> {
        self.write()?.remove(key);
        Ok(())
    }

    /// Number of stored entries, fresh or not.
    pub fn len(&self) -> CacheResult<usize> {
        Ok(self.read()?.len())
    }

    /// Check if the cache holds no entries.
    pub fn is_empty(&self) -> CacheResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Drop every entry whose TTL has elapsed. Returns the number removed.
    ///
    /// Revalidated entries that are still within their TTL are kept so a
    /// failed recompute can fall back to them.
    pub fn purge_expired(&self) -> CacheResult<usize> {
        let mut entries = self.write()?;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        let removed = before - entries.len();
        tracing::debug!(removed, "purged expired cache entries");
        Ok(removed)
    }

    /// Get a value, computing and storing it when missing, expired or stale.
    ///
    /// If the computation fails while an old entry is still present, the old
    /// value is served with [`CacheStatus::Stale`].
    pub fn get_or_compute<T, F, E>(
        &self,
        key: &str,
        policy: &CachePolicy,
        compute: F,
    ) -> CacheResult<(T, CacheStatus)>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Result<T, E>,
        E: fmt::Display,
    {
        if !policy.enabled {
            let value = compute().map_err(CacheError::compute)?;
            return Ok((value, CacheStatus::Bypass));
        }

        let existing = self.entry(key)?;
        if let Some(entry) = existing.as_ref().filter(|e| e.is_fresh()) {
            return Ok((entry.decode()?, CacheStatus::Hit));
        }

        match compute() {
            Ok(value) => {
                self.set(key, &value, policy)?;
                Ok((value, CacheStatus::Miss))
            }
            Err(err) => match existing {
                Some(entry) => {
                    tracing::warn!(
                        key,
                        error = %err,
                        age_ms = entry.age().as_millis() as u64,
                        "recompute failed, serving stale entry"
                    );
                    Ok((entry.decode()?, CacheStatus::Stale))
                }
                None => Err(CacheError::compute(err)),
            },
        }
    }

    /// Mark every entry carrying `tag` as stale. Returns the number affected.
    pub fn invalidate_tag(&self, tag: &str) -> CacheResult<u64> {
        let mut entries = self.write()?;
        let mut count = 0;
        for entry in entries.values_mut().filter(|e| e.tags.iter().any(|t| t == tag)) {
            entry.stale = true;
            count += 1;
        }
        tracing::debug!(tag, entries = count, "revalidated cache tag");
        Ok(count)
    }

    /// Mark every entry bound to exactly `path` as stale. Returns the number affected.
    pub fn invalidate_path(&self, path: &str) -> CacheResult<u64> {
        let mut entries = self.write()?;
        let mut count = 0;
        for entry in entries.values_mut().filter(|e| e.path.as_deref() == Some(path)) {
            entry.stale = true;
            count += 1;
        }
        tracing::debug!(path, entries = count, "revalidated cache path");
        Ok(count)
    }
}

impl Revalidator for MemoryCache {
    fn revalidate_tag(&self, tag: &str) -> CacheResult<()> {
        self.invalidate_tag(tag).map(|_| ())
    }

    fn revalidate_path(&self, path: &str) -> CacheResult<()> {
        self.invalidate_path(path).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> CachePolicy {
        CachePolicy::new(Duration::from_secs(60)).with_tag("dashboard-data")
    }

    fn ok(v: u32) -> impl FnOnce() -> Result<u32, String> {
        move || Ok(v)
    }

    #[test]
    fn test_miss_then_hit() {
        let cache = MemoryCache::new();

        let (value, status) = cache.get_or_compute("k", &policy(), ok(1)).unwrap();
        assert_eq!((value, status), (1, CacheStatus::Miss));

        let (value, status) = cache.get_or_compute("k", &policy(), ok(2)).unwrap();
        assert_eq!((value, status), (1, CacheStatus::Hit));
    }

    #[test]
    fn test_disabled_policy_bypasses() {
        let cache = MemoryCache::new();

        let (value, status) = cache
            .get_or_compute("k", &CachePolicy::none(), ok(7))
            .unwrap();
        assert_eq!((value, status), (7, CacheStatus::Bypass));
        assert!(cache.is_empty().unwrap());
    }

    #[test]
    fn test_zero_ttl_always_recomputes() {
        let cache = MemoryCache::new();
        let policy = CachePolicy::new(Duration::ZERO);

        cache.get_or_compute("k", &policy, ok(1)).unwrap();
        let (value, status) = cache.get_or_compute("k", &policy, ok(2)).unwrap();
        assert_eq!((value, status), (2, CacheStatus::Miss));
    }

    #[test]
    fn test_tag_revalidation_forces_recompute() {
        let cache = MemoryCache::new();
        cache.get_or_compute("k", &policy(), ok(1)).unwrap();

        assert_eq!(cache.invalidate_tag("dashboard-data").unwrap(), 1);
        assert_eq!(cache.get::<u32>("k").unwrap(), None);

        let (value, status) = cache.get_or_compute("k", &policy(), ok(2)).unwrap();
        assert_eq!((value, status), (2, CacheStatus::Miss));
        assert_eq!(cache.get::<u32>("k").unwrap(), Some(2));
    }

    #[test]
    fn test_unrelated_tag_leaves_entry_fresh() {
        let cache = MemoryCache::new();
        cache.set("k", &1u32, &policy()).unwrap();

        assert_eq!(cache.invalidate_tag("products").unwrap(), 0);
        assert_eq!(cache.get::<u32>("k").unwrap(), Some(1));
    }

    #[test]
    fn test_path_revalidation_is_exact() {
        let cache = MemoryCache::new();
        let base = CachePolicy::new(Duration::from_secs(60));
        cache.set("cockpit", &1u32, &base.clone().for_path("/cockpit")).unwrap();
        cache.set("cockpit-sub", &2u32, &base.clone().for_path("/cockpit/x")).unwrap();
        cache.set("untracked", &3u32, &base).unwrap();

        assert_eq!(cache.invalidate_path("/cockpit").unwrap(), 1);
        assert_eq!(cache.get::<u32>("cockpit").unwrap(), None);
        assert_eq!(cache.get::<u32>("cockpit-sub").unwrap(), Some(2));
        assert_eq!(cache.get::<u32>("untracked").unwrap(), Some(3));
    }

    #[test]
    fn test_failed_recompute_serves_stale() {
        let cache = MemoryCache::new();
        cache.set("k", &1u32, &policy()).unwrap();
        cache.revalidate_tag("dashboard-data").unwrap();

        let (value, status) = cache
            .get_or_compute("k", &policy(), || Err::<u32, _>("db down"))
            .unwrap();
        assert_eq!((value, status), (1, CacheStatus::Stale));
    }

    #[test]
    fn test_failed_compute_without_entry_errors() {
        let cache = MemoryCache::new();

        let err = cache
            .get_or_compute("k", &policy(), || Err::<u32, _>("db down"))
            .unwrap_err();
        assert!(matches!(err, CacheError::Compute(ref msg) if msg == "db down"));
    }

    #[test]
    fn test_purge_expired_keeps_live_entries() {
        let cache = MemoryCache::new();
        let untagged = CachePolicy::new(Duration::from_secs(60));
        cache.set("expired", &1u32, &CachePolicy::new(Duration::ZERO)).unwrap();
        cache.set("live", &2u32, &untagged).unwrap();
        cache.set("revalidated", &3u32, &policy()).unwrap();
        cache.invalidate_tag("dashboard-data").unwrap();

        assert_eq!(cache.purge_expired().unwrap(), 1);
        assert_eq!(cache.len().unwrap(), 2);
        assert!(cache.entry("expired").unwrap().is_none());
        assert_eq!(cache.get::<u32>("live").unwrap(), Some(2));

        let (value, status) = cache
            .get_or_compute("revalidated", &policy(), || Err::<u32, _>("db down"))
            .unwrap();
        assert_eq!((value, status), (3, CacheStatus::Stale));
    }

    #[test]
    fn test_delete() {
        let cache = MemoryCache::new();
        cache.set("k", &1u32, &policy()).unwrap();
        assert_eq!(cache.len().unwrap(), 1);

        cache.delete("k").unwrap();
        assert!(cache.is_empty().unwrap());
    }

    #[test]
    fn test_cache_status_display() {
        assert_eq!(CacheStatus::Hit.to_string(), "HIT");
        assert_eq!(CacheStatus::Stale.to_string(), "STALE");
    }
}
