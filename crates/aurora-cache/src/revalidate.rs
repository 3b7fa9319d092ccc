//! Dashboard view revalidation.

use crate::error::CacheResult;
use crate::paths::{DASHBOARD_CACHE_TAG, DASHBOARD_PATHS};

/// Revalidation primitives provided by the host cache subsystem.
///
/// Each call must be atomic for its single tag or path. No transaction spans
/// several calls.
pub trait Revalidator {
    /// Mark every entry registered under `tag` as stale.
    fn revalidate_tag(&self, tag: &str) -> CacheResult<()>;

    /// Mark the cached output for exactly `path` as stale.
    fn revalidate_path(&self, path: &str) -> CacheResult<()>;
}

impl<R: Revalidator + ?Sized> Revalidator for &R {
    fn revalidate_tag(&self, tag: &str) -> CacheResult<()> {
        (**self).revalidate_tag(tag)
    }

    fn revalidate_path(&self, path: &str) -> CacheResult<()> {
        (**self).revalidate_path(path)
    }
}

impl<R: Revalidator + ?Sized> Revalidator for std::sync::Arc<R> {
    fn revalidate_tag(&self, tag: &str) -> CacheResult<()> {
        (**self).revalidate_tag(tag)
    }

    fn revalidate_path(&self, path: &str) -> CacheResult<()> {
        (**self).revalidate_path(path)
    }
}

/// Revalidate the dashboard tag, then every dashboard route in order.
///
/// Call this after any write that changes dashboard data. The first failing
/// primitive aborts the sequence: routes already revalidated stay that way,
/// the remaining ones are left untouched.
///
/// # Example
///
/// ```rust
/// use aurora_cache::{revalidate_dashboard_views, MemoryCache};
///
/// let cache = MemoryCache::new();
/// revalidate_dashboard_views(&cache).unwrap();
/// ```
pub fn revalidate_dashboard_views<R: Revalidator + ?Sized>(revalidator: &R) -> CacheResult<()> {
    revalidator.revalidate_tag(DASHBOARD_CACHE_TAG)?;
    for path in DASHBOARD_PATHS {
        revalidator.revalidate_path(path)?;
    }
    Ok(())
}
