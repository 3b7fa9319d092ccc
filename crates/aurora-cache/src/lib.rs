//! Dashboard data caching and route revalidation.
//!
//! This crate provides:
//! - `revalidate_dashboard_views` - Revalidate the dashboard tag and every dashboard route
//! - `Revalidator` - Tag and path revalidation primitives of a cache backend
//! - `MemoryCache` - In-process cache store with tag/path revalidation
//! - `DashboardCache` - Per-actor read-through cache for dashboard data
//! - `CacheConfig` - TTL, key prefix and default actor configuration
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use aurora_cache::{revalidate_dashboard_views, Actor, CacheConfig, CacheStatus, DashboardCache, MemoryCache};
//!
//! let store = Arc::new(MemoryCache::new());
//! let dashboard = DashboardCache::new(store.clone(), CacheConfig::default());
//!
//! let actor = Actor::new("rep@aurora.local", "Default Rep");
//! let (deals, status) = dashboard
//!     .get_cached(Some(&actor), "workspace", |_| Ok::<_, String>(vec![1, 2, 3]))
//!     .unwrap();
//! assert_eq!(status, CacheStatus::Miss);
//!
//! // After a write, revalidate every dashboard view.
//! revalidate_dashboard_views(&store).unwrap();
//! # let _ = deals;
//! ```

mod config;
mod dashboard;
mod error;
mod paths;
mod policy;
mod revalidate;
mod store;

pub use config::*;
pub use dashboard::*;
pub use error::*;
pub use paths::*;
pub use policy::*;
pub use revalidate::*;
pub use store::*;

/// Build a colon-separated cache key.
///
/// # Example
///
/// ```rust
/// let key = aurora_cache::cache_key!("dashboard", "rep@aurora.local", 2);
/// assert_eq!(key, "dashboard:rep@aurora.local:2");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}
