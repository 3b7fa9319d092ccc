//! Well-known dashboard cache identifiers.

/// Tag carried by every cached dashboard data entry.
pub const DASHBOARD_CACHE_TAG: &str = "dashboard-data";

/// Routes whose rendered output depends on dashboard data, in revalidation order.
pub static DASHBOARD_PATHS: [&str; 8] = [
    "/workspace",
    "/cockpit",
    "/accounts",
    "/pipeline",
    "/intelligence",
    "/notifications",
    "/integrations",
    "/workflows",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_paths_order() {
        assert_eq!(DASHBOARD_PATHS.len(), 8);
        assert_eq!(DASHBOARD_PATHS.first(), Some(&"/workspace"));
        assert_eq!(DASHBOARD_PATHS.last(), Some(&"/workflows"));
    }

    #[test]
    fn test_dashboard_paths_are_absolute_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for path in DASHBOARD_PATHS {
            assert!(path.starts_with('/'));
            assert!(seen.insert(path), "duplicate path {}", path);
        }
    }
}
