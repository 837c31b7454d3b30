//! Explicit client-side cache with prefix invalidation.
//!
//! Keys are `resource + ":" + serialized-params`. Mutations never merge into
//! cached data; they mark matching entries stale and the owning view
//! re-requests on its next read. This invalidate-then-refetch cycle is the
//! only read-after-write discipline in the console.

use std::collections::HashMap;

use leptos::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryStatus {
    Loading,
    Ready,
    Failed,
}

#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub data: Option<serde_json::Value>,
    pub status: QueryStatus,
    pub stale: bool,
}

/// Mark every entry whose key starts with `prefix` as stale.
/// Returns the number of entries touched.
pub fn mark_stale_by_prefix(entries: &mut HashMap<String, CacheEntry>, prefix: &str) -> usize {
    let mut touched = 0;
    for (key, entry) in entries.iter_mut() {
        if key.starts_with(prefix) && !entry.stale {
            entry.stale = true;
            touched += 1;
        }
    }
    touched
}

/// The cache object. Constructed once in the app root and passed into views
/// explicitly together with the session.
#[derive(Clone, Copy)]
pub struct QueryCache {
    entries: RwSignal<HashMap<String, CacheEntry>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(HashMap::new()),
        }
    }

    /// Cache key for a resource + its query parameters.
    pub fn key<P: Serialize>(resource: &str, params: &P) -> String {
        let qs = serde_qs::to_string(params).unwrap_or_default();
        format!("{}:{}", resource, qs)
    }

    /// Reactive: true when the key has never been fetched or was invalidated.
    /// Reading this inside an effect re-runs the effect on invalidation.
    pub fn needs_fetch(&self, key: &str) -> bool {
        self.entries
            .with(|m| m.get(key).map(|e| e.stale).unwrap_or(true))
    }

    pub fn read(&self, key: &str) -> Option<CacheEntry> {
        self.entries.with(|m| m.get(key).cloned())
    }

    /// Transition the key to Loading; clears staleness so the in-flight
    /// request is not re-triggered.
    pub fn begin(&self, key: &str) {
        self.entries.update(|m| {
            m.insert(
                key.to_string(),
                CacheEntry {
                    data: None,
                    status: QueryStatus::Loading,
                    stale: false,
                },
            );
        });
    }

    pub fn complete(&self, key: &str, data: serde_json::Value) {
        self.entries.update(|m| {
            m.insert(
                key.to_string(),
                CacheEntry {
                    data: Some(data),
                    status: QueryStatus::Ready,
                    stale: false,
                },
            );
        });
    }

    pub fn fail(&self, key: &str) {
        self.entries.update(|m| {
            m.insert(
                key.to_string(),
                CacheEntry {
                    data: None,
                    status: QueryStatus::Failed,
                    stale: false,
                },
            );
        });
    }

    /// Invalidate every cached query of a resource family. Open views notice
    /// through `needs_fetch` and refetch.
    pub fn invalidate_prefix(&self, prefix: &str) {
        self.entries.update(|m| {
            mark_stale_by_prefix(m, prefix);
        });
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_entry() -> CacheEntry {
        CacheEntry {
            data: Some(serde_json::json!({"total": 1})),
            status: QueryStatus::Ready,
            stale: false,
        }
    }

    #[test]
    fn test_mark_stale_by_prefix() {
        let mut entries = HashMap::new();
        entries.insert("members:page=1&size=10".to_string(), ready_entry());
        entries.insert("members:page=2&size=10".to_string(), ready_entry());
        entries.insert("recharges:page=1&size=10".to_string(), ready_entry());

        let touched = mark_stale_by_prefix(&mut entries, "members");
        assert_eq!(touched, 2);
        assert!(entries["members:page=1&size=10"].stale);
        assert!(entries["members:page=2&size=10"].stale);
        assert!(!entries["recharges:page=1&size=10"].stale);
    }

    #[test]
    fn test_mark_stale_idempotent() {
        let mut entries = HashMap::new();
        entries.insert("schedule:storeId=s1".to_string(), ready_entry());
        assert_eq!(mark_stale_by_prefix(&mut entries, "schedule"), 1);
        assert_eq!(mark_stale_by_prefix(&mut entries, "schedule"), 0);
    }

    #[test]
    fn test_key_includes_params() {
        #[derive(Serialize)]
        struct Q {
            page: usize,
        }
        let key = QueryCache::key("members", &Q { page: 3 });
        assert_eq!(key, "members:page=3");
        assert!(key.starts_with("members"));
    }
}
