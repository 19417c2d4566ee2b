//! Page Cache
//!
//! Rendered index pages, kept for a fixed time-to-live. Entries are keyed by
//! viewer and request URI, so the navigation rendered for one user is never
//! served to another. Writes do not invalidate entries: a page may be stale
//! for up to one TTL. [`PageCache::invalidate_all`] drops everything.

use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

/// Upper bound on cached pages
const MAX_ENTRIES: u64 = 1_000;

/// TTL cache of rendered HTML
#[derive(Clone)]
pub struct PageCache {
    pages: Cache<String, Arc<str>>,
}

impl PageCache {
    pub fn new(ttl: Duration) -> Self {
        let pages = Cache::builder()
            .max_capacity(MAX_ENTRIES)
            .time_to_live(ttl)
            .build();

        Self { pages }
    }

    /// Cache key of a page as seen by `viewer` (user id, `None` if anonymous)
    pub fn key(viewer: Option<i64>, uri: &str) -> String {
        match viewer {
            Some(id) => format!("user:{}:{}", id, uri),
            None => format!("anon:{}", uri),
        }
    }

    pub async fn get(&self, key: &str) -> Option<Arc<str>> {
        let hit = self.pages.get(key).await;
        if hit.is_some() {
            tracing::debug!(key, "Page cache hit");
        }
        hit
    }

    pub async fn insert(&self, key: String, html: impl Into<Arc<str>>) {
        self.pages.insert(key, html.into()).await;
    }

    /// Drop every cached page
    pub fn invalidate_all(&self) {
        self.pages.invalidate_all();
        tracing::info!("Page cache invalidated");
    }
}

impl std::fmt::Debug for PageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageCache")
            .field("entries", &self.pages.entry_count())
            .finish()
    }
}
