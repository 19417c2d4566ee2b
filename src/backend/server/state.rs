/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the single state container of the router. It holds:
 * - the configuration (page size, secrets, media root)
 * - the SQLite connection pool
 * - the feed assembler built from both
 * - the rendered-page cache
 *
 * Every field is cheap to clone: the pool, the cache and the config are
 * reference-counted internally. Handlers that need a single part extract it
 * through its `FromRef` impl; the auth handlers take the whole state.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::backend::cache::PageCache;
use crate::backend::feed::FeedAssembler;
use crate::shared::AppConfig;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Process configuration, read-only after startup
    pub config: Arc<AppConfig>,

    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Paginated post listings
    pub feed: FeedAssembler,

    /// Rendered index pages
    pub page_cache: PageCache,
}

impl AppState {
    pub fn new(config: AppConfig, db_pool: SqlitePool) -> Self {
        let feed = FeedAssembler::new(db_pool.clone(), config.posts_per_page);
        let page_cache = PageCache::new(config.cache_ttl);

        Self {
            config: Arc::new(config),
            db_pool,
            feed,
            page_cache,
        }
    }
}

/// Lets handlers that only touch the database take `State<SqlitePool>`
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// `State<Arc<AppConfig>>`, used by the session middleware and the post forms
impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

/// `State<FeedAssembler>` for the feed pages
impl FromRef<AppState> for FeedAssembler {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.feed.clone()
    }
}

/// `State<PageCache>` for the cached index
impl FromRef<AppState> for PageCache {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.page_cache.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::store::testing::memory_pool;
    use crate::backend::store::posts::{count_posts, PostFilter};

    async fn state() -> AppState {
        let config = AppConfig::builder().posts_per_page(3).build().unwrap();
        AppState::new(config, memory_pool().await)
    }

    #[tokio::test]
    async fn test_extracted_parts_share_the_state() {
        let state = state().await;

        let config = Arc::<AppConfig>::from_ref(&state);
        assert!(Arc::ptr_eq(&config, &state.config));
        assert_eq!(config.posts_per_page, 3);

        let cache = PageCache::from_ref(&state);
        cache.insert(PageCache::key(None, "/"), "<p>cached</p>").await;
        assert_eq!(
            state.page_cache.get(&PageCache::key(None, "/")).await.as_deref(),
            Some("<p>cached</p>")
        );

        let pool = SqlitePool::from_ref(&state);
        assert_eq!(count_posts(&pool, PostFilter::All).await.unwrap(), 0);
    }
}
