//! Application test fixture
//!
//! Every `TestApp` owns a private in-memory SQLite database with the real
//! migrations applied, a temporary media root, and a `TestServer` driving
//! the full router (session middleware included).

use axum_test::TestServer;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tempfile::TempDir;

use yatube::backend::routes::create_router;
use yatube::backend::server::config::connect_database;
use yatube::backend::server::AppState;
use yatube::backend::store::comments::list_comments;
use yatube::backend::store::follows::list_follows;
use yatube::backend::store::groups::create_group;
use yatube::backend::store::posts::{count_posts, create_post, get_post, PostFilter};
use yatube::shared::{AppConfig, Follow, Group, Post, PostDraft};

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_PASSWORD: &str = "correct-horse-42";

/// Create an in-memory test database pool
///
/// One connection that never expires: each SQLite memory connection is a
/// database of its own.
pub async fn create_test_pool() -> SqlitePool {
    let options = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None);

    connect_database(options, "sqlite::memory:")
        .await
        .expect("Failed to create test database pool")
}

/// Running application with its state
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    media: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_page_size(10).await
    }

    pub async fn with_page_size(posts_per_page: usize) -> Self {
        let media = tempfile::tempdir().expect("Failed to create media root");

        let config = AppConfig::builder()
            .database_url("sqlite::memory:")
            .jwt_secret(TEST_SECRET)
            .password_cost(4)
            .posts_per_page(posts_per_page)
            .media_root(media.path())
            .build()
            .expect("Invalid test configuration");

        let state = AppState::new(config, create_test_pool().await);
        let server = TestServer::new(create_router(state.clone())).expect("Failed to start test server");

        Self {
            server,
            state,
            media,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.state.db_pool
    }

    pub fn media_root(&self) -> &std::path::Path {
        self.media.path()
    }

    pub async fn create_group(&self, slug: &str, title: &str) -> Group {
        create_group(self.pool(), title, slug, "")
            .await
            .expect("Failed to create group")
    }

    pub async fn create_post(&self, author_id: i64, text: &str, group_id: Option<i64>) -> Post {
        let draft = PostDraft {
            text: text.to_string(),
            group_id,
        };
        create_post(self.pool(), author_id, &draft, None)
            .await
            .expect("Failed to create post")
    }

    pub async fn post(&self, id: i64) -> Post {
        get_post(self.pool(), id)
            .await
            .expect("Failed to load post")
            .expect("Post does not exist")
    }

    pub async fn post_count(&self) -> i64 {
        count_posts(self.pool(), PostFilter::All)
            .await
            .expect("Failed to count posts")
    }

    pub async fn comment_count(&self, post_id: i64) -> usize {
        list_comments(self.pool(), post_id)
            .await
            .expect("Failed to list comments")
            .len()
    }

    pub async fn follow_count(&self) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM follows")
            .fetch_one(self.pool())
            .await
            .expect("Failed to count follows")
    }

    pub async fn follows_of(&self, user_id: i64) -> Vec<Follow> {
        list_follows(self.pool(), user_id)
            .await
            .expect("Failed to list follows")
    }
}
