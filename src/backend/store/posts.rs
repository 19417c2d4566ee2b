//! Database operations for posts

use chrono::Utc;
use sqlx::SqlitePool;

use crate::shared::forms::PostDraft;
use crate::shared::models::Post;

/// Columns of [`Post`], selected from `posts p` joined with its author `u`
/// and group `g`
const POST_SELECT: &str = r#"
    SELECT p.id, p.text, p.pub_date, p.author_id, u.username AS author_username,
           p.group_id, g.slug AS group_slug, g.title AS group_title, p.image
    FROM posts p
    JOIN users u ON u.id = p.author_id
    LEFT JOIN post_groups g ON g.id = p.group_id
"#;

/// Newest first; among equal timestamps the later insert comes first
const POST_ORDER: &str = "ORDER BY p.pub_date DESC, p.id DESC";

/// Row filter of a post listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostFilter {
    All,
    Group(i64),
    Author(i64),
    /// Posts by every author the given user follows
    FollowedBy(i64),
}

impl PostFilter {
    fn where_clause(&self) -> &'static str {
        match self {
            Self::All => "WHERE 1 = 1",
            Self::Group(_) => "WHERE p.group_id = ?",
            Self::Author(_) => "WHERE p.author_id = ?",
            Self::FollowedBy(_) => {
                "WHERE p.author_id IN (SELECT f.author_id FROM follows f WHERE f.user_id = ?)"
            }
        }
    }

    fn param(&self) -> Option<i64> {
        match *self {
            Self::All => None,
            Self::Group(id) | Self::Author(id) | Self::FollowedBy(id) => Some(id),
        }
    }
}

/// Count the posts matching a filter
pub async fn count_posts(pool: &SqlitePool, filter: PostFilter) -> Result<i64, sqlx::Error> {
    let sql = format!(
        "SELECT COUNT(*) FROM posts p {}",
        filter.where_clause()
    );

    let mut query = sqlx::query_scalar::<_, i64>(&sql);
    if let Some(param) = filter.param() {
        query = query.bind(param);
    }

    query.fetch_one(pool).await
}

/// Fetch one window of the posts matching a filter, newest first
pub async fn list_posts(
    pool: &SqlitePool,
    filter: PostFilter,
    limit: i64,
    offset: i64,
) -> Result<Vec<Post>, sqlx::Error> {
    let sql = format!(
        "{} {} {} LIMIT ? OFFSET ?",
        POST_SELECT,
        filter.where_clause(),
        POST_ORDER
    );

    let mut query = sqlx::query_as::<_, Post>(&sql);
    if let Some(param) = filter.param() {
        query = query.bind(param);
    }

    query.bind(limit).bind(offset).fetch_all(pool).await
}

/// Get a post by ID
pub async fn get_post(pool: &SqlitePool, id: i64) -> Result<Option<Post>, sqlx::Error> {
    let sql = format!("{} WHERE p.id = ?", POST_SELECT);

    sqlx::query_as::<_, Post>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Create a new post
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `author_id` - Author of the post
/// * `draft` - Validated text and group
/// * `image` - Stored image path, relative to the media root
///
/// # Returns
/// The created post, joined with its author and group
pub async fn create_post(
    pool: &SqlitePool,
    author_id: i64,
    draft: &PostDraft,
    image: Option<&str>,
) -> Result<Post, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO posts (text, pub_date, author_id, group_id, image)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&draft.text)
    .bind(Utc::now())
    .bind(author_id)
    .bind(draft.group_id)
    .bind(image)
    .execute(pool)
    .await?;

    get_post(pool, result.last_insert_rowid())
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}

/// Update the text and group of a post
///
/// The image is replaced only when a new one is given.
pub async fn update_post(
    pool: &SqlitePool,
    id: i64,
    draft: &PostDraft,
    image: Option<&str>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE posts
        SET text = ?, group_id = ?, image = COALESCE(?, image)
        WHERE id = ?
        "#,
    )
    .bind(&draft.text)
    .bind(draft.group_id)
    .bind(image)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::store::testing::{memory_pool, seed_group, seed_user};

    fn draft(text: &str, group_id: Option<i64>) -> PostDraft {
        PostDraft {
            text: text.to_string(),
            group_id,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_post() {
        let pool = memory_pool().await;
        let author = seed_user(&pool, "leo").await;
        let group = seed_group(&pool, "cats").await;

        let post = create_post(&pool, author, &draft("Hello", Some(group)), Some("posts/a.gif"))
            .await
            .unwrap();

        assert_eq!(post.text, "Hello");
        assert_eq!(post.author_username, "leo");
        assert_eq!(post.group_slug.as_deref(), Some("cats"));
        assert_eq!(post.image.as_deref(), Some("posts/a.gif"));

        let fetched = get_post(&pool, post.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, post.id);
        assert!(get_post(&pool, post.id + 100).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_posts_newest_first() {
        let pool = memory_pool().await;
        let author = seed_user(&pool, "leo").await;
        for i in 0..5 {
            create_post(&pool, author, &draft(&format!("post {}", i), None), None)
                .await
                .unwrap();
        }

        let posts = list_posts(&pool, PostFilter::All, 10, 0).await.unwrap();
        let texts: Vec<_> = posts.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, ["post 4", "post 3", "post 2", "post 1", "post 0"]);

        let window = list_posts(&pool, PostFilter::All, 2, 2).await.unwrap();
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].text, "post 2");
    }

    #[tokio::test]
    async fn test_filters() {
        let pool = memory_pool().await;
        let leo = seed_user(&pool, "leo").await;
        let anna = seed_user(&pool, "anna").await;
        let reader = seed_user(&pool, "reader").await;
        let group = seed_group(&pool, "cats").await;

        create_post(&pool, leo, &draft("leo in cats", Some(group)), None).await.unwrap();
        create_post(&pool, leo, &draft("leo alone", None), None).await.unwrap();
        create_post(&pool, anna, &draft("anna alone", None), None).await.unwrap();
        crate::backend::store::follows::follow(&pool, reader, anna).await.unwrap();

        assert_eq!(count_posts(&pool, PostFilter::All).await.unwrap(), 3);
        assert_eq!(count_posts(&pool, PostFilter::Group(group)).await.unwrap(), 1);
        assert_eq!(count_posts(&pool, PostFilter::Author(leo)).await.unwrap(), 2);
        assert_eq!(count_posts(&pool, PostFilter::FollowedBy(reader)).await.unwrap(), 1);
        assert_eq!(count_posts(&pool, PostFilter::FollowedBy(leo)).await.unwrap(), 0);

        let followed = list_posts(&pool, PostFilter::FollowedBy(reader), 10, 0).await.unwrap();
        assert_eq!(followed[0].text, "anna alone");
    }

    #[tokio::test]
    async fn test_update_keeps_image_when_none_given() {
        let pool = memory_pool().await;
        let author = seed_user(&pool, "leo").await;
        let post = create_post(&pool, author, &draft("old", None), Some("posts/a.gif"))
            .await
            .unwrap();

        update_post(&pool, post.id, &draft("new", None), None).await.unwrap();
        let updated = get_post(&pool, post.id).await.unwrap().unwrap();
        assert_eq!(updated.text, "new");
        assert_eq!(updated.image.as_deref(), Some("posts/a.gif"));

        update_post(&pool, post.id, &draft("newer", None), Some("posts/b.gif")).await.unwrap();
        let updated = get_post(&pool, post.id).await.unwrap().unwrap();
        assert_eq!(updated.image.as_deref(), Some("posts/b.gif"));
    }

    #[tokio::test]
    async fn test_deleting_group_keeps_posts() {
        let pool = memory_pool().await;
        let author = seed_user(&pool, "leo").await;
        let group = seed_group(&pool, "cats").await;
        let post = create_post(&pool, author, &draft("stays", Some(group)), None)
            .await
            .unwrap();

        sqlx::query("DELETE FROM post_groups WHERE id = ?")
            .bind(group)
            .execute(&pool)
            .await
            .unwrap();

        let post = get_post(&pool, post.id).await.unwrap().unwrap();
        assert_eq!(post.group_id, None);
        assert_eq!(post.group_slug, None);
    }
}
