//! Database operations for comments

use chrono::Utc;
use sqlx::SqlitePool;

use crate::shared::models::Comment;

/// Comments of a post, oldest first
pub async fn list_comments(pool: &SqlitePool, post_id: i64) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT c.id, c.post_id, c.author_id, u.username AS author_username, c.text, c.created
        FROM comments c
        JOIN users u ON u.id = c.author_id
        WHERE c.post_id = ?
        ORDER BY c.created, c.id
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}

/// Create a new comment and return its ID
pub async fn create_comment(
    pool: &SqlitePool,
    post_id: i64,
    author_id: i64,
    text: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO comments (post_id, author_id, text, created)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(post_id)
    .bind(author_id)
    .bind(text)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::store::posts::create_post;
    use crate::backend::store::testing::{memory_pool, seed_user};
    use crate::shared::forms::PostDraft;

    #[tokio::test]
    async fn test_comments_listed_oldest_first() {
        let pool = memory_pool().await;
        let leo = seed_user(&pool, "leo").await;
        let anna = seed_user(&pool, "anna").await;
        let draft = PostDraft {
            text: "post".to_string(),
            group_id: None,
        };
        let post = create_post(&pool, leo, &draft, None).await.unwrap();

        create_comment(&pool, post.id, anna, "first").await.unwrap();
        create_comment(&pool, post.id, leo, "second").await.unwrap();

        let comments = list_comments(&pool, post.id).await.unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text, "first");
        assert_eq!(comments[0].author_username, "anna");
        assert_eq!(comments[1].text, "second");
    }

    #[tokio::test]
    async fn test_comment_on_missing_post_fails() {
        let pool = memory_pool().await;
        let leo = seed_user(&pool, "leo").await;
        assert!(create_comment(&pool, 404, leo, "orphan").await.is_err());
    }
}
