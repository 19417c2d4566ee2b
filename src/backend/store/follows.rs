//! Database operations for follow edges

use sqlx::SqlitePool;

use crate::shared::models::Follow;

/// Make `user_id` follow `author_id`
///
/// Insert-if-absent: an existing edge is left alone, so concurrent identical
/// requests end with exactly one edge. Returns whether an edge was created.
pub async fn follow(pool: &SqlitePool, user_id: i64, author_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO follows (user_id, author_id)
        VALUES (?, ?)
        ON CONFLICT (user_id, author_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(author_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Remove the edge `user_id` -> `author_id`; returns whether one existed
pub async fn unfollow(pool: &SqlitePool, user_id: i64, author_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM follows WHERE user_id = ? AND author_id = ?")
        .bind(user_id)
        .bind(author_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Whether `user_id` follows `author_id`
pub async fn is_following(
    pool: &SqlitePool,
    user_id: i64,
    author_id: i64,
) -> Result<bool, sqlx::Error> {
    let edges = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM follows WHERE user_id = ? AND author_id = ?",
    )
    .bind(user_id)
    .bind(author_id)
    .fetch_one(pool)
    .await?;

    Ok(edges > 0)
}

/// Edges going out of `user_id`, oldest first
pub async fn list_follows(pool: &SqlitePool, user_id: i64) -> Result<Vec<Follow>, sqlx::Error> {
    sqlx::query_as::<_, Follow>(
        "SELECT id, user_id, author_id FROM follows WHERE user_id = ? ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
