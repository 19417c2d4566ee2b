//! Database operations for groups

use sqlx::SqlitePool;

use crate::shared::models::Group;

/// Get a group by its slug
pub async fn get_group_by_slug(
    pool: &SqlitePool,
    slug: &str,
) -> Result<Option<Group>, sqlx::Error> {
    sqlx::query_as::<_, Group>(
        r#"
        SELECT id, title, slug, description
        FROM post_groups
        WHERE slug = ?
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await
}

/// All groups, alphabetically by title (choices of the post form)
pub async fn list_groups(pool: &SqlitePool) -> Result<Vec<Group>, sqlx::Error> {
    sqlx::query_as::<_, Group>(
        r#"
        SELECT id, title, slug, description
        FROM post_groups
        ORDER BY title, id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Create a new group
///
/// Fails with a unique-constraint error when the slug is taken.
pub async fn create_group(
    pool: &SqlitePool,
    title: &str,
    slug: &str,
    description: &str,
) -> Result<Group, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO post_groups (title, slug, description)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(title)
    .bind(slug)
    .bind(description)
    .execute(pool)
    .await?;

    Ok(Group {
        id: result.last_insert_rowid(),
        title: title.to_string(),
        slug: slug.to_string(),
        description: description.to_string(),
    })
}
