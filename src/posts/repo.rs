use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Post row. `author_id` is set at creation and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub is_published: bool,
    pub author_id: Uuid,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

impl Post {
    pub async fn list(db: &PgPool, limit: i64, offset: i64) -> anyhow::Result<Vec<Post>> {
        let rows = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, is_published, author_id, created_at, updated_at
            FROM posts
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn list_by_author(
        db: &PgPool,
        author_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> anyhow::Result<Vec<Post>> {
        let rows = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, is_published, author_id, created_at, updated_at
            FROM posts
            WHERE author_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(author_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, is_published, author_id, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(post)
    }

    pub async fn create(
        db: &PgPool,
        author_id: Uuid,
        title: &str,
        content: &str,
        is_published: bool,
    ) -> anyhow::Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content, is_published, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, is_published, author_id, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(is_published)
        .bind(author_id)
        .fetch_one(db)
        .await?;
        Ok(post)
    }

    /// Partial update; absent fields keep their stored value.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        title: Option<&str>,
        content: Option<&str>,
        is_published: Option<bool>,
    ) -> anyhow::Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = COALESCE($2, title),
                content = COALESCE($3, content),
                is_published = COALESCE($4, is_published),
                updated_at = now()
            WHERE id = $1
            RETURNING id, title, content, is_published, author_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(content)
        .bind(is_published)
        .fetch_one(db)
        .await?;
        Ok(post)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM posts WHERE id = $1"#)
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
