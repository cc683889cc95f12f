//! Post Repository Implementation
//!
//! PostgreSQL implementation of the PostRepository trait. Projection queries
//! join `members` to resolve the writer name; the two by-owner queries
//! partition an owner's posts on the boolean deletion flag.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{NewPost, Post, PostProjection, PostRepository, PostUpdate};
use crate::shared::error::AppError;

/// Database row matching the full `posts` table schema.
#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    member_id: i64,
    is_deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: self.id,
            title: self.title,
            content: self.content,
            member_id: self.member_id,
            is_deleted: self.is_deleted,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Row for the post read shape, writer resolved via join.
#[derive(Debug, sqlx::FromRow)]
struct PostProjectionRow {
    id: i64,
    title: String,
    content: String,
    writer: String,
    is_deleted: bool,
}

impl PostProjectionRow {
    fn into_projection(self) -> PostProjection {
        PostProjection {
            id: self.id,
            title: self.title,
            content: self.content,
            writer: self.writer,
            is_deleted: self.is_deleted,
        }
    }
}

const PROJECTION_SELECT: &str = r#"
    SELECT p.id, p.title, p.content, m.name AS writer, p.is_deleted
    FROM posts p
    JOIN members m ON m.id = p.member_id
"#;

/// PostgreSQL post repository implementation.
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn insert(&self, post: &NewPost) -> Result<Post, AppError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (title, content, member_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, member_id, is_deleted, created_at, updated_at
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.member_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_post())
    }

    /// Projection by id, deleted or not. Visibility policy is the caller's.
    async fn find_projection_by_id(&self, id: i64) -> Result<Option<PostProjection>, AppError> {
        let row = sqlx::query_as::<_, PostProjectionRow>(&format!(
            "{PROJECTION_SELECT} WHERE p.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_projection()))
    }

    async fn find_all_projections(&self) -> Result<Vec<PostProjection>, AppError> {
        let rows = sqlx::query_as::<_, PostProjectionRow>(&format!(
            "{PROJECTION_SELECT} ORDER BY p.id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_projection()).collect())
    }

    async fn find_projections_by_member(
        &self,
        member_id: i64,
    ) -> Result<Vec<PostProjection>, AppError> {
        let rows = sqlx::query_as::<_, PostProjectionRow>(&format!(
            "{PROJECTION_SELECT} WHERE p.member_id = $1 AND p.is_deleted = FALSE ORDER BY p.id"
        ))
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_projection()).collect())
    }

    async fn find_deleted_projections_by_member(
        &self,
        member_id: i64,
    ) -> Result<Vec<PostProjection>, AppError> {
        let rows = sqlx::query_as::<_, PostProjectionRow>(&format!(
            "{PROJECTION_SELECT} WHERE p.member_id = $1 AND p.is_deleted = TRUE ORDER BY p.id"
        ))
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_projection()).collect())
    }

    /// Apply only the non-absent fields; COALESCE keeps untouched columns.
    /// Returns the matched count so callers can combine it with an existence
    /// check; a missing id is 0, not an error.
    async fn update_fields(&self, id: i64, update: &PostUpdate) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = COALESCE($2, title),
                content = COALESCE($3, content),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&update.title)
        .bind(&update.content)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Flip the soft-delete flag. Re-running on an already-deleted post still
    /// matches the row, so the call stays idempotent and non-erroring.
    async fn mark_deleted(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE posts SET is_deleted = TRUE, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }
}
