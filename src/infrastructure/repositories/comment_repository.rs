//! Comment Repository Implementation
//!
//! PostgreSQL implementation of the CommentRepository trait. The projection
//! is deliberately narrow: content plus deletion flag.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Comment, CommentProjection, CommentRepository, CommentUpdate, NewComment};
use crate::shared::error::AppError;

/// Database row matching the full `comments` table schema.
#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    id: i64,
    content: String,
    member_id: i64,
    post_id: Option<i64>,
    is_deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            id: self.id,
            content: self.content,
            member_id: self.member_id,
            post_id: self.post_id,
            is_deleted: self.is_deleted,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Row for the comment read shape.
#[derive(Debug, sqlx::FromRow)]
struct CommentProjectionRow {
    content: String,
    is_deleted: bool,
}

impl CommentProjectionRow {
    fn into_projection(self) -> CommentProjection {
        CommentProjection {
            content: self.content,
            is_deleted: self.is_deleted,
        }
    }
}

/// PostgreSQL comment repository implementation.
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn insert(&self, comment: &NewComment) -> Result<Comment, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            INSERT INTO comments (content, member_id, post_id)
            VALUES ($1, $2, $3)
            RETURNING id, content, member_id, post_id, is_deleted, created_at, updated_at
            "#,
        )
        .bind(&comment.content)
        .bind(comment.member_id)
        .bind(comment.post_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_comment())
    }

    async fn find_projection_by_id(
        &self,
        id: i64,
    ) -> Result<Option<CommentProjection>, AppError> {
        let row = sqlx::query_as::<_, CommentProjectionRow>(
            "SELECT content, is_deleted FROM comments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_projection()))
    }

    async fn find_all_projections(&self) -> Result<Vec<CommentProjection>, AppError> {
        let rows = sqlx::query_as::<_, CommentProjectionRow>(
            "SELECT content, is_deleted FROM comments ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_projection()).collect())
    }

    async fn find_projections_by_member(
        &self,
        member_id: i64,
    ) -> Result<Vec<CommentProjection>, AppError> {
        let rows = sqlx::query_as::<_, CommentProjectionRow>(
            r#"
            SELECT content, is_deleted FROM comments
            WHERE member_id = $1 AND is_deleted = FALSE
            ORDER BY id
            "#,
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_projection()).collect())
    }

    async fn find_deleted_projections_by_member(
        &self,
        member_id: i64,
    ) -> Result<Vec<CommentProjection>, AppError> {
        let rows = sqlx::query_as::<_, CommentProjectionRow>(
            r#"
            SELECT content, is_deleted FROM comments
            WHERE member_id = $1 AND is_deleted = TRUE
            ORDER BY id
            "#,
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_projection()).collect())
    }

    async fn update_fields(&self, id: i64, update: &CommentUpdate) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE comments
            SET content = COALESCE($2, content),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&update.content)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn mark_deleted(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE comments SET is_deleted = TRUE, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }
}
