//! Comment entity and repository trait.
//!
//! Same soft-delete semantics as posts. A comment's deletion flag is
//! independent of its parent post's flag; there is no cascade.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a comment, optionally attached to a post.
///
/// Maps to the `comments` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - content: TEXT NOT NULL
/// - member_id: BIGINT NOT NULL REFERENCES members(id)
/// - post_id: BIGINT NULL REFERENCES posts(id)
/// - is_deleted: BOOLEAN NOT NULL DEFAULT FALSE
/// - created_at / updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub member_id: i64,
    pub post_id: Option<i64>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Read shape for comment queries: strictly content plus deletion flag,
/// no owner or timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentProjection {
    pub content: String,
    pub is_deleted: bool,
}

/// Fields required to create a comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: String,
    pub member_id: i64,
    pub post_id: Option<i64>,
}

/// Partial update; only the content is updatable, and only `mark_deleted`
/// writes the deletion flag.
#[derive(Debug, Clone, Default)]
pub struct CommentUpdate {
    pub content: Option<String>,
}

impl CommentUpdate {
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}

/// Repository trait for Comment data access.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a new comment and return the stored record.
    async fn insert(&self, comment: &NewComment) -> Result<Comment, AppError>;

    /// Projection by id, regardless of the deletion flag; `None` when absent.
    async fn find_projection_by_id(
        &self,
        id: i64,
    ) -> Result<Option<CommentProjection>, AppError>;

    /// Projections for every comment, deletion-state agnostic.
    async fn find_all_projections(&self) -> Result<Vec<CommentProjection>, AppError>;

    /// Active comments for the given owner; empty vec for unknown owners.
    async fn find_projections_by_member(
        &self,
        member_id: i64,
    ) -> Result<Vec<CommentProjection>, AppError>;

    /// Deleted comments for the given owner.
    async fn find_deleted_projections_by_member(
        &self,
        member_id: i64,
    ) -> Result<Vec<CommentProjection>, AppError>;

    /// Apply the non-absent fields of `update`; returns the matched count.
    async fn update_fields(&self, id: i64, update: &CommentUpdate) -> Result<u64, AppError>;

    /// Set the deletion flag. Idempotent; returns the matched count.
    async fn mark_deleted(&self, id: i64) -> Result<u64, AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;
}
