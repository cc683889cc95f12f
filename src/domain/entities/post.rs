//! Post entity and repository trait.
//!
//! Maps to the `posts` table. Posts are soft-deleted: `mark_deleted` flips
//! the `is_deleted` flag and nothing in this crate removes the row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a post on the board.
///
/// Maps to the `posts` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - title: VARCHAR(255) NOT NULL
/// - content: TEXT NOT NULL
/// - member_id: BIGINT NOT NULL REFERENCES members(id)
/// - is_deleted: BOOLEAN NOT NULL DEFAULT FALSE
/// - created_at / updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,

    /// Owning member; immutable after creation.
    pub member_id: i64,

    /// Soft-delete flag. Deleted posts stay addressable by id.
    pub is_deleted: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Read shape for post queries. `writer` is the owning member's name,
/// resolved by join so callers never load the member graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostProjection {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub writer: String,
    pub is_deleted: bool,
}

/// Fields required to create a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub member_id: i64,
}

/// Partial update: absent fields leave the stored value untouched.
/// The deletion flag is not updatable here; only `mark_deleted` writes it.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Repository trait for Post data access.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post and return the stored record.
    async fn insert(&self, post: &NewPost) -> Result<Post, AppError>;

    /// Projection by id, regardless of the deletion flag; `None` when absent.
    async fn find_projection_by_id(&self, id: i64) -> Result<Option<PostProjection>, AppError>;

    /// Projections for every post, deletion-state agnostic.
    async fn find_all_projections(&self) -> Result<Vec<PostProjection>, AppError>;

    /// Active posts for the given owner; empty vec for unknown owners.
    async fn find_projections_by_member(
        &self,
        member_id: i64,
    ) -> Result<Vec<PostProjection>, AppError>;

    /// Deleted posts for the given owner.
    async fn find_deleted_projections_by_member(
        &self,
        member_id: i64,
    ) -> Result<Vec<PostProjection>, AppError>;

    /// Apply the non-absent fields of `update`; returns the matched count
    /// (0 when the id has no record, never an error for absence).
    async fn update_fields(&self, id: i64, update: &PostUpdate) -> Result<u64, AppError>;

    /// Set the deletion flag. Idempotent; returns the matched count.
    async fn mark_deleted(&self, id: i64) -> Result<u64, AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;
}
