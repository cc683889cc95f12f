//! Member entity and repository trait.
//!
//! Maps to the `members` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a registered member of the board.
///
/// Maps to the `members` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: VARCHAR(32) NOT NULL UNIQUE
/// - email: VARCHAR(255) NOT NULL UNIQUE
/// - password_hash: VARCHAR(255) NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,

    /// Display name (unique across all members)
    pub name: String,

    /// Email address (unique across all members)
    pub email: String,

    /// Argon2 password hash, never serialized out
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Read shape for member queries. Carries no credential data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberProjection {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Fields required to create a member.
#[derive(Debug, Clone)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Partial update: absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

impl MemberUpdate {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password_hash.is_none()
    }
}

/// Repository trait for Member data access.
///
/// Query methods return projections, never full entities; absence is `None`
/// or an empty vec, never an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Insert a new member and return the stored record.
    async fn insert(&self, member: &NewMember) -> Result<Member, AppError>;

    /// Projection for a single member; `None` when the id has no record.
    async fn find_projection_by_id(&self, id: i64) -> Result<Option<MemberProjection>, AppError>;

    /// Projection looked up by unique name.
    async fn find_projection_by_name(
        &self,
        name: &str,
    ) -> Result<Option<MemberProjection>, AppError>;

    /// Projections for every member.
    async fn find_all_projections(&self) -> Result<Vec<MemberProjection>, AppError>;

    /// Projections for the given ids; ids without a record are skipped.
    async fn find_projections_by_ids(
        &self,
        ids: &[i64],
    ) -> Result<Vec<MemberProjection>, AppError>;

    /// Subset of `ids` that have a matching record.
    async fn existing_ids(&self, ids: &[i64]) -> Result<Vec<i64>, AppError>;

    /// Apply the non-absent fields of `update`; returns the matched count.
    async fn update_fields(&self, id: i64, update: &MemberUpdate) -> Result<u64, AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    async fn exists_by_name(&self, name: &str) -> Result<bool, AppError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError>;
}
