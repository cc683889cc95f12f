//! Member Repository Implementation
//!
//! PostgreSQL implementation of the MemberRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Member, MemberProjection, MemberRepository, MemberUpdate, NewMember};
use crate::shared::error::{AppError, DomainError, ErrorArg, ErrorKind};

/// Database row matching the full `members` table schema.
#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl MemberRow {
    fn into_member(self) -> Member {
        Member {
            id: self.id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Row for the member read shape; the credential column is never selected.
#[derive(Debug, sqlx::FromRow)]
struct MemberProjectionRow {
    id: i64,
    name: String,
    email: String,
}

impl MemberProjectionRow {
    fn into_projection(self) -> MemberProjection {
        MemberProjection {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

/// PostgreSQL member repository implementation.
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    /// Insert a new member.
    ///
    /// Unique violations are mapped onto the taxonomy by constraint name so a
    /// race between the service-level existence check and the insert still
    /// surfaces the right kind.
    async fn insert(&self, member: &NewMember) -> Result<Member, AppError> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            INSERT INTO members (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                match db_err.constraint() {
                    Some("members_name_key") => DomainError::new(
                        ErrorKind::NameAlreadyExists,
                        ErrorArg::Text(member.name.clone()),
                    )
                    .into(),
                    Some("members_email_key") => DomainError::new(
                        ErrorKind::EmailAlreadyExists,
                        ErrorArg::Text(member.email.clone()),
                    )
                    .into(),
                    _ => AppError::Database(e),
                }
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.into_member())
    }

    async fn find_projection_by_id(&self, id: i64) -> Result<Option<MemberProjection>, AppError> {
        let row = sqlx::query_as::<_, MemberProjectionRow>(
            "SELECT id, name, email FROM members WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_projection()))
    }

    async fn find_projection_by_name(
        &self,
        name: &str,
    ) -> Result<Option<MemberProjection>, AppError> {
        let row = sqlx::query_as::<_, MemberProjectionRow>(
            "SELECT id, name, email FROM members WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_projection()))
    }

    async fn find_all_projections(&self) -> Result<Vec<MemberProjection>, AppError> {
        let rows = sqlx::query_as::<_, MemberProjectionRow>(
            "SELECT id, name, email FROM members ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_projection()).collect())
    }

    async fn find_projections_by_ids(
        &self,
        ids: &[i64],
    ) -> Result<Vec<MemberProjection>, AppError> {
        let rows = sqlx::query_as::<_, MemberProjectionRow>(
            "SELECT id, name, email FROM members WHERE id = ANY($1) ORDER BY id",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_projection()).collect())
    }

    async fn existing_ids(&self, ids: &[i64]) -> Result<Vec<i64>, AppError> {
        let found = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM members WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(found)
    }

    /// Apply only the non-absent fields; COALESCE keeps untouched columns.
    async fn update_fields(&self, id: i64, update: &MemberUpdate) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE members
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                password_hash = COALESCE($4, password_hash),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.email)
        .bind(&update.password_hash)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM members WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, AppError> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM members WHERE name = $1)",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM members WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }
}
