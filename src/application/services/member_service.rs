//! Member Service
//!
//! Member registration, lookup, and profile updates. Uniqueness and
//! existence violations raise taxonomy kinds; plain "nothing matched" query
//! outcomes stay non-erroring per the repository contracts.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{MemberProjection, MemberRepository, MemberUpdate, NewMember};
use crate::shared::error::{AppError, DomainError, ErrorArg, ErrorKind};
use crate::shared::password;

/// Member service trait
#[async_trait]
pub trait MemberService: Send + Sync {
    /// Register a new member
    async fn register(&self, dto: RegisterMemberDto) -> Result<MemberProjection, AppError>;

    /// Get a member projection by id
    async fn get_member(&self, member_id: i64) -> Result<MemberProjection, AppError>;

    /// Get a member projection by unique name
    async fn get_member_by_name(&self, name: &str) -> Result<MemberProjection, AppError>;

    /// Get projections for all members
    async fn get_all_members(&self) -> Result<Vec<MemberProjection>, AppError>;

    /// Batch lookup with full id-list validation
    async fn get_members_by_ids(
        &self,
        member_ids: Option<Vec<String>>,
    ) -> Result<Vec<MemberProjection>, AppError>;

    /// Partially update a member and return the fresh projection
    async fn update_member(
        &self,
        member_id: i64,
        dto: UpdateMemberDto,
    ) -> Result<MemberProjection, AppError>;
}

/// Registration input
#[derive(Debug, Clone)]
pub struct RegisterMemberDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Profile update input; absent fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateMemberDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// MemberService implementation
pub struct MemberServiceImpl<M>
where
    M: MemberRepository,
{
    member_repo: Arc<M>,
}

impl<M> MemberServiceImpl<M>
where
    M: MemberRepository,
{
    pub fn new(member_repo: Arc<M>) -> Self {
        Self { member_repo }
    }
}

#[async_trait]
impl<M> MemberService for MemberServiceImpl<M>
where
    M: MemberRepository + 'static,
{
    async fn register(&self, dto: RegisterMemberDto) -> Result<MemberProjection, AppError> {
        if self.member_repo.exists_by_email(&dto.email).await? {
            return Err(DomainError::new(
                ErrorKind::EmailAlreadyExists,
                ErrorArg::Text(dto.email),
            )
            .into());
        }
        if self.member_repo.exists_by_name(&dto.name).await? {
            return Err(DomainError::new(
                ErrorKind::NameAlreadyExists,
                ErrorArg::Text(dto.name),
            )
            .into());
        }

        let new_member = NewMember {
            name: dto.name,
            email: dto.email,
            password_hash: password::hash_password(&dto.password)?,
        };
        let member = self.member_repo.insert(&new_member).await?;

        Ok(MemberProjection {
            id: member.id,
            name: member.name,
            email: member.email,
        })
    }

    async fn get_member(&self, member_id: i64) -> Result<MemberProjection, AppError> {
        if !self.member_repo.exists_by_id(member_id).await? {
            return Err(DomainError::new(
                ErrorKind::MemberNotFoundById,
                ErrorArg::Id(member_id),
            )
            .into());
        }

        self.member_repo
            .find_projection_by_id(member_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorKind::MemberNotFoundById, ErrorArg::Id(member_id)).into()
            })
    }

    async fn get_member_by_name(&self, name: &str) -> Result<MemberProjection, AppError> {
        self.member_repo
            .find_projection_by_name(name)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorKind::MemberNotFoundByName,
                    ErrorArg::Text(name.to_string()),
                )
                .into()
            })
    }

    async fn get_all_members(&self) -> Result<Vec<MemberProjection>, AppError> {
        self.member_repo.find_all_projections().await
    }

    /// Validates the raw id list before touching storage. Each violation
    /// reports one representative condition carrying the offending list.
    async fn get_members_by_ids(
        &self,
        member_ids: Option<Vec<String>>,
    ) -> Result<Vec<MemberProjection>, AppError> {
        let raw = member_ids.unwrap_or_default();
        if raw.is_empty() {
            return Err(DomainError::new(
                ErrorKind::MemberIdsEmptyOrNull,
                ErrorArg::TextList(raw),
            )
            .into());
        }

        let parsed: Result<Vec<i64>, _> = raw.iter().map(|s| s.trim().parse::<i64>()).collect();
        let parsed = match parsed {
            Ok(ids) => ids,
            Err(_) => {
                return Err(DomainError::new(
                    ErrorKind::InvalidMemberIdIncluded,
                    ErrorArg::TextList(raw),
                )
                .into());
            }
        };

        let existing: HashSet<i64> =
            self.member_repo.existing_ids(&parsed).await?.into_iter().collect();
        if parsed.iter().any(|id| !existing.contains(id)) {
            return Err(DomainError::new(
                ErrorKind::NonExistentMemberIdIncluded,
                ErrorArg::IdList(parsed),
            )
            .into());
        }

        self.member_repo.find_projections_by_ids(&parsed).await
    }

    async fn update_member(
        &self,
        member_id: i64,
        dto: UpdateMemberDto,
    ) -> Result<MemberProjection, AppError> {
        let current = self
            .member_repo
            .find_projection_by_id(member_id)
            .await?
            .ok_or_else(|| {
                AppError::from(DomainError::new(
                    ErrorKind::MemberNotFoundById,
                    ErrorArg::Id(member_id),
                ))
            })?;

        // Uniqueness re-checks only when the field actually changes.
        if let Some(ref name) = dto.name {
            if name != &current.name && self.member_repo.exists_by_name(name).await? {
                return Err(DomainError::new(
                    ErrorKind::NameAlreadyExists,
                    ErrorArg::Text(name.clone()),
                )
                .into());
            }
        }
        if let Some(ref email) = dto.email {
            if email != &current.email && self.member_repo.exists_by_email(email).await? {
                return Err(DomainError::new(
                    ErrorKind::EmailAlreadyExists,
                    ErrorArg::Text(email.clone()),
                )
                .into());
            }
        }

        let update = MemberUpdate {
            name: dto.name,
            email: dto.email,
            password_hash: match dto.password {
                Some(ref plain) => Some(password::hash_password(plain)?),
                None => None,
            },
        };
        self.member_repo.update_fields(member_id, &update).await?;

        self.member_repo
            .find_projection_by_id(member_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorKind::MemberNotFoundById, ErrorArg::Id(member_id)).into()
            })
    }
}
