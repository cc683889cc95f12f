//! Comment Service
//!
//! Comment creation, projection queries, partial updates, and the soft-delete
//! transition. A comment may reference a parent post; the reference is
//! validated at creation and never revisited on delete (no cascade).

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    CommentProjection, CommentRepository, CommentUpdate, MemberRepository, NewComment,
    PostRepository,
};
use crate::shared::error::{AppError, DomainError, ErrorArg, ErrorKind};

/// Comment service trait
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Create a comment for an existing member, optionally under a post
    async fn create_comment(&self, dto: CreateCommentDto)
        -> Result<CommentProjection, AppError>;

    /// Get a comment projection by id, deleted or not
    async fn get_comment(&self, comment_id: i64) -> Result<CommentProjection, AppError>;

    /// Get projections for all comments, deletion-state agnostic
    async fn get_all_comments(&self) -> Result<Vec<CommentProjection>, AppError>;

    /// Active comments owned by the given member
    async fn get_comments_by_member(
        &self,
        member_id: i64,
    ) -> Result<Vec<CommentProjection>, AppError>;

    /// Deleted comments owned by the given member
    async fn get_deleted_comments_by_member(
        &self,
        member_id: i64,
    ) -> Result<Vec<CommentProjection>, AppError>;

    /// Partially update a comment and return the fresh projection
    async fn update_comment(
        &self,
        comment_id: i64,
        dto: UpdateCommentDto,
    ) -> Result<CommentProjection, AppError>;

    /// Soft-delete a comment
    async fn delete_comment(&self, comment_id: i64) -> Result<(), AppError>;
}

/// Comment creation input
#[derive(Debug, Clone)]
pub struct CreateCommentDto {
    pub content: String,
    pub member_id: i64,
    pub post_id: Option<i64>,
}

/// Comment update input
#[derive(Debug, Clone, Default)]
pub struct UpdateCommentDto {
    pub content: Option<String>,
}

/// CommentService implementation
pub struct CommentServiceImpl<C, P, M>
where
    C: CommentRepository,
    P: PostRepository,
    M: MemberRepository,
{
    comment_repo: Arc<C>,
    post_repo: Arc<P>,
    member_repo: Arc<M>,
}

impl<C, P, M> CommentServiceImpl<C, P, M>
where
    C: CommentRepository,
    P: PostRepository,
    M: MemberRepository,
{
    pub fn new(comment_repo: Arc<C>, post_repo: Arc<P>, member_repo: Arc<M>) -> Self {
        Self {
            comment_repo,
            post_repo,
            member_repo,
        }
    }

    async fn require_member(&self, member_id: i64) -> Result<(), AppError> {
        if !self.member_repo.exists_by_id(member_id).await? {
            return Err(DomainError::new(
                ErrorKind::MemberNotFoundById,
                ErrorArg::Id(member_id),
            )
            .into());
        }
        Ok(())
    }

    async fn require_comment(&self, comment_id: i64) -> Result<(), AppError> {
        if !self.comment_repo.exists_by_id(comment_id).await? {
            return Err(DomainError::new(
                ErrorKind::CommentNotFoundById,
                ErrorArg::Id(comment_id),
            )
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl<C, P, M> CommentService for CommentServiceImpl<C, P, M>
where
    C: CommentRepository + 'static,
    P: PostRepository + 'static,
    M: MemberRepository + 'static,
{
    async fn create_comment(
        &self,
        dto: CreateCommentDto,
    ) -> Result<CommentProjection, AppError> {
        self.require_member(dto.member_id).await?;
        if let Some(post_id) = dto.post_id {
            if !self.post_repo.exists_by_id(post_id).await? {
                return Err(
                    DomainError::new(ErrorKind::PostNotFoundById, ErrorArg::Id(post_id)).into(),
                );
            }
        }

        let comment = self
            .comment_repo
            .insert(&NewComment {
                content: dto.content,
                member_id: dto.member_id,
                post_id: dto.post_id,
            })
            .await?;

        Ok(CommentProjection {
            content: comment.content,
            is_deleted: comment.is_deleted,
        })
    }

    async fn get_comment(&self, comment_id: i64) -> Result<CommentProjection, AppError> {
        self.comment_repo
            .find_projection_by_id(comment_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorKind::CommentNotFoundById, ErrorArg::Id(comment_id)).into()
            })
    }

    async fn get_all_comments(&self) -> Result<Vec<CommentProjection>, AppError> {
        self.comment_repo.find_all_projections().await
    }

    async fn get_comments_by_member(
        &self,
        member_id: i64,
    ) -> Result<Vec<CommentProjection>, AppError> {
        self.require_member(member_id).await?;
        self.comment_repo.find_projections_by_member(member_id).await
    }

    async fn get_deleted_comments_by_member(
        &self,
        member_id: i64,
    ) -> Result<Vec<CommentProjection>, AppError> {
        self.require_member(member_id).await?;
        self.comment_repo
            .find_deleted_projections_by_member(member_id)
            .await
    }

    async fn update_comment(
        &self,
        comment_id: i64,
        dto: UpdateCommentDto,
    ) -> Result<CommentProjection, AppError> {
        self.require_comment(comment_id).await?;

        self.comment_repo
            .update_fields(comment_id, &CommentUpdate { content: dto.content })
            .await?;

        self.comment_repo
            .find_projection_by_id(comment_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorKind::CommentNotFoundById, ErrorArg::Id(comment_id)).into()
            })
    }

    async fn delete_comment(&self, comment_id: i64) -> Result<(), AppError> {
        self.require_comment(comment_id).await?;
        self.comment_repo.mark_deleted(comment_id).await?;
        Ok(())
    }
}
