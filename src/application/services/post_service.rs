//! Post Service
//!
//! Post creation, projection queries, partial updates, and the soft-delete
//! transition. Owner existence is validated here, not in the repository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{MemberRepository, NewPost, PostProjection, PostRepository, PostUpdate};
use crate::shared::error::{AppError, DomainError, ErrorArg, ErrorKind};

/// Post service trait
#[async_trait]
pub trait PostService: Send + Sync {
    /// Create a post for an existing member
    async fn create_post(&self, dto: CreatePostDto) -> Result<PostProjection, AppError>;

    /// Get a post projection by id, deleted or not
    async fn get_post(&self, post_id: i64) -> Result<PostProjection, AppError>;

    /// Get projections for all posts, deletion-state agnostic
    async fn get_all_posts(&self) -> Result<Vec<PostProjection>, AppError>;

    /// Active posts owned by the given member
    async fn get_posts_by_member(&self, member_id: i64) -> Result<Vec<PostProjection>, AppError>;

    /// Deleted posts owned by the given member
    async fn get_deleted_posts_by_member(
        &self,
        member_id: i64,
    ) -> Result<Vec<PostProjection>, AppError>;

    /// Partially update a post and return the fresh projection
    async fn update_post(&self, post_id: i64, dto: UpdatePostDto)
        -> Result<PostProjection, AppError>;

    /// Soft-delete a post
    async fn delete_post(&self, post_id: i64) -> Result<(), AppError>;
}

/// Post creation input
#[derive(Debug, Clone)]
pub struct CreatePostDto {
    pub title: String,
    pub content: String,
    pub member_id: i64,
}

/// Post update input; absent fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UpdatePostDto {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// PostService implementation
pub struct PostServiceImpl<P, M>
where
    P: PostRepository,
    M: MemberRepository,
{
    post_repo: Arc<P>,
    member_repo: Arc<M>,
}

impl<P, M> PostServiceImpl<P, M>
where
    P: PostRepository,
    M: MemberRepository,
{
    pub fn new(post_repo: Arc<P>, member_repo: Arc<M>) -> Self {
        Self {
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

    async fn require_post(&self, post_id: i64) -> Result<(), AppError> {
        if !self.post_repo.exists_by_id(post_id).await? {
            return Err(
                DomainError::new(ErrorKind::PostNotFoundById, ErrorArg::Id(post_id)).into(),
            );
        }
        Ok(())
    }
}

#[async_trait]
impl<P, M> PostService for PostServiceImpl<P, M>
where
    P: PostRepository + 'static,
    M: MemberRepository + 'static,
{
    async fn create_post(&self, dto: CreatePostDto) -> Result<PostProjection, AppError> {
        self.require_member(dto.member_id).await?;

        let post = self
            .post_repo
            .insert(&NewPost {
                title: dto.title,
                content: dto.content,
                member_id: dto.member_id,
            })
            .await?;

        self.post_repo
            .find_projection_by_id(post.id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorKind::PostNotFoundById, ErrorArg::Id(post.id)).into()
            })
    }

    async fn get_post(&self, post_id: i64) -> Result<PostProjection, AppError> {
        self.require_post(post_id).await?;

        self.post_repo
            .find_projection_by_id(post_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorKind::PostNotFoundById, ErrorArg::Id(post_id)).into()
            })
    }

    async fn get_all_posts(&self) -> Result<Vec<PostProjection>, AppError> {
        self.post_repo.find_all_projections().await
    }

    async fn get_posts_by_member(&self, member_id: i64) -> Result<Vec<PostProjection>, AppError> {
        self.require_member(member_id).await?;
        self.post_repo.find_projections_by_member(member_id).await
    }

    async fn get_deleted_posts_by_member(
        &self,
        member_id: i64,
    ) -> Result<Vec<PostProjection>, AppError> {
        self.require_member(member_id).await?;
        self.post_repo
            .find_deleted_projections_by_member(member_id)
            .await
    }

    async fn update_post(
        &self,
        post_id: i64,
        dto: UpdatePostDto,
    ) -> Result<PostProjection, AppError> {
        self.require_post(post_id).await?;

        self.post_repo
            .update_fields(
                post_id,
                &PostUpdate {
                    title: dto.title,
                    content: dto.content,
                },
            )
            .await?;

        self.post_repo
            .find_projection_by_id(post_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorKind::PostNotFoundById, ErrorArg::Id(post_id)).into()
            })
    }

    async fn delete_post(&self, post_id: i64) -> Result<(), AppError> {
        self.require_post(post_id).await?;
        self.post_repo.mark_deleted(post_id).await?;
        Ok(())
    }
}
