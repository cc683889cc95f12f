//! Post Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{CreatePostRequest, UpdatePostRequest};
use crate::application::dto::response::{PostListResponse, PostResponse};
use crate::application::services::{CreatePostDto, PostService, PostServiceImpl, UpdatePostDto};
use crate::infrastructure::repositories::{PgMemberRepository, PgPostRepository};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn post_service(state: &AppState) -> PostServiceImpl<PgPostRepository, PgMemberRepository> {
    PostServiceImpl::new(
        Arc::new(PgPostRepository::new(state.db.clone())),
        Arc::new(PgMemberRepository::new(state.db.clone())),
    )
}

/// Create a post
pub async fn create_post(
    State(state): State<AppState>,
    Json(body): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let post = post_service(&state)
        .create_post(CreatePostDto {
            title: body.title,
            content: body.content,
            member_id: body.member_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(PostResponse::from(post))))
}

/// Get a post by id (deleted posts stay addressable)
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<Json<PostResponse>, AppError> {
    let post = post_service(&state).get_post(post_id).await?;
    Ok(Json(PostResponse::from(post)))
}

/// List all posts, active and deleted
pub async fn get_all_posts(
    State(state): State<AppState>,
) -> Result<Json<PostListResponse>, AppError> {
    let posts = post_service(&state).get_all_posts().await?;
    Ok(Json(PostListResponse::from_projections(posts)))
}

/// List a member's active posts
pub async fn get_posts_by_member(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> Result<Json<PostListResponse>, AppError> {
    let posts = post_service(&state).get_posts_by_member(member_id).await?;
    Ok(Json(PostListResponse::from_projections(posts)))
}

/// List a member's deleted posts
pub async fn get_deleted_posts_by_member(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> Result<Json<PostListResponse>, AppError> {
    let posts = post_service(&state)
        .get_deleted_posts_by_member(member_id)
        .await?;
    Ok(Json(PostListResponse::from_projections(posts)))
}

/// Partially update a post
pub async fn update_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    Json(body): Json<UpdatePostRequest>,
) -> Result<Json<PostResponse>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let post = post_service(&state)
        .update_post(
            post_id,
            UpdatePostDto {
                title: body.title,
                content: body.content,
            },
        )
        .await?;

    Ok(Json(PostResponse::from(post)))
}

/// Soft-delete a post
pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    post_service(&state).delete_post(post_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
