//! Comment Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{CreateCommentRequest, UpdateCommentRequest};
use crate::application::dto::response::{CommentListResponse, CommentResponse};
use crate::application::services::{
    CommentService, CommentServiceImpl, CreateCommentDto, UpdateCommentDto,
};
use crate::infrastructure::repositories::{
    PgCommentRepository, PgMemberRepository, PgPostRepository,
};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn comment_service(
    state: &AppState,
) -> CommentServiceImpl<PgCommentRepository, PgPostRepository, PgMemberRepository> {
    CommentServiceImpl::new(
        Arc::new(PgCommentRepository::new(state.db.clone())),
        Arc::new(PgPostRepository::new(state.db.clone())),
        Arc::new(PgMemberRepository::new(state.db.clone())),
    )
}

/// Create a comment
pub async fn create_comment(
    State(state): State<AppState>,
    Json(body): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let comment = comment_service(&state)
        .create_comment(CreateCommentDto {
            content: body.content,
            member_id: body.member_id,
            post_id: body.post_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CommentResponse::from(comment))))
}

/// Get a comment by id (deleted comments stay addressable)
pub async fn get_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<i64>,
) -> Result<Json<CommentResponse>, AppError> {
    let comment = comment_service(&state).get_comment(comment_id).await?;
    Ok(Json(CommentResponse::from(comment)))
}

/// List all comments, active and deleted
pub async fn get_all_comments(
    State(state): State<AppState>,
) -> Result<Json<CommentListResponse>, AppError> {
    let comments = comment_service(&state).get_all_comments().await?;
    Ok(Json(CommentListResponse::from_projections(comments)))
}

/// List a member's active comments
pub async fn get_comments_by_member(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> Result<Json<CommentListResponse>, AppError> {
    let comments = comment_service(&state)
        .get_comments_by_member(member_id)
        .await?;
    Ok(Json(CommentListResponse::from_projections(comments)))
}

/// List a member's deleted comments
pub async fn get_deleted_comments_by_member(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> Result<Json<CommentListResponse>, AppError> {
    let comments = comment_service(&state)
        .get_deleted_comments_by_member(member_id)
        .await?;
    Ok(Json(CommentListResponse::from_projections(comments)))
}

/// Partially update a comment
pub async fn update_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<i64>,
    Json(body): Json<UpdateCommentRequest>,
) -> Result<Json<CommentResponse>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let comment = comment_service(&state)
        .update_comment(comment_id, UpdateCommentDto { content: body.content })
        .await?;

    Ok(Json(CommentResponse::from(comment)))
}

/// Soft-delete a comment
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    comment_service(&state).delete_comment(comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
