//! Member Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{
    MemberBatchRequest, RegisterMemberRequest, UpdateMemberRequest,
};
use crate::application::dto::response::{MemberListResponse, MemberResponse};
use crate::application::services::{
    MemberService, MemberServiceImpl, RegisterMemberDto, UpdateMemberDto,
};
use crate::infrastructure::repositories::PgMemberRepository;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn member_service(state: &AppState) -> MemberServiceImpl<PgMemberRepository> {
    MemberServiceImpl::new(Arc::new(PgMemberRepository::new(state.db.clone())))
}

/// Register a new member
pub async fn register_member(
    State(state): State<AppState>,
    Json(body): Json<RegisterMemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let member = member_service(&state)
        .register(RegisterMemberDto {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(MemberResponse::from(member))))
}

/// Get a member by id
pub async fn get_member(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> Result<Json<MemberResponse>, AppError> {
    let member = member_service(&state).get_member(member_id).await?;
    Ok(Json(MemberResponse::from(member)))
}

/// Get a member by unique name
pub async fn get_member_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MemberResponse>, AppError> {
    let member = member_service(&state).get_member_by_name(&name).await?;
    Ok(Json(MemberResponse::from(member)))
}

/// List all members
pub async fn get_all_members(
    State(state): State<AppState>,
) -> Result<Json<MemberListResponse>, AppError> {
    let members = member_service(&state).get_all_members().await?;
    Ok(Json(MemberListResponse::from_projections(members)))
}

/// Batch member lookup; the service validates the raw id list
pub async fn get_members_batch(
    State(state): State<AppState>,
    Json(body): Json<MemberBatchRequest>,
) -> Result<Json<MemberListResponse>, AppError> {
    let members = member_service(&state)
        .get_members_by_ids(body.member_ids)
        .await?;
    Ok(Json(MemberListResponse::from_projections(members)))
}

/// Partially update a member
pub async fn update_member(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
    Json(body): Json<UpdateMemberRequest>,
) -> Result<Json<MemberResponse>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let member = member_service(&state)
        .update_member(
            member_id,
            UpdateMemberDto {
                name: body.name,
                email: body.email,
                password: body.password,
            },
        )
        .await?;

    Ok(Json(MemberResponse::from(member)))
}
