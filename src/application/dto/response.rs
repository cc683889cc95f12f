//! Response DTOs
//!
//! Data structures for API response bodies, built from domain projections.

use serde::Serialize;

use crate::domain::{CommentProjection, MemberProjection, PostProjection};

/// Member response
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<MemberProjection> for MemberResponse {
    fn from(projection: MemberProjection) -> Self {
        Self {
            id: projection.id,
            name: projection.name,
            email: projection.email,
        }
    }
}

/// Member list wrapper
#[derive(Debug, Serialize)]
pub struct MemberListResponse {
    pub members: Vec<MemberResponse>,
}

impl MemberListResponse {
    pub fn from_projections(projections: Vec<MemberProjection>) -> Self {
        Self {
            members: projections.into_iter().map(MemberResponse::from).collect(),
        }
    }
}

/// Post response
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub writer: String,
    pub is_deleted: bool,
}

impl From<PostProjection> for PostResponse {
    fn from(projection: PostProjection) -> Self {
        Self {
            id: projection.id,
            title: projection.title,
            content: projection.content,
            writer: projection.writer,
            is_deleted: projection.is_deleted,
        }
    }
}

/// Post list wrapper
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
}

impl PostListResponse {
    pub fn from_projections(projections: Vec<PostProjection>) -> Self {
        Self {
            posts: projections.into_iter().map(PostResponse::from).collect(),
        }
    }
}

/// Comment response
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub content: String,
    pub is_deleted: bool,
}

impl From<CommentProjection> for CommentResponse {
    fn from(projection: CommentProjection) -> Self {
        Self {
            content: projection.content,
            is_deleted: projection.is_deleted,
        }
    }
}

/// Comment list wrapper
#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentResponse>,
}

impl CommentListResponse {
    pub fn from_projections(projections: Vec<CommentProjection>) -> Self {
        Self {
            comments: projections.into_iter().map(CommentResponse::from).collect(),
        }
    }
}
