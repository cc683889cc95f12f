//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! - **MemberService**: registration, lookup, batch validation, profile updates
//! - **PostService**: post CRUD with soft deletion
//! - **CommentService**: comment CRUD with soft deletion

pub mod comment_service;
pub mod member_service;
pub mod post_service;

pub use member_service::{
    MemberService, MemberServiceImpl, RegisterMemberDto, UpdateMemberDto,
};

pub use post_service::{CreatePostDto, PostService, PostServiceImpl, UpdatePostDto};

pub use comment_service::{
    CommentService, CommentServiceImpl, CreateCommentDto, UpdateCommentDto,
};
