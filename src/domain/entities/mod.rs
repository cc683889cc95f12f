//! # Domain Entities
//!
//! Core entities of the board: members, posts, and comments. Each entity file
//! also defines its read projections, partial-update types, and the
//! repository trait implemented in the infrastructure layer.
//!
//! Posts and comments carry a soft-delete flag; members do not.

mod comment;
mod member;
mod post;

pub use member::{Member, MemberProjection, MemberRepository, MemberUpdate, NewMember};

pub use post::{NewPost, Post, PostProjection, PostRepository, PostUpdate};

pub use comment::{Comment, CommentProjection, CommentRepository, CommentUpdate, NewComment};

#[cfg(test)]
pub use comment::MockCommentRepository;
#[cfg(test)]
pub use member::MockMemberRepository;
#[cfg(test)]
pub use post::MockPostRepository;
