//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits.
//!
//! - **MemberRepository** - member accounts and uniqueness checks
//! - **PostRepository** - posts with soft-delete aware projections
//! - **CommentRepository** - comments with soft-delete aware projections

pub mod comment_repository;
pub mod member_repository;
pub mod post_repository;

pub use comment_repository::PgCommentRepository;
pub use member_repository::PgMemberRepository;
pub use post_repository::PgPostRepository;
