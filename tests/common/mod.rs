//! Common Test Utilities
//!
//! In-memory repository implementations used to drive the real services
//! through full lifecycle scenarios without a database. The fakes honor the
//! repository contracts: absence is `None`/empty, `update_fields` applies
//! only non-absent fields and reports the matched count, and `mark_deleted`
//! is idempotent.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use board_server::domain::{
    Comment, CommentProjection, CommentRepository, CommentUpdate, Member, MemberProjection,
    MemberRepository, MemberUpdate, NewComment, NewMember, NewPost, Post, PostProjection,
    PostRepository, PostUpdate,
};
use board_server::shared::error::AppError;

// ============================================================================
// Members
// ============================================================================

#[derive(Default)]
pub struct InMemoryMemberRepository {
    inner: Mutex<MemberStore>,
}

#[derive(Default)]
struct MemberStore {
    next_id: i64,
    rows: BTreeMap<i64, Member>,
}

impl InMemoryMemberRepository {
    pub fn name_of(&self, member_id: i64) -> Option<String> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .get(&member_id)
            .map(|m| m.name.clone())
    }

    pub fn stored_password_hash(&self, member_id: i64) -> Option<String> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .get(&member_id)
            .map(|m| m.password_hash.clone())
    }
}

fn member_projection(member: &Member) -> MemberProjection {
    MemberProjection {
        id: member.id,
        name: member.name.clone(),
        email: member.email.clone(),
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn insert(&self, new: &NewMember) -> Result<Member, AppError> {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let now = Utc::now();
        let member = Member {
            id: store.next_id,
            name: new.name.clone(),
            email: new.email.clone(),
            password_hash: new.password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        store.rows.insert(member.id, member.clone());
        Ok(member)
    }

    async fn find_projection_by_id(&self, id: i64) -> Result<Option<MemberProjection>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store.rows.get(&id).map(member_projection))
    }

    async fn find_projection_by_name(
        &self,
        name: &str,
    ) -> Result<Option<MemberProjection>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .rows
            .values()
            .find(|m| m.name == name)
            .map(member_projection))
    }

    async fn find_all_projections(&self) -> Result<Vec<MemberProjection>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store.rows.values().map(member_projection).collect())
    }

    async fn find_projections_by_ids(
        &self,
        ids: &[i64],
    ) -> Result<Vec<MemberProjection>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .rows
            .values()
            .filter(|m| ids.contains(&m.id))
            .map(member_projection)
            .collect())
    }

    async fn existing_ids(&self, ids: &[i64]) -> Result<Vec<i64>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(ids
            .iter()
            .copied()
            .filter(|id| store.rows.contains_key(id))
            .collect())
    }

    async fn update_fields(&self, id: i64, update: &MemberUpdate) -> Result<u64, AppError> {
        let mut store = self.inner.lock().unwrap();
        match store.rows.get_mut(&id) {
            Some(member) => {
                if let Some(ref name) = update.name {
                    member.name = name.clone();
                }
                if let Some(ref email) = update.email {
                    member.email = email.clone();
                }
                if let Some(ref hash) = update.password_hash {
                    member.password_hash = hash.clone();
                }
                member.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.inner.lock().unwrap().rows.contains_key(&id))
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, AppError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .values()
            .any(|m| m.name == name))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .values()
            .any(|m| m.email == email))
    }
}

// ============================================================================
// Posts
// ============================================================================

pub struct InMemoryPostRepository {
    members: Arc<InMemoryMemberRepository>,
    inner: Mutex<PostStore>,
}

#[derive(Default)]
struct PostStore {
    next_id: i64,
    rows: BTreeMap<i64, Post>,
}

impl InMemoryPostRepository {
    pub fn new(members: Arc<InMemoryMemberRepository>) -> Self {
        Self {
            members,
            inner: Mutex::default(),
        }
    }

    // Mirrors the SQL join against members for the writer column.
    fn projection(&self, post: &Post) -> PostProjection {
        PostProjection {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            writer: self.members.name_of(post.member_id).unwrap_or_default(),
            is_deleted: post.is_deleted,
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, new: &NewPost) -> Result<Post, AppError> {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let now = Utc::now();
        let post = Post {
            id: store.next_id,
            title: new.title.clone(),
            content: new.content.clone(),
            member_id: new.member_id,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };
        store.rows.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_projection_by_id(&self, id: i64) -> Result<Option<PostProjection>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store.rows.get(&id).map(|p| self.projection(p)))
    }

    async fn find_all_projections(&self) -> Result<Vec<PostProjection>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store.rows.values().map(|p| self.projection(p)).collect())
    }

    async fn find_projections_by_member(
        &self,
        member_id: i64,
    ) -> Result<Vec<PostProjection>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .rows
            .values()
            .filter(|p| p.member_id == member_id && !p.is_deleted)
            .map(|p| self.projection(p))
            .collect())
    }

    async fn find_deleted_projections_by_member(
        &self,
        member_id: i64,
    ) -> Result<Vec<PostProjection>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .rows
            .values()
            .filter(|p| p.member_id == member_id && p.is_deleted)
            .map(|p| self.projection(p))
            .collect())
    }

    async fn update_fields(&self, id: i64, update: &PostUpdate) -> Result<u64, AppError> {
        let mut store = self.inner.lock().unwrap();
        match store.rows.get_mut(&id) {
            Some(post) => {
                if let Some(ref title) = update.title {
                    post.title = title.clone();
                }
                if let Some(ref content) = update.content {
                    post.content = content.clone();
                }
                post.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn mark_deleted(&self, id: i64) -> Result<u64, AppError> {
        let mut store = self.inner.lock().unwrap();
        match store.rows.get_mut(&id) {
            Some(post) => {
                post.is_deleted = true;
                post.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.inner.lock().unwrap().rows.contains_key(&id))
    }
}

// ============================================================================
// Comments
// ============================================================================

#[derive(Default)]
pub struct InMemoryCommentRepository {
    inner: Mutex<CommentStore>,
}

#[derive(Default)]
struct CommentStore {
    next_id: i64,
    rows: BTreeMap<i64, Comment>,
}

fn comment_projection(comment: &Comment) -> CommentProjection {
    CommentProjection {
        content: comment.content.clone(),
        is_deleted: comment.is_deleted,
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn insert(&self, new: &NewComment) -> Result<Comment, AppError> {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let now = Utc::now();
        let comment = Comment {
            id: store.next_id,
            content: new.content.clone(),
            member_id: new.member_id,
            post_id: new.post_id,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };
        store.rows.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn find_projection_by_id(
        &self,
        id: i64,
    ) -> Result<Option<CommentProjection>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store.rows.get(&id).map(comment_projection))
    }

    async fn find_all_projections(&self) -> Result<Vec<CommentProjection>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store.rows.values().map(comment_projection).collect())
    }

    async fn find_projections_by_member(
        &self,
        member_id: i64,
    ) -> Result<Vec<CommentProjection>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .rows
            .values()
            .filter(|c| c.member_id == member_id && !c.is_deleted)
            .map(comment_projection)
            .collect())
    }

    async fn find_deleted_projections_by_member(
        &self,
        member_id: i64,
    ) -> Result<Vec<CommentProjection>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .rows
            .values()
            .filter(|c| c.member_id == member_id && c.is_deleted)
            .map(comment_projection)
            .collect())
    }

    async fn update_fields(&self, id: i64, update: &CommentUpdate) -> Result<u64, AppError> {
        let mut store = self.inner.lock().unwrap();
        match store.rows.get_mut(&id) {
            Some(comment) => {
                if let Some(ref content) = update.content {
                    comment.content = content.clone();
                }
                comment.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn mark_deleted(&self, id: i64) -> Result<u64, AppError> {
        let mut store = self.inner.lock().unwrap();
        match store.rows.get_mut(&id) {
            Some(comment) => {
                comment.is_deleted = true;
                comment.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.inner.lock().unwrap().rows.contains_key(&id))
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Register a member directly through the repository and return its id.
pub async fn seed_member(
    repo: &InMemoryMemberRepository,
    name: &str,
    email: &str,
) -> i64 {
    repo.insert(&NewMember {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$seeded".to_string(),
    })
    .await
    .unwrap()
    .id
}
