//! Post lifecycle scenarios: creation with owner validation, absent-id
//! handling, the active/deleted partition, and soft-delete idempotence.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use board_server::application::services::{
    CreatePostDto, PostService, PostServiceImpl, UpdatePostDto,
};
use board_server::domain::PostRepository;
use board_server::shared::error::ErrorKind;

use crate::common::{seed_member, InMemoryMemberRepository, InMemoryPostRepository};

struct Fixture {
    service: PostServiceImpl<InMemoryPostRepository, InMemoryMemberRepository>,
    posts: Arc<InMemoryPostRepository>,
    writer_id: i64,
}

async fn fixture() -> Fixture {
    let members = Arc::new(InMemoryMemberRepository::default());
    let writer_id = seed_member(&members, "daeminjae", "test@example.com").await;
    let posts = Arc::new(InMemoryPostRepository::new(members.clone()));
    Fixture {
        service: PostServiceImpl::new(posts.clone(), members),
        posts,
        writer_id,
    }
}

fn create_dto(title: &str, member_id: i64) -> CreatePostDto {
    CreatePostDto {
        title: title.to_string(),
        content: "Test Content".to_string(),
        member_id,
    }
}

#[tokio::test]
async fn created_post_projects_the_writer_name() {
    let f = fixture().await;

    let created = f
        .service
        .create_post(create_dto("Test Title", f.writer_id))
        .await
        .unwrap();

    assert_eq!(created.title, "Test Title");
    assert_eq!(created.writer, "daeminjae");
    assert!(!created.is_deleted);

    let fetched = f.service.get_post(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_rejects_unknown_owner() {
    let f = fixture().await;

    let err = f.service.create_post(create_dto("Title", 999)).await.unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::MemberNotFoundById));
}

#[tokio::test]
async fn absent_id_is_none_at_the_repository_and_an_error_at_the_service() {
    let f = fixture().await;

    // Repository reports absence as None, not as an error.
    let direct = f.posts.find_projection_by_id(i64::MAX).await.unwrap();
    assert_eq!(direct, None);

    let err = f.service.get_post(i64::MAX).await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::PostNotFoundById));
}

#[tokio::test]
async fn listing_for_unknown_owner_is_an_error_at_the_service() {
    let f = fixture().await;

    let err = f.service.get_posts_by_member(999).await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::MemberNotFoundById));

    let err = f.service.get_deleted_posts_by_member(999).await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::MemberNotFoundById));
}

#[tokio::test]
async fn repository_reports_unknown_owner_as_empty_not_error() {
    let f = fixture().await;

    // The owner checks live in the service; the repository itself stays quiet.
    assert!(f
        .posts
        .find_projections_by_member(999)
        .await
        .unwrap()
        .is_empty());
    assert!(f
        .posts
        .find_deleted_projections_by_member(999)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn owner_without_posts_gets_empty_lists() {
    let f = fixture().await;

    assert!(f
        .service
        .get_posts_by_member(f.writer_id)
        .await
        .unwrap()
        .is_empty());
    assert!(f
        .service
        .get_deleted_posts_by_member(f.writer_id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn deletion_partitions_posts_by_owner() {
    let f = fixture().await;

    let first = f.service.create_post(create_dto("first", f.writer_id)).await.unwrap();
    let second = f.service.create_post(create_dto("second", f.writer_id)).await.unwrap();
    let third = f.service.create_post(create_dto("third", f.writer_id)).await.unwrap();

    f.service.delete_post(second.id).await.unwrap();

    let active = f.service.get_posts_by_member(f.writer_id).await.unwrap();
    let deleted = f
        .service
        .get_deleted_posts_by_member(f.writer_id)
        .await
        .unwrap();

    let active_ids: Vec<i64> = active.iter().map(|p| p.id).collect();
    let deleted_ids: Vec<i64> = deleted.iter().map(|p| p.id).collect();
    assert_eq!(active_ids, vec![first.id, third.id]);
    assert_eq!(deleted_ids, vec![second.id]);

    // Every post still shows up in the deletion-agnostic listing.
    assert_eq!(f.service.get_all_posts().await.unwrap().len(), 3);
}

#[tokio::test]
async fn deleted_post_stays_addressable_by_id() {
    let f = fixture().await;

    let created = f.service.create_post(create_dto("kept", f.writer_id)).await.unwrap();
    f.service.delete_post(created.id).await.unwrap();

    let fetched = f.service.get_post(created.id).await.unwrap();
    assert!(fetched.is_deleted);
    assert_eq!(fetched.title, "kept");
}

#[tokio::test]
async fn deleting_twice_is_a_quiet_no_op() {
    let f = fixture().await;

    let created = f.service.create_post(create_dto("twice", f.writer_id)).await.unwrap();
    f.service.delete_post(created.id).await.unwrap();
    f.service.delete_post(created.id).await.unwrap();

    assert!(f.service.get_post(created.id).await.unwrap().is_deleted);
}

#[tokio::test]
async fn deleting_an_unknown_post_is_an_error() {
    let f = fixture().await;

    let err = f.service.delete_post(999).await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::PostNotFoundById));
}

#[tokio::test]
async fn update_changes_only_the_present_fields() {
    let f = fixture().await;

    let created = f.service.create_post(create_dto("before", f.writer_id)).await.unwrap();

    let updated = f
        .service
        .update_post(
            created.id,
            UpdatePostDto {
                title: Some("after".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "after");
    assert_eq!(updated.content, "Test Content");
}

#[tokio::test]
async fn update_with_all_fields_absent_changes_nothing() {
    let f = fixture().await;

    let created = f.service.create_post(create_dto("stable", f.writer_id)).await.unwrap();

    let updated = f
        .service
        .update_post(created.id, UpdatePostDto::default())
        .await
        .unwrap();

    assert_eq!(updated, created);
}
