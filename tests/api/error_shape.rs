//! Asserts the wire shape produced when a handler returns an error: a JSON
//! body with exactly `message` (resolved text) and `error` (raw identifier),
//! under the status class of the kind.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

use board_server::shared::error::{AppError, DomainError, ErrorArg, ErrorKind};

fn router() -> Router {
    Router::new()
        .route(
            "/missing-post",
            get(|| async {
                Err::<Json<Value>, AppError>(
                    DomainError::new(ErrorKind::PostNotFoundById, ErrorArg::Id(17)).into(),
                )
            }),
        )
        .route(
            "/duplicate-email",
            get(|| async {
                Err::<Json<Value>, AppError>(
                    DomainError::new(
                        ErrorKind::EmailAlreadyExists,
                        ErrorArg::Text("jane@example.com".to_string()),
                    )
                    .into(),
                )
            }),
        )
        .route(
            "/bad-batch",
            get(|| async {
                Err::<Json<Value>, AppError>(
                    DomainError::new(
                        ErrorKind::NonExistentMemberIdIncluded,
                        ErrorArg::IdList(vec![1, 999]),
                    )
                    .into(),
                )
            }),
        )
        .route(
            "/invalid",
            get(|| async {
                Err::<Json<Value>, AppError>(AppError::Validation(
                    "name: length must be between 2 and 32".to_string(),
                ))
            }),
        )
        .route(
            "/broken",
            get(|| async {
                Err::<Json<Value>, AppError>(AppError::Internal("boom".to_string()))
            }),
        )
}

async fn request(path: &str) -> (StatusCode, Value) {
    let response = router()
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn not_found_kind_maps_to_404_with_resolved_message() {
    let (status, body) = request("/missing-post").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No such post id: 17");
    assert_eq!(body["error"], "POST_NOT_FOUND_BY_ID");
}

#[tokio::test]
async fn bad_request_kind_maps_to_400_with_resolved_message() {
    let (status, body) = request("/duplicate-email").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "This email is already registered: jane@example.com"
    );
    assert_eq!(body["error"], "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn list_argument_is_rendered_in_brackets() {
    let (status, body) = request("/bad-batch").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Member id list contains a non-existent id: [1, 999]"
    );
    assert_eq!(body["error"], "NON_EXISTENT_MEMBER_ID_INCLUDED");
}

#[tokio::test]
async fn validation_failure_maps_to_400() {
    let (status, body) = request("/invalid").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn internal_failure_maps_to_500() {
    let (status, body) = request("/broken").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn body_carries_exactly_message_and_error() {
    let (_, body) = request("/missing-post").await;

    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert!(object.contains_key("message"));
    assert!(object.contains_key("error"));
}
