//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/members", member_routes())
        .nest("/posts", post_routes())
        .nest("/comments", comment_routes())
}

/// Member routes
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::member::register_member))
        .route("/", get(handlers::member::get_all_members))
        .route("/batch", post(handlers::member::get_members_batch))
        .route("/name/{name}", get(handlers::member::get_member_by_name))
        .route("/{member_id}", get(handlers::member::get_member))
        .route("/{member_id}", patch(handlers::member::update_member))
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::post::create_post))
        .route("/", get(handlers::post::get_all_posts))
        .route("/{post_id}", get(handlers::post::get_post))
        .route("/{post_id}", patch(handlers::post::update_post))
        .route("/{post_id}", delete(handlers::post::delete_post))
        .route(
            "/member/{member_id}",
            get(handlers::post::get_posts_by_member),
        )
        .route(
            "/member/{member_id}/deleted",
            get(handlers::post::get_deleted_posts_by_member),
        )
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::comment::create_comment))
        .route("/", get(handlers::comment::get_all_comments))
        .route("/{comment_id}", get(handlers::comment::get_comment))
        .route("/{comment_id}", patch(handlers::comment::update_comment))
        .route("/{comment_id}", delete(handlers::comment::delete_comment))
        .route(
            "/member/{member_id}",
            get(handlers::comment::get_comments_by_member),
        )
        .route(
            "/member/{member_id}/deleted",
            get(handlers::comment::get_deleted_comments_by_member),
        )
}
