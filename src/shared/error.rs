//! Application Error Types
//!
//! The domain error taxonomy and the boundary translator that turns any
//! failure into a uniform HTTP response.
//!
//! Every [`ErrorKind`] is bound at definition time to a status class and a
//! message template with a single `{}` substitution slot. A [`DomainError`]
//! carries a kind plus the substitution value; resolution to a message is the
//! free function [`resolve_message`]. Anything that is not a domain error
//! falls through the generic branch of the translator.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Status classification for taxonomy entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// Bad input from the caller (400).
    BadRequest,
    /// A referenced entity does not exist (404).
    NotFound,
    /// Anything unclassified (500).
    Internal,
}

impl StatusClass {
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Closed set of domain error kinds.
///
/// Adding a kind without extending `status_class`, `template` and `as_str`
/// fails to compile; forgetting to extend [`ErrorKind::ALL`] fails the
/// totality test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NameAlreadyExists,
    EmailAlreadyExists,
    MemberIdsEmptyOrNull,
    InvalidMemberIdIncluded,
    NonExistentMemberIdIncluded,
    MemberNotFoundById,
    MemberNotFoundByName,
    PostNotFoundById,
    CommentNotFoundById,
}

impl ErrorKind {
    /// Every kind in the taxonomy, for table-driven tests.
    pub const ALL: [ErrorKind; 9] = [
        Self::NameAlreadyExists,
        Self::EmailAlreadyExists,
        Self::MemberIdsEmptyOrNull,
        Self::InvalidMemberIdIncluded,
        Self::NonExistentMemberIdIncluded,
        Self::MemberNotFoundById,
        Self::MemberNotFoundByName,
        Self::PostNotFoundById,
        Self::CommentNotFoundById,
    ];

    /// Status class bound to this kind.
    pub fn status_class(self) -> StatusClass {
        match self {
            Self::NameAlreadyExists
            | Self::EmailAlreadyExists
            | Self::MemberIdsEmptyOrNull
            | Self::InvalidMemberIdIncluded
            | Self::NonExistentMemberIdIncluded => StatusClass::BadRequest,
            Self::MemberNotFoundById
            | Self::MemberNotFoundByName
            | Self::PostNotFoundById
            | Self::CommentNotFoundById => StatusClass::NotFound,
        }
    }

    /// Message template with exactly one `{}` slot.
    pub fn template(self) -> &'static str {
        match self {
            Self::NameAlreadyExists => "A member with this name already exists: {}",
            Self::EmailAlreadyExists => "This email is already registered: {}",
            Self::MemberIdsEmptyOrNull => "Member id list must not be empty: {}",
            Self::InvalidMemberIdIncluded => "Member id list contains an invalid id: {}",
            Self::NonExistentMemberIdIncluded => {
                "Member id list contains a non-existent id: {}"
            }
            Self::MemberNotFoundById => "No such member id: {}",
            Self::MemberNotFoundByName => "No such member name: {}",
            Self::PostNotFoundById => "No such post id: {}",
            Self::CommentNotFoundById => "No such comment id: {}",
        }
    }

    /// Stable identifier used in the response body's `error` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NameAlreadyExists => "NAME_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::MemberIdsEmptyOrNull => "MEMBER_IDS_EMPTY_OR_NULL",
            Self::InvalidMemberIdIncluded => "INVALID_MEMBER_ID_INCLUDED",
            Self::NonExistentMemberIdIncluded => "NON_EXISTENT_MEMBER_ID_INCLUDED",
            Self::MemberNotFoundById => "MEMBER_NOT_FOUND_BY_ID",
            Self::MemberNotFoundByName => "MEMBER_NOT_FOUND_BY_NAME",
            Self::PostNotFoundById => "POST_NOT_FOUND_BY_ID",
            Self::CommentNotFoundById => "COMMENT_NOT_FOUND_BY_ID",
        }
    }
}

/// Substitution value carried by a domain error.
///
/// The taxonomy has a single slot per template; list variants exist for the
/// batch member-id validations, which report the offending list as a whole.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorArg {
    Id(i64),
    Text(String),
    IdList(Vec<i64>),
    TextList(Vec<String>),
}

impl fmt::Display for ErrorArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Text(s) => write!(f, "{}", s),
            Self::IdList(ids) => {
                let joined: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
                write!(f, "[{}]", joined.join(", "))
            }
            Self::TextList(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// Resolve a taxonomy template against its substitution value.
///
/// Pure function; kept off the error type so the taxonomy stays data-only.
pub fn resolve_message(kind: ErrorKind, arg: &ErrorArg) -> String {
    kind.template().replacen("{}", &arg.to_string(), 1)
}

/// A raised domain-rule violation: a kind plus its substitution value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", resolve_message(*kind, arg))]
pub struct DomainError {
    pub kind: ErrorKind,
    pub arg: ErrorArg,
}

impl DomainError {
    pub fn new(kind: ErrorKind, arg: ErrorArg) -> Self {
        Self { kind, arg }
    }
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The taxonomy kind, when this is a classified domain error.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Domain(e) => Some(e.kind),
            _ => None,
        }
    }
}

/// Error response body: resolved message plus a raw kind/class identifier.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Domain(e) => {
                tracing::warn!(kind = e.kind.as_str(), "domain error: {}", e);
                (
                    e.kind.status_class().status_code(),
                    ErrorResponse {
                        message: resolve_message(e.kind, &e.arg),
                        error: e.kind.as_str().to_string(),
                    },
                )
            }
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    message: msg.clone(),
                    error: "VALIDATION_ERROR".to_string(),
                },
            ),
            AppError::Database(e) => {
                tracing::error!("database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message: e.to_string(),
                        error: "DATABASE_ERROR".to_string(),
                    },
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message: msg.clone(),
                        error: "INTERNAL_ERROR".to_string(),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
