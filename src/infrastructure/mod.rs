//! Infrastructure Layer
//!
//! Implementations for external services:
//! - Database connection pool and migrations (PostgreSQL)
//! - Repository implementations

pub mod database;
pub mod repositories;
