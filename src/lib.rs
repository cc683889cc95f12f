//! # Board Server Library
//!
//! This crate provides a discussion-board backend with:
//! - RESTful HTTP API endpoints for members, posts, and comments
//! - Read-optimized query projections instead of full entity exposure
//! - Soft deletion for posts and comments
//! - A centralized domain error taxonomy with uniform failure responses
//! - PostgreSQL for persistent storage
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core business entities and repository traits
//! - **Application Layer**: Business logic services and DTOs
//! - **Infrastructure Layer**: Database and repository implementations
//! - **Presentation Layer**: HTTP handlers and routing
//!
//! ## Module Structure
//!
//! ```text
//! board_server/
//! +-- config/         Configuration management
//! +-- domain/         Domain entities, projections, and traits
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Database and repository implementations
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, password hashing)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
