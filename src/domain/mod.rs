//! # Domain Layer
//!
//! Core business types of the board server, independent of any framework or
//! infrastructure concern.
//!
//! - **entities**: Member, Post, Comment plus their projections and
//!   repository traits
//!
//! Repository traits define the data-access contracts; implementations live
//! in the infrastructure layer, following dependency inversion.

pub mod entities;

pub use entities::*;
