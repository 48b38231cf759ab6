//! # Task Manager Shared Library
//!
//! This crate contains the persistence layer used by the task manager API
//! server: connection pooling, schema bootstrap, the per-request session and
//! the User/Task models.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool, schema bootstrap and request-scoped sessions
//! - `models`: Database models and their CRUD operations

pub mod db;
pub mod models;

/// Current version of the shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
