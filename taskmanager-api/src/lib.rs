//! # Task Manager API Server Library
//!
//! HTTP CRUD service over two resources, users and tasks, stored in SQLite.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
