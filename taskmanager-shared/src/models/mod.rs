/// Database models for the task manager
///
/// This module contains the database models and their CRUD operations.
///
/// # Models
///
/// - `user`: Users, each owning zero or more tasks
/// - `task`: Tasks, each owned by exactly one user

pub mod task;
pub mod user;
