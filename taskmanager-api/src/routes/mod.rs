/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: User CRUD endpoints
/// - `tasks`: Task CRUD endpoints
/// - `ack`: Acknowledgement body shared by the write endpoints

pub mod ack;
pub mod health;
pub mod tasks;
pub mod users;
