/// Schema bootstrap
///
/// Creates the `users` and `tasks` tables when they are missing. Every
/// statement is idempotent, so this runs unconditionally at startup and at
/// the beginning of every test.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     username TEXT NOT NULL,
///     firstname TEXT NOT NULL,
///     lastname TEXT NOT NULL,
///     age INTEGER NOT NULL
/// );
///
/// CREATE TABLE tasks (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     title TEXT NOT NULL,
///     content TEXT NOT NULL,
///     priority INTEGER NOT NULL DEFAULT 0,
///     user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
/// );
/// ```
///
/// Deleting a user removes the tasks it owns. The cascade only fires when
/// the connection has `foreign_keys` enabled, which `create_pool` does.

use sqlx::sqlite::SqlitePool;
use tracing::{debug, info};

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL,
        firstname TEXT NOT NULL,
        lastname TEXT NOT NULL,
        age INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        priority INTEGER NOT NULL DEFAULT 0,
        user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_tasks_user_id ON tasks(user_id)",
];

/// Creates any missing tables and indexes
///
/// # Errors
///
/// Returns an error if a statement fails to execute
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Ensuring database schema");

    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }

    debug!(statements = STATEMENTS.len(), "Database schema is in place");
    Ok(())
}
