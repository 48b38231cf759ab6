/// Database layer for the task manager
///
/// This module provides connection pooling, schema bootstrap and the
/// request-scoped session handlers use to talk to the store.
///
/// # Modules
///
/// - `pool`: SQLite connection pool management with health checks
/// - `schema`: Idempotent table creation run at startup
/// - `session`: Per-request transaction handle with guaranteed release
/// - Models are in the `models` module at crate root level
///
/// # Example
///
/// ```no_run
/// use taskmanager_shared::db::pool::{create_pool, DatabaseConfig};
/// use taskmanager_shared::db::schema::ensure_schema;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: std::env::var("DATABASE_URL")?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     ensure_schema(&pool).await?;
///     Ok(())
/// }
/// ```

pub mod pool;
pub mod schema;
pub mod session;
