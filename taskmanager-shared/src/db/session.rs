/// Request-scoped store session
///
/// A `Session` owns one pooled connection with an open transaction for the
/// lifetime of a single request. Handlers open it on entry, hand
/// `session.conn()` to the model functions, and call `commit` on write paths.
///
/// Release happens through ownership: a session that is dropped without
/// `commit` (early returns, `?` propagation, panics) rolls back and returns
/// its connection to the pool.
///
/// # Example
///
/// ```no_run
/// use taskmanager_shared::db::session::Session;
/// use taskmanager_shared::models::user::User;
/// use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
/// let mut session = Session::begin(&pool).await?;
///
/// if User::delete(session.conn(), 42).await? {
///     session.commit().await?;
/// }
/// # Ok(())
/// # }
/// ```

use sqlx::sqlite::{Sqlite, SqliteConnection, SqlitePool};
use sqlx::Transaction;
use tracing::debug;

/// Per-request transaction handle
pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    /// Acquires a connection from the pool and begins a transaction
    ///
    /// # Errors
    ///
    /// Returns an error if no connection can be acquired within the pool's
    /// acquire timeout or the transaction cannot be started
    pub async fn begin(pool: &SqlitePool) -> Result<Self, sqlx::Error> {
        let tx = pool.begin().await?;
        debug!("Store session opened");
        Ok(Self { tx })
    }

    /// Connection to issue statements on
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }

    /// Commits every statement issued in this session and releases the connection
    ///
    /// # Errors
    ///
    /// Returns an error if the commit fails; the transaction is rolled back
    pub async fn commit(self) -> Result<(), sqlx::Error> {
        self.tx.commit().await?;
        debug!("Store session committed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{
        pool::{create_pool, DatabaseConfig},
        schema::ensure_schema,
    };

    async fn count_users(pool: &SqlitePool) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
            .unwrap();
        count
    }

    async fn insert_user(session: &mut Session) {
        sqlx::query(
            "INSERT INTO users (username, firstname, lastname, age) VALUES ('a', 'A', 'B', 30)",
        )
        .execute(session.conn())
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_commit_persists_writes() {
        let pool = create_pool(DatabaseConfig::in_memory()).await.unwrap();
        ensure_schema(&pool).await.unwrap();

        let mut session = Session::begin(&pool).await.unwrap();
        insert_user(&mut session).await;
        session.commit().await.unwrap();

        assert_eq!(count_users(&pool).await, 1);
    }

    #[tokio::test]
    async fn test_drop_rolls_back_and_releases_connection() {
        let pool = create_pool(DatabaseConfig::in_memory()).await.unwrap();
        ensure_schema(&pool).await.unwrap();

        {
            let mut session = Session::begin(&pool).await.unwrap();
            insert_user(&mut session).await;
        }

        // The pool holds a single connection, so this only succeeds if the
        // dropped session gave it back.
        assert_eq!(count_users(&pool).await, 0);
    }
}
