/// Task model and database operations
///
/// A task always belongs to a user (`user_id`). `create` only inserts when
/// the owner exists; afterwards the foreign key only matters for the cascade
/// that removes a user's tasks together with the user.
///
/// Updates are addressed by owner rather than by task ID: `update_by_owner`
/// rewrites every task of a user in one statement.
///
/// # Example
///
/// ```no_run
/// use taskmanager_shared::db::session::Session;
/// use taskmanager_shared::models::task::{Task, CreateTask};
/// use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool, owner: i64) -> Result<(), sqlx::Error> {
/// let mut session = Session::begin(&pool).await?;
///
/// let created = Task::create(session.conn(), CreateTask {
///     title: "Write report".to_string(),
///     content: "Quarterly numbers".to_string(),
///     priority: 1,
///     user_id: owner,
/// }).await?;
///
/// if created.is_some() {
///     session.commit().await?;
/// }
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqliteConnection;
use tracing::debug;

/// Task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID, assigned by the store
    pub id: i64,

    /// Short title
    pub title: String,

    /// Free-form body
    pub content: String,

    /// Ordinal priority, higher is more important
    pub priority: i32,

    /// Owning user
    pub user_id: i64,
}

/// Input for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub content: String,
    pub priority: i32,

    /// Owner; must reference an existing user
    pub user_id: i64,
}

/// Fields written to every task of an owner by `update_by_owner`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTask {
    pub title: String,
    pub content: String,
    pub priority: i32,
}

impl Task {
    /// Lists every task in storage order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, user_id
            FROM tasks
            "#,
        )
        .fetch_all(conn)
        .await?;

        debug!(count = tasks.len(), "Listed tasks");
        Ok(tasks)
    }

    /// Finds a task by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, user_id
            FROM tasks
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(task)
    }

    /// Creates a new task if its owner exists
    ///
    /// The owner check and the insert are a single statement, so the session
    /// takes the write lock up front instead of upgrading a read lock, which
    /// SQLite refuses with `SQLITE_BUSY` when two sessions race.
    ///
    /// # Returns
    ///
    /// The created task, or `None` if `data.user_id` names no user
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create(
        conn: &mut SqliteConnection,
        data: CreateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, content, priority, user_id)
            SELECT ?, ?, ?, id FROM users WHERE id = ?
            RETURNING id, title, content, priority, user_id
            "#,
        )
        .bind(data.title)
        .bind(data.content)
        .bind(data.priority)
        .bind(data.user_id)
        .fetch_optional(conn)
        .await?;

        if task.is_none() {
            debug!(user_id = data.user_id, "Task owner not found");
        }

        Ok(task)
    }

    /// Overwrites title, content and priority of every task owned by `user_id`
    ///
    /// # Returns
    ///
    /// Number of tasks updated; zero when the user owns no tasks
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails
    pub async fn update_by_owner(
        conn: &mut SqliteConnection,
        user_id: i64,
        data: UpdateTask,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = ?, content = ?, priority = ?
            WHERE user_id = ?
            "#,
        )
        .bind(data.title)
        .bind(data.content)
        .bind(data.priority)
        .bind(user_id)
        .execute(conn)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a task by ID
    ///
    /// # Returns
    ///
    /// True if the task was deleted, false if it didn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts tasks
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
            .fetch_one(conn)
            .await?;

        Ok(count)
    }
}
