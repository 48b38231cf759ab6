/// User model and database operations
///
/// This module provides the User model and CRUD operations for managing
/// users. A user owns zero or more tasks; deleting a user deletes its tasks.
///
/// All operations take a `&mut SqliteConnection` so they run inside the
/// caller's `Session` and are committed (or rolled back) with it.
///
/// # Example
///
/// ```no_run
/// use taskmanager_shared::db::session::Session;
/// use taskmanager_shared::models::user::{User, CreateUser};
/// use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
/// let mut session = Session::begin(&pool).await?;
///
/// let user = User::create(session.conn(), CreateUser {
///     username: "jdoe".to_string(),
///     firstname: "John".to_string(),
///     lastname: "Doe".to_string(),
///     age: 30,
/// }).await?;
///
/// session.commit().await?;
/// println!("Created user: {}", user.id);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqliteConnection;
use tracing::debug;

/// User record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned by the store
    pub id: i64,

    /// Login name (not unique)
    pub username: String,

    /// First name
    pub firstname: String,

    /// Last name
    pub lastname: String,

    /// Age in years
    pub age: i32,
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
}

/// Input for updating an existing user
///
/// All three fields are overwritten; the username cannot be changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
}

impl User {
    /// Lists every user in storage order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, firstname, lastname, age
            FROM users
            "#,
        )
        .fetch_all(conn)
        .await?;

        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    /// Finds a user by ID
    ///
    /// # Returns
    ///
    /// The user if found, None otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, firstname, lastname, age
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(user)
    }

    /// Creates a new user
    ///
    /// No uniqueness check is made on `username`.
    ///
    /// # Returns
    ///
    /// The newly created user with its generated ID
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create(
        conn: &mut SqliteConnection,
        data: CreateUser,
    ) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, firstname, lastname, age)
            VALUES (?, ?, ?, ?)
            RETURNING id, username, firstname, lastname, age
            "#,
        )
        .bind(data.username)
        .bind(data.firstname)
        .bind(data.lastname)
        .bind(data.age)
        .fetch_one(conn)
        .await?;

        Ok(user)
    }

    /// Overwrites first name, last name and age of a user
    ///
    /// # Returns
    ///
    /// The updated user if found, None if the user doesn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails
    pub async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        data: UpdateUser,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET firstname = ?, lastname = ?, age = ?
            WHERE id = ?
            RETURNING id, username, firstname, lastname, age
            "#,
        )
        .bind(data.firstname)
        .bind(data.lastname)
        .bind(data.age)
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(user)
    }

    /// Deletes a user by ID
    ///
    /// Tasks owned by the user are deleted with it.
    ///
    /// # Returns
    ///
    /// True if the user was deleted, false if it didn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts users
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(conn)
            .await?;

        Ok(count)
    }
}
