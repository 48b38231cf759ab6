/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - A fresh in-memory database per test, with the schema in place
/// - A file-backed variant with a multi-connection pool for concurrency tests
/// - The application router wired to that database
/// - Request helpers returning status and parsed JSON body
/// - Direct fixture creation through the model layer

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;
use taskmanager_api::app::{build_router, AppState};
use taskmanager_api::config::{ApiConfig, Config};
use taskmanager_shared::db::pool::{create_pool, DatabaseConfig};
use taskmanager_shared::db::schema::ensure_schema;
use taskmanager_shared::db::session::Session;
use taskmanager_shared::models::task::{CreateTask, Task};
use taskmanager_shared::models::user::{CreateUser, User};
use tempfile::TempDir;
use tower::Service as _;

/// Test context containing all necessary resources
///
/// Cheap to clone; clones share the database and router.
#[derive(Clone)]
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,

    /// Keeps the database file of a file-backed context alive
    _dir: Option<Arc<TempDir>>,
}

impl TestContext {
    /// Creates a new test context backed by a private in-memory database
    pub async fn new() -> anyhow::Result<Self> {
        Self::with_database(DatabaseConfig::in_memory(), None).await
    }

    /// Creates a test context backed by a database file in a temporary directory
    ///
    /// Uses the default pool settings, so requests run on separate
    /// connections the way they do in the server.
    pub async fn file_backed() -> anyhow::Result<Self> {
        let dir = TempDir::new()?;
        let database = DatabaseConfig {
            url: format!("sqlite:{}", dir.path().join("taskmanager.db").display()),
            ..Default::default()
        };

        Self::with_database(database, Some(Arc::new(dir))).await
    }

    async fn with_database(
        database: DatabaseConfig,
        dir: Option<Arc<TempDir>>,
    ) -> anyhow::Result<Self> {
        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database,
        };

        let db = create_pool(config.database.clone()).await?;
        ensure_schema(&db).await?;

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app, _dir: dir })
    }

    /// Sends a request and returns the status with the body parsed as JSON
    ///
    /// Non-JSON bodies (framework rejections) come back as a JSON string.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let request = builder.body(body).unwrap();
        let response = self.app.clone().call(request).await.unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Number of rows currently in the tasks table
    pub async fn task_count(&self) -> i64 {
        let mut session = Session::begin(&self.db).await.unwrap();
        Task::count(session.conn()).await.unwrap()
    }
}

/// Helper to insert a user directly through the model layer
pub async fn create_test_user(
    ctx: &TestContext,
    username: &str,
    age: i32,
) -> anyhow::Result<User> {
    let mut session = Session::begin(&ctx.db).await?;
    let user = User::create(
        session.conn(),
        CreateUser {
            username: username.to_string(),
            firstname: format!("{}-first", username),
            lastname: format!("{}-last", username),
            age,
        },
    )
    .await?;
    session.commit().await?;
    Ok(user)
}

/// Helper to insert a task directly through the model layer
pub async fn create_test_task(
    ctx: &TestContext,
    title: &str,
    user_id: i64,
) -> anyhow::Result<Task> {
    let mut session = Session::begin(&ctx.db).await?;
    let task = Task::create(
        session.conn(),
        CreateTask {
            title: title.to_string(),
            content: format!("{} content", title),
            priority: 1,
            user_id,
        },
    )
    .await?
    .ok_or_else(|| anyhow::anyhow!("user {} does not exist", user_id))?;
    session.commit().await?;
    Ok(task)
}
