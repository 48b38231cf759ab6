/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskmanager_api::{app::AppState, config::Config};
/// use taskmanager_shared::db::pool::create_pool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(config.database.clone()).await?;
/// let state = AppState::new(pool, config);
/// let app = taskmanager_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared application state
///
/// Cloned into every handler via Axum's `State` extractor. The pool is the
/// only state shared between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Routes
///
/// ```text
/// /
/// ├── GET    /health
/// ├── /user/
/// │   ├── GET    /user/
/// │   ├── GET    /user/user_id?user_id=N
/// │   ├── POST   /user/create
/// │   ├── PUT    /user/update?user_id=N
/// │   └── DELETE /user/delete?user_id=N
/// └── /task/
///     ├── GET    /task/
///     ├── GET    /task/task_id?user_id=N
///     ├── POST   /task/create?user_id=N
///     ├── PUT    /task/update?user_id=N
///     └── DELETE /task/delete?id=N
/// ```
///
/// Every request passes through a tower-http `TraceLayer` that logs the
/// request span and the response status at INFO level.
pub fn build_router(state: AppState) -> Router {
    use crate::routes::{health, tasks, users};

    let user_routes = Router::new()
        .route("/user/", get(users::list_users))
        .route("/user/user_id", get(users::get_user))
        .route("/user/create", post(users::create_user))
        .route("/user/update", put(users::update_user))
        .route("/user/delete", delete(users::delete_user));

    let task_routes = Router::new()
        .route("/task/", get(tasks::list_tasks))
        .route("/task/task_id", get(tasks::get_task))
        .route("/task/create", post(tasks::create_task))
        .route("/task/update", put(tasks::update_task))
        .route("/task/delete", delete(tasks::delete_task));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(user_routes)
        .merge(task_routes)
        .layer(
            ServiceBuilder::new().layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            ),
        )
        .with_state(state)
}
