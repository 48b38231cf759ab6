/// Task endpoints
///
/// # Endpoints
///
/// - `GET /task/` - List tasks
/// - `GET /task/task_id?user_id=N` - Get one task (`user_id` carries the task ID)
/// - `POST /task/create?user_id=N` - Create a task owned by user N
/// - `PUT /task/update?user_id=N` - Rewrite every task owned by user N
/// - `DELETE /task/delete?id=N` - Delete task N

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::{ack::Ack, users::UserIdQuery},
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use taskmanager_shared::{
    db::session::Session,
    models::task::{CreateTask, Task, UpdateTask},
};

/// `?id=N` query parameter
#[derive(Debug, Deserialize)]
pub struct TaskIdQuery {
    pub id: i64,
}

/// Create task request
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub content: String,
    pub priority: i32,
}

/// Update task request
///
/// Older clients send the user-update field names; they are accepted as
/// aliases (`firstname` → `title`, `lastname` → `content`, `age` → `priority`).
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(alias = "firstname")]
    pub title: String,

    #[serde(alias = "lastname")]
    pub content: String,

    #[serde(alias = "age")]
    pub priority: i32,
}

impl From<UpdateTaskRequest> for UpdateTask {
    fn from(req: UpdateTaskRequest) -> Self {
        UpdateTask {
            title: req.title,
            content: req.content,
            priority: req.priority,
        }
    }
}

/// List all tasks
///
/// # Response
///
/// ```json
/// [
///   { "id": 1, "title": "t", "content": "c", "priority": 1, "user_id": 1 }
/// ]
/// ```
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let mut session = Session::begin(&state.db).await?;
    let tasks = Task::list(session.conn()).await?;
    Ok(Json(tasks))
}

/// Get a task by ID
///
/// The task ID travels in the `user_id` query parameter.
///
/// # Errors
///
/// - `404 Not Found`: "Task was not found"
pub async fn get_task(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Json<Task>> {
    let mut session = Session::begin(&state.db).await?;

    let task = Task::find_by_id(session.conn(), query.user_id)
        .await?
        .ok_or_else(ApiError::task_not_found)?;

    Ok(Json(task))
}

/// Create a task for an existing user
///
/// # Endpoint
///
/// ```text
/// POST /task/create?user_id=1
/// Content-Type: application/json
///
/// { "title": "t", "content": "c", "priority": 1 }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: "User was not found"; nothing is inserted
pub async fn create_task(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<Ack> {
    let mut session = Session::begin(&state.db).await?;

    let task = Task::create(
        session.conn(),
        CreateTask {
            title: req.title,
            content: req.content,
            priority: req.priority,
            user_id: query.user_id,
        },
    )
    .await?
    .ok_or_else(ApiError::user_not_found)?;
    session.commit().await?;

    tracing::info!(task_id = task.id, user_id = task.user_id, "Task created");
    Ok(Ack::created())
}

/// Rewrite every task owned by a user
///
/// Tasks are selected by owner, not by task ID, and all of them receive the
/// same title, content and priority.
///
/// # Endpoint
///
/// ```text
/// PUT /task/update?user_id=1
/// Content-Type: application/json
///
/// { "title": "t", "content": "c", "priority": 2 }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: "User was not found" when the user owns no tasks
pub async fn update_task(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Ack> {
    let mut session = Session::begin(&state.db).await?;

    let updated = Task::update_by_owner(session.conn(), query.user_id, req.into()).await?;
    if updated == 0 {
        return Err(ApiError::user_not_found());
    }
    session.commit().await?;

    tracing::info!(user_id = query.user_id, updated, "Tasks updated");
    Ok(Ack::ok("Task update is successful"))
}

/// Delete a task
///
/// # Errors
///
/// - `404 Not Found`: "Task was not found"
pub async fn delete_task(
    State(state): State<AppState>,
    Query(query): Query<TaskIdQuery>,
) -> ApiResult<Ack> {
    let mut session = Session::begin(&state.db).await?;

    if !Task::delete(session.conn(), query.id).await? {
        return Err(ApiError::task_not_found());
    }
    session.commit().await?;

    tracing::info!(task_id = query.id, "Task deleted");
    Ok(Ack::ok("Task delete is successful"))
}
