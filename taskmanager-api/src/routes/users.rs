/// User endpoints
///
/// # Endpoints
///
/// - `GET /user/` - List users
/// - `GET /user/user_id?user_id=N` - Get one user
/// - `POST /user/create` - Create user
/// - `PUT /user/update?user_id=N` - Update first/last name and age
/// - `DELETE /user/delete?user_id=N` - Delete user and its tasks
///
/// Every handler opens its own `Session`, so the connection is returned to
/// the pool when the handler returns, whichever path it takes.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::ack::Ack,
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use taskmanager_shared::{
    db::session::Session,
    models::user::{CreateUser, UpdateUser, User},
};

/// `?user_id=N` query parameter
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: i64,
}

/// List all users
///
/// # Endpoint
///
/// ```text
/// GET /user/
/// ```
///
/// # Response
///
/// ```json
/// [
///   { "id": 1, "username": "jdoe", "firstname": "John", "lastname": "Doe", "age": 30 }
/// ]
/// ```
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let mut session = Session::begin(&state.db).await?;
    let users = User::list(session.conn()).await?;
    Ok(Json(users))
}

/// Get a user by ID
///
/// # Errors
///
/// - `404 Not Found`: "User was not found"
pub async fn get_user(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Json<User>> {
    let mut session = Session::begin(&state.db).await?;

    let user = User::find_by_id(session.conn(), query.user_id)
        .await?
        .ok_or_else(ApiError::user_not_found)?;

    Ok(Json(user))
}

/// Create a user
///
/// # Endpoint
///
/// ```text
/// POST /user/create
/// Content-Type: application/json
///
/// { "username": "jdoe", "firstname": "John", "lastname": "Doe", "age": 30 }
/// ```
///
/// # Response
///
/// `201 Created` with `{ "status_code": 201, "transaction": "Successful" }`
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUser>,
) -> ApiResult<Ack> {
    let mut session = Session::begin(&state.db).await?;
    let user = User::create(session.conn(), req).await?;
    session.commit().await?;

    tracing::info!(user_id = user.id, username = %user.username, "User created");
    Ok(Ack::created())
}

/// Update a user's first name, last name and age
///
/// # Endpoint
///
/// ```text
/// PUT /user/update?user_id=1
/// Content-Type: application/json
///
/// { "firstname": "Jane", "lastname": "Doe", "age": 31 }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: "User was not found"
pub async fn update_user(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
    Json(req): Json<UpdateUser>,
) -> ApiResult<Ack> {
    let mut session = Session::begin(&state.db).await?;

    User::update(session.conn(), query.user_id, req)
        .await?
        .ok_or_else(ApiError::user_not_found)?;
    session.commit().await?;

    tracing::info!(user_id = query.user_id, "User updated");
    Ok(Ack::ok("User update is successful"))
}

/// Delete a user
///
/// Tasks owned by the user are deleted with it.
///
/// # Errors
///
/// - `404 Not Found`: "User was not found"
pub async fn delete_user(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Ack> {
    let mut session = Session::begin(&state.db).await?;

    if !User::delete(session.conn(), query.user_id).await? {
        return Err(ApiError::user_not_found());
    }
    session.commit().await?;

    tracing::info!(user_id = query.user_id, "User deleted");
    Ok(Ack::ok("User delete is successful"))
}
