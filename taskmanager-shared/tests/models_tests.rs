/// Integration tests for the User and Task models
///
/// Each test runs against its own in-memory SQLite database, so tests are
/// independent and need no external service.

use taskmanager_shared::db::pool::{create_pool, DatabaseConfig};
use taskmanager_shared::db::schema::ensure_schema;
use taskmanager_shared::db::session::Session;
use taskmanager_shared::models::task::{CreateTask, Task, UpdateTask};
use taskmanager_shared::models::user::{CreateUser, UpdateUser, User};
use sqlx::SqlitePool;

async fn test_pool() -> SqlitePool {
    let pool = create_pool(DatabaseConfig::in_memory())
        .await
        .expect("Failed to create pool");
    ensure_schema(&pool).await.expect("Failed to create schema");
    pool
}

fn new_user(username: &str, age: i32) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        firstname: format!("{}-first", username),
        lastname: format!("{}-last", username),
        age,
    }
}

fn new_task(title: &str, user_id: i64) -> CreateTask {
    CreateTask {
        title: title.to_string(),
        content: format!("{} content", title),
        priority: 1,
        user_id,
    }
}

#[tokio::test]
async fn test_user_create_then_find_and_list() {
    let pool = test_pool().await;
    let mut session = Session::begin(&pool).await.unwrap();

    let created = User::create(
        session.conn(),
        CreateUser {
            username: "a".to_string(),
            firstname: "A".to_string(),
            lastname: "B".to_string(),
            age: 30,
        },
    )
    .await
    .unwrap();

    let found = User::find_by_id(session.conn(), created.id)
        .await
        .unwrap()
        .expect("User should exist");
    assert_eq!(found, created);
    assert_eq!(found.username, "a");
    assert_eq!(found.firstname, "A");
    assert_eq!(found.lastname, "B");
    assert_eq!(found.age, 30);

    let all = User::list(session.conn()).await.unwrap();
    assert_eq!(all, vec![created]);
}

#[tokio::test]
async fn test_user_ids_are_assigned_by_store() {
    let pool = test_pool().await;
    let mut session = Session::begin(&pool).await.unwrap();

    let first = User::create(session.conn(), new_user("a", 1)).await.unwrap();
    let second = User::create(session.conn(), new_user("a", 2)).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(User::count(session.conn()).await.unwrap(), 2);
}

#[tokio::test]
async fn test_user_update_touches_only_target_row() {
    let pool = test_pool().await;
    let mut session = Session::begin(&pool).await.unwrap();

    let target = User::create(session.conn(), new_user("target", 20)).await.unwrap();
    let other = User::create(session.conn(), new_user("other", 40)).await.unwrap();

    let updated = User::update(
        session.conn(),
        target.id,
        UpdateUser {
            firstname: "New".to_string(),
            lastname: "Name".to_string(),
            age: 21,
        },
    )
    .await
    .unwrap()
    .expect("User should exist");

    assert_eq!(updated.id, target.id);
    assert_eq!(updated.username, "target");
    assert_eq!(updated.firstname, "New");
    assert_eq!(updated.lastname, "Name");
    assert_eq!(updated.age, 21);

    let untouched = User::find_by_id(session.conn(), other.id).await.unwrap().unwrap();
    assert_eq!(untouched, other);
}

#[tokio::test]
async fn test_user_update_missing_returns_none() {
    let pool = test_pool().await;
    let mut session = Session::begin(&pool).await.unwrap();

    let result = User::update(
        session.conn(),
        999,
        UpdateUser {
            firstname: "X".to_string(),
            lastname: "Y".to_string(),
            age: 1,
        },
    )
    .await
    .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_user_delete() {
    let pool = test_pool().await;
    let mut session = Session::begin(&pool).await.unwrap();

    let user = User::create(session.conn(), new_user("gone", 50)).await.unwrap();

    assert!(User::delete(session.conn(), user.id).await.unwrap());
    assert!(User::find_by_id(session.conn(), user.id).await.unwrap().is_none());
    assert!(!User::delete(session.conn(), user.id).await.unwrap());
}

#[tokio::test]
async fn test_user_delete_cascades_to_tasks() {
    let pool = test_pool().await;
    let mut session = Session::begin(&pool).await.unwrap();

    let owner = User::create(session.conn(), new_user("owner", 30)).await.unwrap();
    let bystander = User::create(session.conn(), new_user("bystander", 30)).await.unwrap();
    Task::create(session.conn(), new_task("one", owner.id)).await.unwrap().unwrap();
    Task::create(session.conn(), new_task("two", owner.id)).await.unwrap().unwrap();
    let kept = Task::create(session.conn(), new_task("kept", bystander.id)).await.unwrap().unwrap();

    assert!(User::delete(session.conn(), owner.id).await.unwrap());

    let remaining = Task::list(session.conn()).await.unwrap();
    assert_eq!(remaining, vec![kept]);
}

#[tokio::test]
async fn test_task_create_and_list() {
    let pool = test_pool().await;
    let mut session = Session::begin(&pool).await.unwrap();

    let user = User::create(session.conn(), new_user("a", 30)).await.unwrap();
    let task = Task::create(
        session.conn(),
        CreateTask {
            title: "t".to_string(),
            content: "c".to_string(),
            priority: 1,
            user_id: user.id,
        },
    )
    .await
    .unwrap()
    .expect("Owner should exist");

    let tasks = Task::list(session.conn()).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0], task);
    assert_eq!(tasks[0].title, "t");
    assert_eq!(tasks[0].content, "c");
    assert_eq!(tasks[0].priority, 1);
    assert_eq!(tasks[0].user_id, user.id);
}

#[tokio::test]
async fn test_task_create_with_unknown_owner_inserts_nothing() {
    let pool = test_pool().await;
    let mut session = Session::begin(&pool).await.unwrap();

    let result = Task::create(session.conn(), new_task("orphan", 12345)).await.unwrap();

    assert!(result.is_none(), "Insert without owner should be skipped");
    assert_eq!(Task::count(session.conn()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_task_update_by_owner_updates_every_owned_task() {
    let pool = test_pool().await;
    let mut session = Session::begin(&pool).await.unwrap();

    let owner = User::create(session.conn(), new_user("owner", 30)).await.unwrap();
    let other = User::create(session.conn(), new_user("other", 30)).await.unwrap();
    Task::create(session.conn(), new_task("one", owner.id)).await.unwrap().unwrap();
    Task::create(session.conn(), new_task("two", owner.id)).await.unwrap().unwrap();
    let foreign = Task::create(session.conn(), new_task("foreign", other.id))
        .await
        .unwrap()
        .unwrap();

    let updated = Task::update_by_owner(
        session.conn(),
        owner.id,
        UpdateTask {
            title: "same".to_string(),
            content: "body".to_string(),
            priority: 9,
        },
    )
    .await
    .unwrap();
    assert_eq!(updated, 2);

    let owned: Vec<Task> = Task::list(session.conn())
        .await
        .unwrap()
        .into_iter()
        .filter(|task| task.user_id == owner.id)
        .collect();
    assert_eq!(owned.len(), 2);
    for task in &owned {
        assert_eq!(task.title, "same");
        assert_eq!(task.content, "body");
        assert_eq!(task.priority, 9);
    }

    let untouched = Task::find_by_id(session.conn(), foreign.id).await.unwrap().unwrap();
    assert_eq!(untouched, foreign);
}

#[tokio::test]
async fn test_task_update_by_owner_without_tasks_updates_nothing() {
    let pool = test_pool().await;
    let mut session = Session::begin(&pool).await.unwrap();

    let user = User::create(session.conn(), new_user("idle", 30)).await.unwrap();

    let updated = Task::update_by_owner(
        session.conn(),
        user.id,
        UpdateTask {
            title: "t".to_string(),
            content: "c".to_string(),
            priority: 0,
        },
    )
    .await
    .unwrap();

    assert_eq!(updated, 0);
}

#[tokio::test]
async fn test_task_delete() {
    let pool = test_pool().await;
    let mut session = Session::begin(&pool).await.unwrap();

    let user = User::create(session.conn(), new_user("a", 30)).await.unwrap();
    let doomed = Task::create(session.conn(), new_task("doomed", user.id)).await.unwrap().unwrap();
    let kept = Task::create(session.conn(), new_task("kept", user.id)).await.unwrap().unwrap();

    assert!(!Task::delete(session.conn(), 999_999).await.unwrap());
    assert_eq!(Task::count(session.conn()).await.unwrap(), 2);

    assert!(Task::delete(session.conn(), doomed.id).await.unwrap());
    assert!(Task::find_by_id(session.conn(), doomed.id).await.unwrap().is_none());
    assert_eq!(Task::list(session.conn()).await.unwrap(), vec![kept]);
}

#[tokio::test]
async fn test_committed_writes_are_visible_to_next_session() {
    let pool = test_pool().await;

    let mut session = Session::begin(&pool).await.unwrap();
    let user = User::create(session.conn(), new_user("durable", 30)).await.unwrap();
    session.commit().await.unwrap();

    let mut session = Session::begin(&pool).await.unwrap();
    let found = User::find_by_id(session.conn(), user.id).await.unwrap();
    assert_eq!(found, Some(user));
}

#[tokio::test]
async fn test_uncommitted_writes_are_discarded() {
    let pool = test_pool().await;

    {
        let mut session = Session::begin(&pool).await.unwrap();
        User::create(session.conn(), new_user("ghost", 30)).await.unwrap();
    }

    let mut session = Session::begin(&pool).await.unwrap();
    assert_eq!(User::count(session.conn()).await.unwrap(), 0);
}
