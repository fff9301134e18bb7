//! Integration tests for the user and session repositories using
//! in-memory SurrealDB.

use chrono::{Duration, Utc};
use menagerie_core::error::ParkError;
use menagerie_core::models::session::CreateSession;
use menagerie_core::models::user::{CreateUser, UserRole};
use menagerie_core::repository::{SessionRepository, UserRepository};
use menagerie_db::repository::{SurrealSessionRepository, SurrealUserRepository};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;

async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    menagerie_db::run_migrations(&db).await.unwrap();
    db
}

fn alice() -> CreateUser {
    CreateUser {
        email: "alice@example.com".into(),
        password: "correct-horse-battery".into(),
        last_name: "Martin".into(),
        first_name: "Alice".into(),
        age: 29,
    }
}

// -----------------------------------------------------------------------
// User tests
// -----------------------------------------------------------------------

#[tokio::test]
async fn create_and_get_user() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let user = repo.create(alice()).await.unwrap();
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, UserRole::Visitor);
    // Raw password must never be stored.
    assert_ne!(user.password_hash, "correct-horse-battery");
    assert!(user.password_hash.starts_with("$argon2id$"));

    let fetched = repo.get_by_id(user.id).await.unwrap();
    assert_eq!(fetched.first_name, "Alice");
    assert_eq!(fetched.age, 29);
}

#[tokio::test]
async fn get_user_by_email() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let user = repo.create(alice()).await.unwrap();
    let fetched = repo.get_by_email("alice@example.com").await.unwrap();
    assert_eq!(fetched.id, user.id);
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    repo.create(alice()).await.unwrap();
    let err = repo.create(alice()).await.unwrap_err();
    assert!(matches!(err, ParkError::AlreadyExists { .. }));
}

#[tokio::test]
async fn missing_user_is_not_found() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let err = repo.get_by_id(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, ParkError::NotFound { .. }));

    let err = repo.get_by_email("nobody@example.com").await.unwrap_err();
    assert!(matches!(err, ParkError::NotFound { .. }));
}

// -----------------------------------------------------------------------
// Session tests
// -----------------------------------------------------------------------

#[tokio::test]
async fn create_and_resolve_session() {
    let db = setup().await;
    let repo = SurrealSessionRepository::new(db);
    let user_id = Uuid::new_v4();

    let session = repo
        .create(CreateSession {
            user_id,
            token_hash: "abc123".into(),
            expires_at: Utc::now() + Duration::days(7),
        })
        .await
        .unwrap();
    assert_eq!(session.user_id, user_id);

    let resolved = repo.get_by_token_hash("abc123").await.unwrap();
    assert_eq!(resolved.id, session.id);
}

#[tokio::test]
async fn invalidated_session_cannot_be_resolved() {
    let db = setup().await;
    let repo = SurrealSessionRepository::new(db);

    let session = repo
        .create(CreateSession {
            user_id: Uuid::new_v4(),
            token_hash: "to-delete".into(),
            expires_at: Utc::now() + Duration::days(7),
        })
        .await
        .unwrap();

    repo.invalidate(session.id).await.unwrap();

    let err = repo.get_by_token_hash("to-delete").await.unwrap_err();
    assert!(matches!(err, ParkError::NotFound { .. }));
}
