//! Integration tests for the rating repository using in-memory
//! SurrealDB.

use menagerie_core::models::rating::CreateRating;
use menagerie_core::repository::RatingRepository;
use menagerie_db::repository::SurrealRatingRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;

async fn setup() -> SurrealRatingRepository<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    menagerie_db::run_migrations(&db).await.unwrap();
    SurrealRatingRepository::new(db)
}

fn rating_for(user_id: Uuid, value: f64) -> CreateRating {
    CreateRating {
        user_id,
        zone_id: "z-savanna".into(),
        enclosure_id: "e-lions".into(),
        value,
    }
}

#[tokio::test]
async fn create_and_find_rating() {
    let repo = setup().await;
    let user = Uuid::new_v4();

    let created = repo.create(rating_for(user, 4.0)).await.unwrap();
    assert_eq!(created.user_id, user);
    assert_eq!(created.value, 4.0);

    let found = repo
        .find_by_user(user, "z-savanna", "e-lions")
        .await
        .unwrap()
        .expect("rating should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.value, 4.0);
}

#[tokio::test]
async fn find_returns_none_when_absent() {
    let repo = setup().await;

    let found = repo
        .find_by_user(Uuid::new_v4(), "z-savanna", "e-lions")
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn find_is_scoped_to_the_triple() {
    let repo = setup().await;
    let user = Uuid::new_v4();

    repo.create(rating_for(user, 4.0)).await.unwrap();

    // Same user, different enclosure.
    assert!(
        repo.find_by_user(user, "z-savanna", "e-zebras")
            .await
            .unwrap()
            .is_none()
    );
    // Same enclosure, different user.
    assert!(
        repo.find_by_user(Uuid::new_v4(), "z-savanna", "e-lions")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn update_value_overwrites_and_bumps_timestamp() {
    let repo = setup().await;
    let user = Uuid::new_v4();

    let created = repo.create(rating_for(user, 2.0)).await.unwrap();
    let updated = repo.update_value(created.id, 5.0).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.value, 5.0);
    assert!(updated.timestamp >= created.timestamp);

    // Still exactly one record for the triple.
    let all = repo.list_by_enclosure("z-savanna", "e-lions").await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].value, 5.0);
}

#[tokio::test]
async fn list_by_enclosure_spans_users() {
    let repo = setup().await;

    repo.create(rating_for(Uuid::new_v4(), 2.0)).await.unwrap();
    repo.create(rating_for(Uuid::new_v4(), 4.0)).await.unwrap();
    repo.create(CreateRating {
        user_id: Uuid::new_v4(),
        zone_id: "z-savanna".into(),
        enclosure_id: "e-zebras".into(),
        value: 3.0,
    })
    .await
    .unwrap();

    let lions = repo.list_by_enclosure("z-savanna", "e-lions").await.unwrap();
    assert_eq!(lions.len(), 2);

    let mut values: Vec<_> = lions.iter().map(|r| r.value).collect();
    values.sort_by(f64::total_cmp);
    assert_eq!(values, vec![2.0, 4.0]);
}
