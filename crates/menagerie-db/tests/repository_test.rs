//! Integration tests for the park-structure repositories (zone,
//! enclosure, animal) using in-memory SurrealDB.

use menagerie_core::error::ParkError;
use menagerie_core::models::animal::Animal;
use menagerie_core::models::enclosure::{Enclosure, EnclosureState};
use menagerie_core::models::zone::Zone;
use menagerie_core::repository::{AnimalRepository, EnclosureRepository, ZoneRepository};
use menagerie_db::repository::{
    SurrealAnimalRepository, SurrealEnclosureRepository, SurrealZoneRepository,
};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    menagerie_db::run_migrations(&db).await.unwrap();
    db
}

fn savanna() -> Zone {
    Zone {
        id: "z-savanna".into(),
        name: "Savanna".into(),
        color: "#FFC107".into(),
    }
}

fn lion_enclosure() -> Enclosure {
    Enclosure {
        id: "e-lions".into(),
        zone_id: "z-savanna".into(),
        biome_id: "biome-grassland".into(),
        meal: "beef, 14:00".into(),
        state: EnclosureState::Open,
        average_rating: 0.0,
    }
}

// -----------------------------------------------------------------------
// Zone tests
// -----------------------------------------------------------------------

#[tokio::test]
async fn upsert_and_get_zone() {
    let db = setup().await;
    let repo = SurrealZoneRepository::new(db);

    let zone = repo.upsert(savanna()).await.unwrap();
    assert_eq!(zone.name, "Savanna");

    let fetched = repo.get("z-savanna").await.unwrap();
    assert_eq!(fetched, savanna());
}

#[tokio::test]
async fn upsert_overwrites_existing_zone() {
    let db = setup().await;
    let repo = SurrealZoneRepository::new(db);

    repo.upsert(savanna()).await.unwrap();
    let updated = repo
        .upsert(Zone {
            color: "#8BC34A".into(),
            ..savanna()
        })
        .await
        .unwrap();

    assert_eq!(updated.color, "#8BC34A");
    assert_eq!(repo.list().await.unwrap().len(), 1, "no duplicate record");
}

#[tokio::test]
async fn get_missing_zone_is_not_found() {
    let db = setup().await;
    let repo = SurrealZoneRepository::new(db);

    let err = repo.get("nope").await.unwrap_err();
    assert!(matches!(err, ParkError::NotFound { .. }));
}

#[tokio::test]
async fn list_zones_ordered_by_name() {
    let db = setup().await;
    let repo = SurrealZoneRepository::new(db);

    repo.upsert(Zone {
        id: "z2".into(),
        name: "Wetlands".into(),
        color: "#2196F3".into(),
    })
    .await
    .unwrap();
    repo.upsert(savanna()).await.unwrap();

    let zones = repo.list().await.unwrap();
    let names: Vec<_> = zones.iter().map(|z| z.name.as_str()).collect();
    assert_eq!(names, vec!["Savanna", "Wetlands"]);
}

// -----------------------------------------------------------------------
// Enclosure tests
// -----------------------------------------------------------------------

#[tokio::test]
async fn upsert_and_get_enclosure() {
    let db = setup().await;
    let repo = SurrealEnclosureRepository::new(db);

    repo.upsert(lion_enclosure()).await.unwrap();

    let fetched = repo.get("z-savanna", "e-lions").await.unwrap();
    assert_eq!(fetched.biome_id, "biome-grassland");
    assert_eq!(fetched.state, EnclosureState::Open);
    assert_eq!(fetched.average_rating, 0.0);
}

#[tokio::test]
async fn enclosure_lookup_is_zone_scoped() {
    let db = setup().await;
    let repo = SurrealEnclosureRepository::new(db);

    repo.upsert(lion_enclosure()).await.unwrap();

    let err = repo.get("z-wrong", "e-lions").await.unwrap_err();
    assert!(matches!(err, ParkError::NotFound { .. }));
}

#[tokio::test]
async fn list_enclosures_by_zone() {
    let db = setup().await;
    let repo = SurrealEnclosureRepository::new(db);

    repo.upsert(lion_enclosure()).await.unwrap();
    repo.upsert(Enclosure {
        id: "e-zebras".into(),
        state: EnclosureState::Closed,
        ..lion_enclosure()
    })
    .await
    .unwrap();
    repo.upsert(Enclosure {
        id: "e-herons".into(),
        zone_id: "z-wetlands".into(),
        ..lion_enclosure()
    })
    .await
    .unwrap();

    let enclosures = repo.list_by_zone("z-savanna").await.unwrap();
    assert_eq!(enclosures.len(), 2);
    assert!(enclosures.iter().all(|e| e.zone_id == "z-savanna"));
}

#[tokio::test]
async fn set_average_rating_persists() {
    let db = setup().await;
    let repo = SurrealEnclosureRepository::new(db);

    repo.upsert(lion_enclosure()).await.unwrap();
    repo.set_average_rating("z-savanna", "e-lions", 4.3)
        .await
        .unwrap();

    let fetched = repo.get("z-savanna", "e-lions").await.unwrap();
    assert_eq!(fetched.average_rating, 4.3);
}

#[tokio::test]
async fn set_average_rating_on_missing_enclosure_fails() {
    let db = setup().await;
    let repo = SurrealEnclosureRepository::new(db);

    let err = repo
        .set_average_rating("z-savanna", "e-ghost", 4.0)
        .await
        .unwrap_err();
    assert!(matches!(err, ParkError::NotFound { .. }));
}

// -----------------------------------------------------------------------
// Animal tests
// -----------------------------------------------------------------------

#[tokio::test]
async fn upsert_and_list_animals() {
    let db = setup().await;
    let repo = SurrealAnimalRepository::new(db);

    repo.upsert(Animal {
        id: "a-zara".into(),
        zone_id: "z-savanna".into(),
        enclosure_id: "e-lions".into(),
        name: "Zara".into(),
        external_id: "ext-101".into(),
    })
    .await
    .unwrap();
    repo.upsert(Animal {
        id: "a-leo".into(),
        zone_id: "z-savanna".into(),
        enclosure_id: "e-lions".into(),
        name: "Leo".into(),
        external_id: "ext-100".into(),
    })
    .await
    .unwrap();

    let animals = repo.list_by_enclosure("z-savanna", "e-lions").await.unwrap();
    let names: Vec<_> = animals.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Leo", "Zara"]);
}

#[tokio::test]
async fn animal_listing_is_enclosure_scoped() {
    let db = setup().await;
    let repo = SurrealAnimalRepository::new(db);

    repo.upsert(Animal {
        id: "a-leo".into(),
        zone_id: "z-savanna".into(),
        enclosure_id: "e-lions".into(),
        name: "Leo".into(),
        external_id: "ext-100".into(),
    })
    .await
    .unwrap();

    let other = repo.list_by_enclosure("z-savanna", "e-zebras").await.unwrap();
    assert!(other.is_empty());
}
