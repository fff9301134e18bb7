//! SurrealDB implementation of [`AnimalRepository`].

use menagerie_core::error::ParkResult;
use menagerie_core::models::animal::Animal;
use menagerie_core::repository::AnimalRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;

use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct AnimalRow {
    zone_id: String,
    enclosure_id: String,
    name: String,
    external_id: String,
}

#[derive(Debug, SurrealValue)]
struct AnimalRowWithId {
    record_id: String,
    zone_id: String,
    enclosure_id: String,
    name: String,
    external_id: String,
}

impl AnimalRow {
    fn into_animal(self, id: String) -> Animal {
        Animal {
            id,
            zone_id: self.zone_id,
            enclosure_id: self.enclosure_id,
            name: self.name,
            external_id: self.external_id,
        }
    }
}

impl AnimalRowWithId {
    fn into_animal(self) -> Animal {
        Animal {
            id: self.record_id,
            zone_id: self.zone_id,
            enclosure_id: self.enclosure_id,
            name: self.name,
            external_id: self.external_id,
        }
    }
}

/// SurrealDB implementation of the Animal repository.
#[derive(Clone)]
pub struct SurrealAnimalRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealAnimalRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> AnimalRepository for SurrealAnimalRepository<C> {
    async fn upsert(&self, animal: Animal) -> ParkResult<Animal> {
        let id = animal.id.clone();

        let result = self
            .db
            .query(
                "UPSERT type::record('animal', $id) SET \
                 zone_id = $zone_id, enclosure_id = $enclosure_id, \
                 name = $name, external_id = $external_id",
            )
            .bind(("id", animal.id))
            .bind(("zone_id", animal.zone_id))
            .bind(("enclosure_id", animal.enclosure_id))
            .bind(("name", animal.name))
            .bind(("external_id", animal.external_id))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Decode(e.to_string()))?;

        let rows: Vec<AnimalRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "animal".into(),
            id: id.clone(),
        })?;

        Ok(row.into_animal(id))
    }

    async fn list_by_enclosure(&self, zone_id: &str, enclosure_id: &str) -> ParkResult<Vec<Animal>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM animal \
                 WHERE zone_id = $zone_id AND enclosure_id = $enclosure_id \
                 ORDER BY name ASC",
            )
            .bind(("zone_id", zone_id.to_string()))
            .bind(("enclosure_id", enclosure_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<AnimalRowWithId> = result.take(0).map_err(DbError::from)?;
        Ok(rows.into_iter().map(AnimalRowWithId::into_animal).collect())
    }
}
