//! SurrealDB implementation of [`EnclosureRepository`].
//!
//! Enclosure records are keyed by their own id and scoped to their
//! owning zone with a `WHERE zone_id` clause, mirroring the original
//! nested collection layout.

use menagerie_core::error::ParkResult;
use menagerie_core::models::enclosure::{Enclosure, EnclosureState};
use menagerie_core::repository::EnclosureRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;

use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct EnclosureRow {
    zone_id: String,
    biome_id: String,
    meal: String,
    state: String,
    average_rating: f64,
}

#[derive(Debug, SurrealValue)]
struct EnclosureRowWithId {
    record_id: String,
    zone_id: String,
    biome_id: String,
    meal: String,
    state: String,
    average_rating: f64,
}

fn parse_state(s: &str) -> Result<EnclosureState, DbError> {
    match s {
        "Open" => Ok(EnclosureState::Open),
        "Closed" => Ok(EnclosureState::Closed),
        other => Err(DbError::Decode(format!("unknown enclosure state: {other}"))),
    }
}

fn state_to_string(s: EnclosureState) -> &'static str {
    match s {
        EnclosureState::Open => "Open",
        EnclosureState::Closed => "Closed",
    }
}

impl EnclosureRow {
    fn into_enclosure(self, id: String) -> Result<Enclosure, DbError> {
        Ok(Enclosure {
            id,
            zone_id: self.zone_id,
            biome_id: self.biome_id,
            meal: self.meal,
            state: parse_state(&self.state)?,
            average_rating: self.average_rating,
        })
    }
}

impl EnclosureRowWithId {
    fn try_into_enclosure(self) -> Result<Enclosure, DbError> {
        Ok(Enclosure {
            id: self.record_id,
            zone_id: self.zone_id,
            biome_id: self.biome_id,
            meal: self.meal,
            state: parse_state(&self.state)?,
            average_rating: self.average_rating,
        })
    }
}

/// SurrealDB implementation of the Enclosure repository.
#[derive(Clone)]
pub struct SurrealEnclosureRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealEnclosureRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> EnclosureRepository for SurrealEnclosureRepository<C> {
    async fn upsert(&self, enclosure: Enclosure) -> ParkResult<Enclosure> {
        let id = enclosure.id.clone();

        let result = self
            .db
            .query(
                "UPSERT type::record('enclosure', $id) SET \
                 zone_id = $zone_id, biome_id = $biome_id, \
                 meal = $meal, state = $state, \
                 average_rating = $average_rating, \
                 updated_at = time::now()",
            )
            .bind(("id", enclosure.id))
            .bind(("zone_id", enclosure.zone_id))
            .bind(("biome_id", enclosure.biome_id))
            .bind(("meal", enclosure.meal))
            .bind(("state", state_to_string(enclosure.state).to_string()))
            .bind(("average_rating", enclosure.average_rating))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Decode(e.to_string()))?;

        let rows: Vec<EnclosureRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "enclosure".into(),
            id: id.clone(),
        })?;

        Ok(row.into_enclosure(id)?)
    }

    async fn get(&self, zone_id: &str, id: &str) -> ParkResult<Enclosure> {
        let id = id.to_string();

        let mut result = self
            .db
            .query(
                "SELECT * FROM type::record('enclosure', $id) \
                 WHERE zone_id = $zone_id",
            )
            .bind(("id", id.clone()))
            .bind(("zone_id", zone_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<EnclosureRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "enclosure".into(),
            id: id.clone(),
        })?;

        Ok(row.into_enclosure(id)?)
    }

    async fn list_by_zone(&self, zone_id: &str) -> ParkResult<Vec<Enclosure>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM enclosure \
                 WHERE zone_id = $zone_id \
                 ORDER BY record_id ASC",
            )
            .bind(("zone_id", zone_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<EnclosureRowWithId> = result.take(0).map_err(DbError::from)?;

        let items = rows
            .into_iter()
            .map(EnclosureRowWithId::try_into_enclosure)
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(items)
    }

    async fn set_average_rating(&self, zone_id: &str, id: &str, average: f64) -> ParkResult<()> {
        let id = id.to_string();

        let mut result = self
            .db
            .query(
                "UPDATE type::record('enclosure', $id) SET \
                 average_rating = $average, updated_at = time::now() \
                 WHERE zone_id = $zone_id",
            )
            .bind(("id", id.clone()))
            .bind(("zone_id", zone_id.to_string()))
            .bind(("average", average))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<EnclosureRow> = result.take(0).map_err(DbError::from)?;
        if rows.is_empty() {
            return Err(DbError::NotFound {
                entity: "enclosure".into(),
                id,
            }
            .into());
        }

        Ok(())
    }
}
