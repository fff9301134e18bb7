//! SurrealDB implementation of [`ZoneRepository`].

use menagerie_core::error::ParkResult;
use menagerie_core::models::zone::Zone;
use menagerie_core::repository::ZoneRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;

use crate::error::DbError;

/// DB-side row struct for queries where the record id is already known.
#[derive(Debug, SurrealValue)]
struct ZoneRow {
    name: String,
    color: String,
}

/// DB-side row struct that includes the record id via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct ZoneRowWithId {
    record_id: String,
    name: String,
    color: String,
}

impl ZoneRow {
    fn into_zone(self, id: String) -> Zone {
        Zone {
            id,
            name: self.name,
            color: self.color,
        }
    }
}

impl ZoneRowWithId {
    fn into_zone(self) -> Zone {
        Zone {
            id: self.record_id,
            name: self.name,
            color: self.color,
        }
    }
}

/// SurrealDB implementation of the Zone repository.
#[derive(Clone)]
pub struct SurrealZoneRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealZoneRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> ZoneRepository for SurrealZoneRepository<C> {
    async fn upsert(&self, zone: Zone) -> ParkResult<Zone> {
        let id = zone.id.clone();

        let result = self
            .db
            .query(
                "UPSERT type::record('zone', $id) SET \
                 name = $name, color = $color, \
                 updated_at = time::now()",
            )
            .bind(("id", zone.id))
            .bind(("name", zone.name))
            .bind(("color", zone.color))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Decode(e.to_string()))?;

        let rows: Vec<ZoneRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "zone".into(),
            id: id.clone(),
        })?;

        Ok(row.into_zone(id))
    }

    async fn get(&self, id: &str) -> ParkResult<Zone> {
        let id = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('zone', $id)")
            .bind(("id", id.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<ZoneRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "zone".into(),
            id: id.clone(),
        })?;

        Ok(row.into_zone(id))
    }

    async fn list(&self) -> ParkResult<Vec<Zone>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM zone \
                 ORDER BY name ASC",
            )
            .await
            .map_err(DbError::from)?;

        let rows: Vec<ZoneRowWithId> = result.take(0).map_err(DbError::from)?;
        Ok(rows.into_iter().map(ZoneRowWithId::into_zone).collect())
    }
}
