//! SurrealDB implementation of [`RatingRepository`].
//!
//! The caller's-rating lookup is an equality search, not a keyed
//! lookup: rating ids are opaque UUIDs that cannot be derived from the
//! `(user, zone, enclosure)` triple.

use chrono::{DateTime, Utc};
use menagerie_core::error::ParkResult;
use menagerie_core::models::rating::{CreateRating, Rating};
use menagerie_core::repository::RatingRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct RatingRow {
    user_id: String,
    zone_id: String,
    enclosure_id: String,
    value: f64,
    timestamp: DateTime<Utc>,
}

#[derive(Debug, SurrealValue)]
struct RatingRowWithId {
    record_id: String,
    user_id: String,
    zone_id: String,
    enclosure_id: String,
    value: f64,
    timestamp: DateTime<Utc>,
}

impl RatingRow {
    fn into_rating(self, id: Uuid) -> Result<Rating, DbError> {
        let user_id = Uuid::parse_str(&self.user_id)
            .map_err(|e| DbError::Decode(format!("invalid user UUID: {e}")))?;
        Ok(Rating {
            id,
            user_id,
            zone_id: self.zone_id,
            enclosure_id: self.enclosure_id,
            value: self.value,
            timestamp: self.timestamp,
        })
    }
}

impl RatingRowWithId {
    fn try_into_rating(self) -> Result<Rating, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Decode(format!("invalid UUID: {e}")))?;
        let user_id = Uuid::parse_str(&self.user_id)
            .map_err(|e| DbError::Decode(format!("invalid user UUID: {e}")))?;
        Ok(Rating {
            id,
            user_id,
            zone_id: self.zone_id,
            enclosure_id: self.enclosure_id,
            value: self.value,
            timestamp: self.timestamp,
        })
    }
}

/// SurrealDB implementation of the Rating repository.
#[derive(Clone)]
pub struct SurrealRatingRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealRatingRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> RatingRepository for SurrealRatingRepository<C> {
    async fn create(&self, input: CreateRating) -> ParkResult<Rating> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('rating', $id) SET \
                 user_id = $user_id, zone_id = $zone_id, \
                 enclosure_id = $enclosure_id, value = $value",
            )
            .bind(("id", id_str.clone()))
            .bind(("user_id", input.user_id.to_string()))
            .bind(("zone_id", input.zone_id))
            .bind(("enclosure_id", input.enclosure_id))
            .bind(("value", input.value))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Decode(e.to_string()))?;

        let rows: Vec<RatingRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "rating".into(),
            id: id_str,
        })?;

        Ok(row.into_rating(id)?)
    }

    async fn update_value(&self, id: Uuid, value: f64) -> ParkResult<Rating> {
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "UPDATE type::record('rating', $id) SET \
                 value = $value, timestamp = time::now()",
            )
            .bind(("id", id_str.clone()))
            .bind(("value", value))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Decode(e.to_string()))?;

        let rows: Vec<RatingRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "rating".into(),
            id: id_str,
        })?;

        Ok(row.into_rating(id)?)
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
        zone_id: &str,
        enclosure_id: &str,
    ) -> ParkResult<Option<Rating>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM rating \
                 WHERE user_id = $user_id AND zone_id = $zone_id \
                 AND enclosure_id = $enclosure_id",
            )
            .bind(("user_id", user_id.to_string()))
            .bind(("zone_id", zone_id.to_string()))
            .bind(("enclosure_id", enclosure_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<RatingRowWithId> = result.take(0).map_err(DbError::from)?;
        // Like the original, only the first match is considered should
        // duplicates ever exist.
        rows.into_iter()
            .next()
            .map(RatingRowWithId::try_into_rating)
            .transpose()
            .map_err(Into::into)
    }

    async fn list_by_enclosure(&self, zone_id: &str, enclosure_id: &str) -> ParkResult<Vec<Rating>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM rating \
                 WHERE zone_id = $zone_id AND enclosure_id = $enclosure_id",
            )
            .bind(("zone_id", zone_id.to_string()))
            .bind(("enclosure_id", enclosure_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<RatingRowWithId> = result.take(0).map_err(DbError::from)?;

        let items = rows
            .into_iter()
            .map(RatingRowWithId::try_into_rating)
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(items)
    }
}
