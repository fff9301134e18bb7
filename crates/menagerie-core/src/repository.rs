//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. The remote store keeps flat
//! tables; the original nested collection layout (zone → enclosure →
//! animal) becomes parent-id fields, so enclosure- and animal-scoped
//! operations take the owning ids as parameters.

use uuid::Uuid;

use crate::error::ParkResult;
use crate::models::{
    animal::Animal,
    enclosure::Enclosure,
    rating::{CreateRating, Rating},
    session::{CreateSession, Session},
    user::{CreateUser, User},
    zone::Zone,
};

// ---------------------------------------------------------------------------
// Park structure (authored by import, read-only at runtime)
// ---------------------------------------------------------------------------

pub trait ZoneRepository: Send + Sync {
    /// Insert or overwrite a zone record (used by the seed import).
    fn upsert(&self, zone: Zone) -> impl Future<Output = ParkResult<Zone>> + Send;
    fn get(&self, id: &str) -> impl Future<Output = ParkResult<Zone>> + Send;
    /// All zones, ordered by name.
    fn list(&self) -> impl Future<Output = ParkResult<Vec<Zone>>> + Send;
}

pub trait EnclosureRepository: Send + Sync {
    fn upsert(&self, enclosure: Enclosure) -> impl Future<Output = ParkResult<Enclosure>> + Send;
    fn get(&self, zone_id: &str, id: &str) -> impl Future<Output = ParkResult<Enclosure>> + Send;
    fn list_by_zone(&self, zone_id: &str)
    -> impl Future<Output = ParkResult<Vec<Enclosure>>> + Send;

    /// Persist a recomputed average rating. The only runtime mutation
    /// of park-structure data.
    fn set_average_rating(
        &self,
        zone_id: &str,
        id: &str,
        average: f64,
    ) -> impl Future<Output = ParkResult<()>> + Send;
}

pub trait AnimalRepository: Send + Sync {
    fn upsert(&self, animal: Animal) -> impl Future<Output = ParkResult<Animal>> + Send;
    fn list_by_enclosure(
        &self,
        zone_id: &str,
        enclosure_id: &str,
    ) -> impl Future<Output = ParkResult<Vec<Animal>>> + Send;
}

// ---------------------------------------------------------------------------
// Ratings
// ---------------------------------------------------------------------------

pub trait RatingRepository: Send + Sync {
    fn create(&self, input: CreateRating) -> impl Future<Output = ParkResult<Rating>> + Send;

    /// Overwrite an existing rating's value and bump its timestamp.
    /// Last write wins; no optimistic-concurrency check.
    fn update_value(
        &self,
        id: Uuid,
        value: f64,
    ) -> impl Future<Output = ParkResult<Rating>> + Send;

    /// Equality search for the caller's rating of one enclosure.
    /// Absence is normal, hence `Option` rather than an error.
    fn find_by_user(
        &self,
        user_id: Uuid,
        zone_id: &str,
        enclosure_id: &str,
    ) -> impl Future<Output = ParkResult<Option<Rating>>> + Send;

    /// All ratings for an enclosure across users (aggregate input).
    fn list_by_enclosure(
        &self,
        zone_id: &str,
        enclosure_id: &str,
    ) -> impl Future<Output = ParkResult<Vec<Rating>>> + Send;
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

pub trait UserRepository: Send + Sync {
    fn create(&self, input: CreateUser) -> impl Future<Output = ParkResult<User>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = ParkResult<User>> + Send;
    fn get_by_email(&self, email: &str) -> impl Future<Output = ParkResult<User>> + Send;
}

pub trait SessionRepository: Send + Sync {
    fn create(&self, input: CreateSession) -> impl Future<Output = ParkResult<Session>> + Send;
    fn get_by_token_hash(
        &self,
        token_hash: &str,
    ) -> impl Future<Output = ParkResult<Session>> + Send;
    /// Invalidate a single session (sign-out).
    fn invalidate(&self, id: Uuid) -> impl Future<Output = ParkResult<()>> + Send;
}
