//! SurrealDB repository implementations.

mod animal;
mod enclosure;
mod rating;
mod session;
mod user;
mod zone;

pub use animal::SurrealAnimalRepository;
pub use enclosure::SurrealEnclosureRepository;
pub use rating::SurrealRatingRepository;
pub use session::SurrealSessionRepository;
pub use user::SurrealUserRepository;
pub use zone::SurrealZoneRepository;
