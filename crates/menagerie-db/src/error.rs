//! Database-specific error types and conversions.

use menagerie_core::error::ParkError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("migration failed: {0}")]
    Migration(String),

    /// A stored row could not be mapped back into a domain value.
    #[error("malformed record: {0}")]
    Decode(String),

    #[error("record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },
}

impl From<DbError> for ParkError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ParkError::NotFound { entity, id },
            other => ParkError::Store(other.to_string()),
        }
    }
}
