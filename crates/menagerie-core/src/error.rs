//! Error types shared across the Menagerie crates.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParkError {
    /// The operation requires a signed-in caller and none was supplied.
    #[error("caller is not authenticated")]
    Unauthenticated,

    #[error("entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("entity already exists: {entity}")]
    AlreadyExists { entity: String },

    #[error("validation error: {message}")]
    Validation { message: String },

    /// Any remote-store failure: network, permission, malformed response.
    #[error("store error: {0}")]
    Store(String),
}

pub type ParkResult<T> = Result<T, ParkError>;
