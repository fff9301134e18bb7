//! Authentication error types.

use menagerie_core::error::ParkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("session has expired")]
    SessionExpired,

    #[error("invalid session token")]
    SessionInvalid,

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for ParkError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials
            | AuthError::SessionExpired
            | AuthError::SessionInvalid => ParkError::Unauthenticated,
            AuthError::Crypto(msg) => ParkError::Store(msg),
        }
    }
}
