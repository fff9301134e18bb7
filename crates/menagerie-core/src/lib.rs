//! Menagerie Core — domain models, repository traits, and shared
//! error types for the zoo-park data service.

pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use error::{ParkError, ParkResult};
