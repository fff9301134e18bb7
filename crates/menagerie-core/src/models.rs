//! Domain models for Menagerie.
//!
//! These are the core types shared across all crates. Zones, enclosures
//! and animals are authored by the seed import and read-only afterwards;
//! ratings, users and sessions are created at runtime.

pub mod animal;
pub mod enclosure;
pub mod rating;
pub mod session;
pub mod user;
pub mod zone;
