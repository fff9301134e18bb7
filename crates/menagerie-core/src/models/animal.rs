//! Animal domain model.

use serde::{Deserialize, Serialize};

/// An animal hosted in an enclosure. Fully read-only after import.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Animal {
    pub id: String,
    pub zone_id: String,
    pub enclosure_id: String,
    pub name: String,
    /// Identifier in the external animal registry the seed data mirrors.
    pub external_id: String,
}
