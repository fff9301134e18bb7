//! Enclosure domain model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EnclosureState {
    Open,
    Closed,
}

impl Default for EnclosureState {
    fn default() -> Self {
        Self::Open
    }
}

/// A habitat unit within a zone.
///
/// `average_rating` is the only field mutated during normal operation
/// (by the rating service); everything else is authored at import time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enclosure {
    pub id: String,
    pub zone_id: String,
    pub biome_id: String,
    /// Free-text description of what the animals are fed.
    pub meal: String,
    pub state: EnclosureState,
    pub average_rating: f64,
}
