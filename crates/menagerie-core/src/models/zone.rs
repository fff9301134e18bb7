//! Zone domain model.

use serde::{Deserialize, Serialize};

/// A top-level park area grouping enclosures.
///
/// Zone ids are externally authored opaque strings; the app never
/// creates or edits zones outside the seed import.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Zone {
    pub id: String,
    pub name: String,
    /// Display color as a hex string, e.g. `#8BC34A`.
    pub color: String,
}
