//! Rating domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single user's score for one enclosure.
///
/// Invariant maintained by the rating service: at most one `Rating`
/// record exists per `(user_id, zone_id, enclosure_id)` triple. A
/// resubmission updates `value` and `timestamp` in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub id: Uuid,
    pub user_id: Uuid,
    pub zone_id: String,
    pub enclosure_id: String,
    /// Expected range 1.0–5.0; the UI constrains input, the service
    /// does not re-validate.
    pub value: f64,
    /// Creation or last-update instant.
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateRating {
    pub user_id: Uuid,
    pub zone_id: String,
    pub enclosure_id: String,
    pub value: f64,
}

/// Round to one decimal place, half away from zero.
///
/// Used for the enclosure average and for synthesized seed ratings.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_down_below_midpoint() {
        assert_eq!(round_to_tenth(3.64), 3.6);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to_tenth(3.65), 3.7);
    }

    #[test]
    fn repeating_mean_rounds_up() {
        // mean of [2, 4, 5]
        assert_eq!(round_to_tenth(11.0 / 3.0), 3.7);
    }

    #[test]
    fn exact_tenths_are_unchanged() {
        assert_eq!(round_to_tenth(4.2), 4.2);
        assert_eq!(round_to_tenth(0.0), 0.0);
    }
}
