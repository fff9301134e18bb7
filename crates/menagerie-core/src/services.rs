//! Park service points and the walking-time estimate between them.
//!
//! Services live on a fixed grid where one unit is 10 meters. The
//! estimate is straight-line distance at a 5 km/h walking pace; paths
//! and elevation are ignored.

use serde::{Deserialize, Serialize};

/// Meters per grid unit.
const METERS_PER_UNIT: f64 = 10.0;
/// 5 km/h in meters per second.
const WALKING_SPEED_M_PER_S: f64 = 5000.0 / 3600.0;

/// A fixed point of interest in the park (toilets, shop, cafe, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParkService {
    pub name: &'static str,
    pub icon: &'static str,
    /// Grid coordinates, one unit = 10 m.
    pub x: i32,
    pub y: i32,
}

/// The park's service catalog. Authored with the map; not stored.
pub const SERVICES: &[ParkService] = &[
    ParkService { name: "Toilets", icon: "🚽", x: 10, y: 90 },
    ParkService { name: "Water fountain", icon: "🚰", x: 15, y: 85 },
    ParkService { name: "Gift shop", icon: "🛍️", x: 20, y: 20 },
    ParkService { name: "Train station", icon: "🚂", x: 5, y: 5 },
    ParkService { name: "Lodge", icon: "🏠", x: 80, y: 80 },
    ParkService { name: "Education tent", icon: "🎪", x: 40, y: 75 },
    ParkService { name: "Cafe", icon: "☕", x: 25, y: 25 },
    ParkService { name: "Picnic area", icon: "🧺", x: 50, y: 50 },
    ParkService { name: "Train loop", icon: "🚆", x: 0, y: 0 },
    ParkService { name: "Beach hut", icon: "🏖️", x: 70, y: 20 },
    ParkService { name: "Tea stand", icon: "🍵", x: 30, y: 70 },
    ParkService { name: "Playground", icon: "🎲", x: 60, y: 60 },
    ParkService { name: "Viewpoint", icon: "🔭", x: 90, y: 10 },
];

/// Result of a walking-time estimate between two service points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkingEstimate {
    /// Straight-line distance, whole meters.
    pub distance_m: u32,
    pub minutes: u32,
    pub seconds: u32,
}

/// Estimate walking time between two service points.
pub fn walking_estimate(from: &ParkService, to: &ParkService) -> WalkingEstimate {
    let dx = f64::from(to.x - from.x);
    let dy = f64::from(to.y - from.y);
    let distance_m = (dx * dx + dy * dy).sqrt() * METERS_PER_UNIT;

    let total_seconds = (distance_m / WALKING_SPEED_M_PER_S) as u32;
    WalkingEstimate {
        distance_m: distance_m as u32,
        minutes: total_seconds / 60,
        seconds: total_seconds % 60,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: i32, y: i32) -> ParkService {
        ParkService { name: "test", icon: "🧪", x, y }
    }

    #[test]
    fn zero_distance_for_same_point() {
        let est = walking_estimate(&at(30, 70), &at(30, 70));
        assert_eq!(est.distance_m, 0);
        assert_eq!(est.minutes, 0);
        assert_eq!(est.seconds, 0);
    }

    #[test]
    fn axis_aligned_distance() {
        // 30 grid units apart = 300 m; at 5 km/h that is 216 s.
        let est = walking_estimate(&at(0, 0), &at(30, 0));
        assert_eq!(est.distance_m, 300);
        assert_eq!(est.minutes, 3);
        assert_eq!(est.seconds, 36);
    }

    #[test]
    fn diagonal_uses_euclidean_distance() {
        // 3-4-5 triangle: 50 units = 500 m.
        let est = walking_estimate(&at(0, 0), &at(30, 40));
        assert_eq!(est.distance_m, 500);
        assert_eq!(est.minutes, 6);
    }

    #[test]
    fn estimate_is_symmetric() {
        let a = at(5, 5);
        let b = at(80, 80);
        assert_eq!(walking_estimate(&a, &b), walking_estimate(&b, &a));
    }

    #[test]
    fn catalog_names_are_unique() {
        let mut names: Vec<_> = SERVICES.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SERVICES.len());
    }
}
