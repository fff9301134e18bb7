//! Menagerie Rating — per-user enclosure ratings and the derived
//! enclosure average.

pub mod service;

pub use service::RatingService;
