//! Depot and customer locations.

use serde::{Deserialize, Serialize};

/// A depot or customer location.
///
/// Exactly one location in a problem is the depot; it carries zero demand
/// and is the start and end of every route.
///
/// # Examples
///
/// ```
/// use savings_routing::models::Location;
///
/// let depot = Location::depot("Depot", 4.4184, 114.0932);
/// assert!(depot.is_depot());
/// assert_eq!(depot.demand(), 0);
///
/// let c = Location::customer("1", 4.3555, 113.9777, 5);
/// assert_eq!(c.id(), "1");
/// assert_eq!(c.demand(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    id: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    demand: i32,
    #[serde(default)]
    depot: bool,
}

impl Location {
    /// Creates a customer location.
    pub fn customer(id: impl Into<String>, latitude: f64, longitude: f64, demand: i32) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
            demand,
            depot: false,
        }
    }

    /// Creates the depot (demand 0).
    pub fn depot(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
            demand: 0,
            depot: true,
        }
    }

    /// Unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// First coordinate.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Second coordinate.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Units to deliver at this location.
    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// Returns `true` for the depot.
    pub fn is_depot(&self) -> bool {
        self.depot
    }

    /// Flat-plane Euclidean distance in coordinate units.
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dx = self.latitude - other.latitude;
        let dy = self.longitude - other.longitude;
        (dx * dx + dy * dy).sqrt()
    }
}
