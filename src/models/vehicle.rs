//! Vehicle types and the fleet catalog.

use serde::{Deserialize, Serialize};

use crate::RoutingError;

/// A vehicle type with capacity and per-distance operating cost.
///
/// The fleet is heterogeneous and unlimited: any number of routes may use
/// the same type.
///
/// # Examples
///
/// ```
/// use savings_routing::models::VehicleType;
///
/// let v = VehicleType::new("Type A", 25, 1.2);
/// assert_eq!(v.name(), "Type A");
/// assert_eq!(v.capacity(), 25);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleType {
    name: String,
    capacity: i32,
    cost_per_distance: f64,
}

impl VehicleType {
    /// Creates a vehicle type.
    pub fn new(name: impl Into<String>, capacity: i32, cost_per_distance: f64) -> Self {
        Self {
            name: name.into(),
            capacity,
            cost_per_distance,
        }
    }

    /// Name, unique within a fleet.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum total demand per route.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Cost per unit distance traveled.
    pub fn cost_per_distance(&self) -> f64 {
        self.cost_per_distance
    }

    fn validate(&self) -> Result<(), RoutingError> {
        let reason = if self.capacity <= 0 {
            "capacity must be positive"
        } else if !self.cost_per_distance.is_finite() || self.cost_per_distance <= 0.0 {
            "cost per distance must be positive"
        } else {
            return Ok(());
        };
        Err(RoutingError::InvalidVehicle {
            name: self.name.clone(),
            reason,
        })
    }
}

/// An ordered, validated catalog of vehicle types.
///
/// Routes refer to vehicle types by their index in this catalog.
///
/// # Examples
///
/// ```
/// use savings_routing::models::{Fleet, VehicleType};
///
/// let fleet = Fleet::new(vec![
///     VehicleType::new("Large", 30, 1.5),
///     VehicleType::new("Small", 25, 1.2),
/// ]).unwrap();
///
/// assert_eq!(fleet.select(20), Some(1)); // Small is cheaper
/// assert_eq!(fleet.select(28), Some(0)); // only Large fits
/// assert_eq!(fleet.select(31), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fleet {
    vehicles: Vec<VehicleType>,
}

impl Fleet {
    /// Creates a fleet, rejecting empty catalogs, duplicate names, and
    /// non-positive capacity or cost.
    pub fn new(vehicles: Vec<VehicleType>) -> Result<Self, RoutingError> {
        if vehicles.is_empty() {
            return Err(RoutingError::EmptyFleet);
        }
        for (k, v) in vehicles.iter().enumerate() {
            v.validate()?;
            if vehicles[..k].iter().any(|w| w.name == v.name) {
                return Err(RoutingError::DuplicateVehicle(v.name.clone()));
            }
        }
        Ok(Self { vehicles })
    }

    /// Returns the catalog index of the cheapest vehicle type whose capacity
    /// covers `demand`.
    ///
    /// Ties on cost go to the type listed first. Returns `None` when no
    /// type is large enough.
    pub fn select(&self, demand: i32) -> Option<usize> {
        self.vehicles
            .iter()
            .enumerate()
            .filter(|(_, v)| v.capacity >= demand)
            .min_by(|(_, a), (_, b)| a.cost_per_distance.total_cmp(&b.cost_per_distance))
            .map(|(k, _)| k)
    }

    /// Returns the vehicle type at `index`.
    pub fn get(&self, index: usize) -> Option<&VehicleType> {
        self.vehicles.get(index)
    }

    /// Vehicle types in catalog order.
    pub fn vehicles(&self) -> &[VehicleType] {
        &self.vehicles
    }

    /// Number of vehicle types.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Always `false` for a constructed fleet.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Largest capacity in the catalog.
    pub fn max_capacity(&self) -> i32 {
        self.vehicles.iter().map(|v| v.capacity).max().unwrap_or(0)
    }
}
