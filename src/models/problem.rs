//! Problem instance: locations plus vehicle catalog.

use serde::Deserialize;

use super::{Fleet, Location, VehicleType};
use crate::RoutingError;

/// A validated routing problem.
///
/// Locations are stored with the depot at index 0 and customers at
/// `1..=num_customers()` in the order they were supplied. These indices
/// are the ones used by [`CostMatrix`](crate::distance::CostMatrix) and
/// by route stop sequences.
///
/// # Examples
///
/// ```
/// use savings_routing::models::{Fleet, Location, Problem, VehicleType};
///
/// let problem = Problem::new(
///     vec![
///         Location::customer("1", 1.0, 0.0, 5),
///         Location::depot("Depot", 0.0, 0.0),
///         Location::customer("2", 0.0, 1.0, 8),
///     ],
///     Fleet::new(vec![VehicleType::new("Van", 20, 1.0)]).unwrap(),
/// ).unwrap();
///
/// assert_eq!(problem.depot().id(), "Depot");
/// assert_eq!(problem.num_customers(), 2);
/// assert_eq!(problem.location(1).unwrap().id(), "1");
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    locations: Vec<Location>,
    fleet: Fleet,
}

#[cfg_attr(not(feature = "json"), allow(dead_code))]
#[derive(Deserialize)]
struct ProblemInput {
    locations: Vec<Location>,
    vehicles: Vec<VehicleType>,
}

impl Problem {
    /// Validates the inputs and moves the depot to index 0.
    ///
    /// Exactly one location must be flagged as depot, identifiers must be
    /// unique, coordinates finite, customer demand non-negative and depot
    /// demand zero.
    pub fn new(locations: Vec<Location>, fleet: Fleet) -> Result<Self, RoutingError> {
        let depots: Vec<&Location> = locations.iter().filter(|l| l.is_depot()).collect();
        match depots.len() {
            0 => return Err(RoutingError::MissingDepot),
            1 => {}
            _ => {
                return Err(RoutingError::MultipleDepots(
                    depots.iter().map(|l| l.id().to_string()).collect(),
                ))
            }
        }

        for (k, loc) in locations.iter().enumerate() {
            if locations[..k].iter().any(|l| l.id() == loc.id()) {
                return Err(RoutingError::DuplicateLocation(loc.id().to_string()));
            }
            if !loc.latitude().is_finite() || !loc.longitude().is_finite() {
                return Err(RoutingError::InvalidCoordinate(loc.id().to_string()));
            }
            if loc.demand() < 0 || (loc.is_depot() && loc.demand() != 0) {
                return Err(RoutingError::InvalidDemand {
                    location: loc.id().to_string(),
                    demand: loc.demand(),
                });
            }
        }

        let (mut ordered, customers): (Vec<Location>, Vec<Location>) =
            locations.into_iter().partition(|l| l.is_depot());
        ordered.extend(customers);

        Ok(Self {
            locations: ordered,
            fleet,
        })
    }

    /// Reads a problem from JSON of the form
    /// `{"locations": [...], "vehicles": [...]}`.
    #[cfg(feature = "json")]
    pub fn from_json(input: &str) -> Result<Self, RoutingError> {
        let input: ProblemInput = serde_json::from_str(input)?;
        Self::from_input(input)
    }

    #[cfg_attr(not(feature = "json"), allow(dead_code))]
    fn from_input(input: ProblemInput) -> Result<Self, RoutingError> {
        Self::new(input.locations, Fleet::new(input.vehicles)?)
    }

    /// All locations, depot first.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Location at matrix index `index` (0 = depot).
    pub fn location(&self, index: usize) -> Option<&Location> {
        self.locations.get(index)
    }

    /// The depot.
    pub fn depot(&self) -> &Location {
        &self.locations[0]
    }

    /// Number of customers (excluding the depot).
    pub fn num_customers(&self) -> usize {
        self.locations.len() - 1
    }

    /// Demand of the location at `index`; 0 for unknown indices.
    pub fn demand(&self, index: usize) -> i32 {
        self.locations.get(index).map_or(0, |l| l.demand())
    }

    /// The vehicle catalog.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet() -> Fleet {
        Fleet::new(vec![VehicleType::new("Van", 20, 1.0)]).expect("valid")
    }

    #[test]
    fn test_depot_moved_first() {
        let p = Problem::new(
            vec![
                Location::customer("a", 1.0, 0.0, 1),
                Location::customer("b", 2.0, 0.0, 2),
                Location::depot("D", 0.0, 0.0),
                Location::customer("c", 3.0, 0.0, 3),
            ],
            fleet(),
        )
        .expect("valid");
        let ids: Vec<&str> = p.locations().iter().map(|l| l.id()).collect();
        assert_eq!(ids, vec!["D", "a", "b", "c"]);
        assert_eq!(p.num_customers(), 3);
        assert_eq!(p.demand(2), 2);
        assert_eq!(p.demand(99), 0);
    }

    #[test]
    fn test_missing_depot() {
        let err = Problem::new(vec![Location::customer("a", 0.0, 0.0, 1)], fleet());
        assert!(matches!(err, Err(RoutingError::MissingDepot)));
    }

    #[test]
    fn test_multiple_depots() {
        let err = Problem::new(
            vec![Location::depot("D1", 0.0, 0.0), Location::depot("D2", 1.0, 1.0)],
            fleet(),
        );
        assert!(matches!(err, Err(RoutingError::MultipleDepots(ids)) if ids.len() == 2));
    }

    #[test]
    fn test_duplicate_location() {
        let err = Problem::new(
            vec![
                Location::depot("D", 0.0, 0.0),
                Location::customer("a", 1.0, 0.0, 1),
                Location::customer("a", 2.0, 0.0, 1),
            ],
            fleet(),
        );
        assert!(matches!(err, Err(RoutingError::DuplicateLocation(id)) if id == "a"));
    }

    #[test]
    fn test_negative_demand() {
        let err = Problem::new(
            vec![
                Location::depot("D", 0.0, 0.0),
                Location::customer("a", 1.0, 0.0, -3),
            ],
            fleet(),
        );
        assert!(matches!(
            err,
            Err(RoutingError::InvalidDemand { demand: -3, .. })
        ));
    }

    #[test]
    fn test_non_finite_coordinate() {
        let err = Problem::new(
            vec![
                Location::depot("D", 0.0, 0.0),
                Location::customer("a", f64::NAN, 0.0, 1),
            ],
            fleet(),
        );
        assert!(matches!(err, Err(RoutingError::InvalidCoordinate(_))));
    }

    #[test]
    fn test_depot_only() {
        let p = Problem::new(vec![Location::depot("D", 0.0, 0.0)], fleet()).expect("valid");
        assert_eq!(p.num_customers(), 0);
    }

    #[test]
    fn test_from_input() {
        let input: ProblemInput = serde_json::from_str(
            r#"{
                "locations": [
                    {"id": "Depot", "latitude": 0.0, "longitude": 0.0, "depot": true},
                    {"id": "1", "latitude": 1.0, "longitude": 1.0, "demand": 4}
                ],
                "vehicles": [{"name": "Van", "capacity": 10, "cost_per_distance": 1.5}]
            }"#,
        )
        .expect("valid json");
        let p = Problem::from_input(input).expect("valid");
        assert_eq!(p.num_customers(), 1);
        assert_eq!(p.fleet().len(), 1);
    }
}
