//! Error type for problem construction and route initialization.

use std::fmt;

/// Errors raised while building a problem or its initial routes.
///
/// Merge rejections inside the savings loop are not errors; they are
/// reported as [`MergeOutcome`](crate::constructive::MergeOutcome) values.
#[derive(Debug, Clone, PartialEq)]
pub enum RoutingError {
    /// A single customer's demand exceeds every vehicle's capacity.
    InfeasibleDemand {
        /// Identifier of the offending customer.
        customer: String,
        /// Demand of that customer.
        demand: i32,
        /// Largest capacity available in the fleet.
        max_capacity: i32,
    },
    /// No location is flagged as depot.
    MissingDepot,
    /// More than one location is flagged as depot.
    MultipleDepots(Vec<String>),
    /// Two locations share an identifier.
    DuplicateLocation(String),
    /// Negative customer demand, or a depot with non-zero demand.
    InvalidDemand {
        /// Location identifier.
        location: String,
        /// Offending demand value.
        demand: i32,
    },
    /// Non-finite coordinate.
    InvalidCoordinate(String),
    /// The vehicle catalog is empty.
    EmptyFleet,
    /// Two vehicle types share a name.
    DuplicateVehicle(String),
    /// Vehicle with non-positive capacity or cost.
    InvalidVehicle {
        /// Vehicle type name.
        name: String,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// Cost matrix does not match the number of locations.
    MatrixSizeMismatch {
        /// Locations in the problem (depot included).
        expected: usize,
        /// Rows in the matrix.
        actual: usize,
    },
    /// Malformed JSON input.
    #[cfg(feature = "json")]
    Parse(String),
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingError::InfeasibleDemand {
                customer,
                demand,
                max_capacity,
            } => write!(
                f,
                "customer {} has demand {} but the largest vehicle holds {}",
                customer, demand, max_capacity
            ),
            RoutingError::MissingDepot => write!(f, "no depot location given"),
            RoutingError::MultipleDepots(ids) => {
                write!(f, "more than one depot: {}", ids.join(", "))
            }
            RoutingError::DuplicateLocation(id) => write!(f, "duplicate location id: {}", id),
            RoutingError::InvalidDemand { location, demand } => {
                write!(f, "invalid demand {} at location {}", demand, location)
            }
            RoutingError::InvalidCoordinate(id) => {
                write!(f, "non-finite coordinate at location {}", id)
            }
            RoutingError::EmptyFleet => write!(f, "vehicle catalog is empty"),
            RoutingError::DuplicateVehicle(name) => write!(f, "duplicate vehicle type: {}", name),
            RoutingError::InvalidVehicle { name, reason } => {
                write!(f, "invalid vehicle type {}: {}", name, reason)
            }
            RoutingError::MatrixSizeMismatch { expected, actual } => write!(
                f,
                "cost matrix has {} rows, expected {}",
                actual, expected
            ),
            #[cfg(feature = "json")]
            RoutingError::Parse(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

impl std::error::Error for RoutingError {}

#[cfg(feature = "json")]
impl From<serde_json::Error> for RoutingError {
    fn from(e: serde_json::Error) -> Self {
        RoutingError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infeasible_demand_names_customer() {
        let err = RoutingError::InfeasibleDemand {
            customer: "7".to_string(),
            demand: 40,
            max_capacity: 30,
        };
        let msg = err.to_string();
        assert!(msg.contains("customer 7"));
        assert!(msg.contains("40"));
        assert!(msg.contains("30"));
    }

    #[test]
    fn test_multiple_depots_lists_ids() {
        let err = RoutingError::MultipleDepots(vec!["A".into(), "B".into()]);
        assert_eq!(err.to_string(), "more than one depot: A, B");
    }
}
