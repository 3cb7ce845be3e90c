//! Domain model types for the savings router.
//!
//! Provides locations with demand, the vehicle catalog, validated problem
//! instances, routes, the route set that partitions customers across
//! routes, and the final solution.

mod location;
mod problem;
mod route;
mod route_set;
mod solution;
mod vehicle;

pub use location::Location;
pub use problem::Problem;
pub use route::{Route, RouteId};
pub use route_set::RouteSet;
pub use solution::{SavingsStats, Solution};
pub use vehicle::{Fleet, VehicleType};
