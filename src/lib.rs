//! # savings-routing
//!
//! Capacitated vehicle routing with a heterogeneous fleet, solved by the
//! Clarke-Wright savings heuristic. Every route is assigned the cheapest
//! vehicle type able to carry its demand, and merges are accepted only when
//! they lower total cost.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, VehicleType, Fleet, Problem, Route, RouteSet, Solution)
//! - [`distance`] — Scaled flat-plane cost matrix
//! - [`evaluation`] — Route distance/cost, merge variants, and reporting
//! - [`constructive`] — Savings list, merge loop, and merge observers
//! - [`demo`] — Sample instance and seeded random instances
//!
//! ## Example
//!
//! ```
//! use savings_routing::{demo, solve, SavingsConfig};
//!
//! let problem = demo::sample_problem();
//! let solution = solve(&problem, &SavingsConfig::default()).unwrap();
//!
//! for route in solution.routes() {
//!     let vehicle = &problem.fleet().vehicles()[route.vehicle()];
//!     assert!(route.demand() <= vehicle.capacity());
//! }
//! ```

pub mod config;
pub mod constructive;
pub mod demo;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;

pub use config::{SavingsConfig, DEFAULT_DISTANCE_SCALE};
pub use constructive::solve;
pub use error::RoutingError;
