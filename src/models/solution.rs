//! Final solution and merge statistics.

use serde::Serialize;

use super::{Route, RouteSet};

/// Counters collected during one pass over the savings list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SavingsStats {
    /// Savings pairs examined (one per unordered customer pair).
    pub candidates: usize,
    /// Merges accepted.
    pub merges: usize,
    /// Pairs already on the same route.
    pub same_route: usize,
    /// Pairs whose combined demand no vehicle can carry.
    pub capacity_rejected: usize,
    /// Feasible pairs rejected because merging did not lower cost.
    pub cost_rejected: usize,
}

/// The routes produced by a savings run, with aggregate totals.
///
/// # Examples
///
/// ```
/// use savings_routing::models::{RouteSet, SavingsStats, Solution};
///
/// let sol = Solution::new(RouteSet::default(), SavingsStats::default(), 0.0, 0.0);
/// assert_eq!(sol.num_routes(), 0);
/// assert_eq!(sol.total_cost(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Solution {
    routes: RouteSet,
    stats: SavingsStats,
    total_distance: f64,
    total_cost: f64,
}

impl Solution {
    /// Creates a solution from finished routes and their totals.
    pub fn new(routes: RouteSet, stats: SavingsStats, total_distance: f64, total_cost: f64) -> Self {
        Self {
            routes,
            stats,
            total_distance,
            total_cost,
        }
    }

    /// The final route set.
    pub fn route_set(&self) -> &RouteSet {
        &self.routes
    }

    /// Final routes in ascending id order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.routes()
    }

    /// Number of routes (vehicles dispatched).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of customers served.
    pub fn num_served(&self) -> usize {
        self.routes.routes().map(|r| r.len()).sum()
    }

    /// Merge counters for the run.
    pub fn stats(&self) -> &SavingsStats {
        &self.stats
    }

    /// Sum of round-trip distances.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Sum of route costs.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }
}
