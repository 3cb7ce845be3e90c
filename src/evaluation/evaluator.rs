//! Route evaluator: demand, round-trip distance, cost, and merge variants.

use crate::distance::CostMatrix;
use crate::models::{Problem, Route, VehicleType};

/// Evaluates stop sequences against a problem's demands, cost matrix, and
/// fleet.
///
/// Nothing is cached; every call recomputes from the matrix.
///
/// # Examples
///
/// ```
/// use savings_routing::models::{Fleet, Location, Problem, VehicleType};
/// use savings_routing::distance::CostMatrix;
/// use savings_routing::evaluation::RouteEvaluator;
///
/// let problem = Problem::new(
///     vec![
///         Location::depot("D", 0.0, 0.0),
///         Location::customer("1", 3.0, 0.0, 5),
///         Location::customer("2", 4.0, 0.0, 5),
///     ],
///     Fleet::new(vec![VehicleType::new("Van", 20, 2.0)]).unwrap(),
/// ).unwrap();
/// let cm = CostMatrix::from_locations(problem.locations(), 1.0);
///
/// let evaluator = RouteEvaluator::new(&problem, &cm);
/// let (best, distance) = evaluator.best_merge(&[1], &[2]);
/// assert_eq!(best, vec![1, 2]);
/// assert!((distance - 8.0).abs() < 1e-10);
/// assert_eq!(evaluator.demand(&best), Some(10));
/// ```
pub struct RouteEvaluator<'a> {
    problem: &'a Problem,
    distances: &'a CostMatrix,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given problem data.
    pub fn new(problem: &'a Problem, distances: &'a CostMatrix) -> Self {
        Self { problem, distances }
    }

    /// Total demand of the given stops, or `None` if it does not fit in an
    /// `i32`.
    pub fn demand(&self, stops: &[usize]) -> Option<i32> {
        stops
            .iter()
            .try_fold(0i32, |acc, &c| acc.checked_add(self.problem.demand(c)))
    }

    /// Round-trip distance depot → stops → depot.
    pub fn distance(&self, stops: &[usize]) -> f64 {
        self.distances.route_distance(stops)
    }

    /// Cost of driving `stops` with the given vehicle type.
    pub fn cost_with(&self, stops: &[usize], vehicle: &VehicleType) -> f64 {
        self.distance(stops) * vehicle.cost_per_distance()
    }

    /// Cost of a route under its assigned vehicle.
    ///
    /// # Panics
    ///
    /// Panics if the route's vehicle index is not in the fleet.
    pub fn cost(&self, route: &Route) -> f64 {
        self.cost_with(route.stops(), &self.problem.fleet().vehicles()[route.vehicle()])
    }

    /// Joins two disjoint stop sequences into the shortest of four
    /// candidates: `a+b`, `b+a`, `rev(a)+b`, `a+rev(b)`.
    ///
    /// Ties go to the earliest candidate in that list. Returns the chosen
    /// sequence and its round-trip distance.
    pub fn best_merge(&self, a: &[usize], b: &[usize]) -> (Vec<usize>, f64) {
        let rev_a: Vec<usize> = a.iter().rev().copied().collect();
        let rev_b: Vec<usize> = b.iter().rev().copied().collect();
        let candidates = [[a, b], [b, a], [rev_a.as_slice(), b], [a, rev_b.as_slice()]];

        let mut best: Option<(Vec<usize>, f64)> = None;
        for [head, tail] in candidates {
            let stops = [head, tail].concat();
            let distance = self.distance(&stops);
            if best.as_ref().map_or(true, |(_, d)| distance < *d) {
                best = Some((stops, distance));
            }
        }
        best.unwrap_or_default()
    }
}
