//! Human-readable route summaries.

use std::fmt;

use serde::Serialize;

use super::RouteEvaluator;
use crate::distance::CostMatrix;
use crate::models::{Problem, Route, Solution};

/// One leg of a route: the location reached and the distance driven to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    /// Identifier of the location reached.
    pub to: String,
    /// Distance of this leg.
    pub distance: f64,
}

/// Distance, cost, demand, and legs of a single route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    /// Name of the assigned vehicle type.
    pub vehicle: String,
    /// Customer identifiers in visit order.
    pub stops: Vec<String>,
    /// Depot → first stop, stop → stop, last stop → depot.
    pub legs: Vec<Leg>,
    /// Round-trip distance.
    pub distance: f64,
    /// Distance × vehicle cost per distance.
    pub cost: f64,
    /// Total demand carried.
    pub demand: i32,
}

impl RouteSummary {
    /// Summarizes `route` against the problem data.
    pub fn new(route: &Route, problem: &Problem, distances: &CostMatrix) -> Self {
        let evaluator = RouteEvaluator::new(problem, distances);
        let name_of = |idx: usize| {
            problem
                .location(idx)
                .map_or_else(|| idx.to_string(), |l| l.id().to_string())
        };

        let mut legs = Vec::with_capacity(route.len() + 1);
        let mut prev = 0;
        for &c in route.stops().iter().chain(std::iter::once(&0)) {
            legs.push(Leg {
                to: name_of(c),
                distance: distances.get(prev, c),
            });
            prev = c;
        }

        Self {
            vehicle: problem
                .fleet()
                .get(route.vehicle())
                .map_or_else(String::new, |v| v.name().to_string()),
            stops: route.stops().iter().map(|&c| name_of(c)).collect(),
            legs,
            distance: evaluator.distance(route.stops()),
            cost: evaluator.cost(route),
            demand: route.demand(),
        }
    }
}

/// Summary of every route plus totals.
///
/// `Display` renders the report the command-line front end prints.
///
/// # Examples
///
/// ```
/// use savings_routing::{demo, solve, SavingsConfig};
/// use savings_routing::distance::CostMatrix;
/// use savings_routing::evaluation::SolutionSummary;
///
/// let problem = demo::sample_problem();
/// let config = SavingsConfig::default();
/// let solution = solve(&problem, &config).unwrap();
/// let cm = CostMatrix::from_locations(problem.locations(), config.distance_scale());
///
/// let summary = SolutionSummary::new(&solution, &problem, &cm);
/// assert!((summary.total_cost - solution.total_cost()).abs() < 1e-9);
/// assert!(summary.to_string().starts_with("Total Distance = "));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionSummary {
    /// Per-route summaries in route order.
    pub routes: Vec<RouteSummary>,
    /// Sum of route distances.
    pub total_distance: f64,
    /// Sum of route costs.
    pub total_cost: f64,
}

impl SolutionSummary {
    /// Summarizes every route of `solution`.
    pub fn new(solution: &Solution, problem: &Problem, distances: &CostMatrix) -> Self {
        let routes: Vec<RouteSummary> = solution
            .routes()
            .map(|r| RouteSummary::new(r, problem, distances))
            .collect();
        Self {
            total_distance: routes.iter().map(|r| r.distance).sum(),
            total_cost: routes.iter().map(|r| r.cost).sum(),
            routes,
        }
    }
}

impl fmt::Display for SolutionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Distance = {:.3} km", self.total_distance)?;
        writeln!(f, "Total Cost = RM {:.2}", self.total_cost)?;
        for (k, route) in self.routes.iter().enumerate() {
            writeln!(f, "Vehicle {} ({}):", k + 1, route.vehicle)?;
            writeln!(
                f,
                "Round Trip Distance: {:.3} km, Cost: RM {:.2}, Demand: {}",
                route.distance, route.cost, route.demand
            )?;
            write!(f, "Depot")?;
            for (i, leg) in route.legs.iter().enumerate() {
                let to = if i + 1 == route.legs.len() {
                    "Depot"
                } else {
                    leg.to.as_str()
                };
                write!(f, " -> {} ({:.3} km)", to, leg.distance)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
