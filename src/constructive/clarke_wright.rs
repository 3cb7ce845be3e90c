//! Clarke-Wright savings algorithm with heterogeneous vehicle assignment.
//!
//! # Algorithm
//!
//! The savings algorithm (Clarke & Wright, 1964) starts with each customer
//! on its own route (depot → customer → depot), served by the cheapest
//! vehicle type that can carry its demand. It then walks the savings list
//!
//! ```text
//! s(i, j) = d(0, i) + d(0, j) - d(i, j)
//! ```
//!
//! once, in decreasing order. For each pair, the routes currently holding
//! `i` and `j` are joined in the shortest of four orientations and assigned
//! the cheapest vehicle that can carry their combined demand. The merge is
//! kept only if it strictly lowers cost.
//!
//! Savings are computed once from the initial matrix and never re-derived
//! from merged route endpoints.
//!
//! # Complexity
//!
//! O(n² log n) to build and sort the savings list, plus O(n) route
//! re-evaluation per candidate.
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use log::{debug, info};

use super::observer::{MergeEvent, MergeObserver, MergeOutcome, NoObserver};
use super::savings::{compute_savings, Saving};
use crate::distance::CostMatrix;
use crate::evaluation::RouteEvaluator;
use crate::models::{Fleet, Problem, Route, RouteSet, SavingsStats, Solution};
use crate::{RoutingError, SavingsConfig};

/// Builds the cost matrix from `config` and runs the savings algorithm.
///
/// # Examples
///
/// ```
/// use savings_routing::{demo, solve, SavingsConfig};
///
/// let problem = demo::sample_problem();
/// let solution = solve(&problem, &SavingsConfig::default()).unwrap();
/// assert_eq!(solution.num_served(), 10);
/// assert!(solution.route_set().is_partition(10));
/// ```
pub fn solve(problem: &Problem, config: &SavingsConfig) -> Result<Solution, RoutingError> {
    let distances = CostMatrix::from_locations(problem.locations(), config.distance_scale());
    clarke_wright_savings(problem, &distances)
}

/// Constructs routes using the Clarke-Wright savings algorithm.
///
/// # Arguments
///
/// * `problem` — Locations (index 0 = depot) and vehicle catalog
/// * `distances` — Cost matrix indexed like `problem.locations()`
///
/// # Errors
///
/// [`RoutingError::InfeasibleDemand`] if a single customer exceeds every
/// vehicle's capacity, [`RoutingError::MatrixSizeMismatch`] if the matrix
/// does not match the problem.
///
/// # Examples
///
/// ```
/// use savings_routing::models::{Fleet, Location, Problem, VehicleType};
/// use savings_routing::distance::CostMatrix;
/// use savings_routing::constructive::clarke_wright_savings;
///
/// let problem = Problem::new(
///     vec![
///         Location::depot("D", 0.0, 0.0),
///         Location::customer("1", 1.0, 0.0, 10),
///         Location::customer("2", 2.0, 0.0, 10),
///         Location::customer("3", 3.0, 0.0, 10),
///     ],
///     Fleet::new(vec![VehicleType::new("Van", 30, 1.0)]).unwrap(),
/// ).unwrap();
/// let cm = CostMatrix::from_locations(problem.locations(), 1.0);
///
/// let solution = clarke_wright_savings(&problem, &cm).unwrap();
/// assert_eq!(solution.num_routes(), 1);
/// assert!((solution.total_distance() - 6.0).abs() < 1e-10);
/// ```
pub fn clarke_wright_savings(
    problem: &Problem,
    distances: &CostMatrix,
) -> Result<Solution, RoutingError> {
    clarke_wright_savings_with_observer(problem, distances, &mut NoObserver)
}

/// Same as [`clarke_wright_savings`], reporting every decision and merge to
/// `observer`.
pub fn clarke_wright_savings_with_observer<O>(
    problem: &Problem,
    distances: &CostMatrix,
    observer: &mut O,
) -> Result<Solution, RoutingError>
where
    O: MergeObserver + ?Sized,
{
    let expected = problem.locations().len();
    if distances.size() != expected {
        return Err(RoutingError::MatrixSizeMismatch {
            expected,
            actual: distances.size(),
        });
    }

    let mut routes = RouteSet::singletons(problem)?;
    let evaluator = RouteEvaluator::new(problem, distances);
    let savings = compute_savings(distances);
    let mut stats = SavingsStats {
        candidates: savings.len(),
        ..SavingsStats::default()
    };

    for saving in &savings {
        let outcome = try_merge(
            &mut routes,
            &evaluator,
            problem.fleet(),
            saving,
            observer,
            &mut stats,
        );
        match &outcome {
            MergeOutcome::MissingRoute => {}
            MergeOutcome::SameRoute => stats.same_route += 1,
            MergeOutcome::NoFeasibleVehicle { .. } => stats.capacity_rejected += 1,
            MergeOutcome::NoImprovement { .. } => stats.cost_rejected += 1,
            MergeOutcome::Merged { .. } => {}
        }
        debug!(
            "saving({}, {}) = {:.3}: {:?}",
            saving.i, saving.j, saving.value, outcome
        );
        observer.on_decision(saving, &outcome);
    }

    let total_distance: f64 = routes.routes().map(|r| evaluator.distance(r.stops())).sum();
    let total_cost: f64 = routes.routes().map(|r| evaluator.cost(r)).sum();
    info!(
        "savings finished: {} routes, {} merges, {} capacity rejections, {} cost rejections, cost {:.2}",
        routes.len(),
        stats.merges,
        stats.capacity_rejected,
        stats.cost_rejected,
        total_cost
    );

    Ok(Solution::new(routes, stats, total_distance, total_cost))
}

/// Evaluates one savings pair and commits the merge if it lowers cost.
fn try_merge<O>(
    routes: &mut RouteSet,
    evaluator: &RouteEvaluator<'_>,
    fleet: &Fleet,
    saving: &Saving,
    observer: &mut O,
    stats: &mut SavingsStats,
) -> MergeOutcome
where
    O: MergeObserver + ?Sized,
{
    let (Some(id_i), Some(id_j)) = (routes.route_of(saving.i), routes.route_of(saving.j)) else {
        return MergeOutcome::MissingRoute;
    };
    if id_i == id_j {
        return MergeOutcome::SameRoute;
    }
    let (Some(route_i), Some(route_j)) = (routes.get(id_i), routes.get(id_j)) else {
        return MergeOutcome::MissingRoute;
    };

    let combined = route_i.demand().checked_add(route_j.demand());
    let Some((demand, vehicle)) = combined.and_then(|d| fleet.select(d).map(|v| (d, v))) else {
        return MergeOutcome::NoFeasibleVehicle {
            demand: i64::from(route_i.demand()) + i64::from(route_j.demand()),
        };
    };

    let (stops, distance) = evaluator.best_merge(route_i.stops(), route_j.stops());
    let merged_cost = distance * fleet.vehicles()[vehicle].cost_per_distance();
    let original_cost = evaluator.cost(route_i) + evaluator.cost(route_j);
    if merged_cost >= original_cost {
        return MergeOutcome::NoImprovement {
            original_cost,
            merged_cost,
        };
    }

    let replaced = [route_i.clone(), route_j.clone()];
    let Some(id) = routes.merge(id_i, id_j, Route::new(stops, vehicle, demand)) else {
        return MergeOutcome::MissingRoute;
    };
    stats.merges += 1;

    if let Some(merged) = routes.get(id) {
        debug!(
            "merge {}: {:?} + {:?} -> {:?} with {}",
            stats.merges,
            replaced[0].stops(),
            replaced[1].stops(),
            merged.stops(),
            fleet.vehicles()[vehicle].name()
        );
        observer.on_merge(&MergeEvent {
            saving,
            merge_number: stats.merges,
            replaced: [&replaced[0], &replaced[1]],
            merged,
            routes: &*routes,
        });
    }

    MergeOutcome::Merged {
        original_cost,
        merged_cost,
        route: id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, VehicleType};

    fn line_problem(demand: i32, vehicles: Vec<VehicleType>) -> Problem {
        Problem::new(
            vec![
                Location::depot("D", 0.0, 0.0),
                Location::customer("1", 1.0, 0.0, demand),
                Location::customer("2", 2.0, 0.0, demand),
                Location::customer("3", 3.0, 0.0, demand),
            ],
            Fleet::new(vehicles).expect("valid"),
        )
        .expect("valid")
    }

    fn run(problem: &Problem) -> Solution {
        let cm = CostMatrix::from_locations(problem.locations(), 1.0);
        clarke_wright_savings(problem, &cm).expect("feasible")
    }

    #[test]
    fn test_cw_line() {
        let p = line_problem(10, vec![VehicleType::new("Van", 30, 1.0)]);
        let sol = run(&p);
        assert_eq!(sol.num_served(), 3);
        assert_eq!(sol.num_routes(), 1);
        // 0→1→2→3→0 = 6.0
        assert!((sol.total_distance() - 6.0).abs() < 1e-10);
        let route = sol.routes().next().expect("one route");
        assert_eq!(route.stops(), &[1, 2, 3]);
        assert_eq!(sol.stats().merges, 2);
        assert_eq!(sol.stats().same_route, 1);
    }

    #[test]
    fn test_cw_capacity_split() {
        let p = line_problem(15, vec![VehicleType::new("Van", 25, 1.0)]);
        let sol = run(&p);
        assert_eq!(sol.num_served(), 3);
        assert_eq!(sol.num_routes(), 3);
        assert_eq!(sol.stats().capacity_rejected, 3);
        assert_eq!(sol.stats().merges, 0);
    }

    #[test]
    fn test_cw_empty() {
        let p = Problem::new(
            vec![Location::depot("D", 0.0, 0.0)],
            Fleet::new(vec![VehicleType::new("Van", 10, 1.0)]).expect("valid"),
        )
        .expect("valid");
        let sol = run(&p);
        assert_eq!(sol.num_routes(), 0);
        assert_eq!(sol.total_cost(), 0.0);
        assert_eq!(sol.stats().candidates, 0);
    }

    #[test]
    fn test_cw_single_customer() {
        let p = Problem::new(
            vec![
                Location::depot("D", 0.0, 0.0),
                Location::customer("1", 5.0, 0.0, 10),
            ],
            Fleet::new(vec![VehicleType::new("Van", 100, 2.0)]).expect("valid"),
        )
        .expect("valid");
        let sol = run(&p);
        assert_eq!(sol.num_routes(), 1);
        assert!((sol.total_distance() - 10.0).abs() < 1e-10);
        assert!((sol.total_cost() - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_cw_equal_cost_not_merged() {
        // Opposite sides of the depot: merged distance equals the sum.
        let p = Problem::new(
            vec![
                Location::depot("D", 0.0, 0.0),
                Location::customer("1", 1.0, 0.0, 1),
                Location::customer("2", -1.0, 0.0, 1),
            ],
            Fleet::new(vec![VehicleType::new("Van", 10, 1.0)]).expect("valid"),
        )
        .expect("valid");
        let sol = run(&p);
        assert_eq!(sol.num_routes(), 2);
        assert_eq!(sol.stats().cost_rejected, 1);
    }

    #[test]
    fn test_cw_vehicle_upgrade_rejected() {
        // Singles: 2 + 4 = 6 with Small. Merged needs Big: 4 * 3.0 = 12.
        let p = Problem::new(
            vec![
                Location::depot("D", 0.0, 0.0),
                Location::customer("1", 1.0, 0.0, 6),
                Location::customer("2", 2.0, 0.0, 6),
            ],
            Fleet::new(vec![
                VehicleType::new("Small", 10, 1.0),
                VehicleType::new("Big", 20, 3.0),
            ])
            .expect("valid"),
        )
        .expect("valid");
        let sol = run(&p);
        assert_eq!(sol.num_routes(), 2);
        assert!(sol.routes().all(|r| r.vehicle() == 0));
        assert!((sol.total_cost() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_cw_vehicle_upgrade_accepted() {
        // Merged with Big: 4 * 1.4 = 5.6 < 6.
        let p = Problem::new(
            vec![
                Location::depot("D", 0.0, 0.0),
                Location::customer("1", 1.0, 0.0, 6),
                Location::customer("2", 2.0, 0.0, 6),
            ],
            Fleet::new(vec![
                VehicleType::new("Small", 10, 1.0),
                VehicleType::new("Big", 20, 1.4),
            ])
            .expect("valid"),
        )
        .expect("valid");
        let sol = run(&p);
        assert_eq!(sol.num_routes(), 1);
        let route = sol.routes().next().expect("one route");
        assert_eq!(route.vehicle(), 1);
        assert_eq!(route.demand(), 12);
        assert!((sol.total_cost() - 5.6).abs() < 1e-10);
    }

    #[test]
    fn test_cw_matrix_size_mismatch() {
        let p = line_problem(1, vec![VehicleType::new("Van", 30, 1.0)]);
        let cm = CostMatrix::new(2);
        assert_eq!(
            clarke_wright_savings(&p, &cm).expect_err("mismatch"),
            RoutingError::MatrixSizeMismatch {
                expected: 4,
                actual: 2
            }
        );
    }

    #[test]
    fn test_cw_infeasible_customer() {
        let p = line_problem(40, vec![VehicleType::new("Van", 30, 1.0)]);
        let cm = CostMatrix::from_locations(p.locations(), 1.0);
        assert!(matches!(
            clarke_wright_savings(&p, &cm),
            Err(RoutingError::InfeasibleDemand { demand: 40, .. })
        ));
    }

    #[test]
    fn test_cw_combined_demand_overflow_skipped() {
        let p = Problem::new(
            vec![
                Location::depot("D", 0.0, 0.0),
                Location::customer("1", 1.0, 0.0, i32::MAX),
                Location::customer("2", 2.0, 0.0, i32::MAX),
            ],
            Fleet::new(vec![VehicleType::new("Huge", i32::MAX, 1.0)]).expect("valid"),
        )
        .expect("valid");
        let cm = CostMatrix::from_locations(p.locations(), 1.0);
        let mut rec = Recorder::default();
        let sol = clarke_wright_savings_with_observer(&p, &cm, &mut rec).expect("feasible");

        assert_eq!(sol.num_routes(), 2);
        assert_eq!(sol.stats().capacity_rejected, 1);
        assert!(sol.routes().all(|r| r.demand() == i32::MAX));
        assert_eq!(
            rec.decisions[0].2,
            MergeOutcome::NoFeasibleVehicle {
                demand: 2 * i64::from(i32::MAX)
            }
        );
    }

    #[derive(Default)]
    struct Recorder {
        decisions: Vec<(usize, usize, MergeOutcome)>,
        merges: Vec<(usize, Vec<usize>, usize)>,
    }

    impl MergeObserver for Recorder {
        fn on_decision(&mut self, saving: &Saving, outcome: &MergeOutcome) {
            self.decisions.push((saving.i, saving.j, outcome.clone()));
        }

        fn on_merge(&mut self, event: &MergeEvent<'_>) {
            self.merges.push((
                event.merge_number,
                event.merged.stops().to_vec(),
                event.routes.len(),
            ));
        }
    }

    #[test]
    fn test_cw_observer_sees_every_decision() {
        let p = line_problem(10, vec![VehicleType::new("Van", 30, 1.0)]);
        let cm = CostMatrix::from_locations(p.locations(), 1.0);
        let mut rec = Recorder::default();
        clarke_wright_savings_with_observer(&p, &cm, &mut rec).expect("feasible");

        let order: Vec<(usize, usize)> = rec.decisions.iter().map(|d| (d.0, d.1)).collect();
        assert_eq!(order, vec![(2, 3), (1, 2), (1, 3)]);
        assert!(matches!(rec.decisions[0].2, MergeOutcome::Merged { .. }));
        assert!(matches!(rec.decisions[1].2, MergeOutcome::Merged { .. }));
        assert_eq!(rec.decisions[2].2, MergeOutcome::SameRoute);

        assert_eq!(
            rec.merges,
            vec![(1, vec![2, 3], 2), (2, vec![1, 2, 3], 1)]
        );
    }

    #[test]
    fn test_cw_dyn_observer() {
        let p = line_problem(10, vec![VehicleType::new("Van", 30, 1.0)]);
        let cm = CostMatrix::from_locations(p.locations(), 1.0);
        let mut rec = Recorder::default();
        let observer: &mut dyn MergeObserver = &mut rec;
        clarke_wright_savings_with_observer(&p, &cm, observer).expect("feasible");
        assert_eq!(rec.decisions.len(), 3);
    }

    #[test]
    fn test_solve_uses_scale() {
        let p = line_problem(10, vec![VehicleType::new("Van", 30, 1.0)]);
        let sol = solve(&p, &SavingsConfig::default().with_distance_scale(10.0)).expect("feasible");
        assert!((sol.total_distance() - 60.0).abs() < 1e-9);
    }
}
