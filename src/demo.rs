//! Built-in sample data and random instance generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Fleet, Location, Problem, VehicleType};

/// The reference instance: one depot, ten customers around it, and two
/// vehicle types ("Type A" small and cheap, "Type B" larger).
///
/// # Examples
///
/// ```
/// use savings_routing::demo;
///
/// let problem = demo::sample_problem();
/// assert_eq!(problem.num_customers(), 10);
/// assert_eq!(problem.depot().id(), "Depot");
/// ```
pub fn sample_problem() -> Problem {
    let locations = vec![
        Location::depot("Depot", 4.4184, 114.0932),
        Location::customer("1", 4.3555, 113.9777, 5),
        Location::customer("2", 4.3976, 114.0049, 8),
        Location::customer("3", 4.3163, 114.0764, 3),
        Location::customer("4", 4.3184, 113.9932, 6),
        Location::customer("5", 4.4024, 113.9896, 5),
        Location::customer("6", 4.4142, 114.0127, 8),
        Location::customer("7", 4.4804, 114.0734, 3),
        Location::customer("8", 4.3818, 114.2034, 6),
        Location::customer("9", 4.4935, 114.1828, 5),
        Location::customer("10", 4.4932, 114.1322, 8),
    ];
    Problem::new(locations, sample_fleet()).expect("sample locations are valid")
}

/// "Type A" (capacity 25, 1.2 per km) and "Type B" (capacity 30, 1.5 per km).
pub fn sample_fleet() -> Fleet {
    Fleet::new(vec![
        VehicleType::new("Type A", 25, 1.2),
        VehicleType::new("Type B", 30, 1.5),
    ])
    .expect("sample fleet is valid")
}

/// Generates a random instance with `num_customers` customers scattered in
/// a `span`-sized square around a depot at the origin.
///
/// Demands are drawn from `1..=max_demand`. The same seed always yields the
/// same instance.
///
/// # Panics
///
/// Panics if `span` is negative or not finite.
///
/// # Examples
///
/// ```
/// use savings_routing::demo;
///
/// let a = demo::random_problem(7, 12, 0.2, 9, demo::sample_fleet());
/// let b = demo::random_problem(7, 12, 0.2, 9, demo::sample_fleet());
/// assert_eq!(a.locations(), b.locations());
/// assert_eq!(a.num_customers(), 12);
/// ```
pub fn random_problem(
    seed: u64,
    num_customers: usize,
    span: f64,
    max_demand: i32,
    fleet: Fleet,
) -> Problem {
    let mut rng = StdRng::seed_from_u64(seed);
    let half = span / 2.0;
    let mut locations = Vec::with_capacity(num_customers + 1);
    locations.push(Location::depot("Depot", 0.0, 0.0));
    for k in 1..=num_customers {
        locations.push(Location::customer(
            k.to_string(),
            rng.random_range(-half..=half),
            rng.random_range(-half..=half),
            rng.random_range(1..=max_demand.max(1)),
        ));
    }
    Problem::new(locations, fleet).expect("generated locations are valid")
}
