//! Route and route identity types.

use serde::Serialize;

/// Stable identifier of a route inside a [`RouteSet`](super::RouteSet).
///
/// Ids are never reused: a merged route receives a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RouteId(pub usize);

/// An ordered sequence of customer stops served by one vehicle type.
///
/// The depot (index 0) is implicit at both ends and never stored in
/// `stops`.
///
/// # Examples
///
/// ```
/// use savings_routing::models::Route;
///
/// let route = Route::new(vec![3, 1], 0, 12);
/// assert_eq!(route.stops(), &[3, 1]);
/// assert_eq!(route.vehicle(), 0);
/// assert_eq!(route.demand(), 12);
/// assert!(route.contains(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    stops: Vec<usize>,
    vehicle: usize,
    demand: i32,
}

impl Route {
    /// Creates a route with its assigned vehicle index and total demand.
    pub fn new(stops: Vec<usize>, vehicle: usize, demand: i32) -> Self {
        Self {
            stops,
            vehicle,
            demand,
        }
    }

    /// Customer indices in visit order.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Fleet index of the assigned vehicle type.
    pub fn vehicle(&self) -> usize {
        self.vehicle
    }

    /// Total demand carried.
    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Returns `true` if `customer` is a stop on this route.
    pub fn contains(&self, customer: usize) -> bool {
        self.stops.contains(&customer)
    }
}
