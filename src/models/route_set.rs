//! Indexed collection of routes partitioning the customers.

use super::{Problem, Route, RouteId};
use crate::RoutingError;

/// The current set of routes.
///
/// Routes live in slots addressed by [`RouteId`]; a second index maps each
/// customer to the route that owns it, so membership lookups are O(1).
/// Every customer belongs to exactly one live route at all times.
///
/// # Examples
///
/// ```
/// use savings_routing::models::{Fleet, Location, Problem, RouteSet, VehicleType};
///
/// let problem = Problem::new(
///     vec![
///         Location::depot("D", 0.0, 0.0),
///         Location::customer("1", 1.0, 0.0, 4),
///         Location::customer("2", 0.0, 1.0, 6),
///     ],
///     Fleet::new(vec![VehicleType::new("Van", 10, 1.0)]).unwrap(),
/// ).unwrap();
///
/// let routes = RouteSet::singletons(&problem).unwrap();
/// assert_eq!(routes.len(), 2);
/// assert!(routes.is_partition(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteSet {
    slots: Vec<Option<Route>>,
    owner: Vec<Option<RouteId>>,
    live: usize,
}

impl RouteSet {
    /// One route per customer, each with its cheapest feasible vehicle.
    ///
    /// Fails with [`RoutingError::InfeasibleDemand`] if some customer's
    /// demand exceeds every vehicle's capacity.
    pub fn singletons(problem: &Problem) -> Result<Self, RoutingError> {
        let n = problem.num_customers();
        let fleet = problem.fleet();
        let mut set = Self {
            slots: Vec::with_capacity(2 * n),
            owner: vec![None; n + 1],
            live: 0,
        };

        for (c, loc) in problem.locations().iter().enumerate().skip(1) {
            let vehicle =
                fleet
                    .select(loc.demand())
                    .ok_or_else(|| RoutingError::InfeasibleDemand {
                        customer: loc.id().to_string(),
                        demand: loc.demand(),
                        max_capacity: fleet.max_capacity(),
                    })?;
            set.insert(Route::new(vec![c], vehicle, loc.demand()));
        }

        Ok(set)
    }

    fn insert(&mut self, route: Route) -> RouteId {
        let id = RouteId(self.slots.len());
        for &c in route.stops() {
            if c >= self.owner.len() {
                self.owner.resize(c + 1, None);
            }
            self.owner[c] = Some(id);
        }
        self.slots.push(Some(route));
        self.live += 1;
        id
    }

    /// Id of the route that serves `customer`.
    pub fn route_of(&self, customer: usize) -> Option<RouteId> {
        self.owner.get(customer).copied().flatten()
    }

    /// Route with the given id, if it is still live.
    pub fn get(&self, id: RouteId) -> Option<&Route> {
        self.slots.get(id.0).and_then(|s| s.as_ref())
    }

    /// Replaces routes `a` and `b` with `merged` in one step.
    ///
    /// Returns the new route's id, or `None` (leaving the set untouched) if
    /// either id is not live, both ids are the same, or `merged` does not
    /// hold exactly the stops of `a` and `b`.
    pub fn merge(&mut self, a: RouteId, b: RouteId, merged: Route) -> Option<RouteId> {
        if a == b {
            return None;
        }
        let (route_a, route_b) = (self.get(a)?, self.get(b)?);
        let mut expected: Vec<usize> = route_a
            .stops()
            .iter()
            .chain(route_b.stops())
            .copied()
            .collect();
        let mut actual = merged.stops().to_vec();
        expected.sort_unstable();
        actual.sort_unstable();
        if expected != actual {
            return None;
        }
        self.slots[a.0] = None;
        self.slots[b.0] = None;
        self.live -= 2;
        Some(self.insert(merged))
    }

    /// Live routes in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (RouteId, &Route)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(k, s)| s.as_ref().map(|r| (RouteId(k), r)))
    }

    /// Live routes in ascending id order, without their ids.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.slots.iter().flatten()
    }

    /// Number of live routes.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if there are no routes.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Checks that customers `1..=num_customers` each appear on exactly one
    /// live route and that the customer index agrees with the routes.
    pub fn is_partition(&self, num_customers: usize) -> bool {
        let mut seen = vec![false; num_customers + 1];
        for (id, route) in self.iter() {
            if route.is_empty() {
                return false;
            }
            for &c in route.stops() {
                if c == 0 || c > num_customers || seen[c] || self.route_of(c) != Some(id) {
                    return false;
                }
                seen[c] = true;
            }
        }
        seen.iter().skip(1).all(|&s| s)
    }
}
