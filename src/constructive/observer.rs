//! Hooks for watching the merge loop.

use super::Saving;
use crate::models::{Route, RouteId, RouteSet};

/// What happened to one savings candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum MergeOutcome {
    /// A customer of the pair is on no route.
    MissingRoute,
    /// Both customers are already on the same route.
    SameRoute,
    /// No vehicle type can carry the combined demand.
    NoFeasibleVehicle {
        /// Combined demand of both routes, which may exceed `i32::MAX`.
        demand: i64,
    },
    /// Merging would not lower cost.
    NoImprovement {
        /// Cost of the two routes as they are.
        original_cost: f64,
        /// Cost of the best merged route.
        merged_cost: f64,
    },
    /// The routes were merged.
    Merged {
        /// Cost of the two routes before the merge.
        original_cost: f64,
        /// Cost of the merged route.
        merged_cost: f64,
        /// Id of the merged route.
        route: RouteId,
    },
}

/// State right after an accepted merge.
#[derive(Debug)]
pub struct MergeEvent<'a> {
    /// The savings pair that triggered the merge.
    pub saving: &'a Saving,
    /// 1-based count of merges so far.
    pub merge_number: usize,
    /// The two routes that were replaced.
    pub replaced: [&'a Route; 2],
    /// The new route.
    pub merged: &'a Route,
    /// All routes after the merge.
    pub routes: &'a RouteSet,
}

/// Receives progress from the savings loop.
///
/// Both hooks default to no-ops. Closures taking a [`MergeEvent`] observe
/// accepted merges only.
///
/// # Examples
///
/// ```
/// use savings_routing::constructive::{clarke_wright_savings_with_observer, MergeEvent};
/// use savings_routing::distance::CostMatrix;
/// use savings_routing::demo;
///
/// let problem = demo::sample_problem();
/// let cm = CostMatrix::from_locations(problem.locations(), 100.0);
///
/// let mut sizes = Vec::new();
/// let mut record = |e: &MergeEvent<'_>| sizes.push(e.routes.len());
/// let solution = clarke_wright_savings_with_observer(&problem, &cm, &mut record).unwrap();
///
/// assert_eq!(sizes.len(), solution.stats().merges);
/// assert!(sizes.windows(2).all(|w| w[1] == w[0] - 1));
/// ```
pub trait MergeObserver {
    /// Called once per savings candidate, after its outcome is decided.
    fn on_decision(&mut self, _saving: &Saving, _outcome: &MergeOutcome) {}

    /// Called after each accepted merge.
    fn on_merge(&mut self, _event: &MergeEvent<'_>) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl MergeObserver for NoObserver {}

impl<F> MergeObserver for F
where
    F: FnMut(&MergeEvent<'_>),
{
    fn on_merge(&mut self, event: &MergeEvent<'_>) {
        self(event)
    }
}
