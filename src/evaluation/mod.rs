//! Route evaluation and reporting.

mod evaluator;
mod summary;

pub use evaluator::RouteEvaluator;
pub use summary::{Leg, RouteSummary, SolutionSummary};
