//! Savings-based route construction.
//!
//! - [`compute_savings`] — Ranked savings list over all customer pairs
//! - [`clarke_wright_savings`] — Merge loop with cheapest-vehicle assignment
//! - [`MergeObserver`] — Hooks for decisions and accepted merges

mod clarke_wright;
mod observer;
mod savings;

pub use clarke_wright::{clarke_wright_savings, clarke_wright_savings_with_observer, solve};
pub use observer::{MergeEvent, MergeObserver, MergeOutcome, NoObserver};
pub use savings::{compute_savings, Saving};
