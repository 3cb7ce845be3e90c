//! Pairwise travel cost between locations.
//!
//! Provides a dense, symmetric cost matrix built from scaled flat-plane
//! distances.

mod matrix;

pub use matrix::CostMatrix;
