//! Savings list construction.

use std::cmp::Ordering;

use log::trace;
use serde::Serialize;

use crate::distance::CostMatrix;

/// Distance saved by serving customers `i` and `j` on one route instead of
/// two separate depot round trips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Saving {
    /// `d(0, i) + d(0, j) - d(i, j)`.
    pub value: f64,
    /// First customer index (`i < j`).
    pub i: usize,
    /// Second customer index.
    pub j: usize,
}

/// Computes the saving of every unordered customer pair, sorted by
/// decreasing value.
///
/// Pairs are enumerated with `i` ascending and `j > i` ascending; the sort
/// is stable, so equal savings keep that order. Non-positive savings are
/// kept. The list is computed once from the matrix and not updated as
/// routes merge.
///
/// # Examples
///
/// ```
/// use savings_routing::distance::CostMatrix;
/// use savings_routing::constructive::compute_savings;
///
/// // depot, 1, 2, 3 on a line at 0, 1, 2, 3
/// let mut cm = CostMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         cm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
/// let savings = compute_savings(&cm);
/// assert_eq!(savings.len(), 3);
/// assert_eq!((savings[0].i, savings[0].j), (2, 3)); // 2 + 3 - 1 = 4
/// ```
pub fn compute_savings(distances: &CostMatrix) -> Vec<Saving> {
    let n = distances.size();
    if n < 3 {
        return Vec::new();
    }

    let mut savings = Vec::with_capacity((n - 1) * (n - 2) / 2);
    for i in 1..n {
        for j in (i + 1)..n {
            let value = distances.get(0, i) + distances.get(0, j) - distances.get(i, j);
            trace!("saving({}, {}) = {:.3}", i, j, value);
            savings.push(Saving { value, i, j });
        }
    }

    savings.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    savings
}
