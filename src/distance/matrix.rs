//! Dense cost matrix.

use crate::models::Location;

/// A dense n×n cost matrix stored in row-major order.
///
/// Index 0 is the depot; indices follow the location order of the
/// [`Problem`](crate::models::Problem).
///
/// # Examples
///
/// ```
/// use savings_routing::models::Location;
/// use savings_routing::distance::CostMatrix;
///
/// let locations = vec![
///     Location::depot("D", 0.0, 0.0),
///     Location::customer("1", 3.0, 4.0, 10),
///     Location::customer("2", 6.0, 8.0, 20),
/// ];
/// let cm = CostMatrix::from_locations(&locations, 100.0);
/// assert!((cm.get(0, 1) - 500.0).abs() < 1e-10);
/// assert!((cm.route_distance(&[1, 2]) - 2000.0).abs() < 1e-10);
/// assert_eq!(cm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a cost matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes `scale * euclidean(i, j)` for every pair of locations.
    pub fn from_locations(locations: &[Location], scale: f64) -> Self {
        let n = locations.len();
        let mut cm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = scale * locations[i].distance_to(&locations[j]);
                cm.set(i, j, d);
                cm.set(j, i, d);
            }
        }
        cm
    }

    /// Creates a cost matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the cost from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance
    /// and its diagonal is zero.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            if self.get(i, i).abs() > tol {
                return false;
            }
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Round-trip distance depot → `stops` in order → depot.
    ///
    /// An empty sequence has distance 0.
    pub fn route_distance(&self, stops: &[usize]) -> f64 {
        let (Some(&first), Some(&last)) = (stops.first(), stops.last()) else {
            return 0.0;
        };
        let legs: f64 = stops.windows(2).map(|w| self.get(w[0], w[1])).sum();
        self.get(0, first) + legs + self.get(last, 0)
    }
}
