//! Square cost matrix consumed by the Hungarian solver.

use fp_core::DVec3;

/// Dense N×N cost table stored row-major.
///
/// Row `i` is source `i`, column `j` is target `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    n:     usize,
    cells: Vec<f64>,
}

impl CostMatrix {
    /// An all-zero `n × n` matrix.
    pub fn new(n: usize) -> Self {
        Self { n, cells: vec![0.0; n * n] }
    }

    /// Build an `n × n` matrix with `cost(i, j) = f(i, j)`.
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut cells = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                cells.push(f(i, j));
            }
        }
        Self { n, cells }
    }

    /// Euclidean distance from every source to every target.
    ///
    /// Only the first `min(sources.len(), targets.len())` entries of each
    /// side are used; callers check lengths before getting here.
    pub fn euclidean(sources: &[DVec3], targets: &[DVec3]) -> Self {
        let n = sources.len().min(targets.len());
        Self::from_fn(n, |i, j| sources[i].distance(targets[j]))
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.n + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cost: f64) {
        self.cells[row * self.n + col] = cost;
    }

    /// First `(row, col)` holding a NaN or infinite cost.
    pub fn first_non_finite(&self) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|c| !c.is_finite())
            .map(|k| (k / self.n, k % self.n))
    }

    /// Sum of `cost(i, assignment[i])` over all rows.
    pub fn total_cost(&self, assignment: &[usize]) -> f64 {
        assignment
            .iter()
            .enumerate()
            .map(|(i, &j)| self.get(i, j))
            .sum()
    }
}
