//! Reduced cost matrix for branch-and-bound lower bounds
//!
//! An n*n matrix with `f64::INFINITY` standing for "no edge". Row
//! reduction subtracts each row's minimum from the row (rows whose
//! minimum is infinite are skipped), column reduction does the same per
//! column; the sum of subtracted minima is the matrix's contribution to
//! a branch's lower bound. Each branch node owns its own copy with the
//! rows, columns, and vertex pairs of its partial path masked to
//! infinity.

use crate::graph::matrix::CostMatrix;

const INF: f64 = f64::INFINITY;

#[derive(Debug, Clone)]
pub struct ReducedMatrix {
    n: usize,
    values: Vec<f64>,
}

impl ReducedMatrix {
    /// Copy a dense cost matrix, masking the diagonal (staying in place
    /// is never a tour move)
    pub fn from_cost_matrix(matrix: &CostMatrix) -> Self {
        let n = matrix.len();
        let mut values = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                values.push(if i == j { INF } else { matrix.get(i, j) });
            }
        }
        Self { n, values }
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    fn set(&mut self, i: usize, j: usize, value: f64) {
        self.values[i * self.n + j] = value;
    }

    /// Mask every cell of row `i` to infinity
    pub fn mask_row(&mut self, i: usize) {
        for j in 0..self.n {
            self.set(i, j, INF);
        }
    }

    /// Mask every cell of column `j` to infinity
    pub fn mask_col(&mut self, j: usize) {
        for i in 0..self.n {
            self.set(i, j, INF);
        }
    }

    /// Mask both directions between a visited pair
    pub fn mask_pair(&mut self, i: usize, j: usize) {
        self.set(i, j, INF);
        self.set(j, i, INF);
    }

    /// Row-reduce then column-reduce, returning the sum of subtracted
    /// minima. Rows and columns whose minimum is infinite contribute
    /// zero and are left untouched.
    pub fn reduce(&mut self) -> f64 {
        let mut total = 0.0;

        for i in 0..self.n {
            let row_min = (0..self.n).map(|j| self.get(i, j)).fold(INF, f64::min);
            if row_min.is_finite() && row_min > 0.0 {
                for j in 0..self.n {
                    let v = self.get(i, j);
                    if v.is_finite() {
                        self.set(i, j, v - row_min);
                    }
                }
            }
            if row_min.is_finite() {
                total += row_min;
            }
        }

        for j in 0..self.n {
            let col_min = (0..self.n).map(|i| self.get(i, j)).fold(INF, f64::min);
            if col_min.is_finite() && col_min > 0.0 {
                for i in 0..self.n {
                    let v = self.get(i, j);
                    if v.is_finite() {
                        self.set(i, j, v - col_min);
                    }
                }
            }
            if col_min.is_finite() {
                total += col_min;
            }
        }

        total
    }
}
