//! All-pairs shortest paths (Floyd-Warshall)
//!
//! Classic O(V^3) triple loop over the intermediate vertex k. Input and
//! output are [`CostMatrix`] values; an infinite entry in the result
//! means the pair is not connected.

use crate::graph::matrix::CostMatrix;

/// Compute the complete all-pairs shortest-distance matrix
#[tracing::instrument(skip(matrix), fields(n = matrix.len()))]
pub fn floyd_warshall(matrix: &CostMatrix) -> CostMatrix {
    let n = matrix.len();
    let mut dist = matrix.clone();

    for k in 0..n {
        for i in 0..n {
            let dik = dist.get(i, k);
            if dik.is_infinite() {
                continue;
            }
            for j in 0..n {
                let alt = dik + dist.get(k, j);
                if alt < dist.get(i, j) {
                    dist.set(i, j, alt);
                }
            }
        }
    }

    dist
}
