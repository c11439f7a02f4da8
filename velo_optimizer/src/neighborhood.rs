use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};
use velo_core::VertexId;

/// Which single-move neighborhood the local searches explore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Neighborhood {
    Insert,
    Swap,
}

impl Neighborhood {
    pub fn generate(&self, solution: &[VertexId]) -> Vec<Vec<VertexId>> {
        match self {
            Neighborhood::Insert => insert_neighborhood(solution),
            Neighborhood::Swap => swap_neighborhood(solution),
        }
    }
}

/// All permutations reachable by removing one element and reinserting it at
/// another position. Distinct `(i, j)` pairs can produce the same
/// permutation, so the result is deduplicated; `(n - 1)^2` survive for a
/// permutation of length `n`. Output order is unspecified.
pub fn insert_neighborhood(solution: &[VertexId]) -> Vec<Vec<VertexId>> {
    let n = solution.len();
    let mut neighborhood: FxHashSet<Vec<VertexId>> = FxHashSet::default();

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }

            let mut neighbor = solution.to_vec();
            let moved = neighbor.remove(i);
            neighbor.insert(j, moved);
            neighborhood.insert(neighbor);
        }
    }

    neighborhood.into_iter().collect()
}

/// All permutations reachable by exchanging two elements. `swap(i, j)` and
/// `swap(j, i)` coincide, so `n(n - 1) / 2` distinct permutations survive
/// deduplication. Output order is unspecified.
pub fn swap_neighborhood(solution: &[VertexId]) -> Vec<Vec<VertexId>> {
    let n = solution.len();
    let mut neighborhood: FxHashSet<Vec<VertexId>> = FxHashSet::default();

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }

            let mut neighbor = solution.to_vec();
            neighbor.swap(i, j);
            neighborhood.insert(neighbor);
        }
    }

    neighborhood.into_iter().collect()
}
