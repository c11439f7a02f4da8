use rand::rngs::SmallRng;
use tracing::debug;
use velo_core::{VertexId, error::GraphError, graph::Graph};

use crate::evaluation::{evaluate_permutation, evaluate_record};
use crate::neighborhood::Neighborhood;
use crate::solution::SolutionRecord;

/// One best-improvement pass over the full neighborhood of a permutation.
///
/// Every neighbor is evaluated and compared against the running best; the
/// pass stops when the neighborhood is exhausted. The result is not
/// necessarily a local optimum: improving neighbors of neighbors are not
/// followed.
pub fn descent(
    graph: &Graph,
    neighborhood: Neighborhood,
    initial: Option<Vec<VertexId>>,
    rng: &mut SmallRng,
) -> Result<SolutionRecord, GraphError> {
    let permutation = match initial {
        Some(permutation) => permutation,
        None => graph.get_vertices_permutation(rng),
    };

    let candidates = neighborhood.generate(&permutation);
    let mut best = evaluate_record(graph, permutation, rng)?;

    debug!(
        start_cost = best.cost,
        candidates = candidates.len(),
        "descent pass"
    );

    for candidate in candidates {
        let evaluation = evaluate_permutation(graph, &candidate, rng)?;

        if evaluation.cost < best.cost {
            best = SolutionRecord::new(candidate, evaluation);
        }
    }

    debug!(end_cost = best.cost, "descent pass finished");

    Ok(best)
}
