use rand::rngs::SmallRng;
use tracing::{debug, info};
use velo_core::{error::GraphError, graph::Graph};

use crate::budget::SearchBudget;
use crate::descent::descent;
use crate::neighborhood::Neighborhood;
use crate::solution::SolutionRecord;

/// Best record across all restarts plus the cost of every restart that
/// improved on the running minimum.
#[derive(Debug, Clone, PartialEq)]
pub struct MultistartOutcome {
    pub best: SolutionRecord,
    pub improvements: Vec<f64>,
}

/// Random-restart descent: every iteration runs one full descent pass from a
/// fresh random permutation, never from the previous result.
///
/// The wall clock is checked at the top of each iteration, so the budget is
/// a soft ceiling. If the budget allowed no iteration at all, a single
/// descent pass still runs so that a record is always returned.
pub fn multistart_descent(
    graph: &Graph,
    budget: SearchBudget,
    neighborhood: Neighborhood,
    rng: &mut SmallRng,
) -> Result<MultistartOutcome, GraphError> {
    let timer = budget.timer();

    let mut best: Option<SolutionRecord> = None;
    let mut improvements = Vec::new();

    for iteration in 0..budget.num_iterations {
        if timer.expired() {
            debug!(iteration, "multistart time budget exhausted");
            break;
        }

        let candidate = descent(graph, neighborhood, None, rng)?;

        if best
            .as_ref()
            .is_none_or(|record| candidate.cost < record.cost)
        {
            info!(iteration, cost = candidate.cost, "multistart improvement");
            improvements.push(candidate.cost);
            best = Some(candidate);
        }
    }

    let best = match best {
        Some(record) => record,
        None => descent(graph, neighborhood, None, rng)?,
    };

    Ok(MultistartOutcome { best, improvements })
}
