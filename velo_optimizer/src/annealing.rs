use rand::{Rng, rngs::SmallRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use velo_core::{error::GraphError, graph::Graph};

use crate::budget::SearchBudget;
use crate::evaluation::{evaluate_permutation, evaluate_record};
use crate::neighborhood::Neighborhood;
use crate::solution::SolutionRecord;

/// Geometric cooling between two temperatures, tuned so that after exactly
/// `num_iterations - 1` cooling steps the final temperature is reached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnnealingSchedule {
    pub initial_temperature: f64,
    pub final_temperature: f64,
}

impl AnnealingSchedule {
    pub fn new(initial_temperature: f64, final_temperature: f64) -> Self {
        AnnealingSchedule {
            initial_temperature,
            final_temperature,
        }
    }

    fn beta(&self, num_iterations: usize) -> f64 {
        if num_iterations <= 1 {
            // No cooling step will ever run.
            return 0.0;
        }

        (self.initial_temperature - self.final_temperature)
            / ((num_iterations - 1) as f64 * self.initial_temperature * self.final_temperature)
    }

    fn cool(&self, temperature: f64, beta: f64) -> f64 {
        temperature / (1.0 + beta * temperature)
    }
}

/// Best-ever record plus the cost of every accepted transition, in
/// acceptance order.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealingOutcome {
    pub best: SolutionRecord,
    pub accepted: Vec<f64>,
}

/// Simulated annealing over the full insertion or swap neighborhood.
///
/// Each iteration walks every neighbor of the current permutation and
/// accepts it with probability `exp((current - neighbor) / temperature)`;
/// a probability of one or more always passes. Acceptance overwrites the
/// moving current immediately, so later neighbors of the same iteration are
/// compared against the drifted state, not the iteration's starting point.
/// The best record ever seen is tracked separately: it is seeded from the
/// starting permutation and updated on every acceptance, so an improvement
/// the current drifts away from uphill is still kept.
pub fn simulated_annealing(
    graph: &Graph,
    budget: SearchBudget,
    schedule: AnnealingSchedule,
    neighborhood: Neighborhood,
    rng: &mut SmallRng,
) -> Result<AnnealingOutcome, GraphError> {
    let beta = schedule.beta(budget.num_iterations);
    let mut temperature = schedule.initial_temperature;

    let mut permutation = graph.get_vertices_permutation(rng);
    let mut best = evaluate_record(graph, permutation.clone(), rng)?;
    let mut accepted = Vec::new();

    let timer = budget.timer();

    for iteration in 0..budget.num_iterations {
        if timer.expired() {
            debug!(iteration, "annealing time budget exhausted");
            break;
        }

        let candidates = neighborhood.generate(&permutation);
        let mut current = evaluate_record(graph, permutation, rng)?;

        for candidate in candidates {
            let evaluation = evaluate_permutation(graph, &candidate, rng)?;
            let probability = ((current.cost - evaluation.cost) / temperature).exp();

            if rng.random::<f64>() < probability {
                current = SolutionRecord::new(candidate, evaluation);
                accepted.push(current.cost);

                if current.cost < best.cost {
                    info!(iteration, cost = current.cost, "annealing improvement");
                    best = current.clone();
                }
            }
        }

        permutation = current.permutation;

        if iteration + 1 < budget.num_iterations {
            temperature = schedule.cool(temperature, beta);
        }
    }

    Ok(AnnealingOutcome { best, accepted })
}
