use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Iteration and wall-clock bounds for the restart/annealing loops.
///
/// The time limit is a soft ceiling: it is checked between iterations only,
/// an in-flight evaluation is never interrupted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchBudget {
    pub num_iterations: usize,
    pub time_limit: Duration,
}

impl SearchBudget {
    pub fn new(num_iterations: usize, time_limit: Duration) -> Self {
        SearchBudget {
            num_iterations,
            time_limit,
        }
    }

    /// An unbounded wall clock, iterations only.
    pub fn iterations(num_iterations: usize) -> Self {
        SearchBudget {
            num_iterations,
            time_limit: Duration::MAX,
        }
    }

    pub(crate) fn timer(&self) -> BudgetTimer {
        BudgetTimer {
            start: Instant::now(),
            time_limit: self.time_limit,
        }
    }
}

pub(crate) struct BudgetTimer {
    start: Instant,
    time_limit: Duration,
}

impl BudgetTimer {
    pub(crate) fn expired(&self) -> bool {
        self.start.elapsed() >= self.time_limit
    }
}
