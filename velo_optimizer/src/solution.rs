use serde::{Deserialize, Serialize};
use velo_core::VertexId;

use crate::evaluation::Evaluation;
use crate::feasibility::RouteLoad;

/// One vehicle journey: the same warehouse index bookends an ordered client
/// visit sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    stops: Vec<VertexId>,
}

impl Route {
    pub fn bookended(warehouse: VertexId, clients: &[VertexId]) -> Self {
        let mut stops = Vec::with_capacity(clients.len() + 2);
        stops.push(warehouse);
        stops.extend_from_slice(clients);
        stops.push(warehouse);

        Route { stops }
    }

    pub fn stops(&self) -> &[VertexId] {
        &self.stops
    }

    pub fn warehouse(&self) -> VertexId {
        self.stops[0]
    }

    /// The visited clients, without the warehouse bookends.
    pub fn clients(&self) -> &[VertexId] {
        &self.stops[1..self.stops.len() - 1]
    }
}

/// An evaluated solution: the raw permutation plus everything the evaluator
/// derived from it. Replaced wholesale whenever a search finds a better one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionRecord {
    pub permutation: Vec<VertexId>,
    pub cost: f64,
    pub routes: Vec<Route>,
    pub vehicle_capacities: Vec<i64>,
    pub initial_loads: Vec<RouteLoad>,
}

impl SolutionRecord {
    pub fn new(permutation: Vec<VertexId>, evaluation: Evaluation) -> Self {
        SolutionRecord {
            permutation,
            cost: evaluation.cost,
            routes: evaluation.routes,
            vehicle_capacities: evaluation.vehicle_capacities,
            initial_loads: evaluation.initial_loads,
        }
    }
}
