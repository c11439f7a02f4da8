use rand::rngs::SmallRng;
use velo_core::{VertexId, error::GraphError, graph::Graph};

use crate::feasibility::{RouteLoad, check_if_can_serve};
use crate::solution::{Route, SolutionRecord};

/// Everything the fitness function derives from one permutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub cost: f64,
    pub routes: Vec<Route>,
    pub vehicle_capacities: Vec<i64>,
    pub initial_loads: Vec<RouteLoad>,
}

struct OpenRoute {
    begin: usize,
    end: usize,
    load: RouteLoad,
}

/// Partitions a client permutation into feasible warehouse-bookended routes
/// and sums their travel cost.
///
/// A window over the permutation grows while the currently drawn vehicle can
/// serve it. On the first failure the window up to the previous element
/// becomes a route; the failing element starts a new one from its own
/// closest warehouse with a freshly drawn vehicle. When the very first
/// element of a window is refused, only the vehicle is redrawn: the graph
/// guarantees at build time that some vehicle can serve any single client,
/// so the redraw terminates.
///
/// Deterministic in (permutation, graph) for a fixed rng seed; the only
/// randomness is the capacity-weighted vehicle draw.
pub fn evaluate_permutation(
    graph: &Graph,
    permutation: &[VertexId],
    rng: &mut SmallRng,
) -> Result<Evaluation, GraphError> {
    let mut routes: Vec<Route> = Vec::new();
    let mut vehicle_capacities: Vec<i64> = Vec::new();
    let mut initial_loads: Vec<RouteLoad> = Vec::new();

    if permutation.is_empty() {
        return Ok(Evaluation {
            cost: 0.0,
            routes,
            vehicle_capacities,
            initial_loads,
        });
    }

    let mut solution_idx = 0;
    let mut solution_begin = 0;

    let mut warehouse = graph.get_closest_warehouse(permutation[0])?;
    let mut vehicle = warehouse.select_vehicle(rng);

    let mut open: Option<OpenRoute> = None;

    while solution_idx < permutation.len() {
        let window = &permutation[solution_begin..=solution_idx];

        match check_if_can_serve(graph, window, vehicle)? {
            Some(load) => {
                if open.is_none() {
                    vehicle_capacities.push(vehicle.capacity());
                }

                open = Some(OpenRoute {
                    begin: solution_begin,
                    end: solution_idx + 1,
                    load,
                });
                solution_idx += 1;
            }
            None => {
                solution_begin = solution_idx;

                if let Some(route) = open.take() {
                    routes.push(Route::bookended(
                        warehouse.index(),
                        &permutation[route.begin..route.end],
                    ));
                    initial_loads.push(route.load);

                    warehouse = graph.get_closest_warehouse(permutation[solution_begin])?;
                }

                vehicle = warehouse.select_vehicle(rng);
            }
        }
    }

    if let Some(route) = open {
        routes.push(Route::bookended(
            warehouse.index(),
            &permutation[route.begin..route.end],
        ));
        initial_loads.push(route.load);
    }

    let cost = total_cost(graph, &routes)?;

    Ok(Evaluation {
        cost,
        routes,
        vehicle_capacities,
        initial_loads,
    })
}

/// Evaluates and packages the result together with the permutation.
pub fn evaluate_record(
    graph: &Graph,
    permutation: Vec<VertexId>,
    rng: &mut SmallRng,
) -> Result<SolutionRecord, GraphError> {
    let evaluation = evaluate_permutation(graph, &permutation, rng)?;
    Ok(SolutionRecord::new(permutation, evaluation))
}

/// Sum of consecutive edge weights over all routes, rounded to 2 decimal
/// places.
pub fn total_cost(graph: &Graph, routes: &[Route]) -> Result<f64, GraphError> {
    let mut cost = 0.0;

    for route in routes {
        let stops = route.stops();
        for pair in stops.windows(2) {
            cost += graph.get_weight(pair[0], pair[1])?;
        }
    }

    Ok((cost * 100.0).round() / 100.0)
}
