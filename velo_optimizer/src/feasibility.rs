use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use velo_core::{VertexId, error::GraphError, graph::Graph, vehicle::Vehicle};

type LoadVector = SmallVec<[i64; 32]>;

/// What a vehicle must carry when it leaves the warehouse to serve a route:
/// `initial_load` rebalancing units plus `discharged` units that occupy
/// capacity for the whole trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteLoad {
    pub initial_load: i64,
    pub discharged: i64,
}

/// Decides whether `window` can be served in order by `vehicle`, and with
/// which minimal initial load.
///
/// The vehicle has a single compartment: units picked up at surplus clients
/// and units still to be delivered share it. The walk tracks, per position,
/// how much headroom the deliveries so far have accumulated
/// (`current_loads`); a pickup larger than that headroom forces the vehicle
/// to have left the warehouse with the shortfall already on board, which is
/// what `initial_load` accumulates. A second pass replays the route from
/// that initial load and rejects any point where the vehicle would overflow.
///
/// Returns `Ok(None)` when no initial load makes the window serveable.
pub fn check_if_can_serve(
    graph: &Graph,
    window: &[VertexId],
    vehicle: &Vehicle,
) -> Result<Option<RouteLoad>, GraphError> {
    let unit_scale = graph.unit_scale();

    let mut discharged = 0;
    let mut demands: LoadVector = SmallVec::with_capacity(window.len());
    for &vertex in window {
        let client = graph.get_vertex(vertex)?;
        discharged += client.discharged();
        demands.push(client.demand());
    }

    // Discharged units ride along for the whole route, no initial load can
    // make room for them.
    if discharged > vehicle.capacity() {
        return Ok(None);
    }
    let headroom = vehicle.capacity() - discharged;

    let mut current_loads: LoadVector = smallvec![0; demands.len()];
    let mut initial_load = 0;

    for (idx, &demand) in demands.iter().enumerate() {
        if demand > 0 {
            if idx == 0 {
                current_loads[idx] = 0;
                initial_load = demand;
            } else {
                current_loads[idx] = (current_loads[idx - 1] - demand).max(0);

                let shortfall = demand - current_loads[idx - 1];
                if shortfall > 0 {
                    initial_load += shortfall;
                }
            }
        } else {
            let delivery = -demand;
            if idx == 0 {
                current_loads[idx] = delivery;
                initial_load = 0;
            } else {
                current_loads[idx] = current_loads[idx - 1] + delivery;
            }
        }
    }

    if current_loads
        .iter()
        .any(|&load| load * unit_scale > headroom)
    {
        return Ok(None);
    }

    // Replay the route from the computed initial load.
    let mut vehicle_load = initial_load * unit_scale;
    for &demand in &demands {
        if vehicle_load > headroom {
            return Ok(None);
        }
        vehicle_load -= demand * unit_scale;
    }

    Ok(Some(RouteLoad {
        initial_load,
        discharged,
    }))
}
