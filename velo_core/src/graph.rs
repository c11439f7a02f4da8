use std::path::Path;

use rand::{Rng, seq::SliceRandom};
use tracing::debug;

use crate::{
    VertexId, Weight,
    adjacency::AdjacencyMatrix,
    client::ClientVertex,
    error::GraphError,
    io::{self, ClientRecord, EdgeRecord},
    vehicle::{FleetGroup, Vehicle},
    warehouse::WarehouseVertex,
};

/// Read-only problem instance: clients with their demands, warehouses with
/// their fleets and the symmetric travel weights between all of them.
///
/// Loaded once per optimization run; the search only ever reads it.
pub struct Graph {
    clients: Vec<ClientVertex>,
    warehouses: Vec<WarehouseVertex>,
    weights: AdjacencyMatrix,
    unit_scale: i64,
}

impl Graph {
    pub fn builder(num_vertices: usize, num_warehouses: usize) -> GraphBuilder {
        GraphBuilder::new(num_vertices, num_warehouses)
    }

    pub fn get_weight(&self, u: VertexId, v: VertexId) -> Result<Weight, GraphError> {
        self.weights.get(u, v)
    }

    pub fn get_vertex(&self, vertex: VertexId) -> Result<&ClientVertex, GraphError> {
        if vertex < 1 || vertex as usize > self.clients.len() {
            return Err(GraphError::UnknownVertex(vertex));
        }

        Ok(&self.clients[vertex as usize - 1])
    }

    pub fn get_client_vertices_len(&self) -> usize {
        self.clients.len()
    }

    pub fn clients(&self) -> &[ClientVertex] {
        &self.clients
    }

    pub fn warehouses(&self) -> &[WarehouseVertex] {
        &self.warehouses
    }

    /// Multiplier converting abstract demand units into vehicle capacity
    /// units: 1 for the plain variant, 5 when discharged batteries ride
    /// along.
    pub fn unit_scale(&self) -> i64 {
        self.unit_scale
    }

    /// A fresh random visiting order over all client vertices.
    pub fn get_vertices_permutation<R>(&self, rng: &mut R) -> Vec<VertexId>
    where
        R: Rng,
    {
        let mut permutation: Vec<VertexId> = (1..=self.clients.len() as VertexId).collect();
        permutation.shuffle(rng);
        permutation
    }

    /// The warehouse with the minimum edge weight to the given client.
    /// Recomputed per call: different routes of one evaluation may start
    /// from different warehouses.
    pub fn get_closest_warehouse(&self, vertex: VertexId) -> Result<&WarehouseVertex, GraphError> {
        let mut closest: Option<(&WarehouseVertex, Weight)> = None;

        for warehouse in &self.warehouses {
            let weight = self.get_weight(warehouse.index(), vertex)?;

            if closest.is_none_or(|(_, best)| weight < best) {
                closest = Some((warehouse, weight));
            }
        }

        closest
            .map(|(warehouse, _)| warehouse)
            .ok_or(GraphError::MissingWarehouse)
    }
}

pub struct GraphBuilder {
    num_vertices: usize,
    num_warehouses: usize,
    fleet: Vec<FleetGroup>,
    unit_scale: i64,
    edges: Vec<EdgeRecord>,
    clients: Vec<ClientRecord>,
}

impl GraphBuilder {
    pub fn new(num_vertices: usize, num_warehouses: usize) -> Self {
        GraphBuilder {
            num_vertices,
            num_warehouses,
            fleet: Vec::new(),
            unit_scale: 1,
            edges: Vec::new(),
            clients: Vec::new(),
        }
    }

    pub fn with_fleet(mut self, fleet: Vec<FleetGroup>) -> Self {
        self.fleet = fleet;
        self
    }

    pub fn with_unit_scale(mut self, unit_scale: i64) -> Self {
        self.unit_scale = unit_scale;
        self
    }

    pub fn with_edges(mut self, edges: Vec<EdgeRecord>) -> Self {
        self.edges = edges;
        self
    }

    pub fn with_clients(mut self, clients: Vec<ClientRecord>) -> Self {
        self.clients = clients;
        self
    }

    pub fn edges_from_file(self, path: &Path) -> Result<Self, GraphError> {
        let edges = io::read_edges(path)?;
        Ok(self.with_edges(edges))
    }

    pub fn clients_from_file(self, path: &Path) -> Result<Self, GraphError> {
        let clients = io::read_clients(path)?;
        Ok(self.with_clients(clients))
    }

    pub fn build(self) -> Result<Graph, GraphError> {
        if self.num_vertices < 2 {
            return Err(GraphError::TooFewVertices);
        }
        if self.num_warehouses < 1 {
            return Err(GraphError::MissingWarehouse);
        }
        if self.num_warehouses > self.num_vertices - 1 {
            return Err(GraphError::MissingClient);
        }
        if self.fleet.is_empty() || self.fleet.iter().all(|group| group.count == 0) {
            return Err(GraphError::EmptyFleet);
        }
        if let Some(group) = self.fleet.iter().find(|group| group.capacity <= 0) {
            return Err(GraphError::InvalidVehicleCapacity(group.capacity));
        }

        let num_clients = self.num_vertices - self.num_warehouses;
        if self.clients.len() != num_clients {
            return Err(GraphError::ClientCountMismatch {
                expected: num_clients,
                found: self.clients.len(),
            });
        }

        let mut weights = AdjacencyMatrix::new(self.num_vertices, self.num_warehouses);
        for edge in &self.edges {
            weights.insert(edge.u, edge.v, edge.weight)?;
        }

        // Completeness: every distinct pair must carry a real weight.
        let vertex_ids: Vec<VertexId> = weights.vertex_ids().collect();
        for (position, &u) in vertex_ids.iter().enumerate() {
            for &v in &vertex_ids[position + 1..] {
                if let Err(GraphError::NoEdgeFound { .. }) = weights.get(u, v) {
                    return Err(GraphError::IncompleteGraph { u, v });
                }
            }
        }

        let clients: Vec<ClientVertex> = self
            .clients
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                ClientVertex::new(
                    idx as VertexId + 1,
                    record.capacity,
                    record.stored,
                    record.discharged,
                )
            })
            .collect();

        // Every warehouse shares the same fleet description.
        let fleet: Vec<Vehicle> = self
            .fleet
            .iter()
            .flat_map(|group| {
                std::iter::repeat_n(Vehicle::new(group.capacity * self.unit_scale), group.count)
            })
            .collect();

        let warehouses: Vec<WarehouseVertex> = (-(self.num_warehouses as VertexId) + 1..=0)
            .map(|index| WarehouseVertex::new(index, fleet.clone()))
            .collect();

        // Precondition: a client no vehicle can ever serve alone would make
        // the route partitioner redraw vehicles forever.
        let max_capacity = warehouses
            .iter()
            .map(WarehouseVertex::max_vehicle_capacity)
            .max()
            .unwrap_or(0);

        for client in &clients {
            let demand = client.demand();
            if demand.abs() * self.unit_scale + client.discharged() > max_capacity {
                return Err(GraphError::InfeasibleClient {
                    client: client.index(),
                    demand,
                });
            }
        }

        debug!(
            clients = clients.len(),
            warehouses = warehouses.len(),
            vehicles_per_warehouse = fleet.len(),
            "graph built"
        );

        Ok(Graph {
            clients,
            warehouses,
            weights,
            unit_scale: self.unit_scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;

    fn edge(u: VertexId, v: VertexId, weight: Weight) -> EdgeRecord {
        EdgeRecord { u, v, weight }
    }

    fn client(capacity: i64, stored: i64) -> ClientRecord {
        ClientRecord {
            capacity,
            stored,
            discharged: 0,
        }
    }

    fn small_graph() -> Graph {
        // One warehouse (0), three clients (1..=3).
        Graph::builder(4, 1)
            .with_fleet(vec![FleetGroup::new(2, 10)])
            .with_edges(vec![
                edge(0, 1, 1.0),
                edge(0, 2, 2.0),
                edge(0, 3, 3.0),
                edge(1, 2, 1.5),
                edge(1, 3, 2.5),
                edge(2, 3, 1.2),
            ])
            .with_clients(vec![client(5, 2), client(2, 5), client(4, 4)])
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_and_query() {
        let graph = small_graph();

        assert_eq!(graph.get_client_vertices_len(), 3);
        assert_eq!(graph.get_weight(1, 2).unwrap(), 1.5);
        assert_eq!(graph.get_weight(2, 1).unwrap(), 1.5);
        assert_eq!(graph.get_vertex(1).unwrap().demand(), 3);
        assert_eq!(graph.get_vertex(2).unwrap().demand(), -3);
    }

    #[test]
    fn test_unknown_vertex() {
        let graph = small_graph();

        assert!(matches!(
            graph.get_vertex(9),
            Err(GraphError::UnknownVertex(9))
        ));
        assert!(matches!(
            graph.get_vertex(0),
            Err(GraphError::UnknownVertex(0))
        ));
    }

    #[test]
    fn test_incomplete_graph_rejected() {
        let result = Graph::builder(3, 1)
            .with_fleet(vec![FleetGroup::new(1, 10)])
            .with_edges(vec![edge(0, 1, 1.0), edge(0, 2, 2.0)])
            .with_clients(vec![client(1, 0), client(0, 1)])
            .build();

        assert!(matches!(
            result,
            Err(GraphError::IncompleteGraph { u: 1, v: 2 })
        ));
    }

    #[test]
    fn test_too_few_vertices() {
        let result = Graph::builder(1, 1).build();
        assert!(matches!(result, Err(GraphError::TooFewVertices)));
    }

    #[test]
    fn test_warehouse_only_graph_rejected() {
        let result = Graph::builder(2, 2).build();
        assert!(matches!(result, Err(GraphError::MissingClient)));
    }

    #[test]
    fn test_infeasible_client_rejected() {
        // Client 1 has demand 9, the only vehicle has capacity 3.
        let result = Graph::builder(2, 1)
            .with_fleet(vec![FleetGroup::new(1, 3)])
            .with_edges(vec![edge(0, 1, 1.0)])
            .with_clients(vec![client(9, 0)])
            .build();

        assert!(matches!(
            result,
            Err(GraphError::InfeasibleClient {
                client: 1,
                demand: 9
            })
        ));
    }

    #[test]
    fn test_closest_warehouse() {
        // Two warehouses (-1, 0), two clients (1, 2).
        let graph = Graph::builder(4, 2)
            .with_fleet(vec![FleetGroup::new(1, 10)])
            .with_edges(vec![
                edge(-1, 0, 1.0),
                edge(-1, 1, 5.0),
                edge(-1, 2, 1.0),
                edge(0, 1, 2.0),
                edge(0, 2, 4.0),
                edge(1, 2, 3.0),
            ])
            .with_clients(vec![client(1, 0), client(0, 1)])
            .build()
            .unwrap();

        assert_eq!(graph.get_closest_warehouse(1).unwrap().index(), 0);
        assert_eq!(graph.get_closest_warehouse(2).unwrap().index(), -1);
    }

    #[test]
    fn test_vertices_permutation_is_a_permutation() {
        let graph = small_graph();
        let mut rng = SmallRng::seed_from_u64(11);

        let mut permutation = graph.get_vertices_permutation(&mut rng);
        permutation.sort_unstable();

        assert_eq!(permutation, vec![1, 2, 3]);
    }

    #[test]
    fn test_unit_scale_scales_fleet() {
        let graph = Graph::builder(2, 1)
            .with_unit_scale(5)
            .with_fleet(vec![FleetGroup::new(1, 4)])
            .with_edges(vec![edge(0, 1, 1.0)])
            .with_clients(vec![client(3, 0)])
            .build()
            .unwrap();

        assert_eq!(graph.warehouses()[0].fleet()[0].capacity(), 20);
        assert_eq!(graph.unit_scale(), 5);
    }
}
