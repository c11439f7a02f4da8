use crate::{VertexId, Weight, error::GraphError};

/// Symmetric edge weights over all vertices, stored flat. To find the slot
/// for a pair of vertices, both indices are shifted by `num_warehouses - 1`
/// so that the most negative warehouse index lands on row zero, then
/// `row * num_vertices + column` addresses the weight.
///
/// A stored weight of exactly zero is the "no edge" sentinel; looking such a
/// pair up is an error, never a free hop.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    weights: Vec<Weight>,
    num_vertices: usize,
    num_warehouses: usize,
}

impl AdjacencyMatrix {
    pub fn new(num_vertices: usize, num_warehouses: usize) -> Self {
        AdjacencyMatrix {
            weights: vec![0.0; num_vertices * num_vertices],
            num_vertices,
            num_warehouses,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    fn contains(&self, vertex: VertexId) -> bool {
        let min = -(self.num_warehouses as VertexId) + 1;
        let max = (self.num_vertices - self.num_warehouses) as VertexId;
        (min..=max).contains(&vertex)
    }

    #[inline(always)]
    fn offset(&self, vertex: VertexId) -> usize {
        (vertex + self.num_warehouses as VertexId - 1) as usize
    }

    #[inline(always)]
    fn slot(&self, u: VertexId, v: VertexId) -> usize {
        self.offset(u) * self.num_vertices + self.offset(v)
    }

    fn check_bounds(&self, u: VertexId, v: VertexId) -> Result<(), GraphError> {
        if !self.contains(u) {
            return Err(GraphError::UnknownVertex(u));
        }
        if !self.contains(v) {
            return Err(GraphError::UnknownVertex(v));
        }
        Ok(())
    }

    pub fn insert(&mut self, u: VertexId, v: VertexId, weight: Weight) -> Result<(), GraphError> {
        self.check_bounds(u, v)?;

        if u == v {
            return Err(GraphError::SelfLoopEdge(u));
        }
        if weight <= 0.0 {
            return Err(GraphError::NonPositiveWeight { u, v, weight });
        }
        if self.weights[self.slot(u, v)] != 0.0 {
            return Err(GraphError::DuplicateEdge { u, v });
        }

        let forward = self.slot(u, v);
        let backward = self.slot(v, u);
        self.weights[forward] = weight;
        self.weights[backward] = weight;

        Ok(())
    }

    pub fn get(&self, u: VertexId, v: VertexId) -> Result<Weight, GraphError> {
        self.check_bounds(u, v)?;

        let weight = self.weights[self.slot(u, v)];
        if weight == 0.0 {
            return Err(GraphError::NoEdgeFound { u, v });
        }

        Ok(weight)
    }

    /// All vertex identifiers covered by the matrix, warehouses first.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        let min = -(self.num_warehouses as VertexId) + 1;
        let max = (self.num_vertices - self.num_warehouses) as VertexId;
        min..=max
    }
}
