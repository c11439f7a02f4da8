use velo_core::{
    VertexId,
    graph::Graph,
    io::{ClientRecord, EdgeRecord},
    vehicle::FleetGroup,
};

pub fn complete_edges(num_vertices: usize, num_warehouses: usize) -> Vec<EdgeRecord> {
    let shift = num_warehouses as VertexId - 1;
    let mut edges = Vec::new();

    for u in 0..num_vertices {
        for v in (u + 1)..num_vertices {
            // Deterministic but uneven weights.
            let weight = 1.0 + ((u * 7 + v * 13) % 10) as f64;
            edges.push(EdgeRecord {
                u: u as VertexId - shift,
                v: v as VertexId - shift,
                weight,
            });
        }
    }

    edges
}

pub fn client(capacity: i64, stored: i64) -> ClientRecord {
    ClientRecord {
        capacity,
        stored,
        discharged: 0,
    }
}

/// Base variant: two warehouses, six clients, mixed fleet, unit scale 1.
pub fn base_graph() -> Graph {
    Graph::builder(8, 2)
        .with_fleet(vec![FleetGroup::new(3, 6), FleetGroup::new(1, 12)])
        .with_edges(complete_edges(8, 2))
        .with_clients(vec![
            client(5, 0),
            client(0, 4),
            client(7, 2),
            client(3, 3),
            client(1, 6),
            client(8, 0),
        ])
        .build()
        .unwrap()
}

/// Battery variant: unit scale 5 and discharged units on some clients.
pub fn battery_graph() -> Graph {
    Graph::builder(6, 1)
        .with_unit_scale(5)
        .with_fleet(vec![FleetGroup::new(2, 4), FleetGroup::new(1, 8)])
        .with_edges(complete_edges(6, 1))
        .with_clients(vec![
            ClientRecord {
                capacity: 3,
                stored: 0,
                discharged: 4,
            },
            ClientRecord {
                capacity: 0,
                stored: 2,
                discharged: 0,
            },
            ClientRecord {
                capacity: 2,
                stored: 2,
                discharged: 9,
            },
            ClientRecord {
                capacity: 4,
                stored: 1,
                discharged: 2,
            },
            ClientRecord {
                capacity: 0,
                stored: 3,
                discharged: 5,
            },
        ])
        .build()
        .unwrap()
}
