use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};
use velo_core::{graph::Graph, io, vehicle::FleetGroup};
use velo_optimizer::{
    evaluation::evaluate_permutation,
    neighborhood::{insert_neighborhood, swap_neighborhood},
};

fn bench_graph(num_clients: usize) -> Graph {
    let num_vertices = num_clients + 2;
    let mut rng = SmallRng::seed_from_u64(404);

    let edges = io::generate_edges(num_vertices, 2, (1.0, 10.0), &mut rng);
    let clients = io::generate_clients(num_clients, (0, 10), &mut rng);

    Graph::builder(num_vertices, 2)
        .with_fleet(vec![FleetGroup::new(4, 12), FleetGroup::new(2, 20)])
        .with_edges(edges)
        .with_clients(clients)
        .build()
        .expect("bench graph must be valid")
}

fn evaluation_benchmark(c: &mut Criterion) {
    let graph = bench_graph(30);
    let mut rng = SmallRng::seed_from_u64(7);
    let permutation = graph.get_vertices_permutation(&mut rng);

    c.bench_function("evaluate_permutation 30 clients", |b| {
        b.iter(|| evaluate_permutation(black_box(&graph), black_box(&permutation), &mut rng))
    });
}

fn neighborhood_benchmark(c: &mut Criterion) {
    let graph = bench_graph(30);
    let mut rng = SmallRng::seed_from_u64(7);
    let permutation = graph.get_vertices_permutation(&mut rng);

    c.bench_function("insert_neighborhood 30 clients", |b| {
        b.iter(|| insert_neighborhood(black_box(&permutation)))
    });

    c.bench_function("swap_neighborhood 30 clients", |b| {
        b.iter(|| swap_neighborhood(black_box(&permutation)))
    });
}

criterion_group!(benches, evaluation_benchmark, neighborhood_benchmark);
criterion_main!(benches);
