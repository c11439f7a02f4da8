use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use rand::Rng;

use crate::{VertexId, Weight, error::GraphError};

/// One `u, v, weight` line of an edge file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRecord {
    pub u: VertexId,
    pub v: VertexId,
    pub weight: Weight,
}

/// One client line of a vertex file: `capacity, stored` in the base format,
/// `discharged, capacity, stored` in the battery-aware format. Clients are
/// indexed by line order, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientRecord {
    pub capacity: i64,
    pub stored: i64,
    pub discharged: i64,
}

fn malformed(line: usize, content: &str) -> GraphError {
    GraphError::MalformedRecord {
        line,
        content: content.to_string(),
    }
}

pub fn read_edges(path: &Path) -> Result<Vec<EdgeRecord>, GraphError> {
    let reader = BufReader::new(File::open(path)?);
    let mut edges = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(malformed(idx + 1, &line));
        }

        let u = fields[0].parse().map_err(|_| malformed(idx + 1, &line))?;
        let v = fields[1].parse().map_err(|_| malformed(idx + 1, &line))?;
        let weight = fields[2].parse().map_err(|_| malformed(idx + 1, &line))?;

        edges.push(EdgeRecord { u, v, weight });
    }

    Ok(edges)
}

pub fn read_clients(path: &Path) -> Result<Vec<ClientRecord>, GraphError> {
    let reader = BufReader::new(File::open(path)?);
    let mut clients = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<i64> = line
            .split(',')
            .map(|field| field.trim().parse())
            .collect::<Result<_, _>>()
            .map_err(|_| malformed(idx + 1, &line))?;

        let record = match fields.as_slice() {
            [capacity, stored] => ClientRecord {
                capacity: *capacity,
                stored: *stored,
                discharged: 0,
            },
            [discharged, capacity, stored] => ClientRecord {
                capacity: *capacity,
                stored: *stored,
                discharged: *discharged,
            },
            _ => return Err(malformed(idx + 1, &line)),
        };

        clients.push(record);
    }

    Ok(clients)
}

pub fn write_edges(path: &Path, edges: &[EdgeRecord]) -> Result<(), GraphError> {
    let mut writer = BufWriter::new(File::create(path)?);

    for edge in edges {
        writeln!(writer, "{}, {}, {}", edge.u, edge.v, edge.weight)?;
    }

    Ok(())
}

pub fn write_clients(path: &Path, clients: &[ClientRecord]) -> Result<(), GraphError> {
    let mut writer = BufWriter::new(File::create(path)?);

    for client in clients {
        if client.discharged > 0 {
            writeln!(
                writer,
                "{}, {}, {}",
                client.discharged, client.capacity, client.stored
            )?;
        } else {
            writeln!(writer, "{}, {}", client.capacity, client.stored)?;
        }
    }

    Ok(())
}

/// Generates a complete set of edges over all vertex pairs with weights
/// uniform in `weight_range`, rounded to 2 decimal places.
pub fn generate_edges<R>(
    num_vertices: usize,
    num_warehouses: usize,
    weight_range: (Weight, Weight),
    rng: &mut R,
) -> Vec<EdgeRecord>
where
    R: Rng,
{
    let shift = num_warehouses as VertexId - 1;
    let (min_weight, max_weight) = weight_range;
    let mut edges = Vec::with_capacity(num_vertices * num_vertices.saturating_sub(1) / 2);

    for u in 0..num_vertices {
        for v in (u + 1)..num_vertices {
            let weight = (rng.random_range(min_weight..max_weight) * 100.0).round() / 100.0;
            edges.push(EdgeRecord {
                u: u as VertexId - shift,
                v: v as VertexId - shift,
                weight,
            });
        }
    }

    edges
}

/// Generates client records with capacity and stored units uniform in
/// `unit_range`, no discharged units.
pub fn generate_clients<R>(
    num_clients: usize,
    unit_range: (i64, i64),
    rng: &mut R,
) -> Vec<ClientRecord>
where
    R: Rng,
{
    let (min_units, max_units) = unit_range;

    (0..num_clients)
        .map(|_| ClientRecord {
            capacity: rng.random_range(min_units..=max_units),
            stored: rng.random_range(min_units..=max_units),
            discharged: 0,
        })
        .collect()
}
