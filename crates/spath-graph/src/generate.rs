//! Seeded random graph generators.
//!
//! Every generator is deterministic for a given configuration. Generators that assign positions
//! never give an edge a weight below the straight-line distance between its endpoints, which
//! keeps the Euclidean heuristic admissible and consistent on their output.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use spath_core::{Position, Vertex};
use tracing::warn;

use crate::Graph;

/// Largest grid side whose vertex count still fits in a [`Vertex`], `floor(sqrt(u32::MAX))`.
pub const MAX_SIDE: u32 = 65535;

/// Square lattice with random local edges and a few long-range shortcuts.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Number of vertices along each side.
    pub side: u32,
    /// Probability of joining two lattice neighbours.
    pub connect_prob: f64,
    pub seed: u64,
}

/// Directed graph with uniformly random endpoints and no positions.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomConfig {
    pub vertices: u32,
    /// Average out-degree before self-loops are discarded.
    pub edges_per_node: u32,
    pub seed: u64,
}

/// Directed graph of consecutive layers, laid out left to right.
#[derive(Clone, Debug, PartialEq)]
pub struct LayeredConfig {
    pub vertices: u32,
    pub layers: u32,
    pub seed: u64,
}

impl GridConfig {
    /// Largest square lattice with at most `vertices` vertices.
    pub fn with_vertices(vertices: u32) -> Self {
        GridConfig {
            side: (vertices as f64).sqrt() as u32,
            ..Self::default()
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            side: 10,
            connect_prob: 0.3,
            seed: 0,
        }
    }
}

impl Default for RandomConfig {
    fn default() -> Self {
        RandomConfig {
            vertices: 100,
            edges_per_node: 5,
            seed: 0,
        }
    }
}

impl Default for LayeredConfig {
    fn default() -> Self {
        LayeredConfig {
            vertices: 100,
            layers: 10,
            seed: 0,
        }
    }
}

fn at_least_distance(graph: &Graph<u32>, u: Vertex, v: Vertex, weight: f64) -> f64 {
    match (graph.position_of(u), graph.position_of(v)) {
        (Some(pu), Some(pv)) => weight.max(pu.euclidean(pv)),
        _ => weight,
    }
}

fn add_positioned(graph: &mut Graph<u32>, id: u32, position: Position) -> Vertex {
    match graph.add_vertex(id, Some(position)) {
        Ok(vertex) => vertex,
        // ids are fresh, so a position can never be reassigned here
        Err(_) => unreachable!("generator reassigned a position"),
    }
}

fn link(graph: &mut Graph<u32>, u: Vertex, v: Vertex, weight: f64, undirected: bool) {
    let (u, v) = (*graph.id(u), *graph.id(v));
    let result = if undirected {
        graph.add_undirected_edge(u, v, weight)
    } else {
        graph.add_edge(u, v, weight)
    };
    debug_assert!(result.is_ok(), "generator produced an invalid weight");
}

/// Generates a `side × side` lattice; vertex `x * side + y` sits at `(x, y)`.
pub fn grid(config: &GridConfig) -> Graph<u32> {
    let connect_prob = match config.connect_prob {
        p if p.is_nan() => 0.0,
        p => p.clamp(0.0, 1.0),
    };
    if connect_prob != config.connect_prob {
        warn!(requested = config.connect_prob, used = connect_prob, "connect_prob clamped");
    }

    let side = config.side.min(MAX_SIDE);
    if side != config.side {
        warn!(requested = config.side, used = side, "grid side clamped");
    }
    let n = side * side;
    let mut rng = Pcg64::seed_from_u64(config.seed);
    let mut graph = Graph::with_capacity(n as usize);

    for x in 0..side {
        for y in 0..side {
            add_positioned(&mut graph, x * side + y, Position::new(x as f64, y as f64));
        }
    }

    let at = |x: u32, y: u32| Vertex::from_index((x * side + y) as usize);
    for x in 0..side {
        for y in 0..side {
            let current = at(x, y);

            if y + 1 < side && rng.gen_bool(connect_prob) {
                let weight = 1.0 + rng.gen::<f64>() * 2.0;
                link(&mut graph, current, at(x, y + 1), weight, true);
            }

            if x + 1 < side && rng.gen_bool(connect_prob) {
                let weight = 1.0 + rng.gen::<f64>() * 2.0;
                link(&mut graph, current, at(x + 1, y), weight, true);
            }

            if x + 1 < side && y + 1 < side && rng.gen_bool(connect_prob / 2.0) {
                let neighbor = at(x + 1, y + 1);
                let weight = 1.414 + rng.gen::<f64>();
                let weight = at_least_distance(&graph, current, neighbor, weight);
                link(&mut graph, current, neighbor, weight, true);
            }
        }
    }

    if n > 0 {
        for _ in 0..n / 10 {
            let u = Vertex::from_index(rng.gen_range(0..n) as usize);
            let v = Vertex::from_index(rng.gen_range(0..n) as usize);
            if u == v || graph.edges(u).iter().any(|edge| edge.target == v) {
                continue;
            }
            let weight = at_least_distance(&graph, u, v, 0.0) * (0.8 + rng.gen::<f64>() * 0.4);
            let weight = at_least_distance(&graph, u, v, weight);
            link(&mut graph, u, v, weight, true);
        }
    }

    graph
}

/// Generates a directed graph with `vertices * edges_per_node` candidate edges.
pub fn random(config: &RandomConfig) -> Graph<u32> {
    let n = config.vertices;
    let mut rng = Pcg64::seed_from_u64(config.seed);
    let mut graph = Graph::with_capacity(n as usize);

    for id in 0..n {
        match graph.add_vertex(id, None) {
            Ok(_) => {}
            // no position is given, so nothing can be rejected
            Err(_) => unreachable!("generator vertex rejected"),
        }
    }
    if n < 2 {
        return graph;
    }

    for _ in 0..n as u64 * config.edges_per_node as u64 {
        let u = Vertex::from_index(rng.gen_range(0..n) as usize);
        let v = Vertex::from_index(rng.gen_range(0..n) as usize);
        if u != v {
            let weight = 1.0 + rng.gen::<f64>() * 9.0;
            link(&mut graph, u, v, weight, false);
        }
    }

    graph
}

/// Generates `layers` columns of vertices, each feeding forward into the next.
pub fn layered(config: &LayeredConfig) -> Graph<u32> {
    let n = config.vertices;
    let layers = config.layers.clamp(1, n.max(1));
    if layers != config.layers {
        warn!(requested = config.layers, used = layers, "layer count clamped");
    }

    let mut rng = Pcg64::seed_from_u64(config.seed);
    let mut graph = Graph::with_capacity(n as usize);
    if n == 0 {
        return graph;
    }

    let per_layer = n / layers;
    let layer_start = |layer: u32| layer * per_layer;
    let layer_len = |layer: u32| {
        if layer + 1 < layers {
            per_layer
        } else {
            n - layer * per_layer
        }
    };

    for layer in 0..layers {
        let len = layer_len(layer);
        for i in 0..len {
            let position = Position::new(layer as f64, i as f64 - len as f64 / 2.0);
            add_positioned(&mut graph, layer_start(layer) + i, position);
        }
    }

    for layer in 0..layers.saturating_sub(1) {
        let next_start = layer_start(layer + 1);
        let next_len = layer_len(layer + 1);
        for i in 0..layer_len(layer) {
            let u = Vertex::from_index((layer_start(layer) + i) as usize);
            for _ in 0..rng.gen_range(1..=3) {
                let v = Vertex::from_index((next_start + rng.gen_range(0..next_len)) as usize);
                let weight = at_least_distance(&graph, u, v, 1.0 + rng.gen::<f64>() * 2.0);
                link(&mut graph, u, v, weight, false);
            }
        }
    }

    for layer in 0..layers {
        let start = layer_start(layer);
        let len = layer_len(layer);
        for i in 0..len {
            let u = Vertex::from_index((start + i) as usize);
            for _ in 0..rng.gen_range(0..=2) {
                let v = Vertex::from_index((start + rng.gen_range(0..len)) as usize);
                if u != v {
                    let weight = at_least_distance(&graph, u, v, 0.5 + rng.gen::<f64>() * 1.5);
                    link(&mut graph, u, v, weight, false);
                }
            }
        }
    }

    graph
}
