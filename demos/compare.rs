//! Compares Dijkstra and A* on a generated graph.
//!
//! `cargo run --release --example compare -- --nodes 10000 --kind grid --heuristic landmarks`

use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use spath::generate::{grid, layered, random, GridConfig, LayeredConfig, RandomConfig};
use spath::landmarks::DifferentialHeuristic;
use spath::{
    EuclideanHeuristic, Graph, Heuristic, ManhattanHeuristic, PathResult, PriorityQueue, Searcher,
    ZeroHeuristic,
};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Grid,
    Layered,
    Random,
}

#[derive(Clone, Copy, ValueEnum)]
enum Guide {
    Euclidean,
    /// Overestimates diagonal and shortcut edges, so A* may report worse costs.
    Manhattan,
    Landmarks,
}

#[derive(Parser)]
struct Options {
    /// Requested vertex count; grids round down to a square.
    #[arg(long, default_value_t = 1000)]
    nodes: u32,
    #[arg(long, value_enum, default_value_t = Kind::Grid)]
    kind: Kind,
    #[arg(long, value_enum, default_value_t = Guide::Euclidean)]
    heuristic: Guide,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Number of random start/goal pairs in addition to first-to-last.
    #[arg(long, default_value_t = 4)]
    pairs: u32,
    /// Worker threads; 0 lets rayon decide.
    #[arg(long, default_value_t = 0)]
    threads: usize,
    #[arg(short, long)]
    verbose: bool,
}

struct Row {
    start: u32,
    goal: u32,
    dijkstra: (PathResult<u32>, Duration),
    astar: (PathResult<u32>, Duration),
}

fn timed(f: impl FnOnce() -> PathResult<u32>) -> (PathResult<u32>, Duration) {
    let t = Instant::now();
    let result = f();
    (result, t.elapsed())
}

fn compare<H: Heuristic<u32> + Sync>(graph: &Graph<u32>, pairs: &[(u32, u32)], h: &H) -> Vec<Row> {
    pairs
        .par_iter()
        .map_init(Searcher::<PriorityQueue>::new, |searcher, &(start, goal)| {
            let dijkstra = timed(|| {
                searcher
                    .shortest_path(graph, &start, &goal, &ZeroHeuristic)
                    .unwrap()
            });
            let astar = timed(|| searcher.shortest_path(graph, &start, &goal, h).unwrap());
            Row {
                start,
                goal,
                dijkstra,
                astar,
            }
        })
        .collect()
}

fn main() {
    let opt = Options::parse();

    let level = if opt.verbose { "spath=debug" } else { "spath=warn" };
    let filter = EnvFilter::try_from_env("SPATH_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if opt.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(opt.threads)
            .build_global()
            .unwrap();
    }

    let t1 = Instant::now();
    let graph = match opt.kind {
        Kind::Grid => grid(&GridConfig {
            seed: opt.seed,
            ..GridConfig::with_vertices(opt.nodes)
        }),
        Kind::Layered => layered(&LayeredConfig {
            vertices: opt.nodes,
            seed: opt.seed,
            ..LayeredConfig::default()
        }),
        Kind::Random => random(&RandomConfig {
            vertices: opt.nodes,
            seed: opt.seed,
            ..RandomConfig::default()
        }),
    };
    if graph.vertex_count() == 0 {
        eprintln!("graph is empty");
        return;
    }
    println!(
        "{} vertices, {} arcs",
        graph.vertex_count(),
        graph.edge_count()
    );

    let n = graph.vertex_count() as u32;
    let mut pairs = vec![(0, n - 1)];
    pairs.extend((0..opt.pairs).map(|i| {
        let i = i as u64 + 1;
        ((i * 7919 % n as u64) as u32, (i * 104729 % n as u64) as u32)
    }));

    let t2 = Instant::now();
    let rows = match opt.heuristic {
        Guide::Euclidean | Guide::Manhattan if !graph.has_all_positions() => {
            eprintln!("graph has no positions; use --heuristic landmarks");
            return;
        }
        Guide::Euclidean => compare(&graph, &pairs, &EuclideanHeuristic::new()),
        Guide::Manhattan => compare(&graph, &pairs, &ManhattanHeuristic::new()),
        Guide::Landmarks => {
            // grids are the only undirected kind
            let dh = match opt.kind {
                Kind::Grid => DifferentialHeuristic::<8>::calculate_symmetric(&graph, opt.seed),
                Kind::Layered | Kind::Random => {
                    DifferentialHeuristic::<8>::calculate(&graph, opt.seed)
                }
            };
            let dh = dh.unwrap();
            compare(&graph, &pairs, &dh)
        }
    };
    let t3 = Instant::now();

    println!(
        "{:>7} {:>7} {:>10} {:>9} {:>9} {:>7} {:>10} {:>10}",
        "start", "goal", "cost", "dijkstra", "a*", "saved", "t dijkstra", "t a*"
    );
    for row in &rows {
        let (d, dt) = &row.dijkstra;
        let (a, at) = &row.astar;
        if d.cost != a.cost && (d.cost - a.cost).abs() > 1e-9 {
            eprintln!(
                "warning: costs differ for {} -> {}: dijkstra {} a* {}",
                row.start, row.goal, d.cost, a.cost
            );
        }
        let saved = match d.stats.expanded {
            0 => 0.0,
            e => (e as f64 - a.stats.expanded as f64) / e as f64 * 100.0,
        };
        println!(
            "{:>7} {:>7} {:>10.3} {:>9} {:>9} {:>6.1}% {:>10.2?} {:>10.2?}",
            row.start, row.goal, d.cost, d.stats.expanded, a.stats.expanded, saved, dt, at
        );
    }

    eprintln!("Generate: {:<10.2?} Search: {:.2?}", t2 - t1, t3 - t2);
}
