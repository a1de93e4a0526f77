//! End-to-end scenarios: worked examples, generated graphs and concurrent searches.

use pretty_assertions::assert_eq;
use rayon::prelude::*;
use spath::generate::{grid, layered, random, GridConfig, LayeredConfig, RandomConfig};
use spath::landmarks::DifferentialHeuristic;
use spath::{
    shortest_path, shortest_paths_from_source, Error, EuclideanHeuristic, Graph, GraphBuilder,
    IndexedQueue, Position, PriorityQueue, Searcher, ZeroHeuristic,
};

/// A-B(1), B-C(2), A-C(4), C-D(1), with A..D on a line at 0, 1, 3, 4.
fn line_graph() -> Graph<&'static str> {
    let mut builder = GraphBuilder::undirected();
    for (id, x) in [("A", 0.0), ("B", 1.0), ("C", 3.0), ("D", 4.0)] {
        builder.vertex(id, Some(Position::new(x, 0.0))).unwrap();
    }
    builder
        .edge("A", "B", 1.0)
        .unwrap()
        .edge("B", "C", 2.0)
        .unwrap()
        .edge("A", "C", 4.0)
        .unwrap()
        .edge("C", "D", 1.0)
        .unwrap();
    builder.build()
}

/// Four vertices on a unit square; every arc points from a lower id to a higher one.
fn small_directed() -> Graph<u32> {
    let mut builder = GraphBuilder::directed();
    for (id, pos) in [(0, (0.0, 0.0)), (1, (1.0, 0.0)), (2, (0.0, 1.0)), (3, (1.0, 1.0))] {
        builder.vertex(id, Some(pos.into())).unwrap();
    }
    for (u, v, w) in [(0, 1, 1.0), (0, 2, 4.0), (1, 2, 2.0), (1, 3, 5.0), (2, 3, 1.0)] {
        builder.edge(u, v, w).unwrap();
    }
    builder.build()
}

#[test]
fn zero_heuristic_example() {
    let graph = line_graph();
    let result = shortest_path(&graph, &"A", &"D", &ZeroHeuristic).unwrap();
    assert_eq!(result.cost, 4.0);
    assert_eq!(result.vertices, vec!["A", "B", "C", "D"]);
}

#[test]
fn euclidean_example_matches_dijkstra() {
    let graph = line_graph();
    let dijkstra = shortest_path(&graph, &"A", &"D", &ZeroHeuristic).unwrap();
    let astar = shortest_path(&graph, &"A", &"D", &EuclideanHeuristic::new()).unwrap();
    assert_eq!(astar.cost, dijkstra.cost);
    assert_eq!(astar.vertices, dijkstra.vertices);
    assert!(astar.stats.expanded <= dijkstra.stats.expanded);
}

#[test]
fn all_destinations_from_source() {
    let graph = line_graph();
    let tree = shortest_paths_from_source(&graph, &"A").unwrap();
    assert_eq!(*tree.source(), "A");
    let rows: Vec<_> = tree.iter().map(|(v, d, p)| (*v, d, p.copied())).collect();
    assert_eq!(
        rows,
        vec![
            ("A", 0.0, None),
            ("B", 1.0, Some("A")),
            ("C", 3.0, Some("B")),
            ("D", 4.0, Some("C")),
        ]
    );
    assert_eq!(tree.get(&"C"), Some((3.0, Some(&"B"))));
    assert_eq!(tree.get(&"nowhere"), None);
}

#[test]
fn small_directed_graph() {
    let graph = small_directed();
    let dijkstra = shortest_path(&graph, &0, &3, &ZeroHeuristic).unwrap();
    assert_eq!(dijkstra.vertices, vec![0, 1, 2, 3]);
    assert_eq!(dijkstra.cost, 4.0);
    assert!(dijkstra.stats.expanded > 0);

    let astar = shortest_path(&graph, &0, &3, &EuclideanHeuristic::new()).unwrap();
    assert_eq!(astar.cost, 4.0);

    let same = shortest_path(&graph, &0, &0, &ZeroHeuristic).unwrap();
    assert_eq!(same.vertices, vec![0]);
    assert_eq!(same.cost, 0.0);
    assert_eq!(same.stats.expanded, 1);
}

#[test]
fn disconnected_graph_has_no_path() {
    let mut builder = GraphBuilder::directed();
    for (id, pos) in [(0, (0.0, 0.0)), (1, (1.0, 0.0)), (2, (0.0, 1.0)), (3, (1.0, 1.0))] {
        builder.vertex(id, Some(pos.into())).unwrap();
    }
    builder.edge(0, 1, 1.0).unwrap().edge(2, 3, 1.0).unwrap();
    let graph = builder.build();

    for result in [
        shortest_path(&graph, &0, &2, &ZeroHeuristic).unwrap(),
        shortest_path(&graph, &0, &2, &EuclideanHeuristic::new()).unwrap(),
    ] {
        assert!(!result.is_found());
        assert!(result.vertices.is_empty());
        assert_eq!(result.cost, f64::INFINITY);
    }

    let tree = shortest_paths_from_source(&graph, &0).unwrap();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.distance(&3), Ok(f64::INFINITY));
    assert!(!tree.path_to(&3).unwrap().is_found());
}

#[test]
fn construction_and_lookup_errors() {
    let mut graph = Graph::new();
    assert_eq!(
        graph.add_edge("A", "B", -1.0),
        Err(Error::InvalidWeight {
            from: "A",
            to: "B",
            weight: -1.0
        })
    );
    graph.add_edge("A", "B", 1.0).unwrap();
    assert_eq!(graph.neighbors(&"Q").err(), Some(Error::UnknownVertex("Q")));
    assert_eq!(graph.position(&"A"), Err(Error::NoPosition("A")));
    assert_eq!(
        shortest_path(&graph, &"A", &"B", &EuclideanHeuristic::new()),
        Err(Error::NoPosition("B"))
    );
    assert_eq!(
        shortest_path(&graph, &"Q", &"B", &ZeroHeuristic),
        Err(Error::UnknownVertex("Q"))
    );
}

#[test]
fn non_finite_position_is_caught_at_construction() {
    let mut builder = GraphBuilder::undirected();
    builder.vertex("A", Some(Position::new(0.0, 0.0))).unwrap();
    assert_eq!(
        builder.vertex("B", Some(Position::new(f64::NAN, 0.0))).err(),
        Some(Error::InvalidPosition("B"))
    );
    builder
        .vertex("C", Some(Position::new(3.0, 0.0)))
        .unwrap()
        .vertex("D", Some(Position::new(4.0, 0.0)))
        .unwrap();
    builder
        .edge("A", "B", 1.0)
        .unwrap()
        .edge("B", "C", 2.0)
        .unwrap()
        .edge("A", "C", 4.0)
        .unwrap()
        .edge("C", "D", 1.0)
        .unwrap();
    let graph = builder.build();

    // B only exists through its edges, without a position
    assert_eq!(
        shortest_path(&graph, &"A", &"D", &EuclideanHeuristic::new()),
        Err(Error::NoPosition("B"))
    );
    let dijkstra = shortest_path(&graph, &"A", &"D", &ZeroHeuristic).unwrap();
    assert_eq!(dijkstra.cost, 4.0);
    assert_eq!(dijkstra.vertices, vec!["A", "B", "C", "D"]);
}

#[test]
fn astar_matches_dijkstra_on_generated_grids() {
    for seed in 0..4 {
        let graph = grid(&GridConfig {
            side: 10,
            connect_prob: 0.3,
            seed,
        });
        let last = graph.vertex_count() as u32 - 1;
        for (start, goal) in [(0, last), (10, 80), (25, 75)] {
            let dijkstra = shortest_path(&graph, &start, &goal, &ZeroHeuristic).unwrap();
            let astar = shortest_path(&graph, &start, &goal, &EuclideanHeuristic::new()).unwrap();
            assert_eq!(dijkstra.is_found(), astar.is_found());
            if dijkstra.is_found() {
                assert!((dijkstra.cost - astar.cost).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn euclidean_is_admissible_on_generated_graphs() {
    let grid_graph = grid(&GridConfig {
        side: 7,
        connect_prob: 0.5,
        seed: 99,
    });
    let layered_graph = layered(&LayeredConfig {
        vertices: 60,
        layers: 6,
        seed: 99,
    });
    for graph in [grid_graph, layered_graph] {
        for start in (0..graph.vertex_count() as u32).step_by(10) {
            let tree = shortest_paths_from_source(&graph, &start).unwrap();
            for goal in (0..graph.vertex_count() as u32).step_by(10) {
                let estimate = graph
                    .position(&start)
                    .unwrap()
                    .euclidean(graph.position(&goal).unwrap());
                assert!(estimate <= tree.distance(&goal).unwrap() + 1e-9);
            }
        }
    }
}

#[test]
fn landmarks_agree_on_random_graphs() {
    let graph = random(&RandomConfig {
        vertices: 200,
        edges_per_node: 3,
        seed: 17,
    });
    let landmarks = DifferentialHeuristic::<4>::calculate(&graph, 2).unwrap();
    let mut searcher = Searcher::<IndexedQueue>::new();
    for (start, goal) in [(0, 199), (5, 150), (42, 7)] {
        let dijkstra = searcher.shortest_path(&graph, &start, &goal, &ZeroHeuristic).unwrap();
        let guided = searcher.shortest_path(&graph, &start, &goal, &landmarks).unwrap();
        assert_eq!(dijkstra.is_found(), guided.is_found());
        if dijkstra.is_found() {
            assert!((dijkstra.cost - guided.cost).abs() < 1e-9);
        }
    }
}

#[test]
fn concurrent_searches_share_one_graph() {
    let graph = grid(&GridConfig {
        side: 20,
        connect_prob: 0.6,
        seed: 5,
    });
    let pairs: Vec<(u32, u32)> = (0..40).map(|i| (i * 7 % 400, (i * 13 + 11) % 400)).collect();

    let sequential: Vec<_> = pairs
        .iter()
        .map(|(s, g)| shortest_path(&graph, s, g, &EuclideanHeuristic::new()).unwrap())
        .collect();
    let parallel: Vec<_> = pairs
        .par_iter()
        .map_init(Searcher::<PriorityQueue>::new, |searcher, (s, g)| {
            searcher
                .shortest_path(&graph, s, g, &EuclideanHeuristic::new())
                .unwrap()
        })
        .collect();

    assert_eq!(sequential, parallel);
}
