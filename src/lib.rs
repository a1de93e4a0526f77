//! Shortest paths in weighted graphs with Dijkstra's algorithm and A*.
//!
//! ```
//! use spath::{shortest_path, Graph, ZeroHeuristic};
//!
//! let mut graph = Graph::new();
//! graph.add_undirected_edge("A", "B", 1.0)?;
//! graph.add_undirected_edge("B", "C", 2.0)?;
//! graph.add_undirected_edge("A", "C", 4.0)?;
//! graph.add_undirected_edge("C", "D", 1.0)?;
//!
//! let result = shortest_path(&graph, &"A", &"D", &ZeroHeuristic)?;
//! assert_eq!(result.cost, 4.0);
//! assert_eq!(result.vertices, ["A", "B", "C", "D"]);
//! # Ok::<(), spath::Error<&str>>(())
//! ```

pub use spath_core::*;
pub use spath_graph::generate;
pub use spath_graph::{Edge, Graph, GraphBuilder};
pub use spath_landmarks as landmarks;
pub use spath_search::*;
