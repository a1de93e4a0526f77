use std::fmt::Debug;
use std::hash::Hash;

use ahash::AHashMap;
use spath_core::{is_valid_weight, Error, Position, Vertex};

/// A directed arc stored in the adjacency list of its tail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub target: Vertex,
    pub weight: f64,
}

/// Adjacency-list graph with non-negative edge weights.
///
/// Vertex identifiers of type `V` are interned into dense [`Vertex`] handles in insertion order.
/// The graph is only mutated through `&mut self`, so it cannot change while a search borrows it
/// and any number of searches may share one instance.
#[derive(Clone)]
pub struct Graph<V> {
    ids: Vec<V>,
    lookup: AHashMap<V, Vertex>,
    positions: Vec<Option<Position>>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
    positioned: usize,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Graph {
            ids: vec![],
            lookup: AHashMap::new(),
            positions: vec![],
            adjacency: vec![],
            edge_count: 0,
            positioned: 0,
        }
    }
}

impl<V: Clone + Eq + Hash + Debug> Graph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Graph {
            ids: Vec::with_capacity(vertices),
            lookup: AHashMap::with_capacity(vertices),
            positions: Vec::with_capacity(vertices),
            adjacency: Vec::with_capacity(vertices),
            edge_count: 0,
            positioned: 0,
        }
    }

    /// Adds a vertex, or looks it up if it already exists.
    ///
    /// A vertex without a position may be given one later; once assigned, a position can only be
    /// repeated, never changed. Positions with a NaN or infinite coordinate are rejected without
    /// adding the vertex.
    pub fn add_vertex(&mut self, id: V, position: Option<Position>) -> Result<Vertex, Error<V>> {
        if position.is_some_and(|p| !p.is_finite()) {
            return Err(Error::InvalidPosition(id));
        }
        let vertex = self.intern(id);
        if let Some(position) = position {
            let slot = &mut self.positions[vertex.index()];
            match *slot {
                None => {
                    *slot = Some(position);
                    self.positioned += 1;
                }
                Some(existing) if existing == position => {}
                Some(_) => {
                    return Err(Error::PositionReassigned(self.ids[vertex.index()].clone()));
                }
            }
        }
        Ok(vertex)
    }

    /// Adds the directed edge `from -> to`, adding missing endpoints without positions.
    pub fn add_edge(&mut self, from: V, to: V, weight: f64) -> Result<(), Error<V>> {
        if !is_valid_weight(weight) {
            return Err(Error::InvalidWeight { from, to, weight });
        }
        let from = self.intern(from);
        let to = self.intern(to);
        self.push_edge(from, to, weight);
        Ok(())
    }

    /// Adds `u -> v` and `v -> u` with the same weight.
    pub fn add_undirected_edge(&mut self, u: V, v: V, weight: f64) -> Result<(), Error<V>> {
        if !is_valid_weight(weight) {
            return Err(Error::InvalidWeight {
                from: u,
                to: v,
                weight,
            });
        }
        let u = self.intern(u);
        let v = self.intern(v);
        self.push_edge(u, v, weight);
        self.push_edge(v, u, weight);
        Ok(())
    }

    /// Looks up the handle of `id`.
    pub fn vertex(&self, id: &V) -> Result<Vertex, Error<V>> {
        self.lookup
            .get(id)
            .copied()
            .ok_or_else(|| Error::UnknownVertex(id.clone()))
    }

    /// Outgoing `(neighbor, weight)` pairs of `id`.
    pub fn neighbors(&self, id: &V) -> Result<impl Iterator<Item = (&V, f64)> + '_, Error<V>> {
        let vertex = self.vertex(id)?;
        Ok(self
            .edges(vertex)
            .iter()
            .map(|edge| (&self.ids[edge.target.index()], edge.weight)))
    }

    pub fn position(&self, id: &V) -> Result<Position, Error<V>> {
        let vertex = self.vertex(id)?;
        self.position_of(vertex)
            .ok_or_else(|| Error::NoPosition(id.clone()))
    }

    fn intern(&mut self, id: V) -> Vertex {
        if let Some(&vertex) = self.lookup.get(&id) {
            return vertex;
        }
        let vertex = Vertex::from_index(self.ids.len());
        self.lookup.insert(id.clone(), vertex);
        self.ids.push(id);
        self.positions.push(None);
        self.adjacency.push(vec![]);
        vertex
    }
}

impl<V> Graph<V> {
    #[inline(always)]
    fn push_edge(&mut self, from: Vertex, to: Vertex, weight: f64) {
        self.adjacency[from.index()].push(Edge { target: to, weight });
        self.edge_count += 1;
    }

    /// The identifier `vertex` was created from.
    #[track_caller]
    #[inline(always)]
    pub fn id(&self, vertex: Vertex) -> &V {
        &self.ids[vertex.index()]
    }

    /// Outgoing arcs of `vertex`.
    #[track_caller]
    #[inline(always)]
    pub fn edges(&self, vertex: Vertex) -> &[Edge] {
        &self.adjacency[vertex.index()]
    }

    #[track_caller]
    #[inline(always)]
    pub fn position_of(&self, vertex: Vertex) -> Option<Position> {
        self.positions[vertex.index()]
    }

    /// Whether every vertex has been given a position.
    pub fn has_all_positions(&self) -> bool {
        self.positioned == self.ids.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of directed arcs; an undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All vertex handles in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = Vertex> {
        (0..self.ids.len()).map(Vertex::from_index)
    }

    /// All vertex identifiers in insertion order.
    pub fn ids(&self) -> &[V] {
        &self.ids
    }

    /// Visits every vertex reachable from `start` in depth-first preorder.
    ///
    /// `found` is called once per vertex; returning `false` stops the search from continuing
    /// through that vertex.
    pub fn dfs(&self, start: Vertex, mut found: impl FnMut(Vertex) -> bool) {
        let mut seen = vec![false; self.ids.len()];
        seen[start.index()] = true;
        if !found(start) {
            return;
        }
        let mut stack = vec![self.edges(start).iter()];

        while let Some(edges) = stack.last_mut() {
            match edges.next() {
                Some(edge) => {
                    let target = edge.target;
                    if std::mem::replace(&mut seen[target.index()], true) {
                        continue;
                    }
                    if found(target) {
                        stack.push(self.edges(target).iter());
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph<&'static str> {
        let mut graph = Graph::new();
        graph.add_undirected_edge("A", "B", 1.0).unwrap();
        graph.add_undirected_edge("B", "C", 2.0).unwrap();
        graph.add_undirected_edge("A", "C", 4.0).unwrap();
        graph.add_undirected_edge("C", "D", 1.0).unwrap();
        graph
    }

    #[test]
    fn interns_in_insertion_order() {
        let graph = diamond();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 8);
        assert_eq!(graph.ids(), &["A", "B", "C", "D"]);
        assert_eq!(graph.vertex(&"C").unwrap(), Vertex::from_index(2));
        assert_eq!(*graph.id(Vertex::from_index(3)), "D");
    }

    #[test]
    fn neighbors_of_known_and_unknown_vertices() {
        let graph = diamond();
        let mut around_c: Vec<_> = graph.neighbors(&"C").unwrap().collect();
        around_c.sort_by(|a, b| a.0.cmp(b.0));
        assert_eq!(around_c, vec![(&"A", 4.0), (&"B", 2.0), (&"D", 1.0)]);

        assert_eq!(
            graph.neighbors(&"Z").err(),
            Some(Error::UnknownVertex("Z"))
        );
    }

    #[test]
    fn rejects_bad_weights_without_mutating() {
        let mut graph: Graph<u32> = Graph::new();
        assert_eq!(
            graph.add_edge(0, 1, -0.5),
            Err(Error::InvalidWeight {
                from: 0,
                to: 1,
                weight: -0.5
            })
        );
        assert!(graph.add_undirected_edge(0, 1, f64::INFINITY).is_err());
        assert!(matches!(
            graph.add_edge(0, 1, f64::NAN),
            Err(Error::InvalidWeight { .. })
        ));
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn positions_are_assigned_once() {
        let mut graph = Graph::new();
        let a = graph.add_vertex('a', None).unwrap();
        assert_eq!(graph.position(&'a'), Err(Error::NoPosition('a')));
        assert!(!graph.has_all_positions());

        let p = Position::new(1.0, 2.0);
        assert_eq!(graph.add_vertex('a', Some(p)), Ok(a));
        assert_eq!(graph.add_vertex('a', Some(p)), Ok(a));
        assert_eq!(graph.position(&'a'), Ok(p));
        assert!(graph.has_all_positions());

        assert_eq!(
            graph.add_vertex('a', Some(Position::new(0.0, 0.0))),
            Err(Error::PositionReassigned('a'))
        );
        assert_eq!(graph.position(&'b'), Err(Error::UnknownVertex('b')));
    }

    #[test]
    fn non_finite_positions_are_rejected() {
        let mut graph = Graph::new();
        assert_eq!(
            graph.add_vertex("B", Some(Position::new(f64::NAN, 0.0))),
            Err(Error::InvalidPosition("B"))
        );
        assert_eq!(
            graph.add_vertex("C", Some(Position::new(0.0, f64::INFINITY))),
            Err(Error::InvalidPosition("C"))
        );
        assert_eq!(graph.vertex_count(), 0);

        let b = graph.add_vertex("B", None).unwrap();
        assert_eq!(
            graph.add_vertex("B", Some(Position::new_3d(1.0, 0.0, f64::NAN))),
            Err(Error::InvalidPosition("B"))
        );
        assert_eq!(graph.position(&"B"), Err(Error::NoPosition("B")));
        assert_eq!(graph.add_vertex("B", Some(Position::new(1.0, 0.0))), Ok(b));
    }

    #[test]
    fn dfs_visits_reachable_vertices_once() {
        let mut graph = Graph::new();
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();
        graph.add_edge(2, 0, 1.0).unwrap();
        graph.add_edge(0, 2, 1.0).unwrap();
        graph.add_edge(3, 0, 1.0).unwrap();

        let mut visited = vec![];
        graph.dfs(graph.vertex(&0).unwrap(), |v| {
            visited.push(*graph.id(v));
            true
        });
        assert_eq!(visited, vec![0, 1, 2]);
    }
}
