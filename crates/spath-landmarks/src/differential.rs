use std::fmt::Debug;
use std::hash::Hash;
use std::io::{Read, Write};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use spath_core::{Error, PriorityQueue, Vertex};
use spath_graph::Graph;
use spath_search::{Heuristic, Searcher};
use tracing::debug;

/// Landmark heuristic built from exact distances to `N` landmarks per component.
///
/// For a landmark `l`, the triangle inequality gives `d(v, g) >= d(l, g) - d(l, v)` on any
/// graph, and additionally `d(v, g) >= d(l, v) - d(l, g)` when distances are symmetric. The
/// estimate is the largest such bound over all landmarks, which is admissible and consistent.
///
/// Landmarks are chosen per depth-first component, and only vertices of the same component share
/// landmarks. Vertices in different components get an estimate of zero.
pub struct DifferentialHeuristic<const N: usize> {
    data: Vec<[f64; N]>,
    component: Vec<u32>,
    symmetric: bool,
}

impl<const N: usize> DifferentialHeuristic<N> {
    /// Computes the table for a directed graph, using only the one-sided bound.
    pub fn calculate<V>(graph: &Graph<V>, seed: u64) -> Result<Self, Error<V>>
    where
        V: Clone + Eq + Hash + Debug,
    {
        Self::calculate_with(graph, seed, false)
    }

    /// Computes the table for a graph whose every edge has a reverse edge of equal weight.
    pub fn calculate_symmetric<V>(graph: &Graph<V>, seed: u64) -> Result<Self, Error<V>>
    where
        V: Clone + Eq + Hash + Debug,
    {
        Self::calculate_with(graph, seed, true)
    }

    fn calculate_with<V>(graph: &Graph<V>, seed: u64, symmetric: bool) -> Result<Self, Error<V>>
    where
        V: Clone + Eq + Hash + Debug,
    {
        let mut data = vec![[f64::INFINITY; N]; graph.vertex_count()];
        let mut rng = Pcg64::seed_from_u64(seed);
        let mut searcher = Searcher::<PriorityQueue>::new();

        let mut component = vec![u32::MAX; graph.vertex_count()];
        let mut members = vec![];
        let mut components = 0;
        for start in graph.vertices() {
            if component[start.index()] != u32::MAX {
                continue;
            }

            members.clear();
            graph.dfs(start, |v| {
                if component[v.index()] != u32::MAX {
                    return false;
                }
                component[v.index()] = components;
                members.push(v);
                true
            });

            for i in 0..N {
                let pivot = members[rng.gen_range(0..members.len())];
                // on directed graphs the pivot may reach into earlier components
                searcher.shortest_paths_from_source_observed(graph, graph.id(pivot), |v, g| {
                    if component[v.index()] == components {
                        data[v.index()][i] = g;
                    }
                })?;
            }
            components += 1;
        }

        debug!(components, landmarks = N, symmetric, "differential heuristic calculated");
        Ok(DifferentialHeuristic {
            data,
            component,
            symmetric,
        })
    }

    /// Writes the table after a one-byte mode flag. Each vertex contributes its component as a
    /// little-endian `u32`, then its landmark distances as little-endian `f64`s.
    pub fn save(&self, to: &mut impl Write) -> std::io::Result<()> {
        to.write_all(&[self.symmetric as u8])?;
        for (row, component) in self.data.iter().zip(&self.component) {
            to.write_all(&component.to_le_bytes())?;
            for d in row {
                to.write_all(&d.to_le_bytes())?;
            }
        }
        Ok(())
    }

    /// Reads a table written by [`Self::save`] for a graph with `vertices` vertices.
    pub fn load(vertices: usize, from: &mut impl Read) -> std::io::Result<Self> {
        let mut flag = [0];
        from.read_exact(&mut flag)?;
        let mut data = vec![[f64::INFINITY; N]; vertices];
        let mut component = vec![0; vertices];
        for (row, component) in data.iter_mut().zip(&mut component) {
            let mut buf = [0; 4];
            from.read_exact(&mut buf)?;
            *component = u32::from_le_bytes(buf);
            for d in row.iter_mut() {
                let mut buf = [0; 8];
                from.read_exact(&mut buf)?;
                *d = f64::from_le_bytes(buf);
            }
        }
        Ok(DifferentialHeuristic {
            data,
            component,
            symmetric: flag[0] != 0,
        })
    }

    /// Distance from the `i`th landmark of `vertex`'s component to `vertex`.
    pub fn landmark_distance(&self, vertex: Vertex, i: usize) -> f64 {
        self.data[vertex.index()][i]
    }

    pub fn h(&self, vertex: Vertex, goal: Vertex) -> f64 {
        let (Some(from), Some(to)) = (self.data.get(vertex.index()), self.data.get(goal.index()))
        else {
            return 0.0;
        };
        if self.component[vertex.index()] != self.component[goal.index()] {
            return 0.0;
        }
        let mut best = 0.0;
        for (&from, &to) in from.iter().zip(to.iter()) {
            if !from.is_finite() || !to.is_finite() {
                continue;
            }
            let h = match self.symmetric {
                true => (to - from).abs(),
                false => to - from,
            };
            best = h.max(best);
        }
        best
    }
}

impl<V, const N: usize> Heuristic<V> for DifferentialHeuristic<N> {
    #[inline(always)]
    fn estimate(&self, _graph: &Graph<V>, vertex: Vertex, goal: Vertex) -> f64 {
        self.h(vertex, goal)
    }
}
