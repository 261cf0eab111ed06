use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{Float, Zero};

use crate::algorithm::{Dijkstra, PathStep};
use crate::graph::traits::IncidenceGraph;
use crate::graph::{Edge, Graph};
use crate::Result;

/// A graph whose vertices carry geographic coordinates.
///
/// Thin composition over [`Graph`]: adjacency, traversal, and shortest-path
/// behavior are the inner graph's; this layer only adds a (latitude,
/// longitude) pair per vertex and a route query. Rendering routes (CSV, map
/// overlays) is left to external presentation code.
#[derive(Debug, Clone)]
pub struct RouteMap<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    graph: Graph<T, W>,
    coords: HashMap<T, (f64, f64)>,
}

impl<T, W> RouteMap<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Creates a new empty route map
    pub fn new() -> Self {
        RouteMap {
            graph: Graph::new(),
            coords: HashMap::new(),
        }
    }

    /// Returns the underlying graph for adjacency and traversal queries
    pub fn graph(&self) -> &Graph<T, W> {
        &self.graph
    }

    /// Adds a vertex at the given coordinates. No-op if an equal element is
    /// already present; the original coordinates are kept.
    pub fn add_vertex(&mut self, element: T, latitude: f64, longitude: f64) {
        if !self.graph.contains_vertex(&element) {
            self.coords
                .insert(element.clone(), (latitude, longitude));
            self.graph.add_vertex(element);
        }
    }

    /// Adds an edge between two vertices; same contract as
    /// [`Graph::add_edge`]
    pub fn add_edge(&mut self, u: &T, v: &T, weight: W) -> Result<()> {
        self.graph.add_edge(u, v, weight)
    }

    /// Removes a vertex, its incident edges, and its coordinates
    pub fn remove_vertex(&mut self, vertex: &T) -> bool {
        self.coords.remove(vertex);
        self.graph.remove_vertex(vertex)
    }

    /// Returns the (latitude, longitude) of a vertex, if known
    pub fn coords(&self, vertex: &T) -> Option<(f64, f64)> {
        self.coords.get(vertex).copied()
    }

    /// Computes the cheapest route between two vertices as ordered steps with
    /// incremental costs
    pub fn route(&self, source: &T, target: &T) -> Result<Vec<PathStep<T, W>>> {
        Dijkstra::new().shortest_path(self, source, target)
    }
}

impl<T, W> Default for RouteMap<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W> IncidenceGraph<T, W> for RouteMap<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn contains_vertex(&self, vertex: &T) -> bool {
        self.graph.contains_vertex(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn incident_edges(&self, vertex: &T) -> Vec<&Edge<T, W>> {
        self.graph.edges_of(vertex)
    }
}
