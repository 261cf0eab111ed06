use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{Float, Zero};

use crate::graph::traits::IncidenceGraph;
use crate::{Error, Result};

/// A weighted edge between two vertex elements.
///
/// Storage is symmetric (both endpoints see the same edge), but the endpoints
/// stay distinguishable as `first` and `second` so that directed queries
/// (in/out degree, topological sort) can be answered over the undirected
/// adjacency structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<T, W> {
    first: T,
    second: T,
    weight: W,
}

impl<T, W> Edge<T, W>
where
    T: Eq,
    W: Copy,
{
    /// Returns the endpoint the edge was added from
    pub fn first(&self) -> &T {
        &self.first
    }

    /// Returns the endpoint the edge was added toward
    pub fn second(&self) -> &T {
        &self.second
    }

    /// Returns both endpoints as (first, second)
    pub fn endpoints(&self) -> (&T, &T) {
        (&self.first, &self.second)
    }

    /// Returns the edge weight
    pub fn weight(&self) -> W {
        self.weight
    }

    /// If the edge is incident on `vertex`, returns the other endpoint
    pub fn opposite(&self, vertex: &T) -> Option<&T> {
        if &self.first == vertex {
            Some(&self.second)
        } else if &self.second == vertex {
            Some(&self.first)
        } else {
            None
        }
    }
}

/// An element-keyed graph with symmetric adjacency storage.
///
/// Vertices are identified by their elements: two vertices are the same
/// vertex exactly when their elements compare equal, and elements are
/// immutable once inserted. Every edge (u, v) is stored under both u and v,
/// tagged with its first/second endpoints, which is what the directed-degree
/// queries and the topological sort filter on.
///
/// Invariant: whenever edge (u, v) exists, both the u -> v and v -> u
/// adjacency entries exist and hold equal edges, and `edge_count` matches the
/// number of distinct edges.
#[derive(Debug, Clone)]
pub struct Graph<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// vertex element -> (neighbor element -> connecting edge)
    adjacency: HashMap<T, HashMap<T, Edge<T, W>>>,

    /// Number of distinct edges, maintained by every mutation
    edge_count: usize,
}

impl<T, W> Graph<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        Graph {
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    // Query methods -----------------------------------------

    /// Returns true if a vertex with an equal element is present
    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of distinct edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns an iterator over all vertex elements
    pub fn vertices(&self) -> impl Iterator<Item = &T> {
        self.adjacency.keys()
    }

    /// Returns an iterator over all edges, each edge yielded once.
    ///
    /// Every edge is stored under both endpoints; only the copy held at its
    /// `first` endpoint is yielded, so self-loops also appear exactly once.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<T, W>> {
        self.adjacency
            .iter()
            .flat_map(|(vertex, neighbors)| neighbors.values().filter(move |e| e.first() == vertex))
    }

    /// Returns the edge between two vertices, if one exists
    pub fn get_edge(&self, u: &T, v: &T) -> Option<&Edge<T, W>> {
        self.adjacency.get(u).and_then(|neighbors| neighbors.get(v))
    }

    /// Returns the number of edges incident on the vertex (0 if unknown)
    pub fn degree(&self, vertex: &T) -> usize {
        self.adjacency.get(vertex).map_or(0, |n| n.len())
    }

    /// Returns the number of incident edges whose `second` endpoint is the
    /// vertex
    pub fn in_degree(&self, vertex: &T) -> usize {
        self.adjacency
            .get(vertex)
            .map_or(0, |n| n.values().filter(|e| e.second() == vertex).count())
    }

    /// Returns the number of incident edges whose `first` endpoint is the
    /// vertex
    pub fn out_degree(&self, vertex: &T) -> usize {
        self.adjacency
            .get(vertex)
            .map_or(0, |n| n.values().filter(|e| e.first() == vertex).count())
    }

    /// Returns every edge incident on the vertex
    pub fn edges_of(&self, vertex: &T) -> Vec<&Edge<T, W>> {
        self.incident_filtered(vertex, |_| true)
    }

    /// Returns the incident edges directed toward the vertex
    pub fn in_edges_of(&self, vertex: &T) -> Vec<&Edge<T, W>> {
        self.incident_filtered(vertex, |e| e.second() == vertex)
    }

    /// Returns the incident edges directed away from the vertex
    pub fn out_edges_of(&self, vertex: &T) -> Vec<&Edge<T, W>> {
        self.incident_filtered(vertex, |e| e.first() == vertex)
    }

    fn incident_filtered<F>(&self, vertex: &T, keep: F) -> Vec<&Edge<T, W>>
    where
        F: Fn(&Edge<T, W>) -> bool,
    {
        match self.adjacency.get(vertex) {
            Some(neighbors) => neighbors.values().filter(|&e| keep(e)).collect(),
            None => Vec::new(),
        }
    }

    // Methods to add to graph -------------------------------

    /// Adds a vertex holding `element`. No-op if an equal element is already
    /// present.
    pub fn add_vertex(&mut self, element: T) {
        self.adjacency.entry(element).or_default();
    }

    /// Adds an edge from `u` to `v` with the given weight.
    ///
    /// Both endpoints must already be present ([`Error::UnknownVertex`]
    /// otherwise) and the weight must be non-negative
    /// ([`Error::NegativeWeight`]). Re-adding an edge between the same pair
    /// replaces the previous edge in both directions; the edge count does not
    /// change.
    pub fn add_edge(&mut self, u: &T, v: &T, weight: W) -> Result<()> {
        if !self.adjacency.contains_key(u) {
            return Err(Error::UnknownVertex(format!("{:?}", u)));
        }
        if !self.adjacency.contains_key(v) {
            return Err(Error::UnknownVertex(format!("{:?}", v)));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight(format!("{:?}", weight)));
        }
        let edge = Edge {
            first: u.clone(),
            second: v.clone(),
            weight,
        };
        let replaced = match self.adjacency.get_mut(u) {
            Some(neighbors) => neighbors.insert(v.clone(), edge.clone()).is_some(),
            None => false,
        };
        if let Some(neighbors) = self.adjacency.get_mut(v) {
            neighbors.insert(u.clone(), edge);
        }
        if !replaced {
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Removes a vertex and every incident edge, purging the back-reference
    /// from each neighbor's adjacency map. Returns false if the vertex was
    /// unknown.
    pub fn remove_vertex(&mut self, vertex: &T) -> bool {
        match self.adjacency.remove(vertex) {
            Some(neighbors) => {
                for neighbor in neighbors.keys() {
                    if let Some(back) = self.adjacency.get_mut(neighbor) {
                        back.remove(vertex);
                    }
                }
                self.edge_count -= neighbors.len();
                true
            }
            None => false,
        }
    }

    /// Removes an edge, deleting both directed adjacency entries. Returns
    /// false if the edge was not present.
    pub fn remove_edge(&mut self, edge: &Edge<T, W>) -> bool {
        let removed = match self.adjacency.get_mut(edge.first()) {
            Some(neighbors) => neighbors.remove(edge.second()).is_some(),
            None => false,
        };
        if let Some(neighbors) = self.adjacency.get_mut(edge.second()) {
            neighbors.remove(edge.first());
        }
        if removed {
            self.edge_count -= 1;
        }
        removed
    }

    // Search methods ----------------------------------------

    /// Breadth-first search from `start`, visiting the whole connected
    /// component level by level.
    ///
    /// Returns a map from each reached vertex to the edge it was discovered
    /// through; the start vertex maps to `None`. Empty if `start` is unknown.
    /// O(V + E).
    pub fn breadth_first_search(&self, start: &T) -> HashMap<T, Option<Edge<T, W>>> {
        let mut marked = HashMap::new();
        if !self.contains_vertex(start) {
            return marked;
        }
        marked.insert(start.clone(), None);
        let mut level = vec![start.clone()];
        while !level.is_empty() {
            let mut next_level = Vec::new();
            for vertex in &level {
                for edge in self.edges_of(vertex) {
                    if let Some(opposite) = edge.opposite(vertex) {
                        if !marked.contains_key(opposite) {
                            marked.insert(opposite.clone(), Some(edge.clone()));
                            next_level.push(opposite.clone());
                        }
                    }
                }
            }
            level = next_level;
        }
        marked
    }

    /// Depth-first search from `start`, backtracking whenever no unreached
    /// neighbor remains.
    ///
    /// Returns the same discovery map shape as [`Self::breadth_first_search`].
    /// O(V + E).
    pub fn depth_first_search(&self, start: &T) -> HashMap<T, Option<Edge<T, W>>> {
        let mut marked = HashMap::new();
        if !self.contains_vertex(start) {
            return marked;
        }
        marked.insert(start.clone(), None);
        self.depth_first_visit(start, &mut marked);
        marked
    }

    fn depth_first_visit(&self, vertex: &T, marked: &mut HashMap<T, Option<Edge<T, W>>>) {
        for edge in self.edges_of(vertex) {
            if let Some(opposite) = edge.opposite(vertex) {
                if !marked.contains_key(opposite) {
                    marked.insert(opposite.clone(), Some(edge.clone()));
                    self.depth_first_visit(opposite, marked);
                }
            }
        }
    }

    // Directed graph methods --------------------------------

    /// Kahn's algorithm over the in-degree implied by the endpoint tags.
    ///
    /// The ordering is only meaningful when the tags encode a genuine DAG; on
    /// a cyclic tagging the returned sequence is a strict subset of the
    /// vertices, which callers detect by comparing its length against
    /// [`Self::vertex_count`] (or via [`Self::is_dag`]).
    pub fn topological_sort(&self) -> Vec<T> {
        let mut remaining_in: HashMap<&T, usize> = HashMap::new();
        let mut available: Vec<&T> = Vec::new();
        for vertex in self.adjacency.keys() {
            let count = self.in_degree(vertex);
            remaining_in.insert(vertex, count);
            if count == 0 {
                available.push(vertex);
            }
        }
        let mut order = Vec::new();
        while let Some(vertex) = available.pop() {
            order.push(vertex.clone());
            for edge in self.out_edges_of(vertex) {
                if let Some(successor) = edge.opposite(vertex) {
                    if let Some(count) = remaining_in.get_mut(successor) {
                        *count -= 1;
                        if *count == 0 {
                            available.push(successor);
                        }
                    }
                }
            }
        }
        order
    }

    /// Returns true if the endpoint tags encode a DAG covering every vertex
    pub fn is_dag(&self) -> bool {
        self.topological_sort().len() == self.vertex_count()
    }
}

impl<T, W> Default for Graph<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W> IncidenceGraph<T, W> for Graph<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn contains_vertex(&self, vertex: &T) -> bool {
        Graph::contains_vertex(self, vertex)
    }

    fn vertex_count(&self) -> usize {
        Graph::vertex_count(self)
    }

    fn incident_edges(&self, vertex: &T) -> Vec<&Edge<T, W>> {
        self.edges_of(vertex)
    }
}
