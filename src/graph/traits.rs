use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{Float, Zero};

use crate::graph::Edge;

/// Trait for graph representations that can answer incidence queries.
///
/// This is the seam the shortest-path algorithms are written against: any
/// structure that can say which edges touch a vertex can be searched.
pub trait IncidenceGraph<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Returns true if the vertex is present
    fn contains_vertex(&self, vertex: &T) -> bool;

    /// Returns the number of vertices
    fn vertex_count(&self) -> usize;

    /// Returns every edge incident on the vertex, in either direction
    fn incident_edges(&self, vertex: &T) -> Vec<&Edge<T, W>>;
}
