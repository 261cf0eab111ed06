use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{Float, Zero};

use crate::graph::IncidenceGraph;
use crate::{Error, Result};

/// One step on a reconstructed path: the vertex reached and the cost of the
/// edge taken to reach it (zero for the source step).
#[derive(Debug, Clone, PartialEq)]
pub struct PathStep<T, W> {
    pub vertex: T,
    pub cost: W,
}

/// Result of a single-source shortest-path computation.
///
/// Holds, for every vertex reachable from the source, its finalized distance
/// and its immediate predecessor on a shortest path. Vertices with no path
/// from the source are simply absent.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    source: T,
    closed: HashMap<T, (W, Option<T>)>,
}

impl<T, W> ShortestPathTree<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    pub(crate) fn new(source: T, closed: HashMap<T, (W, Option<T>)>) -> Self {
        ShortestPathTree { source, closed }
    }

    /// Returns the source vertex the tree was computed from
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Returns the number of reached vertices (the source included)
    pub fn len(&self) -> usize {
        self.closed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closed.is_empty()
    }

    /// Returns true if the vertex was reached from the source
    pub fn is_reached(&self, vertex: &T) -> bool {
        self.closed.contains_key(vertex)
    }

    /// Returns the finalized distance to the vertex, if it was reached
    pub fn distance(&self, vertex: &T) -> Option<W> {
        self.closed.get(vertex).map(|(distance, _)| *distance)
    }

    /// Returns the vertex's immediate predecessor on a shortest path; `None`
    /// for the source and for unreached vertices
    pub fn predecessor(&self, vertex: &T) -> Option<&T> {
        self.closed
            .get(vertex)
            .and_then(|(_, predecessor)| predecessor.as_ref())
    }

    /// Returns an iterator over (vertex, distance, predecessor) for every
    /// reached vertex
    pub fn iter(&self) -> impl Iterator<Item = (&T, W, Option<&T>)> {
        self.closed
            .iter()
            .map(|(vertex, (distance, predecessor))| (vertex, *distance, predecessor.as_ref()))
    }

    /// Reconstructs the source-to-target path as ordered steps.
    ///
    /// Walks the predecessor chain backward from the target, recording each
    /// step's incremental cost (the difference between successive cumulative
    /// distances), then reverses the walk. The first step is the source with
    /// zero cost, so the step costs sum to the target's distance. Fails with
    /// [`Error::UnreachableTarget`] when the target was never reached.
    pub fn path_to(&self, target: &T) -> Result<Vec<PathStep<T, W>>> {
        if !self.closed.contains_key(target) {
            return Err(Error::UnreachableTarget(format!("{:?}", target)));
        }
        let mut route = Vec::new();
        let mut vertex = target.clone();
        loop {
            match self.closed.get(&vertex) {
                Some((distance, Some(predecessor))) => {
                    // Every non-source distance is its predecessor's distance
                    // plus one edge; the difference is that edge's cost.
                    let via = self
                        .distance(predecessor)
                        .ok_or_else(|| Error::UnreachableTarget(format!("{:?}", target)))?;
                    route.push(PathStep {
                        vertex: vertex.clone(),
                        cost: *distance - via,
                    });
                    vertex = predecessor.clone();
                }
                // The source is the only reached vertex without a predecessor.
                _ => {
                    route.push(PathStep {
                        vertex,
                        cost: W::zero(),
                    });
                    break;
                }
            }
        }
        route.reverse();
        Ok(route)
    }
}

/// Trait for shortest-path algorithms over an incidence graph
pub trait ShortestPathAlgorithm<T, W, G>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
    G: IncidenceGraph<T, W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from the source to every reachable vertex
    fn compute(&self, graph: &G, source: &T) -> Result<ShortestPathTree<T, W>>;
}
