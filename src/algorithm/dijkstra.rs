use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::{PathStep, ShortestPathAlgorithm, ShortestPathTree};
use crate::data_structures::{AdaptablePriorityQueue, Handle};
use crate::graph::IncidenceGraph;
use crate::{Error, Result};

/// Dijkstra's algorithm with true decrease-key relaxation.
///
/// The open set lives in an [`AdaptablePriorityQueue`]; when a cheaper path to
/// an already-opened vertex is found, its queue entry is re-keyed in place
/// through its handle instead of being re-inserted. Each vertex moves
/// unseen -> opened -> closed exactly once, and a closed distance is final.
///
/// Edge weights must be non-negative, which [`crate::Graph::add_edge`]
/// enforces at construction.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Computes shortest paths from `source` to every reachable vertex
    pub fn shortest_paths_from<T, W, G>(&self, graph: &G, source: &T) -> Result<ShortestPathTree<T, W>>
    where
        T: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy + Ord,
        G: IncidenceGraph<T, W>,
    {
        self.compute(graph, source)
    }

    /// Computes the source-to-target path as ordered (vertex, incremental
    /// cost) steps. Fails with [`Error::UnreachableTarget`] when no path
    /// exists.
    pub fn shortest_path<T, W, G>(
        &self,
        graph: &G,
        source: &T,
        target: &T,
    ) -> Result<Vec<PathStep<T, W>>>
    where
        T: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy + Ord,
        G: IncidenceGraph<T, W>,
    {
        self.compute(graph, source)?.path_to(target)
    }
}

impl<T, W, G> ShortestPathAlgorithm<T, W, G> for Dijkstra
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
    G: IncidenceGraph<T, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute(&self, graph: &G, source: &T) -> Result<ShortestPathTree<T, W>> {
        if !graph.contains_vertex(source) {
            return Err(Error::SourceNotFound(format!("{:?}", source)));
        }

        // Tentatively reached vertices and their live queue handles.
        let mut opened: AdaptablePriorityQueue<W, T> = AdaptablePriorityQueue::new();
        let mut handles: HashMap<T, Handle> = HashMap::new();
        // Best-so-far predecessors, valid only while a vertex is opened.
        let mut preds: HashMap<T, Option<T>> = HashMap::new();
        // Finalized (distance, predecessor) per vertex.
        let mut closed: HashMap<T, (W, Option<T>)> = HashMap::new();

        preds.insert(source.clone(), None);
        handles.insert(source.clone(), opened.insert(W::zero(), source.clone()));

        while !opened.is_empty() {
            let (cost, vertex) = opened.extract_min()?;
            handles.remove(&vertex);
            let predecessor = preds.remove(&vertex).flatten();
            trace!("closing {:?} at distance {:?}", vertex, cost);
            closed.insert(vertex.clone(), (cost, predecessor));

            for edge in graph.incident_edges(&vertex) {
                let next = match edge.opposite(&vertex) {
                    Some(next) => next,
                    None => continue,
                };
                if closed.contains_key(next) {
                    continue;
                }
                let new_cost = cost + edge.weight();
                match handles.get(next) {
                    None => {
                        preds.insert(next.clone(), Some(vertex.clone()));
                        handles.insert(next.clone(), opened.insert(new_cost, next.clone()));
                    }
                    Some(&handle) => {
                        if new_cost < *opened.key_of(handle)? {
                            opened.update_key(handle, new_cost)?;
                            preds.insert(next.clone(), Some(vertex.clone()));
                        }
                    }
                }
            }
        }

        debug!(
            "dijkstra from {:?} closed {} of {} vertices",
            source,
            closed.len(),
            graph.vertex_count()
        );
        Ok(ShortestPathTree::new(source.clone(), closed))
    }
}
