use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;
use num_traits::Zero;

use crate::data_structures::MinHeap;
use crate::graph::AdjacencyGraph;
use crate::{Error, Result};

/// Result of a single-source shortest path computation
///
/// A node absent from the distance map is unreachable from the source. The
/// source itself has no predecessor entry; that absence is the sentinel that
/// terminates path reconstruction.
#[derive(Debug, Clone)]
pub struct ShortestPaths<N, W>
where
    N: Eq + Hash + Clone,
{
    /// Shortest known distance per reachable node
    distances: HashMap<N, W>,

    /// Predecessor of each reached node in the shortest path tree
    predecessors: HashMap<N, N>,

    /// Source node label
    source: N,
}

impl<N, W> ShortestPaths<N, W>
where
    N: Eq + Hash + Clone,
    W: Copy,
{
    /// Returns the source node of this computation
    pub fn source(&self) -> &N {
        &self.source
    }

    /// Returns the shortest distance to `target`, or `None` if unreachable
    pub fn distance_to(&self, target: &N) -> Option<W> {
        self.distances.get(target).copied()
    }

    /// Reconstructs the shortest path from the source to `target` inclusive
    ///
    /// Walks predecessor links from `target` back to the source and reverses
    /// the result. Returns `None` for an unreachable target.
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        self.distances.get(target)?;

        let mut path = vec![target.clone()];
        let mut current = target;
        while *current != self.source {
            current = self.predecessors.get(current)?;
            path.push(current.clone());
        }
        path.reverse();

        Some(path)
    }
}

/// Classic Dijkstra's algorithm over labelled graphs
///
/// Correct for non-negative weights only, which the road-network input model
/// guarantees but the graph store does not enforce.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Computes shortest distances from `source` to every reachable node
    ///
    /// Fails with [`Error::SourceNotFound`] when `source` never appeared as an
    /// endpoint in `graph`. Unreachable nodes are a normal outcome, reported
    /// through [`ShortestPaths::distance_to`] returning `None`.
    pub fn compute<N, W>(
        &self,
        graph: &AdjacencyGraph<N, W>,
        source: &N,
    ) -> Result<ShortestPaths<N, W>>
    where
        N: Eq + Hash + Ord + Clone + Debug,
        W: Copy + Ord + Zero + Debug,
    {
        if !graph.contains(source) {
            return Err(Error::SourceNotFound);
        }

        // Absent map entry plays the role of "infinity"
        let mut distances: HashMap<N, W> = HashMap::new();
        let mut predecessors: HashMap<N, N> = HashMap::new();
        distances.insert(source.clone(), W::zero());

        let mut queue: MinHeap<(W, N)> = MinHeap::new();
        queue.push((W::zero(), source.clone()));

        while let Some((dist_u, u)) = queue.pop() {
            // A shorter path to u was found after this entry was queued; skip
            if let Some(best) = distances.get(&u) {
                if *best < dist_u {
                    continue;
                }
            }

            // Relax all outgoing arcs
            for edge in graph.neighbors(&u) {
                let next = dist_u + edge.weight;

                let improves = match distances.get(&edge.to) {
                    None => true,
                    Some(current) => next < *current,
                };

                if improves {
                    distances.insert(edge.to.clone(), next);
                    predecessors.insert(edge.to.clone(), u.clone());
                    queue.push((next, edge.to.clone()));
                }
            }
        }

        debug!(
            "dijkstra from {:?} settled {} of {} nodes",
            source,
            distances.len(),
            graph.node_count()
        );

        Ok(ShortestPaths {
            distances,
            predecessors,
            source: source.clone(),
        })
    }
}
