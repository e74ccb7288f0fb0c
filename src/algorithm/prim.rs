use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;
use num_traits::Zero;

use crate::data_structures::MinHeap;
use crate::graph::AdjacencyGraph;

/// One connection chosen for the spanning forest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestEdge<N, W> {
    /// The already-connected endpoint
    pub parent: N,
    /// The endpoint this edge absorbed into the tree
    pub child: N,
    /// Weight of the chosen connection
    pub weight: W,
}

/// Result of a minimum-spanning-forest computation
///
/// Holds one tree per connected component of the input graph, flattened into
/// a single edge sequence, plus the summed weight over all trees.
#[derive(Debug, Clone)]
pub struct SpanningForest<N, W> {
    /// Chosen edges in the order they were absorbed
    pub edges: Vec<ForestEdge<N, W>>,
    /// Sum of the chosen edge weights over all components
    pub total_weight: W,
}

impl<N, W> SpanningForest<N, W> {
    /// Number of edges in the forest: `node_count - component_count`
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Minimum spanning forest via lazy Prim
///
/// Runs Prim's algorithm once per undiscovered component against a shared
/// visited set. Queue entries are never removed eagerly; entries whose node
/// was absorbed in the meantime are discarded when popped.
#[derive(Debug, Default)]
pub struct LazyPrim;

impl LazyPrim {
    /// Creates a new lazy Prim instance
    pub fn new() -> Self {
        LazyPrim
    }

    /// Computes the minimum spanning forest of `graph`
    ///
    /// An empty graph yields an empty forest with zero total weight. The
    /// result connects each component internally, never across components.
    pub fn build<N, W>(&self, graph: &AdjacencyGraph<N, W>) -> SpanningForest<N, W>
    where
        N: Eq + Hash + Ord + Clone + Debug,
        W: Copy + Ord + Zero + Debug,
    {
        let mut visited: HashSet<N> = HashSet::new();
        let mut edges = Vec::new();
        let mut total = W::zero();

        for seed in graph.nodes() {
            if visited.contains(seed) {
                continue;
            }
            debug!("starting component run at {:?}", seed);

            // Sentinel entry: zero weight, no parent
            let mut queue: MinHeap<(W, N, Option<N>)> = MinHeap::new();
            queue.push((W::zero(), seed.clone(), None));

            while let Some((weight, node, parent)) = queue.pop() {
                // Stale entry, already absorbed
                if visited.contains(&node) {
                    continue;
                }

                visited.insert(node.clone());
                total = total + weight;

                if let Some(parent) = parent {
                    edges.push(ForestEdge {
                        parent,
                        child: node.clone(),
                        weight,
                    });
                }

                for edge in graph.neighbors(&node) {
                    if !visited.contains(&edge.to) {
                        queue.push((edge.weight, edge.to.clone(), Some(node.clone())));
                    }
                }
            }
        }

        SpanningForest {
            edges,
            total_weight: total,
        }
    }
}
