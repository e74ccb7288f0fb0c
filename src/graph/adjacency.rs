use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A weighted arc to a neighboring node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<N, W> {
    /// Target node label
    pub to: N,
    /// Arc weight, recorded exactly as provided
    pub weight: W,
}

/// A labelled graph implementation using adjacency lists
///
/// Connections are undirected at the input boundary: [`connect`] stores a pair
/// of opposite directed arcs carrying the same weight. Node labels are opaque
/// keys created implicitly the first time they appear as an endpoint. Nothing
/// ever removes or reweights an arc.
///
/// Node iteration follows first-seen insertion order, which makes traversal
/// tie-breaks deterministic for a given input sequence.
///
/// [`connect`]: AdjacencyGraph::connect
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Copy + Debug,
{
    /// Outgoing arcs for each node: label -> [(target, weight)]
    adjacency: HashMap<N, Vec<Edge<N, W>>>,

    /// Node labels in first-seen order
    order: Vec<N>,
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Copy + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            adjacency: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Records an undirected connection between `u` and `v`
    ///
    /// Inserts both `u -> v` and `v -> u` with the same weight, creating
    /// either endpoint's adjacency entry if absent. All algorithms assume
    /// non-negative weights; negative values are not rejected here but void
    /// their correctness guarantees.
    pub fn connect(&mut self, u: N, v: N, weight: W) {
        self.insert_arc(u.clone(), v.clone(), weight);
        self.insert_arc(v, u, weight);
    }

    fn insert_arc(&mut self, from: N, to: N, weight: W) {
        if !self.adjacency.contains_key(&from) {
            self.order.push(from.clone());
        }
        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge { to, weight });
    }

    /// Returns the outgoing arcs of `u`, or an empty slice for unknown labels
    pub fn neighbors(&self, u: &N) -> &[Edge<N, W>] {
        self.adjacency.get(u).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns an iterator over node labels in first-seen order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.order.iter()
    }

    /// Returns true if `u` has appeared as an endpoint of some connection
    pub fn contains(&self, u: &N) -> bool {
        self.adjacency.contains_key(u)
    }

    /// Returns the number of distinct node labels
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Returns the number of directed arcs (twice the number of connections)
    pub fn arc_count(&self) -> usize {
        self.adjacency.values().map(|arcs| arcs.len()).sum()
    }

    /// Returns true if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<N, W> Default for AdjacencyGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
