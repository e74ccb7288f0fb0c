use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

use crate::graph::AdjacencyGraph;

/// Outcome of a cycle-detection / topological-sort run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopoResult<N> {
    /// A valid topological order covering every node
    Order(Vec<N>),
    /// A cycle was found; no ordering exists
    Cycle,
}

impl<N> TopoResult<N> {
    /// Returns true if a cycle was detected
    pub fn is_cyclic(&self) -> bool {
        matches!(self, TopoResult::Cycle)
    }

    /// Returns the ordering, or `None` when a cycle was detected
    pub fn order(&self) -> Option<&[N]> {
        match self {
            TopoResult::Order(nodes) => Some(nodes),
            TopoResult::Cycle => None,
        }
    }
}

/// One depth-first traversal frame; `next` indexes the node's arc list
struct Frame<N> {
    node: N,
    parent: Option<N>,
    next: usize,
}

enum Step<N> {
    Descend(N),
    Retire,
}

/// Cycle detector and topological sorter via three-color depth-first search
///
/// Node states during traversal are unvisited, on-current-path, and fully
/// visited, tracked with two sets. The traversal is an explicit stack rather
/// than recursion, so input size is not bounded by the call stack.
///
/// Connections are stored as paired opposite arcs, so the arc back to the
/// node's immediate traversal parent is treated as the reverse half of the
/// connection just taken and never counts as a cycle. Any other on-path
/// neighbor is a genuine cycle and aborts the whole computation.
#[derive(Debug, Default)]
pub struct TopoSort;

impl TopoSort {
    /// Creates a new topological sorter
    pub fn new() -> Self {
        TopoSort
    }

    /// Sorts `graph` topologically, or reports a cycle
    ///
    /// Runs depth-first from every unvisited node in insertion order,
    /// collecting nodes in post-order and reversing at the end. An empty
    /// graph yields an empty order.
    pub fn sort<N, W>(&self, graph: &AdjacencyGraph<N, W>) -> TopoResult<N>
    where
        N: Eq + Hash + Clone + Debug,
        W: Copy + Debug,
    {
        let mut visited: HashSet<N> = HashSet::new();
        let mut on_path: HashSet<N> = HashSet::new();
        let mut post_order: Vec<N> = Vec::new();

        for root in graph.nodes() {
            if visited.contains(root) {
                continue;
            }

            visited.insert(root.clone());
            on_path.insert(root.clone());
            let mut stack = vec![Frame {
                node: root.clone(),
                parent: None,
                next: 0,
            }];

            while !stack.is_empty() {
                let step = {
                    let frame = match stack.last_mut() {
                        Some(frame) => frame,
                        None => break,
                    };
                    let arcs = graph.neighbors(&frame.node);

                    let mut step = Step::Retire;
                    while frame.next < arcs.len() {
                        let edge = &arcs[frame.next];
                        frame.next += 1;

                        // Reverse half of the connection we arrived by
                        if frame.parent.as_ref() == Some(&edge.to) {
                            continue;
                        }
                        if on_path.contains(&edge.to) {
                            debug!("cycle closed at {:?} via {:?}", edge.to, frame.node);
                            return TopoResult::Cycle;
                        }
                        if !visited.contains(&edge.to) {
                            step = Step::Descend(edge.to.clone());
                            break;
                        }
                    }
                    step
                };

                match step {
                    Step::Descend(child) => {
                        visited.insert(child.clone());
                        on_path.insert(child.clone());
                        let parent = stack.last().map(|frame| frame.node.clone());
                        stack.push(Frame {
                            node: child,
                            parent,
                            next: 0,
                        });
                    }
                    Step::Retire => {
                        if let Some(frame) = stack.pop() {
                            on_path.remove(&frame.node);
                            post_order.push(frame.node);
                        }
                    }
                }
            }
        }

        post_order.reverse();
        TopoResult::Order(post_order)
    }
}
