use rand::Rng;
use smartcity::{AdjacencyGraph, LazyPrim};

// Test helper to build a labelled graph from undirected edge triples
fn graph_from(edges: &[(&str, &str, u64)]) -> AdjacencyGraph<String, u64> {
    let mut graph = AdjacencyGraph::new();
    for &(u, v, w) in edges {
        graph.connect(u.to_string(), v.to_string(), w);
    }
    graph
}

// Minimal union-find for the brute-force Kruskal reference
struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            let root = self.find(self.parent[x]);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }
}

// Kruskal reference: returns (forest total weight, component count)
fn kruskal_reference(node_count: usize, edges: &[(usize, usize, u64)]) -> (u64, usize) {
    let mut sorted: Vec<_> = edges.to_vec();
    sorted.sort_by_key(|&(_, _, w)| w);

    let mut uf = UnionFind::new(node_count);
    let mut total = 0;
    for &(u, v, w) in &sorted {
        if uf.union(u, v) {
            total += w;
        }
    }

    let components = (0..node_count)
        .filter(|&v| uf.find(v) == v)
        .count();
    (total, components)
}

#[test]
fn test_triangle_picks_two_cheapest_edges() {
    let graph = graph_from(&[("A", "B", 4), ("B", "C", 2), ("A", "C", 5)]);

    let forest = LazyPrim::new().build(&graph);

    assert_eq!(forest.total_weight, 6);
    assert_eq!(forest.edge_count(), 2);

    let mut weights: Vec<u64> = forest.edges.iter().map(|e| e.weight).collect();
    weights.sort();
    assert_eq!(weights, vec![2, 4], "should keep A-B(4) and B-C(2)");
}

#[test]
fn test_forest_spans_each_component_separately() {
    // Two components: a triangle and a single edge
    let graph = graph_from(&[
        ("A", "B", 4),
        ("B", "C", 2),
        ("A", "C", 5),
        ("X", "Y", 7),
    ]);

    let forest = LazyPrim::new().build(&graph);

    // 5 nodes, 2 components -> 3 forest edges
    assert_eq!(forest.edge_count(), graph.node_count() - 2);
    assert_eq!(forest.total_weight, 6 + 7);

    // No forest edge may connect the two components
    for edge in &forest.edges {
        let in_triangle = |n: &str| matches!(n, "A" | "B" | "C");
        assert_eq!(
            in_triangle(&edge.parent),
            in_triangle(&edge.child),
            "edge {:?} crosses components",
            edge
        );
    }
}

#[test]
fn test_empty_graph_yields_empty_forest() {
    let graph: AdjacencyGraph<String, u64> = AdjacencyGraph::new();

    let forest = LazyPrim::new().build(&graph);

    assert_eq!(forest.total_weight, 0);
    assert!(forest.edges.is_empty());
}

#[test]
fn test_equal_weights_still_span() {
    let graph = graph_from(&[("A", "B", 3), ("B", "C", 3), ("A", "C", 3)]);

    let forest = LazyPrim::new().build(&graph);

    // Any two of the three edges form a minimum tree
    assert_eq!(forest.total_weight, 6);
    assert_eq!(forest.edge_count(), 2);
}

#[test]
fn test_random_graphs_match_kruskal_reference() {
    let mut rng = rand::thread_rng();

    for _ in 0..200 {
        let node_count = rng.gen_range(2..8);
        let edge_count = rng.gen_range(1..12);

        let mut graph: AdjacencyGraph<usize, u64> = AdjacencyGraph::new();
        let mut edges = Vec::new();
        for _ in 0..edge_count {
            let u = rng.gen_range(0..node_count);
            let v = rng.gen_range(0..node_count);
            if u == v {
                continue;
            }
            let w = rng.gen_range(1..20);
            graph.connect(u, v, w);
            edges.push((u, v, w));
        }

        // Only nodes that actually appear in some edge take part
        let active: Vec<usize> = (0..node_count).filter(|n| graph.contains(n)).collect();
        if active.is_empty() {
            continue;
        }

        // Re-index the reference over active nodes only
        let index_of = |n: usize| active.iter().position(|&a| a == n).unwrap();
        let reindexed: Vec<_> = edges
            .iter()
            .map(|&(u, v, w)| (index_of(u), index_of(v), w))
            .collect();
        let (expected_total, components) = kruskal_reference(active.len(), &reindexed);

        let forest = LazyPrim::new().build(&graph);

        assert_eq!(
            forest.total_weight, expected_total,
            "lazy Prim total diverges from Kruskal on edges {:?}",
            edges
        );
        assert_eq!(
            forest.edge_count(),
            active.len() - components,
            "forest edge count should be nodes minus components on edges {:?}",
            edges
        );
    }
}
