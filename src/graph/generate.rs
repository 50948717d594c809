//! Deterministic graph families used by tests and benchmarks.
//!
//! Nodes are labelled `1..=n`, matching the labelling of the batch input files.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::graph::{Graph, Node};

/// Path `1 - 2 - ... - n`.
pub fn path(n: Node) -> Graph {
    let mut graph = Graph::new();
    for u in 1..=n {
        graph.add_node(u);
    }
    for u in 1..n {
        let _ = graph.add_edge(u, u + 1);
    }
    graph
}

/// Cycle on `n` nodes. Fewer than three nodes degrade to a path.
pub fn cycle(n: Node) -> Graph {
    let mut graph = path(n);
    if n >= 3 {
        let _ = graph.add_edge(n, 1);
    }
    graph
}

/// Star with hub `1` and leaves `2..=leaves + 1`.
pub fn star(leaves: Node) -> Graph {
    let mut graph = Graph::new();
    graph.add_node(1);
    for leaf in 2..=leaves + 1 {
        let _ = graph.add_edge(1, leaf);
    }
    graph
}

/// Complete graph on `n` nodes.
pub fn complete(n: Node) -> Graph {
    let mut graph = Graph::new();
    for u in 1..=n {
        graph.add_node(u);
        for v in (u + 1)..=n {
            let _ = graph.add_edge(u, v);
        }
    }
    graph
}

/// Erdős–Rényi `G(n, p)`: every pair is an edge independently with probability `p`.
///
/// `p` is clamped to `[0, 1]`; a NaN `p` gives no edges.
pub fn random<R: Rng + ?Sized>(n: Node, p: f64, rng: &mut R) -> Graph {
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    let mut graph = Graph::new();
    for u in 1..=n {
        graph.add_node(u);
        for v in (u + 1)..=n {
            if rng.gen_bool(p) {
                let _ = graph.add_edge(u, v);
            }
        }
    }
    graph
}

/// [`random`] driven by a ChaCha generator seeded with `seed`.
pub fn random_seeded(n: Node, p: f64, seed: u64) -> Graph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random(n, p, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_sizes() {
        assert_eq!(path(5).num_edges(), 4);
        assert_eq!(cycle(5).num_edges(), 5);
        assert_eq!(cycle(2).num_edges(), 1);
        assert_eq!(star(6).num_edges(), 6);
        assert_eq!(star(6).degree(1), Some(6));
        assert_eq!(complete(5).num_edges(), 10);
        assert_eq!(path(1).num_nodes(), 1);
        assert_eq!(path(0).num_nodes(), 0);
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = random_seeded(30, 0.2, 7);
        let b = random_seeded(30, 0.2, 7);

        assert_eq!(a, b);
        assert_eq!(a.num_nodes(), 30);
    }

    #[test]
    fn test_random_extremes() {
        assert_eq!(random_seeded(10, 0.0, 1).num_edges(), 0);
        assert_eq!(random_seeded(10, 1.0, 1).num_edges(), 45);
    }

    #[test]
    fn test_random_out_of_range_probability() {
        assert_eq!(random_seeded(10, -0.5, 3).num_edges(), 0);
        assert_eq!(random_seeded(10, 2.0, 3).num_edges(), 45);

        let graph = random_seeded(10, f64::NAN, 3);
        assert_eq!(graph.num_nodes(), 10);
        assert_eq!(graph.num_edges(), 0);
    }
}
