pub mod greedy;
pub mod lp_rounding;
pub mod naive;
pub mod two_approx;

use std::collections::BTreeSet;

use crate::graph::{Cover, Graph, Node};

pub use lp_rounding::LpRelaxation;

/// Uncovered edges of a solver run, popped smallest first.
#[derive(Debug, Clone)]
pub(crate) struct ResidualEdges {
    edges: BTreeSet<(Node, Node)>,
}

impl ResidualEdges {
    pub(crate) fn new(graph: &Graph) -> Self {
        Self {
            edges: graph.edges().collect(),
        }
    }

    /// Removes and returns the lexicographically smallest remaining edge.
    pub(crate) fn pop(&mut self) -> Option<(Node, Node)> {
        self.edges.pop_first()
    }

    /// Drops every edge with an endpoint in `cover`.
    pub(crate) fn strip_covered(&mut self, cover: &Cover) {
        self.edges
            .retain(|&(u, v)| !cover.contains(u) && !cover.contains(v));
    }
}
