use log::debug;

use crate::graph::{Cover, Graph, Node};

/// Implements the Greedy max-degree algorithm for Vertex Cover.
///
/// This algorithm gives an O(log n) approximation. It works by repeatedly
/// selecting the node with the highest degree in the residual graph, adding
/// it to the cover and deleting it together with its incident edges.
///
/// Degrees are read from the residual graph on every step. Among nodes of
/// maximum degree the lowest id wins.
///
/// # Arguments
///
/// * `graph` - The input graph; a private residual copy is consumed
///
/// # Returns
///
/// * A cover of `graph`
pub fn solve(graph: &Graph) -> Cover {
    let mut residual = graph.clone();
    let mut cover = Cover::new();

    while residual.num_edges() > 0 {
        let Some(node) = max_degree_node(&residual) else {
            break;
        };
        residual.remove_node(node);
        cover.insert(node);
    }

    debug!("greedy cover of size {}", cover.len());
    cover
}

/// Returns the node with the highest degree, or `None` if the graph has no edges.
fn max_degree_node(graph: &Graph) -> Option<Node> {
    let mut best_degree = 0;
    let mut best_node = None;
    for node in graph.nodes() {
        let degree = graph.degree(node).unwrap_or(0);
        if degree > best_degree {
            best_degree = degree;
            best_node = Some(node);
        }
    }
    best_node
}
