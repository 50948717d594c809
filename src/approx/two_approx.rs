use log::debug;

use crate::approx::ResidualEdges;
use crate::graph::{Cover, Graph};

/// Implements the edge-based 2-approximation for Vertex Cover.
///
/// The cover is at most twice the size of an optimal one: the picked edges
/// form a matching, and any cover must contain one endpoint of each of them.
/// It works by repeatedly taking an uncovered edge, adding both endpoints to
/// the cover and discarding every edge they touch.
///
/// Edges are taken smallest first (normalized `(min, max)`, lexicographic),
/// so the result is reproducible.
///
/// # Arguments
///
/// * `graph` - The input graph
///
/// # Returns
///
/// * A cover of `graph`
pub fn solve(graph: &Graph) -> Cover {
    let mut cover = Cover::new();
    let mut residual = ResidualEdges::new(graph);

    while let Some((u, v)) = residual.pop() {
        cover.insert(u);
        cover.insert(v);
        residual.strip_covered(&cover);
    }

    debug!("two-approx cover of size {}", cover.len());
    cover
}
