use log::debug;

use crate::approx::ResidualEdges;
use crate::graph::{Cover, Graph};

/// Single-endpoint baseline: like the 2-approximation, but each picked edge
/// only contributes its first (smaller) endpoint. No approximation bound.
pub fn solve(graph: &Graph) -> Cover {
    let mut cover = Cover::new();
    let mut residual = ResidualEdges::new(graph);

    while let Some((u, _)) = residual.pop() {
        cover.insert(u);
        residual.strip_covered(&cover);
    }

    debug!("naive cover of size {}", cover.len());
    cover
}
