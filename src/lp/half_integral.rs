use std::collections::VecDeque;

use log::debug;

use crate::error::Result;
use crate::lp::{LpModel, LpSolution, LpSolver};

/// In-process solver for vertex cover relaxations.
///
/// The vertex cover polytope is half-integral: some optimal point takes
/// values in {0, 1/2, 1}. Such a point is read off a minimum vertex cover of
/// the bipartite double cover (every variable split into a left and a right
/// copy, every constraint `x_u + x_v >= 1` becoming the edges `u_L - v_R` and
/// `v_L - u_R`). By König's theorem that cover has the size of a maximum
/// matching, which Hopcroft-Karp finds; `x_v` is half the number of copies of
/// `v` in the cover and the optimum is half the matching size.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalfIntegralSolver;

impl LpSolver for HalfIntegralSolver {
    fn solve(&self, model: &LpModel) -> Result<LpSolution> {
        let n = model.num_variables();
        let mut matcher = HopcroftKarp::new(n, n);
        for constraint in model.constraints() {
            matcher.add_edge(constraint.left, constraint.right);
            matcher.add_edge(constraint.right, constraint.left);
        }

        let matching = matcher.max_matching();
        let (left, right) = matcher.min_vertex_cover();
        let values: Vec<f64> = left
            .iter()
            .zip(&right)
            .map(|(&l, &r)| f64::from(u8::from(l) + u8::from(r)) / 2.0)
            .collect();
        let objective = matching as f64 / 2.0;
        debug!(
            "double cover matching of size {} over {} variables",
            matching, n
        );
        debug_assert!((model.objective(&values) - objective).abs() < 1e-9);

        Ok(LpSolution { objective, values })
    }

    fn name(&self) -> &str {
        "half-integral"
    }
}

/// Maximum bipartite matching between `left` and `right` vertex sets.
#[derive(Debug, Clone)]
struct HopcroftKarp {
    adjacency: Vec<Vec<usize>>,
    pair_left: Vec<Option<usize>>,
    pair_right: Vec<Option<usize>>,
}

const UNREACHED: usize = usize::MAX;

impl HopcroftKarp {
    fn new(left: usize, right: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); left],
            pair_left: vec![None; left],
            pair_right: vec![None; right],
        }
    }

    /// Adds an edge from `u` on the left to `v` on the right.
    fn add_edge(&mut self, u: usize, v: usize) {
        self.adjacency[u].push(v);
    }

    /// Grows the matching until no augmenting path remains; returns its size.
    fn max_matching(&mut self) -> usize {
        let mut dist = vec![UNREACHED; self.adjacency.len()];
        let mut size = 0;
        while self.layer(&mut dist) {
            for u in 0..self.adjacency.len() {
                if self.pair_left[u].is_none() && self.augment(u, &mut dist) {
                    size += 1;
                }
            }
        }
        size
    }

    // BFS from every free left vertex; true if some free right vertex is reachable.
    fn layer(&self, dist: &mut [usize]) -> bool {
        let mut queue = VecDeque::new();
        for (u, d) in dist.iter_mut().enumerate() {
            if self.pair_left[u].is_none() {
                *d = 0;
                queue.push_back(u);
            } else {
                *d = UNREACHED;
            }
        }

        let mut found = false;
        while let Some(u) = queue.pop_front() {
            for &v in &self.adjacency[u] {
                match self.pair_right[v] {
                    None => found = true,
                    Some(w) if dist[w] == UNREACHED => {
                        dist[w] = dist[u] + 1;
                        queue.push_back(w);
                    }
                    Some(_) => {}
                }
            }
        }
        found
    }

    // DFS along the BFS layers looking for an augmenting path from `root`.
    // Frames are `(left vertex, index of the next edge to try)`, so path length
    // is bounded by the heap rather than the thread stack.
    fn augment(&mut self, root: usize, dist: &mut [usize]) -> bool {
        let mut stack = vec![(root, 0)];
        while let Some(&(u, i)) = stack.last() {
            let Some(&v) = self.adjacency[u].get(i) else {
                dist[u] = UNREACHED;
                stack.pop();
                continue;
            };
            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }
            match self.pair_right[v] {
                None => {
                    // Every frame's last tried edge lies on the augmenting path.
                    for &(w, next) in &stack {
                        let x = self.adjacency[w][next - 1];
                        self.pair_left[w] = Some(x);
                        self.pair_right[x] = Some(w);
                    }
                    return true;
                }
                Some(w) if dist[w] == dist[u] + 1 => stack.push((w, 0)),
                Some(_) => {}
            }
        }
        false
    }

    /// König's construction on a maximum matching: with `Z` the vertices
    /// reachable from free left vertices along alternating paths, the cover is
    /// `(L \ Z) ∪ (R ∩ Z)`. Returns membership flags for both sides.
    fn min_vertex_cover(&self) -> (Vec<bool>, Vec<bool>) {
        let mut reached_left = vec![false; self.adjacency.len()];
        let mut reached_right = vec![false; self.pair_right.len()];
        let mut queue = VecDeque::new();
        for u in 0..self.adjacency.len() {
            if self.pair_left[u].is_none() {
                reached_left[u] = true;
                queue.push_back(u);
            }
        }

        while let Some(u) = queue.pop_front() {
            for &v in &self.adjacency[u] {
                if reached_right[v] {
                    continue;
                }
                reached_right[v] = true;
                if let Some(w) = self.pair_right[v] {
                    if !reached_left[w] {
                        reached_left[w] = true;
                        queue.push_back(w);
                    }
                }
            }
        }

        let cover_left = reached_left.into_iter().map(|reached| !reached).collect();
        (cover_left, reached_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generate;
    use crate::graph::Graph;
    use approx::assert_relative_eq;

    fn solve(graph: &Graph) -> (LpModel, LpSolution) {
        let model = LpModel::vertex_cover(graph);
        let solution = HalfIntegralSolver.solve(&model).unwrap();
        (model, solution)
    }

    #[test]
    fn test_hopcroft_karp_max_matching() {
        let mut matcher = HopcroftKarp::new(4, 4);
        matcher.add_edge(0, 1);
        matcher.add_edge(1, 2);
        matcher.add_edge(2, 3);
        assert_eq!(matcher.max_matching(), 3);
    }

    #[test]
    fn test_hopcroft_karp_needs_augmenting_path() {
        let mut matcher = HopcroftKarp::new(5, 5);
        matcher.add_edge(0, 1);
        matcher.add_edge(0, 2);
        matcher.add_edge(1, 2);
        matcher.add_edge(1, 3);
        matcher.add_edge(2, 4);
        assert_eq!(matcher.max_matching(), 3);

        let (left, right) = matcher.min_vertex_cover();
        let cover = left.iter().chain(&right).filter(|&&c| c).count();
        assert_eq!(cover, 3);
    }

    #[test]
    fn test_hopcroft_karp_empty() {
        let mut matcher = HopcroftKarp::new(0, 0);
        assert_eq!(matcher.max_matching(), 0);
    }

    #[test]
    fn test_path_is_integral() {
        let (_, solution) = solve(&generate::path(3));

        assert_relative_eq!(solution.objective, 1.0);
        assert_eq!(solution.values, vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_triangle_is_all_halves() {
        let (_, solution) = solve(&generate::complete(3));

        assert_relative_eq!(solution.objective, 1.5);
        assert_eq!(solution.values, vec![0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_star_picks_hub() {
        let (_, solution) = solve(&generate::star(5));

        assert_relative_eq!(solution.objective, 1.0);
        assert_eq!(solution.values[0], 1.0);
        assert!(solution.values[1..].iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_known_optima() {
        // Even cycles and bipartite graphs have integral optima.
        assert_relative_eq!(solve(&generate::cycle(6)).1.objective, 3.0);
        assert_relative_eq!(solve(&generate::cycle(5)).1.objective, 2.5);
        assert_relative_eq!(solve(&generate::complete(4)).1.objective, 2.0);

        let k23 = Graph::from_edges(vec![(1, 3), (1, 4), (1, 5), (2, 3), (2, 4), (2, 5)]).unwrap();
        assert_relative_eq!(solve(&k23).1.objective, 2.0);
    }

    #[test]
    fn test_empty_and_edgeless_models() {
        let (_, solution) = solve(&Graph::new());
        assert_eq!(solution.objective, 0.0);
        assert!(solution.values.is_empty());

        let mut isolated = Graph::new();
        isolated.add_node(1);
        isolated.add_node(2);
        let (_, solution) = solve(&isolated);
        assert_eq!(solution.values, vec![0.0, 0.0]);
    }

    #[test]
    fn test_random_solutions_are_feasible_and_half_integral() {
        for seed in 0..20 {
            let graph = generate::random_seeded(25, 0.15, seed);
            let (model, solution) = solve(&graph);

            assert!(model.is_feasible(&solution.values, 1e-12));
            assert_relative_eq!(model.objective(&solution.values), solution.objective);
            assert!(solution
                .values
                .iter()
                .all(|&x| x == 0.0 || x == 0.5 || x == 1.0));
        }
    }
}
