use log::debug;

use crate::error::{Error, Result};
use crate::graph::{Cover, Graph, Node};
use crate::lp::{LpModel, LpSolution, LpSolver};

/// Variables at or above this value join the cover.
pub const ROUNDING_THRESHOLD: f64 = 0.5;

/// Outcome of the LP relaxation: the fractional optimum and its rounded cover.
#[derive(Debug, Clone, PartialEq)]
pub struct LpRelaxation {
    pub objective: f64,
    pub cover: Cover,
}

impl LpRelaxation {
    pub fn rounded_size(&self) -> usize {
        self.cover.len()
    }
}

/// Implements the LP Rounding algorithm for Vertex Cover.
///
/// This algorithm provides a 2-approximation. It works by:
/// 1. Solving the LP relaxation (one `[0, 1]` variable per node, `x_u + x_v >= 1`
///    per edge, minimize the sum) with `solver`
/// 2. Rounding every variable `>= 0.5` up to 1 and every other variable down to 0
///
/// Every edge constraint forces one of its two variables to at least 0.5, so
/// the rounded set is a cover. On odd cycles all-halves optima round every
/// node into the cover.
///
/// # Arguments
///
/// * `graph` - The input graph
/// * `solver` - The LP solving service
///
/// # Returns
///
/// * The LP optimum together with the rounded cover, or the solver's error
pub fn solve<S: LpSolver + ?Sized>(graph: &Graph, solver: &S) -> Result<LpRelaxation> {
    let model = LpModel::vertex_cover(graph);
    let solution = if model.constraints().is_empty() {
        debug!("no edges, skipping {} solver", solver.name());
        LpSolution::zero(model.num_variables())
    } else {
        solver.solve(&model)?
    };
    check_solution(&model, &solution)?;

    let cover = round_solution(&model, &solution.values);
    if let Some((u, v)) = graph.uncovered_edge(&cover) {
        return Err(Error::MalformedSolverOutput(format!(
            "solution violates x{} + x{} >= 1 for edge ({}, {})",
            position(&model, u),
            position(&model, v),
            u,
            v
        )));
    }

    debug!(
        "LP objective {} rounded to cover of size {}",
        solution.objective,
        cover.len()
    );
    Ok(LpRelaxation {
        objective: solution.objective,
        cover,
    })
}

/// Threshold rounding: `value < 0.5` is out, `value >= 0.5` is in.
pub fn round(value: f64) -> bool {
    value >= ROUNDING_THRESHOLD
}

fn round_solution(model: &LpModel, values: &[f64]) -> Cover {
    model
        .variables()
        .iter()
        .zip(values)
        .filter(|&(_, &value)| round(value))
        .map(|(&node, _)| node)
        .collect()
}

fn check_solution(model: &LpModel, solution: &LpSolution) -> Result<()> {
    if solution.values.len() != model.num_variables() {
        return Err(Error::MalformedSolverOutput(format!(
            "expected {} variable values, got {}",
            model.num_variables(),
            solution.values.len()
        )));
    }
    if !solution.objective.is_finite() || solution.values.iter().any(|x| !x.is_finite()) {
        return Err(Error::MalformedSolverOutput(
            "non-finite value in solution".to_owned(),
        ));
    }
    Ok(())
}

fn position(model: &LpModel, node: Node) -> usize {
    model
        .variables()
        .binary_search(&node)
        .map_or(0, |index| index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generate;
    use crate::lp::HalfIntegralSolver;
    use approx::assert_relative_eq;
    use std::cell::Cell;

    /// Replays a fixed solution and counts how often it was asked.
    struct Scripted {
        result: fn() -> Result<LpSolution>,
        calls: Cell<usize>,
    }

    impl Scripted {
        fn new(result: fn() -> Result<LpSolution>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
            }
        }
    }

    impl LpSolver for Scripted {
        fn solve(&self, _model: &LpModel) -> Result<LpSolution> {
            self.calls.set(self.calls.get() + 1);
            (self.result)()
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    #[test]
    fn test_threshold_is_half_open() {
        assert!(round(0.5));
        assert!(round(1.0));
        assert!(!round(0.499_999_999));
        assert!(!round(0.0));
    }

    #[test]
    fn test_path_rounds_to_middle() {
        let relaxation = solve(&generate::path(3), &HalfIntegralSolver).unwrap();

        assert_relative_eq!(relaxation.objective, 1.0);
        assert_eq!(relaxation.rounded_size(), 1);
        assert!(relaxation.cover.contains(2));
    }

    #[test]
    fn test_rounds_the_reported_point() {
        // Feasible but not optimal; rounding only looks at the values it is given.
        let solver = Scripted::new(|| {
            Ok(LpSolution {
                objective: 1.5,
                values: vec![0.5, 0.5, 0.5],
            })
        });
        let relaxation = solve(&generate::path(3), &solver).unwrap();

        assert_eq!(relaxation.rounded_size(), 3);
        assert_eq!(solver.calls.get(), 1);
    }

    #[test]
    fn test_triangle_rounds_every_half_up() {
        let relaxation = solve(&generate::complete(3), &HalfIntegralSolver).unwrap();

        // Optimum integer cover has size 2; rounding all-halves gives 3.
        assert_relative_eq!(relaxation.objective, 1.5);
        assert_eq!(relaxation.rounded_size(), 3);
    }

    #[test]
    fn test_no_edges_skips_solver() {
        let solver = Scripted::new(|| Err(Error::SolverUnavailable("not running".to_owned())));

        let mut graph = Graph::new();
        graph.add_node(1);
        graph.add_node(2);
        let relaxation = solve(&graph, &solver).unwrap();

        assert_eq!(relaxation.objective, 0.0);
        assert!(relaxation.cover.is_empty());
        assert_eq!(solver.calls.get(), 0);

        let relaxation = solve(&Graph::new(), &solver).unwrap();
        assert_eq!(relaxation.rounded_size(), 0);
    }

    #[test]
    fn test_solver_errors_propagate() {
        let solver = Scripted::new(|| Err(Error::Infeasible));
        assert!(matches!(
            solve(&generate::path(3), &solver),
            Err(Error::Infeasible)
        ));

        let solver = Scripted::new(|| Err(Error::SolverUnavailable("gone".to_owned())));
        assert!(matches!(
            solve(&generate::path(3), &solver),
            Err(Error::SolverUnavailable(_))
        ));
    }

    #[test]
    fn test_short_solution_is_malformed() {
        let solver = Scripted::new(|| {
            Ok(LpSolution {
                objective: 1.0,
                values: vec![0.0, 1.0],
            })
        });
        assert!(matches!(
            solve(&generate::path(3), &solver),
            Err(Error::MalformedSolverOutput(_))
        ));
    }

    #[test]
    fn test_non_finite_value_is_malformed() {
        let solver = Scripted::new(|| {
            Ok(LpSolution {
                objective: 1.0,
                values: vec![0.0, f64::NAN, 0.0],
            })
        });
        assert!(matches!(
            solve(&generate::path(3), &solver),
            Err(Error::MalformedSolverOutput(_))
        ));
    }

    #[test]
    fn test_infeasible_point_is_rejected() {
        let solver = Scripted::new(|| {
            Ok(LpSolution {
                objective: 0.8,
                values: vec![0.4, 0.4, 0.0],
            })
        });
        match solve(&generate::path(3), &solver) {
            Err(Error::MalformedSolverOutput(message)) => {
                assert!(message.contains("x1 + x2 >= 1"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_cover_uses_node_ids_not_positions() {
        let graph = Graph::from_edges(vec![(10, 20), (20, 30)]).unwrap();

        let relaxation = solve(&graph, &HalfIntegralSolver).unwrap();

        assert_eq!(relaxation.cover.iter().collect::<Vec<_>>(), vec![20]);
    }
}
