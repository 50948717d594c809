pub mod format;
pub mod half_integral;
pub mod lp_solve;

use crate::error::Result;
use crate::graph::{Graph, Node};

pub use half_integral::HalfIntegralSolver;
pub use lp_solve::LpSolveProcess;

/// Edge constraint `x_left + x_right >= 1`, by variable position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverConstraint {
    pub left: usize,
    pub right: usize,
}

/// Linear relaxation of vertex cover for one graph.
///
/// minimize   sum_i x_i
/// subject to x_u + x_v >= 1   for every edge (u, v)
///            0 <= x_i <= 1
///
/// Variables are ordered by ascending node id; the variable at position `i`
/// is named `x{i + 1}` in the textual format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LpModel {
    variables: Vec<Node>,
    constraints: Vec<CoverConstraint>,
}

impl LpModel {
    pub fn vertex_cover(graph: &Graph) -> Self {
        let variables: Vec<Node> = graph.nodes().collect();
        let constraints = graph
            .edges()
            .map(|(u, v)| CoverConstraint {
                left: position_of(&variables, u),
                right: position_of(&variables, v),
            })
            .collect();
        Self {
            variables,
            constraints,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Node behind each variable, in variable order.
    pub fn variables(&self) -> &[Node] {
        &self.variables
    }

    pub fn constraints(&self) -> &[CoverConstraint] {
        &self.constraints
    }

    /// Textual name of the variable at `position`.
    pub fn variable_name(position: usize) -> String {
        format!("x{}", position + 1)
    }

    /// Inverse of [`LpModel::variable_name`], restricted to this model's variables.
    pub fn position_of_name(&self, name: &str) -> Option<usize> {
        let index: usize = name.strip_prefix('x')?.parse().ok()?;
        (1..=self.num_variables())
            .contains(&index)
            .then(|| index - 1)
    }

    /// Objective value of `values`.
    pub fn objective(&self, values: &[f64]) -> f64 {
        values.iter().sum()
    }

    /// Checks bounds and edge constraints within `tolerance`.
    pub fn is_feasible(&self, values: &[f64], tolerance: f64) -> bool {
        values.len() == self.num_variables()
            && values
                .iter()
                .all(|&x| x >= -tolerance && x <= 1.0 + tolerance)
            && self
                .constraints
                .iter()
                .all(|c| values[c.left] + values[c.right] >= 1.0 - tolerance)
    }
}

// Edge endpoints always come from the same graph as `variables`.
fn position_of(variables: &[Node], node: Node) -> usize {
    variables.binary_search(&node).unwrap_or_else(|pos| pos)
}

/// Optimal point reported by an [`LpSolver`], values in model variable order.
#[derive(Debug, Clone, PartialEq)]
pub struct LpSolution {
    pub objective: f64,
    pub values: Vec<f64>,
}

impl LpSolution {
    /// The all-zero point, optimal for a model without constraints.
    pub fn zero(num_variables: usize) -> Self {
        Self {
            objective: 0.0,
            values: vec![0.0; num_variables],
        }
    }
}

/// An LP solving service.
pub trait LpSolver {
    /// Returns the optimal objective and variable values, or fails with
    /// `Infeasible`, `Unbounded` or `SolverUnavailable`.
    fn solve(&self, model: &LpModel) -> Result<LpSolution>;

    /// Solver name for logging.
    fn name(&self) -> &str;
}

impl<S: LpSolver + ?Sized> LpSolver for &S {
    fn solve(&self, model: &LpModel) -> Result<LpSolution> {
        (**self).solve(model)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S: LpSolver + ?Sized> LpSolver for Box<S> {
    fn solve(&self, model: &LpModel) -> Result<LpSolution> {
        (**self).solve(model)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
