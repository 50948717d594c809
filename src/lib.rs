pub mod approx;
pub mod compare;
pub mod config;
pub mod error;
pub mod graph;
pub mod lp;

pub use compare::{Comparator, Report, ResultRow, RowOutcome};
pub use config::Config;
pub use error::{Error, Result};
pub use graph::{Cover, Graph, GraphProvider, Node};
pub use lp::{LpModel, LpSolution, LpSolver};
