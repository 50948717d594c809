use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::graph::Node;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("graph not found: {}", .0.display())]
    GraphNotFound(PathBuf),

    #[error("malformed graph input at line {line}: {reason}")]
    GraphParse { line: usize, reason: String },

    #[error("self-loop on node {0}")]
    SelfLoop(Node),

    #[error("LP solver unavailable: {0}")]
    SolverUnavailable(String),

    #[error("LP solver reported the problem as infeasible")]
    Infeasible,

    #[error("LP solver reported the problem as unbounded")]
    Unbounded,

    #[error("malformed solver output: {0}")]
    MalformedSolverOutput(String),

    #[error("{solver} cover leaves edge ({u}, {v}) uncovered")]
    InvalidCover {
        solver: &'static str,
        u: Node,
        v: Node,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}
