//! Command line settings for a comparison batch.

use std::path::PathBuf;

use clap::{ArgEnum, Parser};

use crate::compare::numbered_batch;
use crate::graph::EdgeListDirectory;
use crate::lp::{HalfIntegralSolver, LpSolveProcess, LpSolver};

/// Which LP solver backs the relaxation column.
#[derive(ArgEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// In-process exact solver for vertex cover LPs
    Builtin,
    /// External `lp_solve` compatible program
    LpSolve,
}

/// Compare vertex cover approximations on a batch of edge-list graphs.
#[derive(Parser, Debug, Clone)]
#[clap(name = "vc_compare", version)]
pub struct Config {
    /// Directory holding the graph files
    #[clap(long, parse(from_os_str), default_value = "graphs")]
    pub graph_dir: PathBuf,

    /// File extension of the graph files
    #[clap(long, default_value = "graph")]
    pub extension: String,

    /// Prefix of the graph ids
    #[clap(long, default_value = "g")]
    pub prefix: String,

    /// Number of graphs in the batch
    #[clap(long, default_value = "20")]
    pub count: usize,

    /// Report file
    #[clap(long, parse(from_os_str), default_value = "results.txt")]
    pub output: PathBuf,

    #[clap(long, arg_enum, default_value = "builtin")]
    pub backend: Backend,

    /// Program used by the lp-solve backend
    #[clap(long, default_value = "lp_solve")]
    pub solver_command: String,

    /// Extra argument passed before the model path (repeatable)
    #[clap(long = "solver-arg", allow_hyphen_values = true)]
    pub solver_args: Vec<String>,

    /// Where the model and the solver output are written
    #[clap(long, parse(from_os_str), default_value = ".")]
    pub work_dir: PathBuf,
}

impl Config {
    /// Graph ids of the batch, in processing order.
    pub fn batch(&self) -> Vec<String> {
        numbered_batch(&self.prefix, self.count)
    }

    pub fn graph_provider(&self) -> EdgeListDirectory {
        EdgeListDirectory::new(&self.graph_dir).with_extension(self.extension.as_str())
    }

    pub fn lp_solver(&self) -> Box<dyn LpSolver> {
        match self.backend {
            Backend::Builtin => Box::new(HalfIntegralSolver),
            Backend::LpSolve => Box::new(
                LpSolveProcess::new(&self.solver_command)
                    .with_args(&self.solver_args)
                    .with_work_dir(&self.work_dir),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["vc_compare"]).unwrap();

        assert_eq!(config.graph_dir, Path::new("graphs"));
        assert_eq!(config.output, Path::new("results.txt"));
        assert_eq!(config.backend, Backend::Builtin);
        assert_eq!(config.solver_command, "lp_solve");
        assert!(config.solver_args.is_empty());

        let batch = config.batch();
        assert_eq!(batch.len(), 20);
        assert_eq!(batch.first().map(String::as_str), Some("g01"));
        assert_eq!(batch.last().map(String::as_str), Some("g20"));

        assert_eq!(
            config.graph_provider().path_for("g07"),
            Path::new("graphs").join("g07.graph")
        );
        assert_eq!(config.lp_solver().name(), "half-integral");
    }

    #[test]
    fn test_external_backend() {
        let config = Config::try_parse_from([
            "vc_compare",
            "--backend",
            "lp-solve",
            "--solver-command",
            "/opt/lp_solve/bin/lp_solve",
            "--solver-arg",
            "-S4",
            "--solver-arg=-e",
            "--solver-arg",
            "7",
            "--work-dir",
            "/tmp/vc",
        ])
        .unwrap();

        assert_eq!(config.backend, Backend::LpSolve);
        assert_eq!(config.solver_args, vec!["-S4", "-e", "7"]);
        assert_eq!(config.lp_solver().name(), "lp_solve");
    }

    #[test]
    fn test_custom_batch() {
        let config = Config::try_parse_from([
            "vc_compare",
            "--graph-dir",
            "data",
            "--extension",
            "txt",
            "--prefix",
            "h",
            "--count",
            "3",
        ])
        .unwrap();

        assert_eq!(config.batch(), vec!["h01", "h02", "h03"]);
        assert_eq!(
            config.graph_provider().path_for("h02"),
            Path::new("data").join("h02.txt")
        );
    }

    #[test]
    fn test_rejects_unknown_backend() {
        assert!(Config::try_parse_from(["vc_compare", "--backend", "glpk"]).is_err());
        assert!(Config::try_parse_from(["vc_compare", "--count", "many"]).is_err());
    }
}
