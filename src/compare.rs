//! Runs every solver over a batch of graphs and collects one row per graph.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{debug, info, warn};

use crate::approx::{greedy, lp_rounding, naive, two_approx};
use crate::error::{Error, Result};
use crate::graph::{Cover, Graph, GraphProvider};
use crate::lp::LpSolver;

/// Sizes reported by every method for one graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub graph_id: String,
    pub lp_objective: f64,
    pub lp_rounded: usize,
    pub naive: usize,
    pub greedy: usize,
    pub two_approx: usize,
}

impl fmt::Display for ResultRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {:?} | {} | {} | {} | {}",
            self.graph_id,
            self.lp_objective,
            self.lp_rounded,
            self.naive,
            self.greedy,
            self.two_approx
        )
    }
}

/// Result of processing one graph of the batch.
#[derive(Debug)]
pub struct RowOutcome {
    pub graph_id: String,
    pub result: Result<ResultRow>,
}

impl fmt::Display for RowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(row) => write!(f, "{}", row),
            Err(err) => write!(f, "{} | FAILED: {}", self.graph_id, err),
        }
    }
}

/// Outcomes of a batch, in input order.
#[derive(Debug, Default)]
pub struct Report {
    outcomes: Vec<RowOutcome>,
}

impl Report {
    pub fn outcomes(&self) -> &[RowOutcome] {
        &self.outcomes
    }

    pub fn rows(&self) -> impl Iterator<Item = &ResultRow> + '_ {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Writes one line per graph.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for outcome in &self.outcomes {
            writeln!(out, "{}", outcome)?;
        }
        out.flush()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))?;
        Ok(())
    }
}

/// Batch ids `<prefix>01 ..= <prefix><count>`, zero-padded to at least two digits.
pub fn numbered_batch(prefix: &str, count: usize) -> Vec<String> {
    let width = count.to_string().len().max(2);
    (1..=count)
        .map(|i| format!("{}{:0width$}", prefix, i, width = width))
        .collect()
}

/// Compares all four vertex cover methods on graphs from `provider`.
pub struct Comparator<P, S> {
    provider: P,
    solver: S,
}

impl<P: GraphProvider, S: LpSolver> Comparator<P, S> {
    pub fn new(provider: P, solver: S) -> Self {
        Self { provider, solver }
    }

    /// Loads `graph_id` and compares all methods on it.
    pub fn compare_id(&self, graph_id: &str) -> Result<ResultRow> {
        let graph = self.provider.load(graph_id)?;
        self.compare(graph_id, &graph)
    }

    /// Runs every method on `graph` and checks each cover before reporting.
    pub fn compare(&self, graph_id: &str, graph: &Graph) -> Result<ResultRow> {
        debug!(
            "{}: {} nodes, {} edges",
            graph_id,
            graph.num_nodes(),
            graph.num_edges()
        );
        let naive = checked(graph, "naive", naive::solve(graph))?;
        let greedy = checked(graph, "greedy", greedy::solve(graph))?;
        let two_approx = checked(graph, "two-approx", two_approx::solve(graph))?;
        let lp = lp_rounding::solve(graph, &self.solver)?;

        Ok(ResultRow {
            graph_id: graph_id.to_owned(),
            lp_objective: lp.objective,
            lp_rounded: lp.rounded_size(),
            naive: naive.len(),
            greedy: greedy.len(),
            two_approx: two_approx.len(),
        })
    }

    /// Processes `ids` in order. A failing graph produces a failed outcome and
    /// the batch moves on.
    pub fn run_batch<I>(&self, ids: I) -> Report
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut report = Report::default();
        for id in ids {
            let graph_id = id.as_ref().to_owned();
            let result = self.compare_id(&graph_id);
            match &result {
                Ok(row) => info!("{}", row),
                Err(err) => warn!("{} failed: {}", graph_id, err),
            }
            report.outcomes.push(RowOutcome { graph_id, result });
        }
        report
    }
}

fn checked(graph: &Graph, solver: &'static str, cover: Cover) -> Result<Cover> {
    match graph.uncovered_edge(&cover) {
        Some((u, v)) => Err(Error::InvalidCover { solver, u, v }),
        None => Ok(cover),
    }
}
