//! Edge-list graph files.
//!
//! One edge per line as two whitespace-separated integers. Anything after the
//! second token is edge data and ignored, `#` starts a comment, and a line with
//! a single integer declares an isolated node.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphProvider, Node};

pub const DEFAULT_EXTENSION: &str = "graph";

/// Loads `<dir>/<id>.<extension>` edge-list files.
#[derive(Debug, Clone)]
pub struct EdgeListDirectory {
    dir: PathBuf,
    extension: String,
}

impl EdgeListDirectory {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            extension: DEFAULT_EXTENSION.to_owned(),
        }
    }

    pub fn with_extension<S: Into<String>>(mut self, extension: S) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing graph `id`.
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", id, self.extension))
    }
}

impl GraphProvider for EdgeListDirectory {
    fn load(&self, id: &str) -> Result<Graph> {
        let path = self.path_for(id);
        let file = File::open(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => Error::GraphNotFound(path.clone()),
            _ => Error::Io(err),
        })?;
        let graph = parse_edge_list(BufReader::new(file))?;
        debug!(
            "loaded {} from {}: {} nodes, {} edges",
            id,
            path.display(),
            graph.num_nodes(),
            graph.num_edges()
        );
        Ok(graph)
    }
}

/// Parses an edge list into a [`Graph`].
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<Graph> {
    let mut graph = Graph::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let content = match line.split_once('#') {
            Some((before, _comment)) => before,
            None => line.as_str(),
        };
        let mut tokens = content.split_whitespace();
        let first = match tokens.next() {
            Some(token) => parse_node(token, line_no)?,
            None => continue,
        };
        match tokens.next() {
            Some(token) => {
                let second = parse_node(token, line_no)?;
                graph.add_edge(first, second).map_err(|err| Error::GraphParse {
                    line: line_no,
                    reason: err.to_string(),
                })?;
            }
            None => graph.add_node(first),
        }
    }
    Ok(graph)
}

fn parse_node(token: &str, line: usize) -> Result<Node> {
    token.parse().map_err(|_| Error::GraphParse {
        line,
        reason: format!("`{}` is not a node id", token),
    })
}
