pub mod edge_list;
pub mod generate;

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

use crate::error::{Error, Result};

pub use edge_list::EdgeListDirectory;

/// Node identifier. Input graphs label their nodes with small non-negative integers.
pub type Node = u32;

/// Undirected simple graph.
///
/// Nodes are kept in an ordered adjacency map, so every iteration (nodes,
/// neighbours, edges) runs by ascending node id. Edges are reported normalized
/// as `(min, max)` in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<Node, BTreeSet<Node>>,
    num_edges: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from an edge list. Duplicate edges collapse into one.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Node, Node)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Adds `node` if it is not already present.
    pub fn add_node(&mut self, node: Node) {
        self.adjacency.entry(node).or_default();
    }

    /// Adds the undirected edge `{u, v}`, inserting missing endpoints.
    ///
    /// Returns `Ok(false)` if the edge was already present (in either orientation).
    pub fn add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        if u == v {
            return Err(Error::SelfLoop(u));
        }
        if !self.adjacency.entry(u).or_default().insert(v) {
            return Ok(false);
        }
        self.adjacency.entry(v).or_default().insert(u);
        self.num_edges += 1;
        Ok(true)
    }

    /// Removes `node` together with all incident edges.
    ///
    /// Returns the removed neighbourhood, or `None` if `node` was not in the graph.
    pub fn remove_node(&mut self, node: Node) -> Option<BTreeSet<Node>> {
        let neighbours = match self.adjacency.entry(node) {
            Entry::Occupied(entry) => entry.remove(),
            Entry::Vacant(_) => return None,
        };
        for neighbour in &neighbours {
            if let Some(set) = self.adjacency.get_mut(neighbour) {
                set.remove(&node);
            }
        }
        self.num_edges -= neighbours.len();
        Some(neighbours)
    }

    pub fn has_node(&self, node: Node) -> bool {
        self.adjacency.contains_key(&node)
    }

    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.adjacency
            .get(&u)
            .map_or(false, |neighbours| neighbours.contains(&v))
    }

    /// Iterates over all nodes by ascending id.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.adjacency.keys().copied()
    }

    /// Iterates over all edges as `(min, max)` pairs in lexicographic order.
    pub fn edges(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        self.adjacency.iter().flat_map(|(&u, neighbours)| {
            neighbours
                .range((Bound::Excluded(u), Bound::Unbounded))
                .map(move |&v| (u, v))
        })
    }

    pub fn neighbours(&self, node: Node) -> Option<&BTreeSet<Node>> {
        self.adjacency.get(&node)
    }

    /// Current degree of `node`, or `None` if `node` does not exist.
    pub fn degree(&self, node: Node) -> Option<usize> {
        self.adjacency.get(&node).map(BTreeSet::len)
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns the first edge (in edge order) with no endpoint in `cover`.
    pub fn uncovered_edge(&self, cover: &Cover) -> Option<(Node, Node)> {
        self.edges()
            .find(|&(u, v)| !cover.contains(u) && !cover.contains(v))
    }

    pub fn is_cover(&self, cover: &Cover) -> bool {
        self.uncovered_edge(cover).is_none()
    }
}

/// Source of input graphs, keyed by a batch identifier such as `g07`.
pub trait GraphProvider {
    fn load(&self, id: &str) -> Result<Graph>;
}

/// A set of nodes proposed as a vertex cover.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cover {
    nodes: BTreeSet<Node>,
}

impl Cover {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `node` was newly added.
    pub fn insert(&mut self, node: Node) -> bool {
        self.nodes.insert(node)
    }

    pub fn contains(&self, node: Node) -> bool {
        self.nodes.contains(&node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.iter().copied()
    }
}

impl FromIterator<Node> for Cover {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Node> for Cover {
    fn extend<I: IntoIterator<Item = Node>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}
