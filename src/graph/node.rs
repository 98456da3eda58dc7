//! A single graph node and its adjacency table.

/// A node identified by its position in the graph.
///
/// The adjacency table has one slot per node in the graph; slot `i` is set
/// when this node is linked to the node at position `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    position: usize,
    max_paths: usize,
    links: Vec<bool>,
    degree: usize,
}

impl Node {
    pub(super) fn new(graph_size: usize, position: usize, max_paths: usize) -> Self {
        Self {
            position,
            max_paths,
            links: vec![false; graph_size],
            degree: 0,
        }
    }

    /// Position of this node in its graph.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Edge budget drawn at generation time.
    ///
    /// Only throttles random generation; a node may end up with more links
    /// when later nodes pick it as a target.
    pub fn max_paths(&self) -> usize {
        self.max_paths
    }

    pub(super) fn set_max_paths(&mut self, max_paths: usize) {
        self.max_paths = max_paths;
    }

    /// Number of linked nodes.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Whether this node is linked to the node at `other`.
    pub fn is_linked(&self, other: usize) -> bool {
        self.links.get(other).copied().unwrap_or(false)
    }

    /// Positions of linked nodes, in ascending order.
    pub fn neighbors(&self) -> impl Iterator<Item = usize> + '_ {
        self.links
            .iter()
            .enumerate()
            .filter_map(|(i, &linked)| linked.then_some(i))
    }

    /// Sets the slot for `other`. Returns false if it was already set.
    pub(super) fn attach(&mut self, other: usize) -> bool {
        if self.links[other] {
            return false;
        }
        self.links[other] = true;
        self.degree += 1;
        true
    }
}
