//! Undirected graph model with bounded random generation.
//!
//! A [`Graph`] is an ordered collection of [`Node`]s indexed by position.
//! Links are always symmetric and never connect a node to itself. Graphs
//! are built once, either randomly from a [`GraphConfig`] or from explicit
//! adjacency lists, and are read-only afterwards.
//!
//! # Random generation
//!
//! 1. Every node draws an edge budget (`max_paths`) uniformly from
//!    `[1, max_edges]`.
//! 2. Nodes are visited once, in position order. Each node's open budget is
//!    its `max_paths` minus the links it already has (floored at zero).
//! 3. The not-yet-linked other positions form a candidate set; random
//!    candidates are removed until only the open budget remains, and the
//!    survivors are linked mutually.
//!
//! Budgets are soft: a node can exceed its budget when later nodes pick it,
//! and there is exactly one pass per node.

mod config;
mod node;

pub use config::GraphConfig;
pub use node::Node;

use std::fmt;

use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::random::create_rng;

/// An undirected graph with symmetric adjacency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<Node>,
    max_edges: usize,
}

impl Graph {
    /// Generates a random graph of `size` nodes with `max_edges = size / 2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamiltonian_search::Graph;
    ///
    /// let graph = Graph::new(10).unwrap();
    /// assert_eq!(graph.size(), 10);
    /// assert_eq!(graph.max_edges(), 5);
    ///
    /// assert!(Graph::new(1).is_ok());
    /// assert!(Graph::new(0).is_err());
    /// ```
    pub fn new(size: usize) -> Result<Self> {
        Self::random(&GraphConfig::new(size))
    }

    /// Generates a random graph from a configuration.
    pub fn random(config: &GraphConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = create_rng(config.seed);
        Self::generate(config.size, config.max_edges, &mut rng)
    }

    /// Generates a random graph using the caller's RNG.
    ///
    /// Fails with [`Error::TooManyEdges`] when `max_edges >= size`.
    pub fn generate<R: Rng>(size: usize, max_edges: usize, rng: &mut R) -> Result<Self> {
        if max_edges >= size {
            return Err(Error::TooManyEdges { max_edges, size });
        }

        // A zero cap only occurs for single-node graphs; budgets start at 1.
        let nodes = (0..size)
            .map(|position| Node::new(size, position, rng.random_range(1..=max_edges.max(1))))
            .collect();
        let mut graph = Self { nodes, max_edges };

        for position in 0..size {
            for target in graph.pick_link_targets(position, rng) {
                graph.link(position, target);
            }
        }

        debug!(
            size,
            max_edges,
            edges = graph.edge_count(),
            "generated random graph"
        );
        Ok(graph)
    }

    /// Builds a graph from explicit adjacency lists.
    ///
    /// Node `i` is linked to every position in `adjacency[i]`. Lists may be
    /// one-sided; links are made symmetric. Fewer lists than nodes is fine.
    /// Each node's `max_paths` becomes its final degree, and `max_edges`
    /// becomes the largest degree.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamiltonian_search::Graph;
    ///
    /// // A 5-cycle: 0-1-2-3-4-0
    /// let graph = Graph::from_adjacency(5, &[[1usize, 4], [0, 2], [1, 3], [2, 4], [3, 0]]).unwrap();
    /// assert_eq!(graph.edge_count(), 5);
    /// assert!(graph.is_linked(4, 0));
    /// ```
    pub fn from_adjacency<E: AsRef<[usize]>>(size: usize, adjacency: &[E]) -> Result<Self> {
        if size == 0 {
            return Err(Error::EmptyGraph);
        }
        if adjacency.len() > size {
            return Err(Error::TooManyAdjacencyLists {
                lists: adjacency.len(),
                size,
            });
        }

        let nodes = (0..size)
            .map(|position| Node::new(size, position, 0))
            .collect();
        let mut graph = Self {
            nodes,
            max_edges: 0,
        };

        for (position, targets) in adjacency.iter().enumerate() {
            for &target in targets.as_ref() {
                if target >= size {
                    return Err(Error::NodeOutOfRange { node: target, size });
                }
                if target == position {
                    return Err(Error::SelfLoop { node: position });
                }
                graph.link(position, target);
            }
        }

        for node in &mut graph.nodes {
            let degree = node.degree();
            node.set_max_paths(degree);
        }
        graph.max_edges = graph.nodes.iter().map(Node::degree).max().unwrap_or(0);
        Ok(graph)
    }

    /// Links `a` and `b` in both directions.
    ///
    /// Re-linking an existing pair and self-links are no-ops. Returns true
    /// when a new edge was created.
    fn link(&mut self, a: usize, b: usize) -> bool {
        if a == b || self.nodes[a].is_linked(b) {
            return false;
        }
        self.nodes[a].attach(b);
        self.nodes[b].attach(a);
        true
    }

    fn pick_link_targets<R: Rng>(&self, position: usize, rng: &mut R) -> Vec<usize> {
        let node = &self.nodes[position];
        let open_paths = node.max_paths().saturating_sub(node.degree());

        let mut candidates: Vec<usize> = (0..self.size())
            .filter(|&other| other != position && !node.is_linked(other))
            .collect();
        while candidates.len() > open_paths {
            let index = rng.random_range(0..candidates.len());
            candidates.remove(index);
        }
        candidates
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// The per-node edge cap this graph was generated with.
    pub fn max_edges(&self) -> usize {
        self.max_edges
    }

    /// All nodes in position order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The node at `position`, if any.
    pub fn node(&self, position: usize) -> Option<&Node> {
        self.nodes.get(position)
    }

    /// Degree of the node at `position` (0 for unknown positions).
    pub fn degree(&self, position: usize) -> usize {
        self.nodes.get(position).map_or(0, Node::degree)
    }

    /// Whether `a` and `b` are linked.
    pub fn is_linked(&self, a: usize, b: usize) -> bool {
        self.nodes.get(a).is_some_and(|node| node.is_linked(b))
    }

    /// Linked positions of the node at `position`, in ascending order.
    pub fn neighbors(&self, position: usize) -> Vec<usize> {
        self.nodes
            .get(position)
            .map(|node| node.neighbors().collect())
            .unwrap_or_default()
    }

    /// Neighbor lists for every node, indexed by position.
    pub fn adjacency_lists(&self) -> Vec<Vec<usize>> {
        self.nodes
            .iter()
            .map(|node| node.neighbors().collect())
            .collect()
    }

    /// Total number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum::<usize>() / 2
    }

    /// Whether `path` visits every node exactly once along existing edges.
    pub fn is_hamiltonian_path(&self, path: &[usize]) -> bool {
        if path.len() != self.size() {
            return false;
        }
        let mut seen = vec![false; self.size()];
        for &position in path {
            if position >= self.size() || seen[position] {
                return false;
            }
            seen[position] = true;
        }
        path.windows(2).all(|w| self.is_linked(w[0], w[1]))
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated graph with the following nodes:")?;
        for node in &self.nodes {
            let linked: Vec<String> = node.neighbors().map(|p| p.to_string()).collect();
            writeln!(
                f,
                "Node {}, connected to:\t{}",
                node.position(),
                linked.join(", ")
            )?;
        }
        writeln!(
            f,
            "Graph has a total of {} nodes and {} edges.",
            self.size(),
            self.edge_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cycle5() -> Graph {
        Graph::from_adjacency(5, &[[1usize, 4], [0, 2], [1, 3], [2, 4], [3, 0]]).unwrap()
    }

    fn assert_symmetric(graph: &Graph) {
        for a in 0..graph.size() {
            for b in 0..graph.size() {
                assert_eq!(
                    graph.is_linked(a, b),
                    graph.is_linked(b, a),
                    "asymmetric link between {a} and {b}"
                );
            }
        }
    }

    #[test]
    fn test_from_adjacency_cycle() {
        let graph = cycle5();
        assert_eq!(graph.size(), 5);
        assert_eq!(graph.edge_count(), 5);
        for position in 0..5 {
            assert_eq!(graph.degree(position), 2);
        }
        assert_eq!(graph.neighbors(0), vec![1, 4]);
        assert_eq!(graph.max_edges(), 2);
        assert_symmetric(&graph);
    }

    #[test]
    fn test_from_adjacency_one_sided_lists_become_symmetric() {
        let graph = Graph::from_adjacency(3, &[vec![1usize, 2]]).unwrap();
        assert!(graph.is_linked(1, 0));
        assert!(graph.is_linked(2, 0));
        assert!(!graph.is_linked(1, 2));
        assert_eq!(graph.node(1).unwrap().max_paths(), 1);
    }

    #[test]
    fn test_from_adjacency_rejects_bad_input() {
        assert_eq!(
            Graph::from_adjacency(2, &[vec![5usize]]),
            Err(Error::NodeOutOfRange { node: 5, size: 2 })
        );
        assert_eq!(
            Graph::from_adjacency(2, &[vec![0usize]]),
            Err(Error::SelfLoop { node: 0 })
        );
        assert_eq!(
            Graph::from_adjacency(1, &[Vec::<usize>::new(), Vec::new()]),
            Err(Error::TooManyAdjacencyLists { lists: 2, size: 1 })
        );
        assert_eq!(
            Graph::from_adjacency::<Vec<usize>>(0, &[]),
            Err(Error::EmptyGraph)
        );
    }

    #[test]
    fn test_relinking_is_idempotent() {
        let mut graph = Graph::from_adjacency(4, &[vec![1usize]]).unwrap();
        let before = graph.clone();
        assert!(!graph.link(0, 1));
        assert!(!graph.link(1, 0));
        assert_eq!(graph, before);

        assert!(graph.link(2, 3));
        let once = graph.clone();
        assert!(!graph.link(2, 3));
        assert_eq!(graph, once);
    }

    #[test]
    fn test_self_link_is_ignored() {
        let mut graph = Graph::from_adjacency(3, &[vec![1usize]]).unwrap();
        assert!(!graph.link(2, 2));
        assert!(!graph.is_linked(2, 2));
        assert_eq!(graph.degree(2), 0);
    }

    #[test]
    fn test_generate_rejects_max_edges_at_or_above_size() {
        let mut rng = create_rng(Some(1));
        assert!(matches!(
            Graph::generate(5, 5, &mut rng),
            Err(Error::TooManyEdges { .. })
        ));
        assert!(matches!(
            Graph::generate(5, 9, &mut rng),
            Err(Error::TooManyEdges { .. })
        ));
        assert!(Graph::generate(5, 4, &mut rng).is_ok());
    }

    #[test]
    fn test_random_rejects_what_config_rejects() {
        for config in [GraphConfig::new(0), GraphConfig::new(6).with_max_edges(6)] {
            let expected = config.validate().unwrap_err();
            assert_eq!(Graph::random(&config), Err(expected));
        }
    }

    #[test]
    fn test_single_node_graph() {
        let graph = Graph::new(1).unwrap();
        assert_eq!(graph.size(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = GraphConfig::default().with_seed(99);
        let a = Graph::random(&config).unwrap();
        let b = Graph::random(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_node_meets_its_budget_or_exceeds_it() {
        // Each node links to its full open budget during its own pass, and
        // only ever gains links afterwards.
        let graph = Graph::random(&GraphConfig::new(16).with_max_edges(6).with_seed(3)).unwrap();
        for node in graph.nodes() {
            assert!(node.max_paths() >= 1 && node.max_paths() <= 6);
            assert!(node.degree() >= node.max_paths());
        }
    }

    #[test]
    fn test_display_lists_nodes_and_edges() {
        let text = cycle5().to_string();
        assert!(text.starts_with("Generated graph with the following nodes:"));
        assert!(text.contains("Node 0, connected to:\t1, 4"));
        assert!(text.contains("Node 3, connected to:\t2, 4"));
        assert!(text.contains("a total of 5 nodes and 5 edges"));
    }

    #[test]
    fn test_is_hamiltonian_path() {
        let graph = cycle5();
        assert!(graph.is_hamiltonian_path(&[0, 1, 2, 3, 4]));
        assert!(graph.is_hamiltonian_path(&[2, 1, 0, 4, 3]));
        assert!(!graph.is_hamiltonian_path(&[0, 2, 1, 3, 4]));
        assert!(!graph.is_hamiltonian_path(&[0, 1, 2, 3]));
        assert!(!graph.is_hamiltonian_path(&[0, 1, 2, 3, 3]));
    }

    proptest! {
        #[test]
        fn prop_random_graph_is_symmetric_without_self_loops(
            size in 2usize..24,
            cap_ratio in 0.0f64..1.0,
            seed in any::<u64>(),
        ) {
            let max_edges = ((size - 1) as f64 * cap_ratio) as usize;
            let graph = Graph::random(
                &GraphConfig::new(size).with_max_edges(max_edges).with_seed(seed),
            ).unwrap();

            let mut degree_sum = 0;
            for a in 0..size {
                prop_assert!(!graph.is_linked(a, a));
                for b in 0..size {
                    prop_assert_eq!(graph.is_linked(a, b), graph.is_linked(b, a));
                }
                prop_assert_eq!(graph.degree(a), graph.neighbors(a).len());
                degree_sum += graph.degree(a);
            }
            prop_assert_eq!(degree_sum % 2, 0);
            prop_assert_eq!(graph.edge_count(), degree_sum / 2);
        }

        #[test]
        fn prop_max_edges_at_or_above_size_fails(
            size in 1usize..40,
            excess in 0usize..10,
        ) {
            let result = Graph::random(&GraphConfig::new(size).with_max_edges(size + excess));
            prop_assert_eq!(
                result.map(|_| ()),
                Err(Error::TooManyEdges { max_edges: size + excess, size })
            );
        }
    }
}
