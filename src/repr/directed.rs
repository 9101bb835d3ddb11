use std::collections::{BTreeMap, btree_map::Entry, hash_map};

use fxhash::FxHashMap;

use super::*;
use crate::ops::*;

/// A sparse directed graph keyed by arbitrary node ids.
///
/// Successors are kept per node in insertion order, together with the payload of the arc.
/// The ordered arc map mirrors the adjacency exactly and is used for deduplication and
/// deterministic serialization.
#[derive(Clone, Debug)]
pub struct SparseGraph<W: EdgeWeight = ()> {
    pub(crate) name: String,
    pub(crate) adj: FxHashMap<Node, Vec<(Node, W)>>,
    pub(crate) edges: BTreeMap<Edge, W>,
}

/// Directed graph whose arcs carry a signed integer weight
pub type WeightedSparseGraph = SparseGraph<Weight>;

impl<W: EdgeWeight> GraphNew for SparseGraph<W> {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            adj: FxHashMap::default(),
            edges: BTreeMap::new(),
        }
    }
}

impl<W: EdgeWeight> Default for SparseGraph<W> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<W: EdgeWeight> GraphType for SparseGraph<W> {
    type Dir = Directed;
}

impl<W: EdgeWeight> NamedGraph for SparseGraph<W> {
    const KIND: &'static str = if W::WEIGHTED {
        "WeightedSparseGraph"
    } else {
        "SparseGraph"
    };

    fn name(&self) -> &str {
        &self.name
    }
}

impl<W: EdgeWeight> GraphNodeOrder for SparseGraph<W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.adj.keys().copied()
    }
}

impl<W: EdgeWeight> GraphEdgeOrder for SparseGraph<W> {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl<W: EdgeWeight> EdgeList for SparseGraph<W> {
    fn edge_list(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.keys().copied()
    }
}

impl<W: EdgeWeight> AdjacencyList for SparseGraph<W> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.successors_of(u).iter().map(|&(v, _)| v)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.successors_of(u).len() as NumNodes
    }
}

impl<W: EdgeWeight> AdjacencyTest for SparseGraph<W> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edges.contains_key(&Edge(u, v))
    }
}

impl<W: EdgeWeight> GraphEdgeEditing for SparseGraph<W> {
    type Weight = W;

    fn add_node(&mut self, u: Node) -> bool {
        assert_ne!(u, INVALID_NODE, "INVALID_NODE cannot be added");
        match self.adj.entry(u) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(entry) => {
                entry.insert(Vec::new());
                true
            }
        }
    }

    fn insert_edge(&mut self, u: Node, v: Node, weight: W) -> bool {
        assert!(
            u != INVALID_NODE && v != INVALID_NODE,
            "INVALID_NODE cannot be an endpoint"
        );
        if u == v {
            return false;
        }

        match self.edges.entry(Edge(u, v)) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(weight);
                self.add_node(v);
                self.adj.entry(u).or_default().push((v, weight));
                true
            }
        }
    }
}

impl<W: EdgeWeight> SparseGraph<W> {
    /// Returns the successors of `u` with their payload in insertion order.
    /// Unknown nodes have no successors.
    pub fn successors_of(&self, u: Node) -> &[(Node, W)] {
        self.adj.get(&u).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns *true* if `u` was added to the graph
    pub fn contains_node(&self, u: Node) -> bool {
        self.adj.contains_key(&u)
    }

    /// Returns the payload of the arc `(u, v)` if it exists
    pub fn weight_of(&self, u: Node, v: Node) -> Option<W> {
        self.edges.get(&Edge(u, v)).copied()
    }

    /// Iterates all arcs together with their payload in ascending order
    pub fn weighted_edges(&self) -> impl Iterator<Item = (Edge, W)> + '_ {
        self.edges.iter().map(|(&e, &w)| (e, w))
    }

    /// Renames the graph
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl SparseGraph {
    /// Adds the arc `(u, v)`.
    /// Returns *true* exactly if the arc was not present previously.
    pub fn add_edge(&mut self, u: Node, v: Node) -> bool {
        self.insert_edge(u, v, ())
    }
}

impl SparseGraph<Weight> {
    /// Adds the arc `(u, v)` with weight `w`.
    /// Returns *true* exactly if the arc was not present previously; the first weight wins.
    pub fn add_edge(&mut self, u: Node, v: Node, w: Weight) -> bool {
        self.insert_edge(u, v, w)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn arcs_keep_orientation() {
        let mut graph: SparseGraph = SparseGraph::new("g");
        assert!(graph.add_edge(1, 2));
        assert!(graph.add_edge(2, 1));
        assert!(!graph.add_edge(1, 2));
        assert!(!graph.add_edge(4, 4));

        assert_eq!(graph.number_of_nodes(), 2);
        assert_eq!(graph.number_of_edges(), 2);
        assert!(graph.has_bidirected_edge(1, 2));
    }

    #[test]
    fn every_endpoint_has_an_entry() {
        let mut graph: SparseGraph = SparseGraph::new("g");
        graph.add_edge(3, 8);
        assert!(graph.contains_node(8));
        assert_eq!(graph.degree_of(8), 0);
        assert_eq!(graph.neighbors_of(3).collect::<Vec<_>>(), vec![8]);
        assert_eq!(graph.degree_of(42), 0);
    }

    #[test]
    fn successors_in_insertion_order() {
        let mut graph = WeightedSparseGraph::new("g");
        graph.add_edge(0, 9, 1);
        graph.add_edge(0, 3, -1);
        graph.add_edge(0, 9, 5);
        graph.add_edge(0, 5, 2);

        assert_eq!(graph.successors_of(0), &[(9, 1), (3, -1), (5, 2)]);
        assert_eq!(graph.weight_of(0, 9), Some(1));
        assert_eq!(graph.max_degree(), 3);
        assert_eq!(
            graph.edge_list().collect::<Vec<_>>(),
            vec![Edge(0, 3), Edge(0, 5), Edge(0, 9)]
        );
    }

    #[test]
    #[should_panic]
    fn invalid_source_is_rejected() {
        let mut graph: SparseGraph = SparseGraph::new("g");
        graph.add_edge(INVALID_NODE, 1);
    }

    #[test]
    #[should_panic]
    fn invalid_target_is_rejected() {
        let mut graph = WeightedSparseGraph::new("g");
        graph.add_edge(0, INVALID_NODE, 1);
    }
}
