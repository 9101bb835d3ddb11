use std::collections::{BTreeMap, btree_map::Entry};

use fxhash::FxHashSet;

use super::*;
use crate::ops::*;

/// A sparse undirected graph keyed by arbitrary node ids.
///
/// Only the node set and the canonical edge set are stored; adjacency lists are
/// materialized when the graph is compacted into a [`SimpleGraphUndir`] or [`SignedGraphUndir`].
/// The ordered edge map makes iteration deterministic (ascending canonical pairs).
#[derive(Clone, Debug)]
pub struct SparseGraphUndir<W: EdgeWeight = ()> {
    pub(crate) name: String,
    pub(crate) nodes: FxHashSet<Node>,
    pub(crate) edges: BTreeMap<Edge, W>,
}

/// Undirected graph whose edges carry a signed integer weight
pub type WeightedSparseGraphUndir = SparseGraphUndir<Weight>;

impl<W: EdgeWeight> GraphNew for SparseGraphUndir<W> {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: FxHashSet::default(),
            edges: BTreeMap::new(),
        }
    }
}

impl<W: EdgeWeight> Default for SparseGraphUndir<W> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<W: EdgeWeight> GraphType for SparseGraphUndir<W> {
    type Dir = Undirected;
}

impl<W: EdgeWeight> NamedGraph for SparseGraphUndir<W> {
    const KIND: &'static str = if W::WEIGHTED {
        "WeightedSparseGraphUndir"
    } else {
        "SparseGraphUndir"
    };

    fn name(&self) -> &str {
        &self.name
    }
}

impl<W: EdgeWeight> GraphNodeOrder for SparseGraphUndir<W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nodes.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.iter().copied()
    }
}

impl<W: EdgeWeight> GraphEdgeOrder for SparseGraphUndir<W> {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl<W: EdgeWeight> EdgeList for SparseGraphUndir<W> {
    fn edge_list(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.keys().copied()
    }
}

impl<W: EdgeWeight> AdjacencyTest for SparseGraphUndir<W> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edges.contains_key(&Edge(u, v).normalized())
    }
}

impl<W: EdgeWeight> GraphEdgeEditing for SparseGraphUndir<W> {
    type Weight = W;

    fn add_node(&mut self, u: Node) -> bool {
        assert_ne!(u, INVALID_NODE, "INVALID_NODE cannot be added");
        self.nodes.insert(u)
    }

    fn insert_edge(&mut self, u: Node, v: Node, weight: W) -> bool {
        assert!(
            u != INVALID_NODE && v != INVALID_NODE,
            "INVALID_NODE cannot be an endpoint"
        );
        let edge = Edge(u, v).normalized();
        if edge.is_loop() {
            return false;
        }

        match self.edges.entry(edge) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(weight);
                self.add_node(u);
                self.add_node(v);
                true
            }
        }
    }
}

impl<W: EdgeWeight> SparseGraphUndir<W> {
    /// Returns *true* if `u` was added to the graph
    pub fn contains_node(&self, u: Node) -> bool {
        self.nodes.contains(&u)
    }

    /// Returns the payload of the edge `{u, v}` if it exists
    pub fn weight_of(&self, u: Node, v: Node) -> Option<W> {
        self.edges.get(&Edge(u, v).normalized()).copied()
    }

    /// Iterates all canonical edges together with their payload in ascending order
    pub fn weighted_edges(&self) -> impl Iterator<Item = (Edge, W)> + '_ {
        self.edges.iter().map(|(&e, &w)| (e, w))
    }

    /// Renames the graph
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl SparseGraphUndir {
    /// Adds the edge `{u, v}`.
    /// Returns *true* exactly if the edge was not present previously.
    pub fn add_edge(&mut self, u: Node, v: Node) -> bool {
        self.insert_edge(u, v, ())
    }
}

impl SparseGraphUndir<Weight> {
    /// Adds the edge `{u, v}` with weight `w`.
    /// Returns *true* exactly if the edge was not present previously; the first weight wins.
    pub fn add_edge(&mut self, u: Node, v: Node, w: Weight) -> bool {
        self.insert_edge(u, v, w)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn insertion_is_idempotent() {
        let mut graph: SparseGraphUndir = SparseGraphUndir::new("g");
        assert!(graph.add_edge(3, 1));
        assert!(!graph.add_edge(1, 3));
        assert!(!graph.add_edge(3, 1));
        assert_eq!(graph.number_of_nodes(), 2);
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.edge_list().collect::<Vec<_>>(), vec![Edge(1, 3)]);
    }

    #[test]
    fn self_loops_are_rejected() {
        let mut graph = WeightedSparseGraphUndir::new("g");
        assert!(!graph.add_edge(5, 5, 1));
        assert_eq!(graph.number_of_edges(), 0);
        assert!(graph.is_empty());

        assert!(graph.add_node(5));
        assert!(!graph.add_node(5));
        assert_eq!(graph.number_of_nodes(), 1);
    }

    #[test]
    fn first_weight_wins() {
        let mut graph = WeightedSparseGraphUndir::new("g");
        assert!(graph.add_edge(2, 7, -4));
        assert!(!graph.add_edge(7, 2, 9));
        assert_eq!(graph.weight_of(7, 2), Some(-4));
        assert!(graph.has_edge(7, 2));
        assert!(!graph.has_edge(2, 3));
    }

    #[test]
    fn edges_are_ordered() {
        let mut graph: SparseGraphUndir = SparseGraphUndir::new("g");
        let inserted = graph.insert_edges([(9, 4, ()), (1, 2, ()), (4, 1, ()), (2, 1, ())]);
        assert_eq!(inserted, 3);
        assert_eq!(
            graph.edge_list().collect::<Vec<_>>(),
            vec![Edge(1, 2), Edge(1, 4), Edge(4, 9)]
        );
        assert_eq!(SparseGraphUndir::<()>::KIND, "SparseGraphUndir");
        assert_eq!(WeightedSparseGraphUndir::KIND, "WeightedSparseGraphUndir");
    }

    #[test]
    #[should_panic]
    fn invalid_node_is_no_endpoint() {
        let mut graph: SparseGraphUndir = SparseGraphUndir::new("g");
        graph.add_edge(INVALID_NODE, 1);
    }

    #[test]
    #[should_panic]
    fn invalid_node_cannot_be_added() {
        let mut graph = WeightedSparseGraphUndir::new("g");
        graph.add_node(INVALID_NODE);
    }
}
