use itertools::Itertools;

use crate::{repr::EdgeWeight, *};

/// Marker for graphs whose edges have an orientation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;

/// Marker for graphs whose edges `(u, v)` and `(v, u)` coincide
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

/// Compile-time direction of a graph type
pub trait GraphDir {
    const DIRECTED: bool;
}

impl GraphDir for Directed {
    const DIRECTED: bool = true;
}

impl GraphDir for Undirected {
    const DIRECTED: bool = false;
}

/// Attaches a direction marker to a graph representation
pub trait GraphType {
    type Dir: GraphDir;

    /// Returns *true* if the edges of the graph have an orientation
    fn is_directed() -> bool {
        Self::Dir::DIRECTED
    }

    /// Returns *true* if the edges of the graph are unordered pairs
    fn is_undirected() -> bool {
        !Self::is_directed()
    }
}

/// Every graph carries a human-readable name which is echoed in serialized headers
pub trait NamedGraph {
    /// Kind label used in the serialization header, e.g. `SimpleGraph`
    const KIND: &'static str;

    /// Returns the name of the graph
    fn name(&self) -> &str;
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    /// Dense graphs yield `0..n` in order, sparse graphs yield their ids in no particular order.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// Undirected edges are counted once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Iterates every edge of a graph exactly once
pub trait EdgeList: GraphNodeOrder + GraphEdgeOrder {
    /// Undirected graphs return their edges normalized, directed graphs return each arc once
    fn edge_list(&self) -> impl Iterator<Item = Edge> + '_;
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// For directed graphs these are the successors of `u`.
    /// Unknown sparse ids yield an empty iterator, dense graphs panic if `u >= n`.
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all nodes in the order of `vertices()`
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns a distribution sorted by degree
    fn degree_distribution(&self) -> Vec<(NumNodes, NumNodes)> {
        let mut distr = self
            .degrees()
            .counts()
            .into_iter()
            .map(|(d, n)| (d, n as NumNodes))
            .collect_vec();
        distr.sort_by_key(|(d, _)| *d);
        distr
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        let mut edges = self.edges(only_normalized).collect_vec();
        edges.sort_unstable();
        edges
    }
}

/// Marker for adjacency lists whose nodes are exactly `0..n`.
/// Only these can be indexed by node id, e.g. by the traversals in `algo`.
pub trait DenseNodeIds: AdjacencyList {}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// Undirected graphs ignore the order of the endpoints.
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if there exists an edge (u,v) as well as (v,u) in the graph.
    /// Note that for undirected graphs with edge {u,v} this function always returns *true*.
    fn has_bidirected_edge(&self, u: Node, v: Node) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }
}

/// Trait for accessing the neighborhood of nodes as slices
pub trait NeighborsSlice {
    /// Returns a slice-reference of the (sorted) neighborhood of a given vertex
    /// ** Panics if `u >= n` **
    fn as_neighbors_slice(&self, u: Node) -> &[Node];
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with the given name
    fn new(name: impl Into<String>) -> Self;
}

/// Provides functions to grow a sparse graph one edge at a time
pub trait GraphEdgeEditing: GraphNew + EdgeList {
    /// Payload stored per edge; `()` for unweighted graphs
    type Weight: EdgeWeight;

    /// Adds an isolated node. Returns *true* if the node was not present before.
    /// ** Panics if `u == INVALID_NODE` **
    fn add_node(&mut self, u: Node) -> bool;

    /// Adds the edge `(u, v)` together with both endpoints.
    /// Returns *true* exactly if the edge was not present previously.
    /// Self-loops are rejected; a duplicate keeps the weight of its first occurrence.
    /// ** Panics if an endpoint is `INVALID_NODE` **
    fn insert_edge(&mut self, u: Node, v: Node, weight: Self::Weight) -> bool;

    /// Adds all edges in the collection and returns the number of newly inserted ones
    fn insert_edges(
        &mut self,
        edges: impl IntoIterator<Item = (Node, Node, Self::Weight)>,
    ) -> NumEdges {
        edges
            .into_iter()
            .filter(|&(u, v, w)| self.insert_edge(u, v, w))
            .count() as NumEdges
    }
}

/// A super trait for creating a dense graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Creates a graph on `0..n` from an iterator over edges.
    /// Self-loops and duplicates are dropped, adjacency lists end up sorted.
    /// ** Panics if an endpoint is `>= n` **
    fn from_edges(
        name: impl Into<String>,
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Self;
}
