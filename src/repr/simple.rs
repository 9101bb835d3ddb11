use super::{macros::impl_dense_graph_ops, *};
use crate::{ops::*, testing::test_dense_graph_ops};

/// A dense undirected graph on `0..n` with sorted, symmetric adjacency lists
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleGraphUndir {
    pub(crate) name: String,
    pub(crate) nbs: Vec<Vec<Node>>,
    pub(crate) num_edges: NumEdges,
}

/// A dense directed graph on `0..n` with sorted successor lists
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleGraph {
    pub(crate) name: String,
    pub(crate) nbs: Vec<Vec<Node>>,
    pub(crate) num_edges: NumEdges,
}

impl_dense_graph_ops!(SimpleGraphUndir => nbs, Undirected, "SimpleGraphUndir");
impl_dense_graph_ops!(SimpleGraph => nbs, Directed, "SimpleGraph");

macro_rules! impl_simple_adjacency {
    ($struct:ident) => {
        impl AdjacencyList for $struct {
            fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
                self.nbs[u as usize].iter().copied()
            }

            fn degree_of(&self, u: Node) -> NumNodes {
                self.nbs[u as usize].len() as NumNodes
            }
        }

        impl DenseNodeIds for $struct {}

        impl NeighborsSlice for $struct {
            fn as_neighbors_slice(&self, u: Node) -> &[Node] {
                &self.nbs[u as usize]
            }
        }

        impl AdjacencyTest for $struct {
            fn has_edge(&self, u: Node, v: Node) -> bool {
                self.nbs[u as usize].binary_search(&v).is_ok()
            }
        }

        impl $struct {
            /// Takes ownership of already renumbered adjacency lists and sorts them
            pub(crate) fn from_adjacency(name: String, mut nbs: Vec<Vec<Node>>) -> Self {
                sort_adjacency(&mut nbs);
                let degree_sum: NumEdges = nbs.iter().map(|list| list.len() as NumEdges).sum();
                let num_edges = if Self::is_undirected() {
                    debug_assert_eq!(degree_sum % 2, 0);
                    degree_sum / 2
                } else {
                    degree_sum
                };

                Self {
                    name,
                    nbs,
                    num_edges,
                }
            }

            /// Returns the adjacency lists indexed by dense id
            pub fn adjacency(&self) -> &[Vec<Node>] {
                &self.nbs
            }

            /// Renames the graph
            pub fn with_name(mut self, name: impl Into<String>) -> Self {
                self.name = name.into();
                self
            }
        }

        impl GraphFromScratch for $struct {
            fn from_edges(
                name: impl Into<String>,
                n: NumNodes,
                edges: impl IntoIterator<Item = impl Into<Edge>>,
            ) -> Self {
                let mut nbs = vec![Vec::new(); n as usize];
                for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
                    assert!(u < n && v < n, "edge ({u},{v}) exceeds {n} nodes");
                    if u == v {
                        continue;
                    }

                    nbs[u as usize].push(v);
                    if Self::is_undirected() {
                        nbs[v as usize].push(u);
                    }
                }

                for list in nbs.iter_mut() {
                    list.sort_unstable();
                    list.dedup();
                }

                Self::from_adjacency(name.into(), nbs)
            }
        }
    };
}

impl_simple_adjacency!(SimpleGraphUndir);
impl_simple_adjacency!(SimpleGraph);

impl SimpleGraph {
    /// Returns the inverted adjacency: for every node the sorted list of its predecessors
    pub fn in_adjacency(&self) -> Vec<Vec<Node>> {
        let mut preds = vec![Vec::new(); self.len()];
        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                preds[v as usize].push(u);
            }
        }
        preds
    }
}

test_dense_graph_ops!(test_simple_graph_undir, SimpleGraphUndir, true);
test_dense_graph_ops!(test_simple_graph, SimpleGraph, false);
