use itertools::Itertools;

use super::{macros::impl_dense_graph_ops, *};
use crate::ops::*;

/// A dense undirected graph on `0..n` whose edges are either positive or negative.
///
/// Every edge appears in exactly one of the two adjacency arrays; both are sorted and symmetric.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedGraphUndir {
    pub(crate) name: String,
    pub(crate) pos: Vec<Vec<Node>>,
    pub(crate) neg: Vec<Vec<Node>>,
    pub(crate) num_edges: NumEdges,
}

/// A dense directed graph on `0..n` whose arcs are either positive or negative
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedGraph {
    pub(crate) name: String,
    pub(crate) pos: Vec<Vec<Node>>,
    pub(crate) neg: Vec<Vec<Node>>,
    pub(crate) num_edges: NumEdges,
}

impl_dense_graph_ops!(SignedGraphUndir => pos, Undirected, "SignedGraphUndir");
impl_dense_graph_ops!(SignedGraph => pos, Directed, "SignedGraph");

macro_rules! impl_signed_adjacency {
    ($struct:ident) => {
        impl AdjacencyList for $struct {
            /// Positive and negative neighbors merged into one ascending sequence
            fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
                itertools::merge(
                    self.pos[u as usize].iter().copied(),
                    self.neg[u as usize].iter().copied(),
                )
            }

            fn degree_of(&self, u: Node) -> NumNodes {
                (self.pos[u as usize].len() + self.neg[u as usize].len()) as NumNodes
            }
        }

        impl DenseNodeIds for $struct {}

        impl AdjacencyTest for $struct {
            fn has_edge(&self, u: Node, v: Node) -> bool {
                self.sign_of(u, v).is_some()
            }
        }

        impl $struct {
            /// Takes ownership of already renumbered adjacency arrays and sorts them
            pub(crate) fn from_adjacency(
                name: String,
                mut pos: Vec<Vec<Node>>,
                mut neg: Vec<Vec<Node>>,
            ) -> Self {
                debug_assert_eq!(pos.len(), neg.len());
                sort_adjacency(&mut pos);
                sort_adjacency(&mut neg);

                let degree_sum: NumEdges = pos
                    .iter()
                    .chain(neg.iter())
                    .map(|list| list.len() as NumEdges)
                    .sum();
                let num_edges = if Self::is_undirected() {
                    debug_assert_eq!(degree_sum % 2, 0);
                    degree_sum / 2
                } else {
                    degree_sum
                };

                Self {
                    name,
                    pos,
                    neg,
                    num_edges,
                }
            }

            /// Creates a signed graph on `0..n` from weighted edges.
            /// Weights `> 0` become positive edges, all others negative ones.
            /// Self-loops are dropped and the first occurrence of a repeated edge decides its sign.
            /// ** Panics if an endpoint is `>= n` **
            pub fn from_signed_edges(
                name: impl Into<String>,
                n: NumNodes,
                edges: impl IntoIterator<Item = (Node, Node, Weight)>,
            ) -> Self {
                let mut edges = edges
                    .into_iter()
                    .filter(|&(u, v, _)| {
                        assert!(u < n && v < n, "edge ({u},{v}) exceeds {n} nodes");
                        u != v
                    })
                    .map(|(u, v, w)| {
                        let edge = if Self::is_undirected() {
                            Edge(u, v).normalized()
                        } else {
                            Edge(u, v)
                        };
                        (edge, is_positive(w))
                    })
                    .collect_vec();

                // stable sort so that `dedup_by_key` keeps the first occurrence
                edges.sort_by_key(|&(edge, _)| edge);
                edges.dedup_by_key(|&mut (edge, _)| edge);

                let mut pos = vec![Vec::new(); n as usize];
                let mut neg = vec![Vec::new(); n as usize];
                for (Edge(u, v), positive) in edges {
                    let target = if positive { &mut pos } else { &mut neg };
                    target[u as usize].push(v);
                    if Self::is_undirected() {
                        target[v as usize].push(u);
                    }
                }

                Self::from_adjacency(name.into(), pos, neg)
            }

            /// Returns the sorted positive neighbors (successors) of `u`
            /// ** Panics if `u >= n` **
            pub fn positive_neighbors_of(&self, u: Node) -> &[Node] {
                &self.pos[u as usize]
            }

            /// Returns the sorted negative neighbors (successors) of `u`
            /// ** Panics if `u >= n` **
            pub fn negative_neighbors_of(&self, u: Node) -> &[Node] {
                &self.neg[u as usize]
            }

            /// Returns `Some(true)` for a positive edge `(u, v)`, `Some(false)` for a negative one
            pub fn sign_of(&self, u: Node, v: Node) -> Option<bool> {
                if self.pos[u as usize].binary_search(&v).is_ok() {
                    Some(true)
                } else if self.neg[u as usize].binary_search(&v).is_ok() {
                    Some(false)
                } else {
                    None
                }
            }

            /// Returns the number of positive edges
            pub fn number_of_positive_edges(&self) -> NumEdges {
                let sum: NumEdges = self.pos.iter().map(|l| l.len() as NumEdges).sum();
                if Self::is_undirected() { sum / 2 } else { sum }
            }

            /// Iterates all edges with their sign; undirected graphs report `u < v` only.
            /// For every node the positive edges come before the negative ones.
            pub fn signed_edges(&self) -> impl Iterator<Item = (Edge, bool)> + '_ {
                self.vertices().flat_map(move |u| {
                    let keep = move |&v: &Node| Self::is_directed() || u < v;
                    let pos = self.pos[u as usize].iter().copied().filter(keep);
                    let neg = self.neg[u as usize].iter().copied().filter(keep);
                    pos.map(move |v| (Edge(u, v), true))
                        .chain(neg.map(move |v| (Edge(u, v), false)))
                })
            }

            /// Renames the graph
            pub fn with_name(mut self, name: impl Into<String>) -> Self {
                self.name = name.into();
                self
            }
        }
    };
}

impl_signed_adjacency!(SignedGraphUndir);
impl_signed_adjacency!(SignedGraph);

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::assert_dense_invariants;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn zero_weight_is_negative() {
        let graph = SignedGraphUndir::from_signed_edges("g", 3, [(0, 1, 0), (2, 1, 5), (1, 0, 3)]);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.number_of_positive_edges(), 1);
        assert_eq!(graph.sign_of(1, 0), Some(false));
        assert_eq!(graph.sign_of(1, 2), Some(true));
        assert_eq!(graph.sign_of(0, 2), None);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![0, 2]);
    }

    #[test]
    fn signed_edges_list_positive_first() {
        let graph = SignedGraph::from_signed_edges("g", 3, [(0, 2, -1), (0, 1, 1), (1, 0, -7)]);
        assert_eq!(
            graph.signed_edges().collect_vec(),
            vec![(Edge(0, 1), true), (Edge(0, 2), false), (Edge(1, 0), false)]
        );
        assert_eq!(graph.positive_neighbors_of(0), &[1]);
        assert_eq!(graph.negative_neighbors_of(0), &[2]);
    }

    #[test]
    fn random_signed_graphs_are_consistent() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for n in [5 as NumNodes, 20, 40] {
            let edges = (0..3 * n)
                .map(|_| {
                    (
                        rng.random_range(0..n),
                        rng.random_range(0..n),
                        rng.random_range(-2..=2),
                    )
                })
                .collect_vec();

            let undirected = SignedGraphUndir::from_signed_edges("u", n, edges.iter().copied());
            assert_dense_invariants(&undirected);
            for u in 0..n {
                assert!(
                    undirected
                        .positive_neighbors_of(u)
                        .iter()
                        .all(|v| undirected.negative_neighbors_of(u).binary_search(v).is_err())
                );
            }
            assert_eq!(
                undirected.signed_edges().count() as NumEdges,
                undirected.number_of_edges()
            );

            let directed = SignedGraph::from_signed_edges("d", n, edges);
            assert_dense_invariants(&directed);
            assert_eq!(
                directed.signed_edges().count() as NumEdges,
                directed.number_of_edges()
            );
        }
    }
}
