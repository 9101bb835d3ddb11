#[cfg(test)]
use crate::{ops::*, *};

/// Checks the structural invariants every dense graph has to uphold:
/// ids in `0..n`, strictly ascending loop-free adjacency lists, symmetry for undirected graphs
/// and an edge count consistent with the degrees.
#[cfg(test)]
pub(crate) fn assert_dense_invariants<G>(graph: &G)
where
    G: AdjacencyList + GraphEdgeOrder + GraphType + AdjacencyTest,
{
    let n = graph.number_of_nodes();
    let mut degree_sum: NumEdges = 0;

    for u in graph.vertices() {
        let nbs: Vec<Node> = graph.neighbors_of(u).collect();
        assert!(nbs.windows(2).all(|w| w[0] < w[1]), "{u}: {nbs:?}");
        assert!(nbs.iter().all(|&v| v < n && v != u), "{u}: {nbs:?}");
        assert_eq!(nbs.len() as NumNodes, graph.degree_of(u));

        if G::is_undirected() {
            assert!(nbs.iter().all(|&v| graph.has_edge(v, u)));
        }

        degree_sum += nbs.len() as NumEdges;
    }

    let factor = if G::is_undirected() { 2 } else { 1 };
    assert_eq!(degree_sum, factor * graph.number_of_edges());
}

/// Stamps out construction and adjacency checks for dense graphs built through `GraphFromScratch`
macro_rules! test_dense_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::assert_dense_invariants, *};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a list of at most `m_ub` random edges for nodes `0..n`, possibly with loops and duplicates
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                (0..m_ub)
                    .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
                    .collect_vec()
            }

            #[test]
            fn from_scratch_without_edges() {
                for n in [0 as NumNodes, 1, 7] {
                    let graph = <$graph>::from_edges("empty", n, std::iter::empty::<Edge>());
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert_eq!(graph.name(), "empty");
                }
            }

            #[test]
            fn adjacency_matches_edges() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as NumNodes, 20, 50] {
                    for m_ub in [n * 2, n * 5, n * 10] {
                        for _ in 0..10 {
                            let edges = random_edges(rng, n, m_ub as NumEdges);

                            let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                            let mut expected = edges
                                .iter()
                                .filter(|e| !e.is_loop())
                                .map(|&Edge(u, v)| {
                                    adj_matrix[u as usize].set_bit(v);
                                    if $undirected {
                                        adj_matrix[v as usize].set_bit(u);
                                        Edge(u, v).normalized()
                                    } else {
                                        Edge(u, v)
                                    }
                                })
                                .collect_vec();
                            expected.sort_unstable();
                            expected.dedup();

                            let graph = <$graph>::from_edges("random", n, edges);
                            assert_dense_invariants(&graph);

                            assert_eq!(graph.number_of_nodes(), n);
                            assert_eq!(graph.number_of_edges(), expected.len() as NumEdges);
                            assert_eq!(graph.ordered_edges($undirected), expected);
                            assert_eq!(graph.edge_list().count(), expected.len());

                            for u in 0..n {
                                let nbs = NodeBitSet::new_with_bits_set(n, graph.neighbors_of(u));
                                assert_eq!(nbs, adj_matrix[u as usize]);
                                assert_eq!(graph.degree_of(u), adj_matrix[u as usize].cardinality());
                                assert_eq!(
                                    graph.as_neighbors_slice(u),
                                    graph.neighbors_of(u).collect_vec()
                                );
                            }
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_dense_graph_ops;
