/*!
# Signed Expansion

Turns a signed graph on `n` nodes into an unsigned graph on `2n` nodes in which every node `u`
has a *positive copy* `u` and a *negative copy* `u + n`:

- a positive edge `(u, v)` connects `u - v` and `u+n - v+n`,
- a negative edge `(u, v)` connects `u - v+n` and `u+n - v`.

Paths in the expansion correspond to signed walks: a walk ending in `v` has positive sign
iff it ends in the positive copy. The expansion therefore has exactly `2m` edges.
*/

use tracing::{debug, instrument};

use super::*;

/// Adjacency of the expansion of a graph given by its positive and negative adjacency
fn expand(pos: &[Vec<Node>], neg: &[Vec<Node>]) -> Vec<Vec<Node>> {
    let n = pos.len();
    let shift = n as Node;
    let mut nbs = vec![Vec::new(); 2 * n];

    for (u, (plus, minus)) in pos.iter().zip(neg).enumerate() {
        // both concatenations stay sorted as every shifted id exceeds every unshifted one
        nbs[u] = plus
            .iter()
            .copied()
            .chain(minus.iter().map(|&v| v + shift))
            .collect();
        nbs[u + n] = minus
            .iter()
            .copied()
            .chain(plus.iter().map(|&v| v + shift))
            .collect();
    }

    nbs
}

impl SignedGraphUndir {
    /// Returns the unsigned expansion on `2n` nodes, named with the suffix `_expansion`.
    ///
    /// # Examples
    /// ```
    /// use netgraphs::{prelude::*, algo::*};
    ///
    /// let g = SignedGraphUndir::from_signed_edges("s", 2, [(0, 1, -1)]);
    /// let e = g.expansion();
    /// assert_eq!(e.name(), "s_expansion");
    /// assert_eq!(e.number_of_nodes(), 4);
    /// assert_eq!(e.edge_list().collect::<Vec<_>>(), vec![Edge(0, 3), Edge(1, 2)]);
    /// ```
    #[instrument(skip_all, fields(name = %self.name))]
    pub fn expansion(&self) -> SimpleGraphUndir {
        let result = SimpleGraphUndir::from_adjacency(
            format!("{}_expansion", self.name),
            expand(&self.pos, &self.neg),
        );
        debug!(
            nodes = result.number_of_nodes(),
            edges = result.number_of_edges(),
            "signed graph expanded"
        );
        result
    }
}

impl SignedGraph {
    /// Returns the unsigned expansion on `2n` nodes, named with the suffix `_expansion`
    #[instrument(skip_all, fields(name = %self.name))]
    pub fn expansion(&self) -> SimpleGraph {
        let result = SimpleGraph::from_adjacency(
            format!("{}_expansion", self.name),
            expand(&self.pos, &self.neg),
        );
        debug!(
            nodes = result.number_of_nodes(),
            edges = result.number_of_edges(),
            "signed graph expanded"
        );
        result
    }
}

impl From<SignedGraphUndir> for SimpleGraphUndir {
    fn from(graph: SignedGraphUndir) -> Self {
        graph.expansion()
    }
}

impl From<SignedGraph> for SimpleGraph {
    fn from(graph: SignedGraph) -> Self {
        graph.expansion()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::assert_dense_invariants;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn triangle_with_one_negative_edge() {
        let signed = SignedGraphUndir::from_signed_edges("t", 3, [(0, 1, 1), (1, 2, 1), (0, 2, -1)]);
        let expanded = SimpleGraphUndir::from(signed);

        assert_dense_invariants(&expanded);
        assert_eq!(expanded.number_of_nodes(), 6);
        assert_eq!(expanded.number_of_edges(), 6);
        assert_eq!(expanded.as_neighbors_slice(0), &[1, 5]);
        assert_eq!(expanded.as_neighbors_slice(3), &[2, 4]);

        // a negative cycle connects both copies of every node
        assert!(expanded.is_connected());
    }

    #[test]
    fn balanced_cycle_splits_into_two_copies() {
        let signed = SignedGraphUndir::from_signed_edges("b", 4, [(0, 1, 1), (1, 2, -1), (2, 3, -1), (3, 0, 1)]);
        let expanded = signed.expansion();
        assert!(!expanded.is_connected());
        assert_eq!(expanded.count_reachable(0), 4);
    }

    #[test]
    fn directed_expansion() {
        let signed = SignedGraph::from_signed_edges("d", 2, [(0, 1, 5), (1, 0, -5)]);
        let expanded = signed.expansion();

        assert_eq!(expanded.name(), "d_expansion");
        assert_dense_invariants(&expanded);
        assert_eq!(
            expanded.ordered_edges(false),
            vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 0)]
        );
        assert!(expanded.is_strongly_connected());
    }

    #[test]
    fn expansion_doubles_size() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);

        for n in [1 as NumNodes, 10, 50] {
            let edges = (0..4 * n)
                .map(|_| (rng.random_range(0..n), rng.random_range(0..n), rng.random_range(-1..=1)))
                .collect_vec();

            let undirected = SignedGraphUndir::from_signed_edges("u", n, edges.iter().copied());
            let expanded = undirected.expansion();
            assert_dense_invariants(&expanded);
            assert_eq!(expanded.number_of_nodes(), 2 * n);
            assert_eq!(expanded.number_of_edges(), 2 * undirected.number_of_edges());

            let directed = SignedGraph::from_signed_edges("d", n, edges);
            let expanded = directed.expansion();
            assert_dense_invariants(&expanded);
            assert_eq!(expanded.number_of_nodes(), 2 * n);
            assert_eq!(expanded.number_of_edges(), 2 * directed.number_of_edges());

            for (Edge(u, v), positive) in directed.signed_edges() {
                let target = if positive { v } else { v + n };
                assert!(expanded.has_edge(u, target));
                assert!(expanded.has_edge(u + n, if positive { v + n } else { v }));
            }
        }
    }
}
