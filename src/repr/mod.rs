/*!
# Graph Representations

Two families of graphs live here:

- **sparse** graphs ([`SparseGraphUndir`], [`SparseGraph`]) are keyed by arbitrary node ids and
  are the target of ingestion and programmatic insertion,
- **dense** graphs ([`SimpleGraphUndir`], [`SimpleGraph`], [`SignedGraphUndir`], [`SignedGraph`])
  use contiguous ids `0..n` with sorted adjacency lists and are immutable after construction.

Dense graphs are normally produced by the fused reduction constructors in [`crate::algo`],
which consume a sparse graph and return its largest (strongly) connected component.
*/

use std::fmt::Debug;

use crate::*;

mod directed;
mod signed;
mod simple;
mod undirected;

pub mod digest;

pub use directed::*;
pub use signed::*;
pub use simple::*;
pub use undirected::*;

/// Payload attached to every edge of a sparse graph.
///
/// Implemented for `()` (unweighted graphs) and [`Weight`] (weighted graphs) so that
/// both variants share one implementation of insertion, reduction and compaction.
pub trait EdgeWeight: Copy + Eq + Debug + 'static {
    /// *true* if the payload carries an actual weight
    const WEIGHTED: bool;

    /// Builds the payload from a raw weight; unweighted payloads discard it
    fn from_weight(weight: Weight) -> Self;

    /// Returns the raw weight if there is one
    fn weight(&self) -> Option<Weight>;
}

impl EdgeWeight for () {
    const WEIGHTED: bool = false;

    fn from_weight(_: Weight) -> Self {}

    fn weight(&self) -> Option<Weight> {
        None
    }
}

impl EdgeWeight for Weight {
    const WEIGHTED: bool = true;

    fn from_weight(weight: Weight) -> Self {
        weight
    }

    fn weight(&self) -> Option<Weight> {
        Some(*self)
    }
}

/// Returns *true* if a weight is interpreted as a positive edge of a signed graph
#[inline]
pub fn is_positive(weight: Weight) -> bool {
    weight > 0
}

/// Sorts every adjacency list and checks the dense invariants in debug builds
pub(crate) fn sort_adjacency(nbs: &mut [Vec<Node>]) {
    for list in nbs.iter_mut() {
        list.sort_unstable();
        debug_assert!(list.windows(2).all(|w| w[0] < w[1]));
    }
}

pub(crate) mod macros {
    macro_rules! impl_dense_graph_ops {
        ($struct:ident => $nbs:ident, $directed:ident, $kind:literal) => {
            impl GraphType for $struct {
                type Dir = $directed;
            }

            impl NamedGraph for $struct {
                const KIND: &'static str = $kind;

                fn name(&self) -> &str {
                    &self.name
                }
            }

            impl GraphNodeOrder for $struct {
                fn number_of_nodes(&self) -> NumNodes {
                    self.$nbs.len() as NumNodes
                }

                fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
                    0..self.number_of_nodes()
                }
            }

            impl GraphEdgeOrder for $struct {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl EdgeList for $struct {
                fn edge_list(&self) -> impl Iterator<Item = Edge> + '_ {
                    self.edges(Self::is_undirected())
                }
            }
        };
    }

    pub(crate) use impl_dense_graph_ops;
}
