/*!
`netgraphs` provides graph models and connectivity reductions for network-science workloads:
ingest an edge list, normalize it into a typed graph model and extract the structurally useful
part of it, i.e. the **largest connected component** of an undirected graph or the
**largest strongly connected component** of a directed graph.

# Representation

We represent **nodes** as `u32`. Two address spaces are in use:
- *sparse* ids are whatever the input used and are kept by the sparse graph models,
- *dense* ids are exactly `0..n` and are assigned once when a sparse graph is compacted.

For **edges**, we use a simple tuple-struct `Edge(Node, Node)`. Weights are `i64`.

### Available Representations

See the [`repr`] module for details:

| | undirected | directed |
|---|---|---|
| sparse, unweighted | [`SparseGraphUndir`](crate::repr::SparseGraphUndir) | [`SparseGraph`](crate::repr::SparseGraph) |
| sparse, weighted | [`WeightedSparseGraphUndir`](crate::repr::WeightedSparseGraphUndir) | [`WeightedSparseGraph`](crate::repr::WeightedSparseGraph) |
| dense | [`SimpleGraphUndir`](crate::repr::SimpleGraphUndir) | [`SimpleGraph`](crate::repr::SimpleGraph) |
| dense, signed | [`SignedGraphUndir`](crate::repr::SignedGraphUndir) | [`SignedGraph`](crate::repr::SignedGraph) |

# Design

Sparse graphs are built by ingestion or insertion and then consumed by one of the fused
constructors in [`algo`], which reduce, renumber and sort in one pass:

```
use netgraphs::{prelude::*, io::*};

let input = "# a comment\n1 2\n2 3\n1 3\n4 5\n";
let sparse: SparseGraphUndir = EdgeListReader::new()
    .graph_name("triangle")
    .try_read_graph(input.as_bytes())
    .unwrap();

let dense = SimpleGraphUndir::from_largest_component(sparse);
assert_eq!(dense.number_of_nodes(), 3);
assert_eq!(dense.number_of_edges(), 3);
assert_eq!(dense.name(), "triangle_LCC");
```

Algorithms and generators are configurable structs or traits implemented on the graphs themselves.
All long-running steps emit `tracing` spans; the library never installs a subscriber.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations and all representations,
- [`algo`] includes union-find, Tarjan, the reductions, compaction constructors, signed expansion and BFS,
- [`gens`] includes deterministic fractal/tree generators and weight generators for ingestion,
- [`io`] includes the edge-list reader and writer,
- [`utils`] includes the `NodeMapper` recording the sparse-to-dense renumbering.

In most use-cases, `use netgraphs::{prelude::*, algo::*};` suffices.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `netgraphs::prelude` includes definitions for nodes and edges, the error type, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
