/*!
# Graph Algorithms

This module provides the connectivity machinery of this crate. Everything is re-exported
at the top level of this module, so you can simply do:
```rust
use netgraphs::algo::*;
```
and gain access to
- [`UnionFind`] and [`StronglyConnectedComponents`] over sparse ids,
- the reductions [`LargestComponent::lcc`] and [`LargestStronglyConnectedComponent::lscc`],
- the fused constructors such as [`SimpleGraphUndir::from_largest_component`] which reduce,
  renumber and sort a sparse graph in one pass,
- the signed expansion [`SignedGraphUndir::expansion`],
- breadth- and depth-first traversal of dense graphs.
*/

mod compaction;
mod components;
mod expansion;
mod strongly_connected;
mod union_find;

pub mod traversal;

use crate::{prelude::*, utils::*};
use itertools::Itertools;

pub use components::*;
pub use strongly_connected::*;
pub use traversal::*;
pub use union_find::*;
