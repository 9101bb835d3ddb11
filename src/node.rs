/*!
# Node Representation

Nodes are plain `u32` values in two address spaces:
- **sparse** ids are whatever the input used (dataset ids, arbitrary gaps),
- **dense** ids are exactly `0..n` and are assigned once during compaction.

Using `u32` keeps adjacency lists compact; datasets with more than `2^32 - 1` nodes are not supported.
*/

use std::num::NonZero;
use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Signed integer weight attached to an edge of a weighted graph.
/// Signed graphs interpret `w > 0` as a positive and everything else as a negative edge.
pub type Weight = i64;

/// BitSet over dense Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// in large stacks such as `Vec<(Option<Node>, Node)>`. This instead uses the
/// `NonZero`-Wrapper to reserve the constant `N` as the `None`-Value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}
