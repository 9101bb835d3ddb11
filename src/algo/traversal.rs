/*!
Graph traversal on dense graphs.

This module provides:
- Generic traversal iterators (BFS, DFS, with and without predecessor tracking)
  over graphs with contiguous ids `0..n`.
- `TraversalTree` turning a predecessor-tracking traversal into parent or depth arrays.
- A `Traversal` trait exposing the iterators as methods on every adjacency list,
  and connectivity checks for the dense representations.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Item yielded by a traversal iterator: the visited node and possibly its predecessor
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// `(predecessor, node)`; the start node is encoded as its own predecessor
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Frontier of a traversal: a queue yields BFS, a stack yields DFS
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single item.
    fn init(u: T) -> Self;

    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator over a dense graph.
///
/// Maintains an explicit frontier, a bitset of discovered nodes and optionally
/// records predecessor information.
pub struct TraversalSearch<'a, G, S, I>
where
    G: DenseNodeIds,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator visiting nodes in breadth-first order from a given start node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;

/// A DFS traversal iterator visiting nodes in depth-first order from a given start node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node>;

/// A BFS traversal iterator that records the traversed tree edges
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: DenseNodeIds,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.sequencer.push(I::new_with_predecessor(u, v));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.cardinality() as usize + self.sequencer.cardinality()),
        )
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: DenseNodeIds,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = NodeBitSet::new(graph.number_of_nodes());
        visited.set_bit(start);
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            _item: PhantomData,
        }
    }

    /// Returns *true* if `u` was discovered so far
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Excludes a node from the search; it is treated as if it was already visited.
    /// Has no effect on nodes already in the frontier, so call it directly after the constructor.
    pub fn with_node_excluded(mut self, u: Node) -> Self {
        self.visited.set_bit(u);
        self
    }
}

/// Extension trait for predecessor-tracking traversals
pub trait TraversalTree: Iterator<Item = PredecessorOfNode> + Sized {
    /// Number of nodes of the underlying graph
    fn graph_len(&self) -> usize;

    /// Consumes the iterator and returns the parent of every node in the traversal tree.
    /// Unvisited nodes and the start node are their own parent.
    ///
    /// # Examples
    /// ```
    /// use netgraphs::{prelude::*, algo::*};
    ///
    /// let g = SimpleGraphUndir::from_edges("path", 3, [(0, 1), (1, 2)]);
    /// assert_eq!(g.bfs_with_predecessor(0).parent_array(), vec![0, 0, 1]);
    /// ```
    fn parent_array(mut self) -> Vec<Node> {
        let mut tree = (0..self.graph_len() as Node).collect_vec();
        for (pred, u) in self.by_ref() {
            tree[u as usize] = pred;
        }
        tree
    }

    /// Consumes the iterator and returns the hop distance of every node from the start.
    /// Unvisited nodes get `INVALID_NODE`.
    ///
    /// # Examples
    /// ```
    /// use netgraphs::{prelude::*, algo::*};
    ///
    /// let g = SimpleGraph::from_edges("path", 4, [(0, 1), (1, 2)]);
    /// assert_eq!(g.bfs_with_predecessor(0).depths(), vec![0, 1, 2, INVALID_NODE]);
    /// ```
    fn depths(mut self) -> Vec<Node> {
        let mut depths = vec![INVALID_NODE; self.graph_len()];
        for item in self.by_ref() {
            depths[item.item() as usize] = item.predecessor().map_or(0, |p| depths[p as usize] + 1);
        }
        depths
    }
}

impl<G, S> TraversalTree for TraversalSearch<'_, G, S, PredecessorOfNode>
where
    G: DenseNodeIds,
    S: NodeSequencer<PredecessorOfNode>,
{
    fn graph_len(&self) -> usize {
        self.graph.len()
    }
}

/// Provides traversal methods on every adjacency list with ids `0..n`.
/// Sparse graphs have to be compacted first.
///
/// ```compile_fail
/// use netgraphs::{prelude::*, algo::*};
///
/// let mut sparse: SparseGraph = SparseGraph::new("g");
/// sparse.add_edge(10, 20);
/// sparse.bfs(10);
/// ```
pub trait Traversal: DenseNodeIds {
    /// Returns an iterator over the nodes reachable from `start` in BFS order.
    ///
    /// # Examples
    /// ```
    /// use netgraphs::{prelude::*, algo::*};
    ///
    /// let g = SimpleGraphUndir::from_edges("g", 3, [(0, 1), (0, 2)]);
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator over the nodes reachable from `start` in DFS order
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns a BFS iterator that additionally yields the predecessor of every node
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns the number of nodes reachable from `start`, including `start`
    fn count_reachable(&self, start: Node) -> NumNodes {
        self.bfs(start).count() as NumNodes
    }
}

impl<G> Traversal for G where G: DenseNodeIds {}

/// Connectivity checks of dense undirected graphs
pub trait Connected {
    /// Returns *true* if every node is reachable from every other one.
    /// The empty graph is considered connected.
    fn is_connected(&self) -> bool;
}

/// Connectivity checks of dense directed graphs
pub trait StronglyConnected {
    /// Returns *true* if every node reaches every other one along arcs.
    /// The empty graph is considered strongly connected.
    fn is_strongly_connected(&self) -> bool;
}

macro_rules! impl_connected {
    ($($struct:ident),*) => {
        $(
            impl Connected for $struct {
                fn is_connected(&self) -> bool {
                    self.is_empty() || self.count_reachable(0) == self.number_of_nodes()
                }
            }
        )*
    };
}

impl_connected!(SimpleGraphUndir, SignedGraphUndir);

impl StronglyConnected for SimpleGraph {
    fn is_strongly_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        if self.count_reachable(0) != self.number_of_nodes() {
            return false;
        }

        let reverse = SimpleGraph::from_adjacency(self.name.clone(), self.in_adjacency());
        reverse.count_reachable(0) == self.number_of_nodes()
    }
}

impl StronglyConnected for SignedGraph {
    fn is_strongly_connected(&self) -> bool {
        let unsigned = SimpleGraph::from_edges(self.name(), self.number_of_nodes(), self.edges(false));
        unsigned.is_strongly_connected()
    }
}
