/*!
# Node Mapper

Bijection between the sparse ids of an ingested graph and the dense ids `0..n`
assigned during compaction. The fused reduction constructors return the mapper they
used so that results on the dense graph can be reported in terms of the original ids.
*/
use crate::{edge::*, node::*};

use fxhash::FxHashMap;
use itertools::Itertools;
use std::fmt;

/// A trait for constructing node mappings.
pub trait NodeMapSetter: Sized {
    /// Creates a mapper whose largest new id is `n-1`.
    fn with_capacity(n: NumNodes) -> Self;

    /// Creates a mapper where each mapping is of form `x <-> x` for all `x < n`.
    /// Subsequent calls to [`NodeMapSetter::map_node_to`] are forbidden.
    fn identity(n: NumNodes) -> Self;

    /// Stores a mapping `old <-> new`.
    /// ** Panics if either id is already mapped or `new` exceeds the capacity **
    fn map_node_to(&mut self, old: Node, new: Node);

    /// Assigns new ids in the order of a strictly ascending id slice, i.e. `ids[i] <-> i`.
    /// Falls back to the identity if `ids` is exactly `0..n`.
    fn from_sorted_ids(ids: &[Node]) -> Self {
        debug_assert!(ids.windows(2).all(|w| w[0] < w[1]));

        let n = ids.len() as NumNodes;
        if ids.last().is_none_or(|&max| max + 1 == n) {
            return Self::identity(n);
        }

        let mut res = Self::with_capacity(n);
        for (new, &old) in ids.iter().enumerate() {
            res.map_node_to(old, new as Node);
        }
        res
    }
}

/// Getters of a node mapping.
pub trait NodeMapGetter {
    /// Returns the new id of `old` if it was mapped
    fn new_id_of(&self, old: Node) -> Option<Node>;

    /// Returns the old id of `new` if it was mapped
    fn old_id_of(&self, new: Node) -> Option<Node>;

    /// Returns the number of mapped nodes
    fn len(&self) -> NumNodes;

    /// Returns *true* if no node is mapped
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maps both endpoints of an edge, returns `None` if one of them is unmapped
    fn new_edge_of(&self, Edge(u, v): Edge) -> Option<Edge> {
        Some(Edge(self.new_id_of(u)?, self.new_id_of(v)?))
    }
}

/// A bidirectional node mapping between sparse ("old") and dense ("new") ids.
///
/// Forward lookups go through a hash map, backward lookups through a vector indexed by the dense id.
#[derive(Clone, PartialEq, Eq)]
pub struct NodeMapper {
    old_to_new: FxHashMap<Node, Node>,
    new_to_old: Vec<Node>,
    is_identity: bool,
}

impl NodeMapSetter for NodeMapper {
    fn with_capacity(n: NumNodes) -> Self {
        Self {
            old_to_new: FxHashMap::with_capacity_and_hasher(n as usize, Default::default()),
            new_to_old: vec![INVALID_NODE; n as usize],
            is_identity: false,
        }
    }

    fn identity(n: NumNodes) -> Self {
        Self {
            old_to_new: FxHashMap::default(),
            new_to_old: (0..n).collect_vec(),
            is_identity: true,
        }
    }

    fn map_node_to(&mut self, old: Node, new: Node) {
        assert!(!self.is_identity);
        assert_eq!(self.new_to_old[new as usize], INVALID_NODE, "{new} mapped twice");
        assert!(self.old_to_new.insert(old, new).is_none(), "{old} mapped twice");
        self.new_to_old[new as usize] = old;
    }
}

impl NodeMapGetter for NodeMapper {
    fn new_id_of(&self, old: Node) -> Option<Node> {
        if self.is_identity {
            ((old as usize) < self.new_to_old.len()).then_some(old)
        } else {
            self.old_to_new.get(&old).copied()
        }
    }

    fn old_id_of(&self, new: Node) -> Option<Node> {
        self.new_to_old
            .get(new as usize)
            .copied()
            .filter(|&old| old != INVALID_NODE)
    }

    fn len(&self) -> NumNodes {
        if self.is_identity {
            self.new_to_old.len() as NumNodes
        } else {
            self.old_to_new.len() as NumNodes
        }
    }
}

impl NodeMapper {
    /// Returns *true* if every id maps to itself
    pub fn is_identity(&self) -> bool {
        self.is_identity
    }

    /// Returns the old ids in order of their new id
    pub fn old_ids(&self) -> &[Node] {
        &self.new_to_old
    }
}

impl fmt::Debug for NodeMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity {
            return write!(f, "[identity on 0..{}]", self.new_to_old.len());
        }

        write!(
            f,
            "[{}]",
            self.new_to_old
                .iter()
                .enumerate()
                .filter(|&(_, &o)| o != INVALID_NODE)
                .map(|(n, &o)| format!("{o}<->{n}"))
                .join(", ")
        )
    }
}
