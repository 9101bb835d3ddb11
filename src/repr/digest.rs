/*!
# Graph Hash Digests

This module provides the [`GraphDigest`] trait, which computes **hash-based digests**
of graphs that are independent of the underlying data structure.

The digest encodes
- the number of nodes and
- the sorted edge list (undirected edges once, smaller id first)

before feeding them into a cryptographic hash function. It is used to check that
compaction produces identical dense graphs across runs.

## Example
```
use netgraphs::{prelude::*, repr::digest::GraphDigest};

let mut sparse: SparseGraph = SparseGraph::new("g");
sparse.add_edge(4, 3);
sparse.add_edge(3, 4);
sparse.add_edge(1, 2);

let dense = SimpleGraph::from_largest_scc(sparse);
let same = SimpleGraph::from_edges("h", 2, [(1, 0), (0, 1)]);
assert_eq!(dense.digest_sha256(), same.digest_sha256());
```
*/

use std::fmt::LowerHex;

use super::*;
use crate::ops::*;
use ::digest::{Digest, Output};

/// Trait for computing a **canonical hash digest** of a graph.
///
/// Two graphs on the same ids with the same edges yield the same digest,
/// regardless of their name or representation.
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`
    /// and returns it as a hexadecimal string.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<G> GraphDigest for G
where
    G: AdjacencyList + GraphType,
{
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();
        hasher.update(self.number_of_nodes().to_le_bytes());

        for Edge(u, v) in self.ordered_edges(G::is_undirected()) {
            hasher.update(u.to_le_bytes());
            hasher.update(v.to_le_bytes());
        }

        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn digest_ignores_names_and_insertion_order() {
        let a = SignedGraphUndir::from_signed_edges("a", 4, [(0, 1, 1), (2, 3, -1), (1, 2, 1)]);
        let b = SimpleGraphUndir::from_edges("b", 4, [(3, 2), (2, 1), (1, 0)]);
        assert_eq!(a.digest_sha256(), b.digest_sha256());
        assert_eq!(a.digest_sha256().len(), 64);

        let c = SimpleGraphUndir::from_edges("c", 5, [(3, 2), (2, 1), (1, 0)]);
        assert_ne!(b.digest_sha256(), c.digest_sha256());

        let directed = SimpleGraph::from_edges("d", 4, [(3, 2), (2, 1), (1, 0)]);
        assert_ne!(b.digest_sha256(), directed.digest_sha256());
    }
}
