use fxhash::FxHashMap;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DsuEntry {
    /// Representative of a set containing `size` nodes
    Root { size: NumNodes },
    Child { parent: Node },
}

/// Disjoint-set union over sparse node ids with union by size and path compression.
///
/// Both `find` and `union` are iterative, so arbitrarily long parent chains cannot overflow the stack.
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    entries: FxHashMap<Node, DsuEntry>,
}

impl UnionFind {
    /// Creates an empty structure
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty structure with space for `n` nodes
    pub fn with_capacity(n: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(n, Default::default()),
        }
    }

    /// Creates one singleton set per node of the graph and unifies the endpoints of every edge
    pub fn from_graph<G: EdgeList>(graph: &G) -> Self {
        let mut uf = Self::with_capacity(graph.len());
        for u in graph.vertices() {
            uf.add(u);
        }
        for Edge(u, v) in graph.edge_list() {
            uf.union(u, v);
        }
        uf
    }

    /// Adds `u` as a singleton set. Returns *false* if `u` was already present.
    pub fn add(&mut self, u: Node) -> bool {
        if self.entries.contains_key(&u) {
            return false;
        }
        self.entries.insert(u, DsuEntry::Root { size: 1 });
        true
    }

    /// Returns *true* if `u` was added
    pub fn contains(&self, u: Node) -> bool {
        self.entries.contains_key(&u)
    }

    /// Returns the number of nodes in the structure
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns *true* if no node was added
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the representative of the set containing `u` and compresses the path to it.
    /// ** Panics if `u` was never added **
    pub fn find(&mut self, u: Node) -> Node {
        let mut root = u;
        while let DsuEntry::Child { parent } = self.entry(root) {
            root = parent;
        }

        let mut cur = u;
        while let Some(DsuEntry::Child { parent }) = self.entries.get_mut(&cur) {
            cur = std::mem::replace(parent, root);
        }

        root
    }

    /// Unifies the sets containing `u` and `v`; the smaller set is attached below the larger one,
    /// on ties the root of `v` is attached below the root of `u`.
    /// Returns *false* if both were already in the same set.
    /// ** Panics if `u` or `v` was never added **
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let ru = self.find(u);
        let rv = self.find(v);
        if ru == rv {
            return false;
        }

        let su = self.size_of_root(ru);
        let sv = self.size_of_root(rv);
        let (parent, child) = if su < sv { (rv, ru) } else { (ru, rv) };

        self.entries.insert(child, DsuEntry::Child { parent });
        self.entries.insert(parent, DsuEntry::Root { size: su + sv });
        true
    }

    /// Returns the size of the set represented by `root`
    /// ** Panics if `root` is not a representative **
    pub fn size_of_root(&self, root: Node) -> NumNodes {
        match self.entry(root) {
            DsuEntry::Root { size } => size,
            DsuEntry::Child { .. } => panic!("{root} is not a representative"),
        }
    }

    /// Returns the size of the set containing `u`
    pub fn size_of(&mut self, u: Node) -> NumNodes {
        let root = self.find(u);
        self.size_of_root(root)
    }

    /// Returns *true* if `u` and `v` are in the same set
    pub fn same_set(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }

    /// Iterates all representatives with the size of their set
    pub fn roots(&self) -> impl Iterator<Item = (Node, NumNodes)> + '_ {
        self.entries.iter().filter_map(|(&u, entry)| match *entry {
            DsuEntry::Root { size } => Some((u, size)),
            DsuEntry::Child { .. } => None,
        })
    }

    /// Returns the number of disjoint sets
    pub fn number_of_sets(&self) -> usize {
        self.roots().count()
    }

    /// Returns the representative of a largest set, ties are broken towards the larger id
    pub fn largest_root(&self) -> Option<(Node, NumNodes)> {
        self.roots().max_by_key(|&(root, size)| (size, root))
    }

    fn entry(&self, u: Node) -> DsuEntry {
        match self.entries.get(&u) {
            Some(entry) => *entry,
            None => panic!("{u} was never added"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn union_by_size() {
        let mut uf = UnionFind::new();
        for u in [10, 20, 30, 40] {
            assert!(uf.add(u));
        }
        assert!(!uf.add(10));

        assert!(uf.union(10, 20));
        // tie: root of v goes below root of u
        assert_eq!(uf.find(20), 10);

        assert!(uf.union(30, 10));
        // {30} is smaller and goes below 10
        assert_eq!(uf.find(30), 10);
        assert_eq!(uf.size_of(40), 1);
        assert_eq!(uf.size_of(30), 3);

        assert!(!uf.union(20, 30));
        assert_eq!(uf.number_of_sets(), 2);
        assert_eq!(uf.largest_root(), Some((10, 3)));
    }

    #[test]
    fn largest_root_tie_break() {
        let mut uf = UnionFind::new();
        for u in 0..6 {
            uf.add(u);
        }
        uf.union(4, 5);
        uf.union(0, 1);
        assert_eq!(uf.largest_root(), Some((4, 2)));

        assert!(UnionFind::new().largest_root().is_none());
    }

    #[test]
    fn long_chain_does_not_overflow() {
        let n = 1_000_000;
        let mut uf = UnionFind::with_capacity(n as usize);
        uf.add(0);
        for u in 1..n {
            uf.add(u);
            assert!(uf.union(u, u - 1));
        }
        assert_eq!(uf.size_of(0), n);
        assert_eq!(uf.number_of_sets(), 1);
    }

    #[test]
    fn random_unions_match_naive_labels() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        let n = 200 as Node;

        let mut uf = UnionFind::new();
        let mut label: Vec<Node> = (0..n).collect();
        for u in 0..n {
            uf.add(u);
        }

        for _ in 0..150 {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            let merged = uf.union(u, v);
            let (lu, lv) = (label[u as usize], label[v as usize]);
            assert_eq!(merged, lu != lv);
            for l in label.iter_mut() {
                if *l == lv {
                    *l = lu;
                }
            }
        }

        for u in 0..n {
            for v in 0..n {
                assert_eq!(uf.same_set(u, v), label[u as usize] == label[v as usize]);
            }
        }
    }
}
