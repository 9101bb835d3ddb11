/*!
# Compaction

Fused constructors that consume a sparse graph, drop everything outside its largest
(strongly) connected component, renumber the survivors to `0..n` and build sorted
adjacency lists, all without materializing an intermediate reduced sparse graph.

Survivors are renumbered in ascending order of their sparse id, which is the identity if
they already are exactly `0..n`. The dense graph is named after its source with the suffix
`_LCC` or `_LSCC`, just like the sparse reductions.
*/

use std::collections::BTreeMap;

use fxhash::FxHashMap;
use tracing::{debug, instrument};

use super::{components::label_components, *};

/// Drops all nodes and edges outside the largest component and returns the renumbering
fn retain_largest_component<W: EdgeWeight>(
    graph: SparseGraphUndir<W>,
) -> (String, NodeMapper, BTreeMap<Edge, W>) {
    let (mut uf, root) = label_components(&graph);
    let SparseGraphUndir {
        name,
        mut nodes,
        mut edges,
    } = graph;

    let name = format!("{name}_LCC");
    let Some(root) = root else {
        return (name, NodeMapper::identity(0), BTreeMap::new());
    };

    nodes.retain(|&u| uf.find(u) == root);
    edges.retain(|e, _| uf.find(e.0) == root);
    drop(uf);

    let mut survivors = nodes.into_iter().collect_vec();
    survivors.sort_unstable();
    let mapper = NodeMapper::from_sorted_ids(&survivors);

    debug!(
        nodes = mapper.len(),
        edges = edges.len(),
        identity = mapper.is_identity(),
        "largest component retained"
    );

    (name, mapper, edges)
}

/// Drops all nodes and arcs outside the largest strongly connected component and returns the renumbering
fn retain_largest_scc<W: EdgeWeight>(
    graph: SparseGraph<W>,
) -> (String, NodeMapper, FxHashMap<Node, Vec<(Node, W)>>) {
    let sccs = StronglyConnectedComponents::new(&graph);
    let SparseGraph {
        name,
        mut adj,
        edges,
    } = graph;
    drop(edges);

    let name = format!("{name}_LSCC");
    let Some((chosen, _)) = sccs.largest_component() else {
        return (name, NodeMapper::identity(0), FxHashMap::default());
    };
    let inside = |u: Node| sccs.scc_of(u) == Some(chosen);

    adj.retain(|&u, _| inside(u));
    for succ in adj.values_mut() {
        // arcs may leave the component towards an already completed one
        succ.retain(|&(v, _)| inside(v));
    }

    let mut survivors = adj.keys().copied().collect_vec();
    survivors.sort_unstable();
    let mapper = NodeMapper::from_sorted_ids(&survivors);

    debug!(
        nodes = mapper.len(),
        identity = mapper.is_identity(),
        "largest strongly connected component retained"
    );

    (name, mapper, adj)
}

/// Dense id of a node that survived the reduction
fn dense_id(mapper: &NodeMapper, u: Node) -> usize {
    match mapper.new_id_of(u) {
        Some(new) => new as usize,
        None => panic!("{u} survived the reduction but was not renumbered"),
    }
}

impl SimpleGraphUndir {
    /// Consumes a sparse undirected graph and returns its largest connected component in dense form
    pub fn from_largest_component<W: EdgeWeight>(graph: SparseGraphUndir<W>) -> Self {
        Self::from_largest_component_with_mapping(graph).0
    }

    /// Like [`SimpleGraphUndir::from_largest_component`] but also returns the sparse-to-dense renumbering
    #[instrument(skip_all, fields(name = %graph.name))]
    pub fn from_largest_component_with_mapping<W: EdgeWeight>(
        graph: SparseGraphUndir<W>,
    ) -> (Self, NodeMapper) {
        let (name, mapper, edges) = retain_largest_component(graph);

        let mut nbs = vec![Vec::new(); mapper.len() as usize];
        for Edge(u, v) in edges.into_keys() {
            let (nu, nv) = (dense_id(&mapper, u), dense_id(&mapper, v));
            nbs[nu].push(nv as Node);
            nbs[nv].push(nu as Node);
        }

        (Self::from_adjacency(name, nbs), mapper)
    }
}

impl SignedGraphUndir {
    /// Consumes a weighted sparse undirected graph and returns its largest connected component
    /// as a signed graph; weights `> 0` become positive edges, all others negative ones
    pub fn from_largest_component(graph: WeightedSparseGraphUndir) -> Self {
        Self::from_largest_component_with_mapping(graph).0
    }

    /// Like [`SignedGraphUndir::from_largest_component`] but also returns the sparse-to-dense renumbering
    #[instrument(skip_all, fields(name = %graph.name))]
    pub fn from_largest_component_with_mapping(
        graph: WeightedSparseGraphUndir,
    ) -> (Self, NodeMapper) {
        let (name, mapper, edges) = retain_largest_component(graph);

        let n = mapper.len() as usize;
        let mut pos = vec![Vec::new(); n];
        let mut neg = vec![Vec::new(); n];
        for (Edge(u, v), w) in edges {
            let (nu, nv) = (dense_id(&mapper, u), dense_id(&mapper, v));
            let target = if is_positive(w) { &mut pos } else { &mut neg };
            target[nu].push(nv as Node);
            target[nv].push(nu as Node);
        }

        (Self::from_adjacency(name, pos, neg), mapper)
    }
}

impl SimpleGraph {
    /// Consumes a sparse directed graph and returns its largest strongly connected component in dense form
    pub fn from_largest_scc<W: EdgeWeight>(graph: SparseGraph<W>) -> Self {
        Self::from_largest_scc_with_mapping(graph).0
    }

    /// Like [`SimpleGraph::from_largest_scc`] but also returns the sparse-to-dense renumbering
    #[instrument(skip_all, fields(name = %graph.name))]
    pub fn from_largest_scc_with_mapping<W: EdgeWeight>(
        graph: SparseGraph<W>,
    ) -> (Self, NodeMapper) {
        let (name, mapper, adj) = retain_largest_scc(graph);

        let mut nbs = vec![Vec::new(); mapper.len() as usize];
        for (u, succ) in adj {
            nbs[dense_id(&mapper, u)] = succ
                .into_iter()
                .map(|(v, _)| dense_id(&mapper, v) as Node)
                .collect();
        }

        (Self::from_adjacency(name, nbs), mapper)
    }
}

impl SignedGraph {
    /// Consumes a weighted sparse directed graph and returns its largest strongly connected component
    /// as a signed graph; weights `> 0` become positive arcs, all others negative ones
    pub fn from_largest_scc(graph: WeightedSparseGraph) -> Self {
        Self::from_largest_scc_with_mapping(graph).0
    }

    /// Like [`SignedGraph::from_largest_scc`] but also returns the sparse-to-dense renumbering
    #[instrument(skip_all, fields(name = %graph.name))]
    pub fn from_largest_scc_with_mapping(graph: WeightedSparseGraph) -> (Self, NodeMapper) {
        let (name, mapper, adj) = retain_largest_scc(graph);

        let n = mapper.len() as usize;
        let mut pos = vec![Vec::new(); n];
        let mut neg = vec![Vec::new(); n];
        for (u, succ) in adj {
            let nu = dense_id(&mapper, u);
            for (v, w) in succ {
                let target = if is_positive(w) { &mut pos } else { &mut neg };
                target[nu].push(dense_id(&mapper, v) as Node);
            }
        }

        (Self::from_adjacency(name, pos, neg), mapper)
    }
}

impl<W: EdgeWeight> From<SparseGraphUndir<W>> for SimpleGraphUndir {
    fn from(graph: SparseGraphUndir<W>) -> Self {
        Self::from_largest_component(graph)
    }
}

impl From<WeightedSparseGraphUndir> for SignedGraphUndir {
    fn from(graph: WeightedSparseGraphUndir) -> Self {
        Self::from_largest_component(graph)
    }
}

impl<W: EdgeWeight> From<SparseGraph<W>> for SimpleGraph {
    fn from(graph: SparseGraph<W>) -> Self {
        Self::from_largest_scc(graph)
    }
}

impl From<WeightedSparseGraph> for SignedGraph {
    fn from(graph: WeightedSparseGraph) -> Self {
        Self::from_largest_scc(graph)
    }
}
