use tracing::{debug, instrument};

use super::*;

/// Largest connected component of a sparse undirected graph
pub trait LargestComponent {
    /// Returns the union-find representative of the largest component together with its size.
    /// Ties are broken towards the larger representative id; `None` for an empty graph.
    fn largest_component_root(&self) -> Option<(Node, NumNodes)>;

    /// Returns the nodes of the largest component in ascending order
    fn largest_component(&self) -> Vec<Node>;

    /// Returns a new graph restricted to the largest component, preserving ids and weights.
    /// The name of the result carries the suffix `_LCC`.
    fn lcc(&self) -> Self;
}

/// Runs union-find over the graph and returns it together with the chosen root
#[instrument(skip_all, fields(nodes = graph.number_of_nodes(), edges = graph.number_of_edges()))]
pub(crate) fn label_components<G: EdgeList>(graph: &G) -> (UnionFind, Option<Node>) {
    let uf = UnionFind::from_graph(graph);
    let largest = uf.largest_root();

    debug!(
        components = uf.number_of_sets(),
        largest = largest.map_or(0, |(_, size)| size),
        "connected components labelled"
    );

    (uf, largest.map(|(root, _)| root))
}

impl<W: EdgeWeight> LargestComponent for SparseGraphUndir<W> {
    fn largest_component_root(&self) -> Option<(Node, NumNodes)> {
        UnionFind::from_graph(self).largest_root()
    }

    fn largest_component(&self) -> Vec<Node> {
        let (mut uf, Some(root)) = label_components(self) else {
            return Vec::new();
        };

        let mut nodes = self.vertices().filter(|&u| uf.find(u) == root).collect_vec();
        nodes.sort_unstable();
        nodes
    }

    #[instrument(skip_all, fields(name = %self.name))]
    fn lcc(&self) -> Self {
        let mut result = Self::new(format!("{}_LCC", self.name));
        let (mut uf, Some(root)) = label_components(self) else {
            return result;
        };

        result.nodes = self
            .nodes
            .iter()
            .copied()
            .filter(|&u| uf.find(u) == root)
            .collect();

        // both endpoints of an edge share their component
        result.edges = self
            .edges
            .iter()
            .filter(|(e, _)| uf.find(e.0) == root)
            .map(|(&e, &w)| (e, w))
            .collect();

        debug!(
            nodes = result.number_of_nodes(),
            edges = result.number_of_edges(),
            "largest component extracted"
        );
        result
    }
}
