use fxhash::FxHashMap;
use tracing::{debug, instrument};

use super::*;

/// Strongly connected components of a directed graph computed with Tarjan's algorithm.
///
/// The search uses an explicit work stack of `(predecessor, node)` pairs instead of recursion,
/// so chains of millions of nodes do not overflow the call stack. DFS roots are taken in
/// ascending id order; component ids are assigned in completion order starting at `0`.
#[derive(Debug, Clone)]
pub struct StronglyConnectedComponents {
    states: FxHashMap<Node, NodeState>,
    sizes: Vec<NumNodes>,
}

impl StronglyConnectedComponents {
    /// Computes the strongly connected components of `graph`
    #[instrument(skip_all, fields(nodes = graph.number_of_nodes()))]
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList + GraphType<Dir = Directed>,
    {
        let mut roots = graph.vertices().collect_vec();
        roots.sort_unstable();

        let mut search = TarjanSearch {
            graph,
            states: FxHashMap::with_capacity_and_hasher(roots.len(), Default::default()),
            sizes: Vec::new(),
            counter: 0,
            work_stack: Vec::with_capacity(32),
            path_stack: Vec::with_capacity(32),
        };

        for root in roots {
            if !search.states.contains_key(&root) {
                search.search_from(root);
            }
        }

        debug!(components = search.sizes.len(), "strongly connected components labelled");

        Self {
            states: search.states,
            sizes: search.sizes,
        }
    }

    /// Returns the component id of `u`, or `None` if `u` is not a node of the graph
    pub fn scc_of(&self, u: Node) -> Option<Node> {
        self.states.get(&u).map(|state| state.scc)
    }

    /// Returns the number of nodes per component id
    pub fn component_sizes(&self) -> &[NumNodes] {
        &self.sizes
    }

    /// Returns the number of strongly connected components
    pub fn number_of_components(&self) -> usize {
        self.sizes.len()
    }

    /// Returns the id of a largest component together with its size.
    /// Among several largest components the one completed first is chosen.
    pub fn largest_component(&self) -> Option<(Node, NumNodes)> {
        self.sizes
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, &size)| size)
            .map(|(id, &size)| (id as Node, size))
    }

    /// Returns the members of component `id` in ascending order.
    /// Scans all nodes, i.e. runs in time `O(n)`; use [`Self::components`] to list many components.
    pub fn members_of(&self, id: Node) -> Vec<Node> {
        let mut members = self
            .states
            .iter()
            .filter_map(|(&u, state)| (state.scc == id).then_some(u))
            .collect_vec();
        members.sort_unstable();
        members
    }

    /// Returns the members of every component indexed by component id, each in ascending order
    pub fn components(&self) -> Vec<Vec<Node>> {
        let mut members = vec![Vec::new(); self.sizes.len()];
        for (&u, state) in &self.states {
            members[state.scc as usize].push(u);
        }
        for scc in &mut members {
            scc.sort_unstable();
        }
        members
    }
}

#[derive(Debug, Clone, Copy)]
struct NodeState {
    index: Node,
    low_link: Node,
    scc: Node,
    on_stack: bool,
    settled: bool,
}

impl NodeState {
    fn visit(index: Node) -> Self {
        Self {
            index,
            low_link: index,
            scc: INVALID_NODE,
            on_stack: true,
            settled: false,
        }
    }

    fn try_lower_link(&mut self, l: Node) {
        self.low_link = self.low_link.min(l);
    }

    fn is_root(&self) -> bool {
        self.index == self.low_link
    }
}

struct TarjanSearch<'a, G> {
    graph: &'a G,
    states: FxHashMap<Node, NodeState>,
    sizes: Vec<NumNodes>,
    counter: Node,
    /// Pending visits; the predecessor is `None` for DFS roots
    work_stack: Vec<(Option<OptionalNode>, Node)>,
    /// Visited nodes whose component is not yet complete
    path_stack: Vec<Node>,
}

impl<G> TarjanSearch<'_, G>
where
    G: AdjacencyList + GraphType<Dir = Directed>,
{
    fn search_from(&mut self, root: Node) {
        self.work_stack.push((None, root));

        while let Some(&(pred, u)) = self.work_stack.last() {
            if self.states.contains_key(&u) {
                self.work_stack.pop();
                self.finish(pred.map(|p| p.get()), u);
                continue;
            }

            self.counter += 1;
            let mut state = NodeState::visit(self.counter);
            self.path_stack.push(u);

            for v in self.graph.neighbors_of(u) {
                match self.states.get(&v) {
                    None => self.work_stack.push((OptionalNode::new(u), v)),
                    Some(succ) if succ.on_stack => state.try_lower_link(succ.index),
                    Some(_) => {}
                }
            }

            self.states.insert(u, state);
        }
    }

    /// Post-order step of `u`; later copies of an already finished node are ignored
    fn finish(&mut self, pred: Option<Node>, u: Node) {
        let Some(state) = self.states.get_mut(&u) else {
            return;
        };
        if state.settled {
            return;
        }
        state.settled = true;
        let state = *state;

        if let Some(pred_state) = pred.and_then(|p| self.states.get_mut(&p)) {
            pred_state.try_lower_link(state.low_link);
        }

        if !state.is_root() {
            return;
        }

        let id = self.sizes.len() as Node;
        let mut size = 0;
        while let Some(v) = self.path_stack.pop() {
            if let Some(member) = self.states.get_mut(&v) {
                member.on_stack = false;
                member.scc = id;
            }
            size += 1;
            if v == u {
                break;
            }
        }
        self.sizes.push(size);
    }
}

/// Largest strongly connected component of a sparse directed graph
pub trait LargestStronglyConnectedComponent {
    /// Returns the nodes of the largest strongly connected component in ascending order
    fn largest_strongly_connected_component(&self) -> Vec<Node>;

    /// Returns a new graph restricted to the largest strongly connected component,
    /// preserving ids, weights and successor order. The name of the result carries the suffix `_LSCC`.
    fn lscc(&self) -> Self;
}

impl<W: EdgeWeight> LargestStronglyConnectedComponent for SparseGraph<W> {
    fn largest_strongly_connected_component(&self) -> Vec<Node> {
        let sccs = StronglyConnectedComponents::new(self);
        match sccs.largest_component() {
            Some((id, _)) => sccs.members_of(id),
            None => Vec::new(),
        }
    }

    #[instrument(skip_all, fields(name = %self.name))]
    fn lscc(&self) -> Self {
        let mut result = Self::new(format!("{}_LSCC", self.name));
        let sccs = StronglyConnectedComponents::new(self);
        let Some((chosen, _)) = sccs.largest_component() else {
            return result;
        };
        let inside = |u: Node| sccs.scc_of(u) == Some(chosen);

        result.adj = self
            .adj
            .iter()
            .filter(|&(&u, _)| inside(u))
            .map(|(&u, succ)| {
                let succ = succ.iter().copied().filter(|&(v, _)| inside(v)).collect_vec();
                (u, succ)
            })
            .collect();

        result.edges = self
            .edges
            .iter()
            .filter(|&(e, _)| inside(e.0) && inside(e.1))
            .map(|(&e, &w)| (e, w))
            .collect();

        debug!(
            nodes = result.number_of_nodes(),
            edges = result.number_of_edges(),
            "largest strongly connected component extracted"
        );
        result
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn graph_from(edges: &[(Node, Node)]) -> SparseGraph {
        let mut graph: SparseGraph = SparseGraph::new("g");
        for &(u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Reachability by brute force
    fn reaches(graph: &SparseGraph, s: Node, t: Node) -> bool {
        let mut visited = vec![s];
        let mut stack = vec![s];
        while let Some(u) = stack.pop() {
            if u == t {
                return true;
            }
            for v in graph.neighbors_of(u) {
                if !visited.contains(&v) {
                    visited.push(v);
                    stack.push(v);
                }
            }
        }
        false
    }

    #[test]
    fn scc_of_small_graph() {
        let graph = graph_from(&[(1, 2), (2, 1), (2, 3), (3, 4)]);
        let sccs = StronglyConnectedComponents::new(&graph);

        assert_eq!(sccs.number_of_components(), 3);
        assert_eq!(sccs.scc_of(1), sccs.scc_of(2));
        assert_ne!(sccs.scc_of(3), sccs.scc_of(4));
        assert_eq!(sccs.scc_of(99), None);

        // completion order: {4}, {3}, {1, 2}
        assert_eq!(sccs.component_sizes(), &[1, 1, 2]);
        assert_eq!(sccs.largest_component(), Some((2, 2)));
        assert_eq!(graph.largest_strongly_connected_component(), vec![1, 2]);
    }

    #[test]
    fn lscc_keeps_only_internal_arcs() {
        let graph = graph_from(&[(1, 2), (2, 1), (2, 3), (3, 4)]);
        let lscc = graph.lscc();

        assert_eq!(lscc.name(), "g_LSCC");
        assert_eq!(lscc.number_of_nodes(), 2);
        assert_eq!(lscc.edge_list().collect_vec(), vec![Edge(1, 2), Edge(2, 1)]);
        assert_eq!(lscc.successors_of(2), &[(1, ())]);
    }

    #[test]
    fn ties_choose_first_completed() {
        // two 2-cycles; the one containing the larger ids completes first
        let graph = graph_from(&[(0, 1), (1, 0), (1, 5), (5, 6), (6, 5)]);
        let sccs = StronglyConnectedComponents::new(&graph);
        let (id, size) = sccs.largest_component().unwrap();
        assert_eq!(size, 2);
        assert_eq!(sccs.members_of(id), vec![5, 6]);

        let components = sccs.components();
        assert_eq!(components.len(), sccs.number_of_components());
        assert_eq!(components[id as usize], vec![5, 6]);
        assert!(components.contains(&vec![0, 1]));
        for (id, members) in components.iter().enumerate() {
            assert_eq!(members.len() as NumNodes, sccs.component_sizes()[id]);
            assert_eq!(*members, sccs.members_of(id as Node));
        }
    }

    #[test]
    fn dag_has_singleton_components() {
        let graph = graph_from(&[(0, 1), (1, 2), (1, 3), (1, 4), (3, 5), (3, 6)]);
        let sccs = StronglyConnectedComponents::new(&graph);
        assert_eq!(sccs.number_of_components(), 7);
        assert!(sccs.component_sizes().iter().all(|&s| s == 1));
    }

    #[test]
    fn empty_graph() {
        let graph: SparseGraph = SparseGraph::new("e");
        assert!(StronglyConnectedComponents::new(&graph).largest_component().is_none());
        assert!(graph.lscc().is_empty());
    }

    #[test]
    fn long_cycle_does_not_overflow() {
        let n: Node = 200_000;
        let mut graph: SparseGraph = SparseGraph::new("cycle");
        for u in 0..n {
            graph.add_edge(u, (u + 1) % n);
        }
        graph.add_edge(n, 0);

        let sccs = StronglyConnectedComponents::new(&graph);
        assert_eq!(sccs.number_of_components(), 2);
        assert_eq!(sccs.largest_component().map(|(_, s)| s), Some(n));
    }

    #[test]
    fn members_are_mutually_reachable() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);

        for _ in 0..20 {
            let mut graph: SparseGraph = SparseGraph::new("r");
            for _ in 0..70 {
                graph.add_edge(rng.random_range(0..40), rng.random_range(0..40));
            }

            let sccs = StronglyConnectedComponents::new(&graph);
            assert_eq!(
                sccs.component_sizes().iter().sum::<NumNodes>(),
                graph.number_of_nodes()
            );

            let nodes = graph.vertices().collect_vec();
            for &a in &nodes {
                for &b in &nodes {
                    let same = sccs.scc_of(a) == sccs.scc_of(b);
                    assert_eq!(same, reaches(&graph, a, b) && reaches(&graph, b, a));
                }
            }

            let lscc = graph.lscc();
            let best = sccs.component_sizes().iter().copied().max().unwrap_or(0);
            assert_eq!(lscc.number_of_nodes(), best);
        }
    }
}
