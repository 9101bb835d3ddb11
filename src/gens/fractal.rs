use itertools::Itertools;

use super::*;

/// Extended pseudofractal scale-free web.
///
/// Starts from a triangle. In every generation, for each of `m` rounds and every edge `(u, v)`
/// present at the start of the generation, a new node adjacent to both `u` and `v` is added.
/// With `m = 1` this is the classic pseudofractal graph.
///
/// # Examples
/// ```
/// use netgraphs::{prelude::*, gens::*};
///
/// let graph = Pseudofractal::new().generations(2).generate();
/// assert_eq!(graph.number_of_nodes(), 15);
/// assert_eq!(graph.number_of_edges(), 27);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pseudofractal {
    m: u32,
    g: u32,
}

impl Default for Pseudofractal {
    fn default() -> Self {
        Self { m: 1, g: 0 }
    }
}

impl Pseudofractal {
    /// Creates a classic pseudofractal generator without generations
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of new nodes attached to every edge per generation.
    /// ** Panics if `m == 0` **
    pub fn multiplicity(mut self, m: u32) -> Self {
        assert!(m > 0);
        self.m = m;
        self
    }
}

impl GenerationsGen for Pseudofractal {
    fn generations(mut self, g: u32) -> Self {
        self.g = g;
        self
    }
}

impl GraphGenerator for Pseudofractal {
    fn graph_name(&self) -> String {
        if self.m == 1 {
            format!("Pseudofractal_{}", self.g)
        } else {
            format!("PseudoExt_{}_{}", self.m, self.g)
        }
    }

    fn generate_edges(&self) -> (NumNodes, Vec<Edge>) {
        let mut edges = vec![Edge(0, 1), Edge(0, 2), Edge(1, 2)];
        let mut n: Node = 3;

        for _ in 0..self.g {
            let mut new_edges = Vec::with_capacity(2 * self.m as usize * edges.len());
            for _ in 0..self.m {
                for &Edge(u, v) in &edges {
                    new_edges.push(Edge(u, n));
                    new_edges.push(Edge(v, n));
                    n += 1;
                }
            }
            edges.append(&mut new_edges);
        }

        (n, edges)
    }
}

/// Koch network.
///
/// Starts from a triangle. In every generation each triangle `(x, y, z)` spawns three new
/// triangles `(x, a, b)`, `(y, c, d)` and `(z, e, f)` on six fresh nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Koch {
    g: u32,
}

impl Koch {
    /// Creates a generator without generations, i.e. a single triangle
    pub fn new() -> Self {
        Self::default()
    }
}

impl GenerationsGen for Koch {
    fn generations(mut self, g: u32) -> Self {
        self.g = g;
        self
    }
}

impl GraphGenerator for Koch {
    fn graph_name(&self) -> String {
        format!("Koch_{}", self.g)
    }

    fn generate_edges(&self) -> (NumNodes, Vec<Edge>) {
        let mut triangles: Vec<(Node, Node, Node)> = vec![(0, 1, 2)];
        let mut n: Node = 3;

        for _ in 0..self.g {
            let mut spawned = Vec::with_capacity(3 * triangles.len());
            for &(x, y, z) in &triangles {
                spawned.extend([(x, n, n + 1), (y, n + 2, n + 3), (z, n + 4, n + 5)]);
                n += 6;
            }
            triangles.append(&mut spawned);
        }

        let edges = triangles
            .into_iter()
            .flat_map(|(x, y, z)| [Edge(x, y), Edge(x, z), Edge(y, z)])
            .collect();
        (n, edges)
    }
}

/// Regular tree: a root with `b` children, every further generation attaches
/// `b - 1` children to each leaf, so that all inner nodes have degree `b`.
#[derive(Debug, Clone, Copy)]
pub struct CayleyTree {
    b: u32,
    g: u32,
}

impl Default for CayleyTree {
    fn default() -> Self {
        Self { b: 3, g: 1 }
    }
}

impl CayleyTree {
    /// Creates a generator of a star with three leaves
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the degree of inner nodes.
    /// ** Panics if `b < 2` **
    pub fn branching(mut self, b: u32) -> Self {
        assert!(b >= 2);
        self.b = b;
        self
    }
}

impl GenerationsGen for CayleyTree {
    /// Sets the depth of the tree; `0` and `1` both yield a star
    fn generations(mut self, g: u32) -> Self {
        self.g = g;
        self
    }
}

impl GraphGenerator for CayleyTree {
    fn graph_name(&self) -> String {
        format!("{}CayleyTree_{}", self.b, self.g)
    }

    fn generate_edges(&self) -> (NumNodes, Vec<Edge>) {
        let mut leaves = (1..=self.b).collect_vec();
        let mut edges = leaves.iter().map(|&leaf| Edge(0, leaf)).collect_vec();
        let mut n: Node = self.b + 1;

        for _ in 1..self.g {
            let mut new_leaves = Vec::with_capacity((self.b as usize - 1) * leaves.len());
            for &leaf in &leaves {
                for child in n..n + self.b - 1 {
                    edges.push(Edge(leaf, child));
                    new_leaves.push(child);
                }
                n += self.b - 1;
            }
            leaves = new_leaves;
        }

        (n, edges)
    }
}

/// Apollonian network.
///
/// Starts from the complete graph on four nodes, whose four triangles are *active*.
/// In every generation each active triangle receives a new node adjacent to its three corners;
/// the three triangles formed with the new node replace it as active triangles.
#[derive(Debug, Clone, Copy, Default)]
pub struct Apollonian {
    g: u32,
}

impl Apollonian {
    /// Creates a generator without generations, i.e. the complete graph on four nodes
    pub fn new() -> Self {
        Self::default()
    }
}

impl GenerationsGen for Apollonian {
    fn generations(mut self, g: u32) -> Self {
        self.g = g;
        self
    }
}

impl GraphGenerator for Apollonian {
    fn graph_name(&self) -> String {
        format!("Apollo_{}", self.g)
    }

    fn generate_edges(&self) -> (NumNodes, Vec<Edge>) {
        let mut active: Vec<(Node, Node, Node)> = vec![(0, 1, 2), (0, 1, 3), (0, 2, 3), (1, 2, 3)];
        let mut edges = (0..4)
            .tuple_combinations()
            .map(|(u, v)| Edge(u, v))
            .collect_vec();
        let mut n: Node = 4;

        for _ in 0..self.g {
            let mut spawned = Vec::with_capacity(3 * active.len());
            for &(x, y, z) in &active {
                edges.extend([Edge(x, n), Edge(y, n), Edge(z, n)]);
                spawned.extend([(x, y, n), (x, z, n), (y, z, n)]);
                n += 1;
            }
            active = spawned;
        }

        (n, edges)
    }
}
