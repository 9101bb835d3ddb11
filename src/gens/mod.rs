/*!
# Graph Generators

This module provides deterministic generators of self-similar networks and the weight
generators used when ingesting an unweighted edge list into a weighted graph model.

Generators follow a builder-style pattern:

1. Create a generator instance (e.g., `Koch::new()`).
2. Set parameters using setters (e.g., `.generations(3)`).
3. Build the graph via `generate()`.

Supported models include:
- Pseudofractal: the (extended) pseudofractal scale-free web
- Koch: the Koch network built from nested triangles
- CayleyTree: a regular tree with a fixed branching factor
- Apollonian: the Apollonian network built from nested tetrahedra

All models produce a connected [`SimpleGraphUndir`] whose name encodes the model and its parameters.
*/

use tracing::{debug, instrument};

use crate::prelude::*;

mod fractal;
mod weights;

pub use fractal::*;
pub use weights::*;

/// Trait for generators that grow in a number of generations.
pub trait GenerationsGen {
    /// Sets the number of generations of the graph generator.
    fn generations(self, g: u32) -> Self;
}

/// General trait for a configurable deterministic graph generator.
pub trait GraphGenerator {
    /// Returns the name given to generated graphs
    fn graph_name(&self) -> String;

    /// Returns the number of nodes and all edges of the generated graph
    fn generate_edges(&self) -> (NumNodes, Vec<Edge>);

    /// Generates the graph
    #[instrument(skip_all, fields(name = %self.graph_name()))]
    fn generate(&self) -> SimpleGraphUndir {
        let (n, edges) = self.generate_edges();
        let graph = SimpleGraphUndir::from_edges(self.graph_name(), n, edges);
        debug!(
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "graph generated"
        );
        graph
    }
}
