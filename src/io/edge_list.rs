//! # EdgeList
//!
//! The EdgeList-Format consists of optional comment lines followed by non-comment lines
//! `u v` (or `u v w` for weighted graphs) each representing an edge `Edge(u, v)`.
//! Node ids are taken verbatim, so the format is read into the sparse graph models.

use std::{fmt, io::ErrorKind};

use smallvec::{SmallVec, smallvec};
use tracing::{debug, instrument};

use super::*;
use crate::algo::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Name given to the graph that is read
    graph_name: String,
    /// Lines starting with one of these characters are skipped when reading
    comment_prefixes: SmallVec<[char; 2]>,
}

impl Default for EdgeListReader {
    /// Default to dataset conventions: `#` and `%` start comments
    fn default() -> Self {
        Self {
            graph_name: String::new(),
            comment_prefixes: smallvec!['#', '%'],
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the name of the graph that is read
    pub fn graph_name<S: Into<String>>(mut self, name: S) -> EdgeListReader {
        self.graph_name = name.into();
        self
    }

    /// Replaces the characters that mark a comment line
    pub fn comment_prefixes<I: IntoIterator<Item = char>>(mut self, prefixes: I) -> EdgeListReader {
        self.comment_prefixes = prefixes.into_iter().collect();
        self
    }

    /// Reads a weighted graph from a stream without weight column: `weight` is invoked once
    /// per data line to assign the weight of the edge on it. Additional columns are ignored.
    ///
    /// # Examples
    /// ```
    /// use netgraphs::{prelude::*, io::*};
    ///
    /// let graph: WeightedSparseGraphUndir = EdgeListReader::new()
    ///     .try_read_graph_with("1 2\n".as_bytes(), || 7)
    ///     .unwrap();
    /// assert_eq!(graph.weight_of(1, 2), Some(7));
    /// ```
    #[instrument(skip_all, fields(name = %self.graph_name))]
    pub fn try_read_graph_with<G, R, F>(&self, reader: R, mut weight: F) -> Result<G>
    where
        G: GraphEdgeEditing<Weight = Weight>,
        R: BufRead,
        F: FnMut() -> Weight,
    {
        let mut graph = G::new(self.graph_name.clone());
        let lines = self.for_each_edge(reader, false, |u, v, _| {
            graph.insert_edge(u, v, weight());
        })?;

        debug!(
            lines,
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "edge list read"
        );
        Ok(graph)
    }

    /// Parses every data line of `reader` and hands its endpoints (and weight if `weighted`)
    /// to `on_edge`. Returns the number of data lines.
    fn for_each_edge<R, F>(&self, reader: R, weighted: bool, mut on_edge: F) -> Result<usize>
    where
        R: BufRead,
        F: FnMut(Node, Node, Option<Weight>),
    {
        let mut data_lines = 0;

        for (index, line) in reader.lines().enumerate() {
            let number = index + 1;
            let line = match line {
                Ok(line) => line,
                Err(err) if err.kind() == ErrorKind::InvalidData => {
                    return Err(parse_error!(number, "invalid UTF-8"));
                }
                Err(err) => return Err(err.into()),
            };

            if line.starts_with(|c: char| self.comment_prefixes.contains(&c)) || line.trim().is_empty() {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let u: Node = parse_next_value!(tokens, number, "source node");
            let v: Node = parse_next_value!(tokens, number, "target node");
            raise_error_unless!(
                u != INVALID_NODE && v != INVALID_NODE,
                number,
                "node id out of range"
            );

            let w = if weighted {
                let w: Weight = parse_next_value!(tokens, number, "weight");
                Some(w)
            } else {
                None
            };

            on_edge(u, v, w);
            data_lines += 1;
        }

        Ok(data_lines)
    }
}

impl<G: GraphEdgeEditing> GraphReader<G> for EdgeListReader {
    #[instrument(skip_all, fields(name = %self.graph_name))]
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let weighted = <G::Weight as EdgeWeight>::WEIGHTED;

        let mut graph = G::new(self.graph_name.clone());
        let lines = self.for_each_edge(reader, weighted, |u, v, w| {
            graph.insert_edge(u, v, G::Weight::from_weight(w.unwrap_or_default()));
        })?;

        debug!(
            lines,
            weighted,
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "edge list read"
        );
        Ok(graph)
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings.
///
/// Dense models read the sparse model of the same kind and keep its largest
/// (strongly) connected component.
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<W: EdgeWeight> EdgeListRead for SparseGraphUndir<W> {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

impl<W: EdgeWeight> EdgeListRead for SparseGraph<W> {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

macro_rules! impl_dense_edge_list_read {
    ($($struct:ident <= $sparse:ty),*) => {
        $(
            impl EdgeListRead for $struct {
                fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
                    let sparse: $sparse = EdgeListReader::default().try_read_graph(reader)?;
                    Ok(Self::from(sparse))
                }
            }
        )*
    };
}

impl_dense_edge_list_read!(
    SimpleGraphUndir <= SparseGraphUndir,
    SignedGraphUndir <= WeightedSparseGraphUndir,
    SimpleGraph <= SparseGraph,
    SignedGraph <= WeightedSparseGraph
);

/// Third column of a serialized edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeLabel {
    /// Unweighted edge, no third column
    Plain,
    /// Weighted edge
    Weight(Weight),
    /// Edge of a signed graph, written as `+1` or `-1`
    Sign(bool),
}

impl fmt::Display for EdgeLabel {
    /// Writes the label including its leading tab
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeLabel::Plain => Ok(()),
            EdgeLabel::Weight(w) => write!(f, "\t{w}"),
            EdgeLabel::Sign(true) => write!(f, "\t+1"),
            EdgeLabel::Sign(false) => write!(f, "\t-1"),
        }
    }
}

/// Graphs that can enumerate their serialized edge lines
pub trait EdgeListEntries: NamedGraph + GraphNodeOrder + GraphEdgeOrder {
    /// Iterates all edges in output order together with their label.
    /// Undirected graphs report every edge once as `u < v`.
    fn edge_list_entries(&self) -> impl Iterator<Item = (Edge, EdgeLabel)> + '_;
}

fn label_of<W: EdgeWeight>(w: W) -> EdgeLabel {
    w.weight().map_or(EdgeLabel::Plain, EdgeLabel::Weight)
}

impl<W: EdgeWeight> EdgeListEntries for SparseGraphUndir<W> {
    fn edge_list_entries(&self) -> impl Iterator<Item = (Edge, EdgeLabel)> + '_ {
        self.weighted_edges().map(|(e, w)| (e, label_of(w)))
    }
}

impl<W: EdgeWeight> EdgeListEntries for SparseGraph<W> {
    fn edge_list_entries(&self) -> impl Iterator<Item = (Edge, EdgeLabel)> + '_ {
        self.weighted_edges().map(|(e, w)| (e, label_of(w)))
    }
}

impl EdgeListEntries for SimpleGraphUndir {
    fn edge_list_entries(&self) -> impl Iterator<Item = (Edge, EdgeLabel)> + '_ {
        self.edges(true).map(|e| (e, EdgeLabel::Plain))
    }
}

impl EdgeListEntries for SimpleGraph {
    fn edge_list_entries(&self) -> impl Iterator<Item = (Edge, EdgeLabel)> + '_ {
        self.edges(false).map(|e| (e, EdgeLabel::Plain))
    }
}

impl EdgeListEntries for SignedGraphUndir {
    fn edge_list_entries(&self) -> impl Iterator<Item = (Edge, EdgeLabel)> + '_ {
        self.signed_edges().map(|(e, s)| (e, EdgeLabel::Sign(s)))
    }
}

impl EdgeListEntries for SignedGraph {
    fn edge_list_entries(&self) -> impl Iterator<Item = (Edge, EdgeLabel)> + '_ {
        self.signed_edges().map(|(e, s)| (e, EdgeLabel::Sign(s)))
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListWriter {
    /// Whether the two comment lines naming the graph are written
    header: bool,
}

impl Default for EdgeListWriter {
    fn default() -> Self {
        Self { header: true }
    }
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the header comment lines
    pub fn header(mut self, header: bool) -> EdgeListWriter {
        self.header = header;
        self
    }
}

impl<G: EdgeListEntries> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        if self.header {
            writeln!(writer, "# {}: {}", G::KIND, graph.name())?;
            writeln!(
                writer,
                "# Nodes: {} Edges: {}",
                graph.number_of_nodes(),
                graph.number_of_edges()
            )?;
        }

        for (Edge(u, v), label) in graph.edge_list_entries() {
            writeln!(writer, "{u}\t{v}{label}")?;
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl<G: EdgeListEntries> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    fn written<G: EdgeListEntries>(graph: &G) -> String {
        let mut buffer = Vec::new();
        graph.try_write_edge_list(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let input = "% konect header\n# another one\n\n1 2\n  \n2\t3  \n";
        let graph: SparseGraphUndir = EdgeListReader::new()
            .graph_name("g")
            .try_read_graph(input.as_bytes())
            .unwrap();

        assert_eq!(graph.name(), "g");
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.edge_list().collect_vec(), vec![Edge(1, 2), Edge(2, 3)]);
    }

    #[test]
    fn custom_comment_prefixes() {
        let input = "c comment\n1 2\n";
        let graph: SparseGraph = EdgeListReader::new()
            .comment_prefixes(['c'])
            .try_read_graph(input.as_bytes())
            .unwrap();
        assert_eq!(graph.number_of_edges(), 1);

        let error = SparseGraph::<()>::try_read_edge_list(input.as_bytes()).unwrap_err();
        assert_eq!(error.line(), Some(1));
    }

    #[test]
    fn weighted_reads_third_column() {
        let input = "1 2 -4\n2 3 5 extra\n1 2 9\n";
        let graph = WeightedSparseGraph::try_read_edge_list(input.as_bytes()).unwrap();
        assert_eq!(graph.weight_of(1, 2), Some(-4));
        assert_eq!(graph.weight_of(2, 3), Some(5));
        assert_eq!(graph.number_of_edges(), 2);

        // unweighted models ignore additional columns
        let graph = SparseGraph::<()>::try_read_edge_list(input.as_bytes()).unwrap();
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn malformed_lines_abort() {
        let missing_weight = WeightedSparseGraphUndir::try_read_edge_list("1 2 3\n# c\n4 5\n".as_bytes());
        assert!(matches!(missing_weight, Err(GraphError::Parse { line: 3, .. })));

        let not_a_number = SparseGraphUndir::<()>::try_read_edge_list("1 x\n".as_bytes());
        assert!(matches!(not_a_number, Err(GraphError::Parse { line: 1, .. })));

        let negative = SparseGraphUndir::<()>::try_read_edge_list("-1 2\n".as_bytes());
        assert!(matches!(negative, Err(GraphError::Parse { line: 1, .. })));

        let single = SparseGraph::<()>::try_read_edge_list("1\n".as_bytes());
        assert!(matches!(single, Err(GraphError::Parse { line: 1, .. })));

        let reserved = SparseGraph::<()>::try_read_edge_list(format!("1 {INVALID_NODE}\n").as_bytes());
        assert!(matches!(reserved, Err(GraphError::Parse { line: 1, .. })));

        let garbled: &[u8] = b"1 2\n# fine\n3 \xff\n";
        let garbled = SparseGraph::<()>::try_read_edge_list(garbled);
        assert!(matches!(garbled, Err(GraphError::Parse { line: 3, .. })));
    }

    #[test]
    fn generator_assigns_weights() {
        let mut next = 0;
        let graph: WeightedSparseGraph = EdgeListReader::new()
            .try_read_graph_with("1 2\n2 3 100\n3 1\n".as_bytes(), || {
                next += 1;
                next
            })
            .unwrap();

        assert_eq!(graph.weight_of(1, 2), Some(1));
        assert_eq!(graph.weight_of(2, 3), Some(2));
        assert_eq!(graph.weight_of(3, 1), Some(3));
    }

    #[test]
    fn dense_models_read_reduced() {
        let graph = SimpleGraph::try_read_edge_list("1 2\n2 1\n2 3\n3 4\n".as_bytes()).unwrap();
        assert_eq!(graph.number_of_nodes(), 2);
        assert_eq!(graph.number_of_edges(), 2);

        let graph = SignedGraphUndir::try_read_edge_list("5 6 1\n6 7 -1\n8 9 1\n".as_bytes()).unwrap();
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_positive_edges(), 1);
    }

    #[test]
    fn writes_header_and_entries() {
        let mut graph = WeightedSparseGraphUndir::new("w");
        graph.add_edge(3, 1, -2);
        graph.add_edge(1, 2, 4);

        assert_eq!(
            written(&graph),
            "# WeightedSparseGraphUndir: w\n# Nodes: 3 Edges: 2\n1\t2\t4\n1\t3\t-2\n"
        );

        let signed = SignedGraph::from_signed_edges("s", 2, [(1, 0, 1), (0, 1, -1)]);
        assert_eq!(
            written(&signed),
            "# SignedGraph: s\n# Nodes: 2 Edges: 2\n0\t1\t-1\n1\t0\t+1\n"
        );

        let simple = SimpleGraphUndir::from_edges("u", 3, [(2, 0), (1, 0)]);
        let mut buffer = Vec::new();
        EdgeListWriter::new()
            .header(false)
            .try_write_graph(&simple, &mut buffer)
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "0\t1\n0\t2\n");
    }

    #[test]
    fn written_graphs_read_back() {
        let mut graph: SparseGraph = SparseGraph::new("d");
        for (u, v) in [(4, 1), (1, 4), (7, 4), (1, 9)] {
            graph.add_edge(u, v);
        }

        let text = written(&graph);
        let read = SparseGraph::<()>::try_read_edge_list(text.as_bytes()).unwrap();
        assert_eq!(read.edge_list().collect_vec(), graph.edge_list().collect_vec());
    }
}
