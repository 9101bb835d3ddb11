/*!
# IO

Utilities for reading and writing graphs as edge lists.

## Input

An edge list is a text stream with one edge per line: `u v` for unweighted graphs and
`u v w` for weighted ones, where `w` is a signed integer. Tokens are separated by arbitrary
whitespace. Lines starting with a comment prefix (`#` or `%` by default) and blank lines are skipped.
Any malformed data line aborts the whole read with [`GraphError::Parse`] carrying its line number.

The stream is consumed line by line, so inputs of arbitrary size never need to fit into memory as text.

## Output

Every graph model is written as two comment lines naming its kind, name and size followed by
one line per edge: `u\tv`, `u\tv\tw` (weighted) or `u\tv\t+1` / `u\tv\t-1` (signed).
Undirected graphs list every edge once with the smaller id first.

## Traits

- [`GraphReader`] and [`GraphWriter`] are implemented by configurable readers and writers.
- [`EdgeListRead`] and [`EdgeListWrite`] are shorthands using the default settings.
*/

pub mod edge_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::prelude::*;

pub use edge_list::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format or if reading fails.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Shorthand for creating a new parse error
macro_rules! parse_error {
    ($line: expr, $reason: expr) => {
        GraphError::Parse {
            line: $line,
            reason: $reason.into(),
        }
    };
}

/// Shorthand for returning a parse error early when a condition fails
macro_rules! raise_error_unless {
    ($cond: expr, $line: expr, $reason: expr) => {
        if !($cond) {
            return Err(parse_error!($line, $reason));
        }
    };
}

/// Tries to parse the next token of an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator: expr, $line: expr, $name: expr) => {{
        let Some(token) = $iterator.next() else {
            return Err(parse_error!(
                $line,
                format!("premature end of line when parsing {}", $name)
            ));
        };

        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(parse_error!(
                    $line,
                    format!("cannot parse {} from `{}`", $name, token)
                ));
            }
        }
    }};
}

use parse_error;
use parse_next_value;
use raise_error_unless;
