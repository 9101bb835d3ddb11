use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors surfaced while reading or writing graphs.
///
/// Reductions themselves never fail: empty inputs simply produce empty graphs.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The underlying stream could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A non-comment line of an edge list could not be parsed.
    /// `line` is 1-based and counts comment lines as well.
    #[error("Parse error in line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

impl GraphError {
    /// Returns the 1-based line number of a parse error
    pub fn line(&self) -> Option<usize> {
        match self {
            GraphError::Parse { line, .. } => Some(*line),
            GraphError::Io(_) => None,
        }
    }
}
