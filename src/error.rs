use std::io;

use thiserror::Error;

/// Fatal failure modes of the calculator.
///
/// Every variant terminates the run with a diagnostic; there is no
/// recovery, retry, or skip path.
#[derive(Debug, Error)]
pub enum OutbreakError {
    #[error("matrix size is too large: {size} > {max}", max = crate::graph::MAX_VERTICES)]
    SizeExceeded { size: usize },

    #[error("row {row} has length {len} but expecting {expected}")]
    ShapeMismatch {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("unknown character in matrix: '{ch}'")]
    InvalidCharacter { ch: char },

    #[error("unknown algorithm: {name}")]
    UnknownAlgorithm { name: String },

    #[error("malformed graph6 entry: {reason}")]
    MalformedGraph6 { reason: String },

    #[error("failed to read graph catalog")]
    CatalogRead(#[from] io::Error),

    #[error("invalid catalog entry at line {line}: {source}")]
    InvalidCatalogEntry {
        line: usize,
        #[source]
        source: Box<OutbreakError>,
    },
}
