//! Error types for hmatrix-viz operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, validating or laying out a matrix.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON document.
    #[error("Parse error: {0}")]
    Parse(serde_json::Error),

    /// Well-formed JSON that does not match the expected schema
    /// (missing field, wrong type).
    #[error("Schema error: {0}")]
    Schema(serde_json::Error),

    /// A sequence does not have the length the matrix size requires.
    #[error("Dimension mismatch: {what} has {actual} entries, expected {expected}")]
    DimensionMismatch {
        /// Which input sequence is wrong.
        what: &'static str,
        /// Length required by the number of items.
        expected: usize,
        /// Length actually provided.
        actual: usize,
    },

    /// An edge references an item that does not exist.
    #[error("Edge {index} ({from} -> {to}) references an item outside 0..{items}")]
    EdgeOutOfRange {
        /// Position of the edge in the input.
        index: usize,
        /// Source item.
        from: usize,
        /// Target item.
        to: usize,
        /// Number of items in the matrix.
        items: usize,
    },

    /// Cluster ids are not ascending and contiguous.
    #[error(
        "Cluster ids must be ascending and contiguous: item {item} has id {current} after id {previous}"
    )]
    ClusterContract {
        /// Item whose id breaks the contract.
        item: usize,
        /// Id of the preceding item.
        previous: u32,
        /// Id of the offending item.
        current: u32,
    },

    /// Linear triangular index outside `0..pairs`.
    #[error("Triangular index {index} out of range for {pairs} pairs")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of pairs in the matrix.
        pairs: usize,
    },

    /// A `(row, col)` pair that is diagonal or lies outside the matrix.
    #[error("Pair ({row}, {col}) is not an off-diagonal cell of a {items}-item matrix")]
    InvalidPair {
        /// Smaller item index.
        row: usize,
        /// Larger item index.
        col: usize,
        /// Number of items in the matrix.
        items: usize,
    },

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// Scale domain error (e.g., empty palette, degenerate range).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Io => Self::Io(err.into()),
            Category::Syntax | Category::Eof => Self::Parse(err),
            Category::Data => Self::Schema(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::DimensionMismatch { what: "values", expected: 3, actual: 2 };
        let msg = err.to_string();
        assert!(msg.contains("values"));
        assert!(msg.contains('3'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_edge_out_of_range_display() {
        let err = Error::EdgeOutOfRange { index: 1, from: 0, to: 7, items: 5 };
        assert!(err.to_string().contains("0..5"));
    }

    #[test]
    fn test_invalid_pair_display() {
        let err = Error::InvalidPair { row: 0, col: usize::MAX, items: 4 };
        assert!(err.to_string().contains("4-item"));
    }

    #[test]
    fn test_json_syntax_error_is_parse() {
        let err: Error = serde_json::from_str::<Vec<u32>>("[1, 2").unwrap_err().into();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_json_data_error_is_schema() {
        let err: Error = serde_json::from_str::<Vec<u32>>(r#"["a"]"#).unwrap_err().into();
        assert!(matches!(err, Error::Schema(_)));
    }
}
