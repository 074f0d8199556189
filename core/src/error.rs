//! Error types for document search.

use std::path::PathBuf;

/// Fatal errors that abort a search run.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Document or query source could not be read
    #[error("input unavailable: {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// More documents than a `DocId` can number
    #[error("too many documents: {count}")]
    TooManyDocuments { count: usize },
}

/// Reasons an angle between two vectors cannot be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SimilarityError {
    /// One of the vectors has zero norm, so the cosine is undefined
    #[error("zero-magnitude vector")]
    ZeroMagnitude,

    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}

pub type Result<T> = std::result::Result<T, SearchError>;
