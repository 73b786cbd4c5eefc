use std::path::PathBuf;
use thiserror::Error;

/// Crate-level error taxonomy.
///
/// Malformed individual records are deliberately absent: they are recovered
/// by omission during load and surface only as a skipped-count on the
/// snapshot.
#[derive(Debug, Error)]
pub enum Error {
    /// Network failure, timeout, or non-success HTTP status. Fatal to the
    /// current load or refresh attempt only.
    #[error("API request failed: {0}")]
    FetchFailed(#[from] reqwest::Error),

    /// The cache file exists but could not be read at the filesystem level.
    #[error("could not read cache file {}", .path.display())]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A query precondition was violated; no scan was performed.
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] InvalidQuery),

    /// An aggregate was requested over an empty or ineligible record set.
    #[error("no data available for the requested statistic")]
    NoData,
}

/// Query/filter precondition violations, checked before any dataset scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidQuery {
    #[error("search term must not be empty")]
    EmptyTerm,
    #[error("minimum {min} is greater than maximum {max}")]
    InvertedRange { min: u64, max: u64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
