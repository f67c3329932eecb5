//! Error types and result definitions

use thiserror::Error;

use crate::partition::PartitionError;

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for report generation.
///
/// Every variant is fatal for the report run that raised it. Recoverable
/// conditions (a missing title, a reference to an unknown protocol) never
/// surface as an `Error`.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure while reaching a source endpoint
    #[error("Failed to fetch {uri}: {source}")]
    Fetch {
        uri: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint's TLS certificate failed verification
    #[error("Failed to fetch {uri}: {source} (rerun with --insecure to skip certificate verification)")]
    Certificate {
        uri: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status
    #[error("Failed to fetch {uri}: HTTP {status}")]
    HttpStatus { uri: String, status: u16 },

    /// The fetched document is not a parsable RDF graph
    #[error("Failed to parse RDF from {uri}: {message}")]
    Parse { uri: String, message: String },

    /// No loader knows how to produce a graph for this URI
    #[error("Cannot load graph from {0}")]
    UnknownSource(String),

    /// A subject could not be classified by the type partitioner
    #[error("Partition error: {0}")]
    Partition(#[from] PartitionError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
