//! Result and error types for Tantear.

use thiserror::Error;

/// Result type for Tantear operations
pub type TantearResult<T> = Result<T, TantearError>;

/// Errors that can occur in Tantear
#[derive(Debug, Error)]
pub enum TantearError {
    /// A query entry point was handed a structurally wrong argument
    #[error("{message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// A singleton finder's underlying scry matched more than one node
    #[error("Did not find exactly one match (found {count}) for {label}: {option}")]
    AmbiguousMatch {
        /// Number of nodes the scry matched
        count: usize,
        /// Query kind label ("class", "tag", "component")
        label: String,
        /// The option the query was run with
        option: String,
    },
}
