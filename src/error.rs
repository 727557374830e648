//! Error types for tokseek.

/// Errors from the fallible constructors.
///
/// Searching itself never fails: an empty or oversized needle simply
/// produces no matches.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A pattern was built from an empty needle.
    #[error("needle must contain at least one token")]
    EmptyNeedle,

    /// A phrase normalized down to zero tokens.
    #[error("phrase {phrase:?} has no searchable tokens")]
    EmptyPhrase {
        /// The phrase as given by the caller.
        phrase: String,
    },
}

/// Result type for tokseek operations.
pub type Result<T> = std::result::Result<T, Error>;
