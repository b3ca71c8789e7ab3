//*** START FILE: src/errors.rs ***//
// Error types shared across the crate.

use std::path::PathBuf;

/// Result alias defaulting to [`VocabError`].
pub type Result<T, E = VocabError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The vocabulary store could not be queried (bad file, missing tables).
    #[error("vocabulary store error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("word list error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Transport failure or non-success status from a lookup service.
    #[error("lookup service error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("input source '{0}' does not exist")]
    InputNotFound(PathBuf),

    /// A stored word key without the `<lang>:` prefix.
    #[error("word key '{0}' has no language prefix")]
    MalformedWordKey(String),
}
//*** END FILE: src/errors.rs ***//
