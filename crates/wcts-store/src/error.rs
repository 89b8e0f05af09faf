//! Storage errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors from named-file lookup and retrieval.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document '{0}' was not found in any search location")]
    NotFound(String),

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
