//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Validation failure for a resolved record. Only the first missing
/// required field is reported, host before auth.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("OpenWhisk API host is missing")]
    MissingUrl,
    #[error("Authentication key is missing")]
    MissingAuth,
}

/// Failure to load a config file. Readers log these and fall back to an
/// empty source; they never reach the caller of the resolver.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("No config file found (searched: {searched})")]
    NotFound { searched: String },
    #[error("Failed reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}
