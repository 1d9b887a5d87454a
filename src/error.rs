use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failures reading commit history from a repository.
///
/// Only the read stage can fail; filtering, grouping, and rendering are
/// pure functions that degrade to empty output on empty input.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The path does not resolve to a git working copy. Fatal; not worth
    /// retrying.
    #[error("not a git repository: {0}")]
    RepositoryNotFound(PathBuf),

    /// The backend could not be queried (I/O failure, corrupted metadata,
    /// unresolvable ref). Callers may retry with backoff.
    #[error("failed to read git history: {0}")]
    Vcs(#[from] git2::Error),

    /// A bounded read did not complete in time. Treated like any other
    /// read failure by callers.
    #[error("git history read timed out after {0:?}")]
    Timeout(Duration),
}

pub type Result<T> = std::result::Result<T, ReadError>;
